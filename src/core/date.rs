// src/core/date.rs

use super::DIGIT_RUN;
use crate::error::{Error, Result};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Convert a game-log date ("Sun 6/5") into the schedule's form ("Sun, Jun 5").
pub fn date_convert(label: &str) -> Result<String> {
    let mut runs = DIGIT_RUN.find_iter(label);

    let month_run = runs
        .next()
        .ok_or_else(|| Error::Format(format!("month number not found in {label:?}")))?;
    let day_run = runs
        .next()
        .ok_or_else(|| Error::Format(format!("day number not found in {label:?}")))?;

    let month = month_run
        .as_str()
        .parse::<usize>()
        .ok()
        .filter(|m| (1..=12).contains(m))
        .ok_or_else(|| Error::Format(format!("month out of range in {label:?}")))?;

    let mut out = String::with_capacity(label.len() + 4);
    out.push_str(&label[..month_run.start()]);
    out.push_str(", ");
    out.push_str(MONTHS[month - 1]);
    out.push(' ');
    out.push_str(&label[month_run.end()..day_run.start()]);
    // Schedule days are never zero-padded.
    let day = day_run.as_str().trim_start_matches('0');
    out.push_str(if day.is_empty() { "0" } else { day });
    out.push_str(&label[day_run.end()..]);

    // Drop the weekday's trailing space and the month/day slash.
    let out = out.replacen(' ', "", 1).replace('/', "");
    Ok(out)
}
