// src/compare/aggregate.rs

use crate::config::consts::MAX_PRECISION;
use crate::config::options::CompareOptions;
use crate::error::{Error, Result};

use super::split::plotting_tables;
use super::types::{CategoryResult, ColoredGame, GameRow};

/// Share of games with `x < y`, as a percentage rounded to `precision` decimals.
/// No games → 0.
pub fn win_ratio<'a>(games: impl IntoIterator<Item = &'a GameRow>, precision: u32) -> f64 {
    let (mut total, mut wins) = (0usize, 0usize);
    for g in games {
        total += 1;
        if g.is_win() { wins += 1; }
    }
    if total == 0 {
        return 0.0;
    }
    round_to(wins as f64 / total as f64 * 100.0, precision)
}

/// Half away from zero. Precision is capped at `MAX_PRECISION`.
fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    (value * factor).round() / factor
}

/// Highest ratio first. Equal ratios keep their incoming order.
pub fn sort_as_one(results: &mut [CategoryResult]) {
    results.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
}

/// One result per category in `options.order`, then jointly sorted by ratio.
pub fn final_data(
    dataset: &[ColoredGame],
    options: &CompareOptions,
    names: [&str; 2],
) -> Result<Vec<CategoryResult>> {
    options.validate()?;
    if names.iter().any(|n| n.trim().is_empty()) {
        return Err(Error::Config(s!("player names must not be empty")));
    }

    let palette = &options.palette;
    let mut results: Vec<CategoryResult> = options
        .order
        .iter()
        .map(|&category| {
            let color = palette.color(category);
            let layers = plotting_tables(dataset, color, &palette.muted);
            let ratio = win_ratio(layers.highlighted.iter().map(|r| &r.game), options.precision);
            CategoryResult {
                category,
                ratio,
                layers,
                color: s!(color),
                label: category.label(names),
            }
        })
        .collect();

    sort_as_one(&mut results);

    for r in &results {
        logd!("{:<13} {:>7.2}% over {} games", r.category.as_str(), r.ratio, r.games());
    }
    Ok(results)
}
