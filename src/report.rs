// src/report.rs

use crate::compare::CategoryResult;

const RANKS: [&str; 4] = ["best", "second-best", "second-worst", "worst"];

/// "Warriors were best with Curry and no Green"
pub fn title(team_name: &str, rank: usize, result: &CategoryResult) -> String {
    let word = RANKS.get(rank).copied().unwrap_or("ranked");
    format!("{team_name} were {word} {}", result.label)
}

/// One line per category in ranked order, ratio at `precision` decimals.
pub fn render(team_name: &str, seasons: &str, results: &[CategoryResult], precision: u32) -> String {
    let mut out = format!("{team_name}, {seasons}\n");
    for (i, r) in results.iter().enumerate() {
        out.push_str(&format!(
            "{:>w$.p$}%  {:>3}/{:<3}  {}\n",
            r.ratio,
            r.wins(),
            r.games(),
            title(team_name, i, r),
            w = 4 + precision as usize + usize::from(precision > 0),
            p = precision as usize,
        ));
    }
    out
}
