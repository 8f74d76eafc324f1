// src/core/score.rs

use super::DIGIT_RUN;

/// Everything a result label may contain: "W131-118", "L112-109", "W123-120 OT".
const SCORE_ALPHABET: &str = "0123456789-WLOT ";

/// Parse a result label into `[team points, opponent points]`.
///
/// The source always lists the winning score first, so the first two digit
/// runs are kept as-is for a win (`W`) and swapped otherwise.
/// Returns `None` for anything that isn't a finished game: stray characters,
/// fewer than two numbers, or a number that doesn't fit.
pub fn score_to_pair(label: &str) -> Option<[u32; 2]> {
    if !label.chars().all(|c| SCORE_ALPHABET.contains(c)) {
        return None;
    }

    let mut runs = DIGIT_RUN.find_iter(label).map(|m| m.as_str().parse::<u32>());
    let first = runs.next()?.ok()?;
    let second = runs.next()?.ok()?;

    if label.contains('W') {
        Some([first, second])
    } else {
        Some([second, first])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_keeps_listed_order() {
        assert_eq!(score_to_pair("W131-118"), Some([131, 118]));
        assert_eq!(score_to_pair("W123-120 OT"), Some([123, 120]));
    }

    #[test]
    fn loss_is_swapped_so_team_points_come_first() {
        assert_eq!(score_to_pair("L112-109"), Some([109, 112]));
        assert_eq!(score_to_pair("L99-98 2OT"), Some([98, 99]));
    }

    #[test]
    fn anything_else_is_not_a_score() {
        assert_eq!(score_to_pair("garbage!!"), None);
        assert_eq!(score_to_pair("Postponed"), None);
        assert_eq!(score_to_pair("7:30 PM"), None);
        assert_eq!(score_to_pair(""), None);
        assert_eq!(score_to_pair("W"), None);
        assert_eq!(score_to_pair("W12"), None);
        assert_eq!(score_to_pair("W99999999999-1"), None);
    }

    #[test]
    fn only_first_two_runs_count() {
        assert_eq!(score_to_pair("W100-90 1 2"), Some([100, 90]));
    }
}
