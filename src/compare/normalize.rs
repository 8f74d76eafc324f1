// src/compare/normalize.rs
//
// Raw rows → GameRow / PlayerGame. A result label that isn't a finished game
// drops the row; anything wrong after that is an error.

use crate::core::{date_convert, score_to_pair};
use crate::error::{Error, Result};

use super::types::{GameRow, PlayerGame, RawPlayerRow, RawTeamRow};

/// `[team, opponent]` → GameRow with `x` = opponent, `y` = team.
fn game_from(pair: [u32; 2], date: String) -> GameRow {
    GameRow { x: pair[1], y: pair[0], date }
}

/// Schedule dates are already "Tue, Oct 19"; they are kept verbatim.
pub fn team_row(raw: &RawTeamRow) -> Option<GameRow> {
    let pair = score_to_pair(&raw.result)?;
    Some(game_from(pair, raw.date.clone()))
}

/// `Ok(None)` when the result isn't a score; `Err` when a scored row has a
/// bad date or points cell.
pub fn player_row(raw: &RawPlayerRow) -> Result<Option<PlayerGame>> {
    let Some(pair) = score_to_pair(&raw.result) else {
        return Ok(None);
    };
    let date = date_convert(&raw.date)?;
    let points = raw.points.trim().parse::<u32>().map_err(|_| {
        Error::Format(format!("points {:?} on {:?} is not a whole number", raw.points, raw.date))
    })?;
    Ok(Some(PlayerGame { game: game_from(pair, date), points }))
}

pub fn team_table(raw: &[RawTeamRow]) -> Vec<GameRow> {
    let rows: Vec<GameRow> = raw.iter().filter_map(team_row).collect();
    let dropped = raw.len() - rows.len();
    if dropped > 0 {
        logd!("Team table: dropped {dropped} of {} rows without a final score", raw.len());
    }
    rows
}

pub fn player_table(raw: &[RawPlayerRow]) -> Result<Vec<PlayerGame>> {
    let mut rows = Vec::with_capacity(raw.len());
    for (i, r) in raw.iter().enumerate() {
        match player_row(r) {
            Ok(Some(game)) => rows.push(game),
            Ok(None) => {}
            Err(Error::Format(m)) => {
                return Err(Error::Format(format!("player row {}: {m}", i + 1)));
            }
            Err(e) => return Err(e),
        }
    }
    let dropped = raw.len() - rows.len();
    if dropped > 0 {
        logd!("Player table: dropped {dropped} of {} rows without a final score", raw.len());
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(date: &str, result: &str) -> RawTeamRow {
        RawTeamRow { date: s!(date), result: s!(result) }
    }

    fn player(date: &str, result: &str, points: &str) -> RawPlayerRow {
        RawPlayerRow { date: s!(date), result: s!(result), points: s!(points) }
    }

    #[test]
    fn win_maps_opponent_to_x() {
        let row = team_row(&team("Tue, Oct 19", "W121-114")).unwrap();
        assert_eq!(row, game!(114, 121, "Tue, Oct 19"));
        assert!(row.is_win());
    }

    #[test]
    fn loss_maps_opponent_to_x() {
        let row = team_row(&team("Thu, Oct 21", "L115-113")).unwrap();
        assert_eq!(row, game!(115, 113, "Thu, Oct 21"));
        assert!(!row.is_win());
    }

    #[test]
    fn unscored_team_rows_are_filtered() {
        let raw = vec![
            team("Tue, Oct 19", "W121-114"),
            team("Fri, Apr 1", "7:30 PM"),
            team("DATE", "RESULT"),
            team("Sun, Oct 24", "L104-99 OT"),
        ];
        let rows = team_table(&raw);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], game!(104, 99, "Sun, Oct 24"));
    }

    #[test]
    fn player_dates_are_converted() {
        let g = player_row(&player("Tue 10/19", "W121-114", "21")).unwrap().unwrap();
        assert_eq!(g.game, game!(114, 121, "Tue, Oct 19"));
        assert_eq!(g.points, 21);
    }

    #[test]
    fn player_summary_rows_are_dropped_not_errors() {
        let raw = vec![
            player("Tue 10/19", "W121-114", "21"),
            player("Averages", "", "25.5"),
            player("October", "Totals", "300"),
        ];
        let rows = player_table(&raw).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn bad_date_on_scored_row_fails_hard() {
        let raw = vec![player("Tue 10/19", "W121-114", "21"), player("Tue 13/19", "L1-2", "3")];
        let err = player_table(&raw).unwrap_err();
        assert!(matches!(err, Error::Format(ref m) if m.starts_with("player row 2")));
    }

    #[test]
    fn bad_points_on_scored_row_fails_hard() {
        let err = player_table(&[player("Tue 10/19", "W121-114", "DNP")]).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }
}
