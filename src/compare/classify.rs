// src/compare/classify.rs

use crate::config::options::Palette;
use crate::error::Result;

use super::matcher::{keep_row_if_in_table, row_in_table};
use super::types::{Annotation, Category, ColoredGame, ComparativeDataset, GameRow, PlayerGame};

/// Paint every team game by which of the two players has a matching log row.
pub fn in_tables_to_color(
    team: &[GameRow],
    players: [&[GameRow]; 2],
    palette: &Palette,
) -> Result<ComparativeDataset> {
    palette.validate()?;

    let dataset: ComparativeDataset = team
        .iter()
        .map(|row| {
            let category = Category::from_presence(
                row_in_table(row, players[0]),
                row_in_table(row, players[1]),
            );
            let color = palette.color(category);
            ColoredGame {
                game: row.clone(),
                category,
                paint: Annotation { color: s!(color), ecolor: s!(palette.edge_for(color)) },
            }
        })
        .collect();

    let [p1, p2, both, neither] = tally(&dataset);
    logd!("Classified {} games: p1 {p1}, p2 {p2}, both {both}, neither {neither}", dataset.len());
    Ok(dataset)
}

/// Keep only player rows that match a scheduled game, then drop their points.
pub fn reconcile(team: &[GameRow], player: &[PlayerGame]) -> Vec<GameRow> {
    let kept: Vec<GameRow> = player
        .iter()
        .filter_map(|pg| keep_row_if_in_table(team, pg, &pg.game))
        .map(|pg| pg.game.clone())
        .collect();

    let dropped = player.len() - kept.len();
    if dropped > 0 {
        logd!("Reconcile: {dropped} of {} player rows have no scheduled game", player.len());
    }
    kept
}

/// Reconcile both game logs against the schedule and classify the schedule.
pub fn comparative_stats(
    team: &[GameRow],
    players: [&[PlayerGame]; 2],
    palette: &Palette,
) -> Result<ComparativeDataset> {
    palette.validate()?;

    let p1 = reconcile(team, players[0]);
    let p2 = reconcile(team, players[1]);
    in_tables_to_color(team, [&p1, &p2], palette)
}

/// Row counts in `Category::ALL` order.
pub fn tally(dataset: &[ColoredGame]) -> [usize; 4] {
    let mut out = [0usize; 4];
    for row in dataset {
        out[row.category as usize] += 1;
    }
    out
}
