// src/compare/split.rs

use super::types::{ColoredGame, PlotLayers};

/// Split `dataset` into the rows painted `color` and everything else,
/// the latter repainted (fill and edge) with `muted_color`.
pub fn plotting_tables(dataset: &[ColoredGame], color: &str, muted_color: &str) -> PlotLayers {
    let mut layers = PlotLayers::default();
    for row in dataset {
        if row.paint.color == color {
            layers.highlighted.push(row.clone());
        } else {
            let mut muted = row.clone();
            muted.paint.color = s!(muted_color);
            muted.paint.ecolor = s!(muted_color);
            layers.muted.push(muted);
        }
    }
    layers
}
