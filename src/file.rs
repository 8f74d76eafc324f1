// src/file.rs
//
// Hand-off files for the rendering side: the painted dataset, the sorted
// summary, and one background+foreground table per category frame.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::compare::{CategoryResult, ColoredGame};
use crate::config::consts::SUMMARY_SUFFIX;
use crate::config::options::ExportOptions;
use crate::csv::rows_to_string;
use crate::error::{Error, Result};

pub const DATASET_HEADERS: [&str; 6] = ["x", "y", "date", "category", "color", "ecolor"];
pub const SUMMARY_HEADERS: [&str; 7] = ["rank", "category", "ratio", "wins", "games", "color", "label"];
pub const FRAME_HEADERS: [&str; 7] = ["layer", "x", "y", "date", "category", "color", "ecolor"];

fn game_cells(row: &ColoredGame) -> Vec<String> {
    vec![
        row.game.x.to_string(),
        row.game.y.to_string(),
        row.game.date.clone(),
        s!(row.category.as_str()),
        row.paint.color.clone(),
        row.paint.ecolor.clone(),
    ]
}

pub fn dataset_rows(dataset: &[ColoredGame]) -> Vec<Vec<String>> {
    dataset.iter().map(game_cells).collect()
}

/// One row per category, already in ranked order.
pub fn summary_rows(results: &[CategoryResult], precision: u32) -> Vec<Vec<String>> {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            vec![
                (i + 1).to_string(),
                s!(r.category.as_str()),
                format!("{:.*}", precision as usize, r.ratio),
                r.wins().to_string(),
                r.games().to_string(),
                r.color.clone(),
                r.label.clone(),
            ]
        })
        .collect()
}

/// Muted layer first, so the highlighted points draw on top.
pub fn frame_rows(result: &CategoryResult) -> Vec<Vec<String>> {
    let layer = |name: &str, rows: &[ColoredGame]| -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| {
                let mut cells = vec![s!(name)];
                cells.extend(game_cells(r));
                cells
            })
            .collect()
    };
    let mut out = layer("muted", &result.layers.muted);
    out.extend(layer("highlighted", &result.layers.highlighted));
    out
}

pub fn write_table(
    path: &Path,
    headers: &[&str],
    rows: &[Vec<String>],
    export: &ExportOptions,
) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let headers = export.include_headers.then_some(headers);
    let contents = rows_to_string(headers, rows, export.delim());
    fs::write(path, contents).map_err(|e| Error::io(path, e))?;
    Ok(path.to_path_buf())
}

/// Write dataset, summary and per-category frames. Returns paths in that order.
pub fn export_all(
    export: &ExportOptions,
    stem: &str,
    dataset: &[ColoredGame],
    results: &[CategoryResult],
    precision: u32,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(2 + results.len());

    written.push(write_table(
        &export.out_path(stem, ""),
        &DATASET_HEADERS,
        &dataset_rows(dataset),
        export,
    )?);
    written.push(write_table(
        &export.out_path(stem, SUMMARY_SUFFIX),
        &SUMMARY_HEADERS,
        &summary_rows(results, precision),
        export,
    )?);

    for (i, r) in results.iter().enumerate() {
        let suffix = format!("_{}_{}", i + 1, r.category.as_str());
        written.push(write_table(
            &export.out_path(stem, &suffix),
            &FRAME_HEADERS,
            &frame_rows(r),
            export,
        )?);
    }

    logf!("Wrote {} files to {}", written.len(), export.out_dir.display());
    Ok(written)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::io(
            dir,
            std::io::Error::other("path exists but is not a directory"),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{Annotation, Category, PlotLayers};

    fn painted(x: u32, y: u32, date: &str, category: Category, color: &str) -> ColoredGame {
        ColoredGame {
            game: game!(x, y, date),
            category,
            paint: Annotation { color: s!(color), ecolor: s!(color) },
        }
    }

    fn result() -> CategoryResult {
        CategoryResult {
            category: Category::Both,
            ratio: 2.0 / 3.0 * 100.0,
            layers: PlotLayers {
                muted: vec![painted(100, 90, "Mon, Jan 3", Category::Neither, "#E0E0E0")],
                highlighted: vec![
                    painted(80, 95, "Wed, Jan 5", Category::Both, "#ABA2E9"),
                    painted(80, 81, "Thu, Jan 6", Category::Both, "#ABA2E9"),
                    painted(82, 81, "Fri, Jan 7", Category::Both, "#ABA2E9"),
                ],
            },
            color: s!("#ABA2E9"),
            label: s!("with both A and B"),
        }
    }

    #[test]
    fn summary_formats_ratio_at_precision() {
        let rows = summary_rows(&[result()], 1);
        assert_eq!(rows[0], vec![
            s!("1"), s!("both"), s!("66.7"), s!("2"), s!("3"), s!("#ABA2E9"), s!("with both A and B"),
        ]);
    }

    #[test]
    fn frame_puts_muted_first() {
        let rows = frame_rows(&result());
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0][0], "muted");
        assert_eq!(rows[0][3], "Mon, Jan 3");
        assert!(rows[1..].iter().all(|r| r[0] == "highlighted"));
    }
}
