// src/source.rs
//
// Raw tables as left on disk by the retrieval side.
//
// - Team schedule:   DATE, RESULT           ("Tue, Oct 19", "W121-114")
// - Player game log: Date, Result, PTS      ("Tue 10/19",   "W121-114", "31")
//
// Header names match case-insensitively; extra columns and column order
// don't matter. Rows with a blank required cell are skipped (month
// separators, "did not play" lines); a row too short to reach a required
// column is a shape error.

use std::fs;
use std::path::Path;

use crate::compare::{RawPlayerRow, RawTeamRow};
use crate::core::sanitize::clean_cell;
use crate::csv::{parse_rows, split_header};
use crate::error::{Error, Result};

pub const TEAM_COLUMNS: [&str; 2] = ["DATE", "RESULT"];
pub const PLAYER_COLUMNS: [&str; 3] = ["Date", "Result", "PTS"];

/// Required columns located in a header row.
struct Columns<const N: usize> {
    ix: [usize; N],
}

impl<const N: usize> Columns<N> {
    fn locate(table: &str, header: &[String], names: [&str; N]) -> Result<Self> {
        let mut ix = [0usize; N];
        for (slot, name) in ix.iter_mut().zip(names) {
            *slot = header
                .iter()
                .position(|h| clean_cell(h).eq_ignore_ascii_case(name))
                .ok_or_else(|| Error::shape(table, format!("missing column {name:?}")))?;
        }
        Ok(Self { ix })
    }

    /// `Ok(None)` for rows with a blank required cell.
    fn pick(&self, table: &str, line: usize, row: &[String]) -> Result<Option<[String; N]>> {
        let mut out: [String; N] = std::array::from_fn(|_| s!());
        for (slot, &i) in out.iter_mut().zip(&self.ix) {
            let cell = row.get(i).ok_or_else(|| {
                Error::shape(table, format!("row {line} has {} cells, needs at least {}", row.len(), i + 1))
            })?;
            let cell = clean_cell(cell);
            if cell.is_empty() {
                return Ok(None);
            }
            *slot = cell;
        }
        Ok(Some(out))
    }
}

fn table_rows<const N: usize>(
    table: &str,
    text: &str,
    sep: char,
    names: [&str; N],
) -> Result<Vec<[String; N]>> {
    let (header, rows) = split_header(parse_rows(text, sep))
        .ok_or_else(|| Error::shape(table, "no header row"))?;
    let cols = Columns::locate(table, &header, names)?;

    let mut out = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;
    for (i, row) in rows.iter().enumerate() {
        // Line 1 is the header.
        match cols.pick(table, i + 2, row)? {
            Some(cells) => out.push(cells),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        logd!("{table}: skipped {skipped} rows with blank cells");
    }
    Ok(out)
}

pub fn parse_team(table: &str, text: &str, sep: char) -> Result<Vec<RawTeamRow>> {
    Ok(table_rows(table, text, sep, TEAM_COLUMNS)?
        .into_iter()
        .map(|[date, result]| RawTeamRow { date, result })
        .collect())
}

pub fn parse_player(table: &str, text: &str, sep: char) -> Result<Vec<RawPlayerRow>> {
    Ok(table_rows(table, text, sep, PLAYER_COLUMNS)?
        .into_iter()
        .map(|[date, result, points]| RawPlayerRow { date, result, points })
        .collect())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

fn table_name(path: &Path) -> String {
    path.display().to_string()
}

pub fn load_team(path: &Path, sep: char) -> Result<Vec<RawTeamRow>> {
    let rows = parse_team(&table_name(path), &read(path)?, sep)?;
    logd!("Loaded {} schedule rows from {}", rows.len(), path.display());
    Ok(rows)
}

pub fn load_player(path: &Path, sep: char) -> Result<Vec<RawPlayerRow>> {
    let rows = parse_player(&table_name(path), &read(path)?, sep)?;
    logd!("Loaded {} game-log rows from {}", rows.len(), path.display());
    Ok(rows)
}
