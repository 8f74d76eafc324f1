// src/runner.rs
use std::path::PathBuf;

use crate::compare::{
    ComparativeDataset, CategoryResult, RawPlayerRow, RawTeamRow,
    comparative_stats, final_data, player_table, team_table,
};
use crate::config::options::{AppOptions, Palette};
use crate::error::{Error, Result};
use crate::file::export_all;
use crate::progress::Progress;
use crate::source::{load_player, load_team};

/// What a run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub dataset: ComparativeDataset,
    pub results: Vec<CategoryResult>,
    pub files_written: Vec<PathBuf>,
}

/// One season, raw tables in, painted schedule out.
pub fn compare_season(
    raw_team: &[RawTeamRow],
    raw_players: [&[RawPlayerRow]; 2],
    palette: &Palette,
) -> Result<ComparativeDataset> {
    let team = team_table(raw_team);
    let p1 = player_table(raw_players[0])?;
    let p2 = player_table(raw_players[1])?;
    comparative_stats(&team, [&p1, &p2], palette)
}

/// Load, classify and merge every requested season, in season order.
pub fn collect(
    options: &AppOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<ComparativeDataset> {
    let request = &options.request;
    let input = &options.input;
    let sep = input.format.delim();

    let mut dataset = ComparativeDataset::new();
    for season in request.seasons.years() {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Season {season}"));
        }

        let raw_team = load_team(&input.table_path(season, &request.team), sep)?;
        let raw_p1 = load_player(&input.table_path(season, &request.players[0].code), sep)?;
        let raw_p2 = load_player(&input.table_path(season, &request.players[1].code), sep)?;

        let season_rows = compare_season(&raw_team, [&raw_p1, &raw_p2], &options.compare.palette)
            .map_err(|e| match e {
                Error::Format(msg) => Error::Format(format!("season {season}: {msg}")),
                other => other,
            })?;
        logf!("Season {season}: {} games", season_rows.len());
        dataset.extend(season_rows);

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(season);
        }
    }
    Ok(dataset)
}

/// Top-level runner.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(options: &AppOptions, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    options.validate()?;

    let seasons = &options.request.seasons;
    if let Some(p) = progress.as_deref_mut() {
        p.begin(seasons.years().count());
    }

    let out = run_inner(options, progress.as_deref_mut());
    if let Err(e) = &out {
        loge!("Run failed: {e}");
    }
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    out
}

fn run_inner(options: &AppOptions, progress: Option<&mut (dyn Progress + '_)>) -> Result<RunSummary> {
    let request = &options.request;
    let dataset = collect(options, progress)?;
    let results = final_data(&dataset, &options.compare, request.names())?;
    let files_written = export_all(
        &options.export,
        &request.file_stem(),
        &dataset,
        &results,
        options.compare.precision,
    )?;
    Ok(RunSummary { dataset, results, files_written })
}
