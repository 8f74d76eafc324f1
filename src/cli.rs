// src/cli.rs
use std::path::PathBuf;

use ::log::LevelFilter;

use crate::compare::Category;
use crate::config::options::{AppOptions, ExportFormat, PlayerSpec, Seasons};
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::report;
use crate::teams::{list_teams, team_name};

pub const HELP: &str = include_str!("cli_help.txt");

pub enum Command {
    Run(AppOptions),
    ListTeams,
    Help,
}

/// Parse everything after the program name.
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = AppOptions::default();
    let mut players: [Option<PlayerSpec>; 2] = [None, None];
    let mut have_team = false;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        let mut value = |flag: &str| {
            args.next().ok_or_else(|| Error::Config(format!("Missing value for {flag}")))
        };
        match a.as_str() {
            "-t" | "--team" => {
                opts.request.team = value(&a)?.to_ascii_lowercase();
                have_team = true;
            }
            "-s" | "--seasons" => opts.request.seasons = Seasons::parse(&value(&a)?)?,
            "--player1" => players[0] = Some(parse_player(&value(&a)?)?),
            "--player2" => players[1] = Some(parse_player(&value(&a)?)?),
            "-i" | "--input" => opts.input.dir = PathBuf::from(value(&a)?),
            "--input-format" => opts.input.format = ExportFormat::parse(&value(&a)?)?,
            "-o" | "--out" => opts.export.out_dir = PathBuf::from(value(&a)?),
            "--format" => opts.export.format = ExportFormat::parse(&value(&a)?)?,
            "--no-headers" => opts.export.include_headers = false,
            "--precision" => {
                let v = value(&a)?;
                opts.compare.precision = v
                    .parse()
                    .map_err(|_| Error::Config(format!("precision {v:?} is not a number")))?;
            }
            "--order" => opts.compare.order = parse_order(&value(&a)?)?,
            "--color1" => opts.compare.palette.players[0] = value(&a)?,
            "--color2" => opts.compare.palette.players[1] = value(&a)?,
            "--color-both" => opts.compare.palette.both = value(&a)?,
            "--color-neither" => opts.compare.palette.neither = value(&a)?,
            "--edge-neither" => opts.compare.palette.neither_edge = value(&a)?,
            "--color-muted" => opts.compare.palette.muted = value(&a)?,
            "--log" => opts.log_file = PathBuf::from(value(&a)?),
            "-v" | "--verbose" => opts.verbose = true,
            "--list-teams" => return Ok(Command::ListTeams),
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(Error::Config(format!("Unknown arg: {a}"))),
        }
    }

    if !have_team {
        return Err(Error::Config(s!("Specify a team with -t <code>")));
    }
    let [Some(p1), Some(p2)] = players else {
        return Err(Error::Config(s!("Specify both --player1 and --player2 as code:name")));
    };
    opts.request.players = [p1, p2];

    opts.validate()?;
    Ok(Command::Run(opts))
}

/// "3975:Stephen Curry" → code + display name. A bare code is its own name.
fn parse_player(arg: &str) -> Result<PlayerSpec> {
    let (code, name) = arg.split_once(':').unwrap_or((arg, arg));
    let (code, name) = (code.trim(), name.trim());
    if code.is_empty() {
        return Err(Error::Config(format!("player {arg:?} has no code")));
    }
    Ok(PlayerSpec::new(code, name))
}

fn parse_order(arg: &str) -> Result<[Category; 4]> {
    let parsed: Vec<Category> = arg
        .split(',')
        .map(|part| {
            let part = part.trim().to_ascii_lowercase();
            Category::ALL
                .into_iter()
                .find(|c| c.as_str() == part)
                .ok_or_else(|| Error::Config(format!("unknown category {part:?}")))
        })
        .collect::<Result<_>>()?;

    <[Category; 4]>::try_from(parsed).map_err(|v| {
        Error::Config(format!("order needs 4 categories, got {}", v.len()))
    })
}

/// Prints one line per season to stderr.
struct StderrProgress;

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        eprintln!("Comparing over {total} season(s)");
    }
    fn item_done(&mut self, season: u32) {
        eprintln!("  {season} done");
    }
}

/// Run a parsed command; returns what should go to stdout.
pub fn execute(cmd: Command) -> Result<String> {
    match cmd {
        Command::Help => Ok(s!(HELP)),
        Command::ListTeams => Ok(list_teams()
            .map(|(code, name)| format!("{code},{name}\n"))
            .collect()),
        Command::Run(opts) => {
            let level = if opts.verbose { LevelFilter::Debug } else { LevelFilter::Info };
            crate::log::init(&opts.log_file, level)?;
            logf!("Request: {} {} {:?}", opts.request.team, opts.request.seasons, opts.request.names());

            let summary = crate::runner::run(&opts, Some(&mut StderrProgress))?;
            let team = team_name(&opts.request.team)?;
            let mut out = report::render(
                team,
                &opts.request.seasons.to_string(),
                &summary.results,
                opts.compare.precision,
            );
            for path in &summary.files_written {
                out.push_str(&format!("Wrote {}\n", path.display()));
            }
            Ok(out)
        }
    }
}
