// src/config/options.rs
use std::fmt;
use std::path::PathBuf;

use super::consts::*;
use crate::compare::Category;
use crate::core::sanitize::{file_fragment, is_plain_token};
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub request: Request,
    pub compare: CompareOptions,
    pub input: InputOptions,
    pub export: ExportOptions,
    pub log_file: PathBuf,
    pub verbose: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            request: Request::default(),
            compare: CompareOptions::default(),
            input: InputOptions::default(),
            export: ExportOptions::default(),
            log_file: PathBuf::from(LOG_FILE),
            verbose: false,
        }
    }
}

impl AppOptions {
    /// Everything a run needs checked before any file is read.
    pub fn validate(&self) -> Result<()> {
        self.request.validate()?;
        self.compare.validate()
    }
}

/* ---------------- Colors ---------------- */

/// `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`, or one of `NAMED_COLORS`.
pub fn is_color_token(s: &str) -> bool {
    if let Some(hex) = s.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    NAMED_COLORS.iter().any(|n| n.eq_ignore_ascii_case(s))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub players: [String; 2],
    pub both: String,
    pub neither: String,
    /// Outline for "neither" points, so they stay visible against the fill.
    pub neither_edge: String,
    /// Repaint color for rows outside the highlighted category.
    pub muted: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            players: [s!(PLAYER1_COLOR), s!(PLAYER2_COLOR)],
            both: s!(BOTH_COLOR),
            neither: s!(NEITHER_COLOR),
            neither_edge: s!(NEITHER_EDGE_COLOR),
            muted: s!(MUTED_COLOR),
        }
    }
}

impl Palette {
    pub fn color(&self, category: Category) -> &str {
        match category {
            Category::Player1Only => &self.players[0],
            Category::Player2Only => &self.players[1],
            Category::Both        => &self.both,
            Category::Neither     => &self.neither,
        }
    }

    /// Edge equals fill, except for the neither color.
    pub fn edge_for<'a>(&'a self, fill: &'a str) -> &'a str {
        if fill == self.neither { &self.neither_edge } else { fill }
    }

    pub fn validate(&self) -> Result<()> {
        let named = [
            ("player 1 color", &self.players[0]),
            ("player 2 color", &self.players[1]),
            ("both color", &self.both),
            ("neither color", &self.neither),
            ("neither edge color", &self.neither_edge),
            ("muted color", &self.muted),
        ];
        for (what, value) in named {
            if !is_color_token(value) {
                return Err(Error::Config(format!("{what} {value:?} is not a color")));
            }
        }

        // Categories are told apart by color downstream.
        for (i, a) in Category::ALL.iter().enumerate() {
            for b in &Category::ALL[i + 1..] {
                if self.color(*a).eq_ignore_ascii_case(self.color(*b)) {
                    return Err(Error::Config(format!(
                        "{a} and {b} share the color {}", self.color(*a)
                    )));
                }
            }
        }
        Ok(())
    }
}

/* ---------------- Comparison ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompareOptions {
    pub palette: Palette,
    /// Decimals kept in win ratios.
    pub precision: u32,
    /// Order results are built in; also the tie-break order.
    pub order: [Category; 4],
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            precision: DEFAULT_PRECISION,
            order: Category::ALL,
        }
    }
}

impl CompareOptions {
    pub fn validate(&self) -> Result<()> {
        self.palette.validate()?;
        if self.precision > MAX_PRECISION {
            return Err(Error::Config(format!(
                "precision {} is above the maximum of {MAX_PRECISION}", self.precision
            )));
        }
        for c in Category::ALL {
            let n = self.order.iter().filter(|o| **o == c).count();
            if n != 1 {
                return Err(Error::Config(format!("category order lists {c} {n} times")));
            }
        }
        Ok(())
    }
}

/* ---------------- Request ---------------- */

/// A single season ("2015") or an inclusive range ("2012-2016").
/// Seasons are named by the year they end in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Seasons {
    pub first: u32,
    pub last: u32,
}

impl Seasons {
    pub fn single(year: u32) -> Self { Self { first: year, last: year } }

    pub fn parse(text: &str) -> Result<Self> {
        let bad = || Error::Config(format!("seasons {text:?}: expected YYYY or YYYY-YYYY"));
        let text = text.trim();
        let mut parts = text.splitn(2, '-').map(str::trim);

        let first: u32 = parts.next().filter(|p| is_year(p)).ok_or_else(bad)?.parse().map_err(|_| bad())?;
        let last: u32 = match parts.next() {
            Some(p) if is_year(p) => p.parse().map_err(|_| bad())?,
            Some(_) => return Err(bad()),
            None => first,
        };

        if first > last {
            return Err(Error::Config(format!("seasons {text:?}: {first} comes after {last}")));
        }
        if first < FIRST_SEASON {
            return Err(Error::Config(format!("season {first} predates {FIRST_SEASON}")));
        }
        Ok(Self { first, last })
    }

    pub fn years(&self) -> impl Iterator<Item = u32> + use<> { self.first..=self.last }
}

fn is_year(s: &str) -> bool {
    s.len() == 4 && s.chars().all(|c| c.is_ascii_digit())
}

impl fmt::Display for Seasons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.first == self.last {
            write!(f, "{}", self.first)
        } else {
            write!(f, "{}-{}", self.first, self.last)
        }
    }
}

impl Default for Seasons {
    fn default() -> Self { Self::single(2022) }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerSpec {
    /// Source id; also the input file stem.
    pub code: String,
    /// Display name used in labels.
    pub name: String,
}

impl PlayerSpec {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self { code: code.into(), name: name.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    /// Three-letter team code ("gsw").
    pub team: String,
    pub seasons: Seasons,
    pub players: [PlayerSpec; 2],
}

impl Default for Request {
    fn default() -> Self {
        Self {
            team: s!(),
            seasons: Seasons::default(),
            players: [PlayerSpec::new("", ""), PlayerSpec::new("", "")],
        }
    }
}

impl Request {
    pub fn validate(&self) -> Result<()> {
        if !is_plain_token(&self.team) {
            return Err(Error::Config(format!("team code {:?} must be letters and digits", self.team)));
        }
        crate::teams::team_name(&self.team)?;

        for (i, p) in self.players.iter().enumerate() {
            if !is_plain_token(&p.code) {
                return Err(Error::Config(format!(
                    "player {} code {:?} must be letters and digits", i + 1, p.code
                )));
            }
            if p.name.trim().is_empty() {
                return Err(Error::Config(format!("player {} has no display name", i + 1)));
            }
        }
        if self.players[0].code == self.players[1].code {
            return Err(Error::Config(format!("both players are {:?}", self.players[0].code)));
        }
        Ok(())
    }

    pub fn names(&self) -> [&str; 2] {
        [self.players[0].name.as_str(), self.players[1].name.as_str()]
    }

    /// Shared stem for every export of this request: "curry-green-gsw-2015".
    pub fn file_stem(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            file_fragment(&self.players[0].name),
            file_fragment(&self.players[1].name),
            self.team.to_ascii_lowercase(),
            self.seasons,
        )
    }
}

/* ---------------- Files ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
    pub fn parse(text: &str) -> Result<Self> {
        match text.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            other => Err(Error::Config(format!("unknown format: {other}"))),
        }
    }
}

/// Where the retrieval side left the raw tables:
/// `<dir>/<season>/<code>.<ext>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputOptions {
    pub dir: PathBuf,
    pub format: ExportFormat,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self { dir: PathBuf::from(DEFAULT_INPUT_DIR), format: ExportFormat::Csv }
    }
}

impl InputOptions {
    pub fn table_path(&self, season: u32, code: &str) -> PathBuf {
        self.dir
            .join(season.to_string())
            .join(join_ext(code, self.format.ext()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub out_dir: PathBuf,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// `<out_dir>/<stem><suffix>.<ext>`
    pub fn out_path(&self, stem: &str, suffix: &str) -> PathBuf {
        let mut name = s!(stem);
        name.push_str(suffix);
        self.out_dir.join(join_ext(&name, self.format.ext()))
    }

    pub fn delim(&self) -> char { self.format.delim() }
}

fn join_ext(stem: &str, ext: &str) -> String {
    format!("{stem}.{ext}")
}
