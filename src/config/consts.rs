// src/config/consts.rs

// Palette
pub const PLAYER1_COLOR: &str = "#EF798A";
pub const PLAYER2_COLOR: &str = "#68C5DB";
pub const BOTH_COLOR: &str = "#ABA2E9";
pub const NEITHER_COLOR: &str = "#666666";
pub const NEITHER_EDGE_COLOR: &str = "#666666";
pub const MUTED_COLOR: &str = "#E0E0E0";

// Names accepted in place of a hex code (case-insensitive)
pub const NAMED_COLORS: &[&str] = &[
    "black", "white", "grey", "gray", "silver", "red", "maroon", "orange", "gold",
    "yellow", "olive", "lime", "green", "teal", "cyan", "aqua", "blue", "navy",
    "purple", "magenta", "fuchsia", "pink", "brown", "tan",
];

// Win ratio
pub const DEFAULT_PRECISION: u32 = 2;
pub const MAX_PRECISION: u32 = 6;

// Files
pub const DEFAULT_INPUT_DIR: &str = "data";
pub const DEFAULT_OUT_DIR: &str = "out";
pub const LOG_FILE: &str = ".store/debug.log";
pub const SUMMARY_SUFFIX: &str = "_summary";

// Seasons
pub const FIRST_SEASON: u32 = 1947;
