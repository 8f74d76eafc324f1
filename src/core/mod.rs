// src/core/mod.rs
//
// Pure string-to-value helpers. No I/O, no table knowledge.

use std::sync::LazyLock;

use regex::Regex;

pub mod date;
pub mod sanitize;
pub mod score;

pub use date::date_convert;
pub use score::score_to_pair;

/// One run of decimal digits.
pub(crate) static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid digit-run regex"));
