// src/compare/mod.rs
//! # Comparative statistics
//!
//! Turns one team schedule and two player game logs into four win-rate
//! buckets, one per participation category.
//!
//! ## Pipeline
//! ```text
//! Raw*Row ─ normalize ─▶ GameRow / PlayerGame
//!                           │
//!           classify::reconcile (matcher::keep_row_if_in_table)
//!                           │
//!           classify::in_tables_to_color (matcher::row_in_table)
//!                           ▼
//!                   ComparativeDataset
//!                           │
//!           aggregate::final_data ─ split::plotting_tables per category
//!                           ▼
//!              Vec<CategoryResult>, best ratio first
//! ```
//!
//! ## Conventions & invariants
//! - `GameRow.x` is the opponent's score, `GameRow.y` the team's; `x < y` is a win.
//! - Matching is exact equality on all of `x`, `y`, `date`.
//! - Every stage returns new owned tables; inputs are never modified.
//! - Unscored rows are dropped during normalization; everything else errors.

pub mod aggregate;
pub mod classify;
pub mod matcher;
pub mod normalize;
pub mod split;
pub mod types;

pub use aggregate::{final_data, sort_as_one, win_ratio};
pub use classify::{comparative_stats, in_tables_to_color, reconcile, tally};
pub use matcher::{keep_row_if_in_table, row_in_table};
pub use normalize::{player_table, team_table};
pub use split::plotting_tables;
pub use types::*;
