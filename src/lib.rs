// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod error;

pub mod config;
pub mod core;
pub mod compare;
pub mod teams;

pub mod csv;
pub mod source;
pub mod file;
pub mod report;

pub mod progress;
pub mod runner;
pub mod cli;

pub use error::{Error, Result};
