//! Configuration error type shared by the simulation and CLI crates.
//!
//! The `Display` output doubles as the program's command-line diagnostics, so
//! the CLI prints these verbatim.  Each variant carries the rejected value as
//! an `i64` so out-of-range raw input survives into the message unchanged.

use thiserror::Error;

/// A configuration field outside its documented range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("dimension ({0}) must be a value in [5...39]")]
    Dimension(i64),

    #[error("preference strength ({0}) must be a value in [1...99]")]
    Strength(i64),

    #[error("vacancy ({0}) must be a value in [1...99]")]
    Vacancy(i64),

    #[error("endline proportion ({0}) must be a value in [1...99]")]
    Endline(i64),
}

/// Shorthand result type for `bracetopia-core`.
pub type CoreResult<T> = Result<T, ConfigError>;
