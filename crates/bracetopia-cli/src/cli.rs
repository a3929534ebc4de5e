//! Command-line parsing and validation.
//!
//! The surface is getopt-shaped: single-dash short flags, attached values
//! (`-v30`), bare words tolerated anywhere.  clap's automatic help is
//! disabled so `-h` can print the traditional usage text instead, and all
//! range checking happens after the parse so each rejected value produces
//! its documented diagnostic and exit code.

use std::ffi::OsString;
use std::time::Duration;

use bracetopia_core::{BoardConfig, ConfigError, DIM_MAX, DIM_MIN, PCT_MAX, PCT_MIN};
use clap::Parser;

/// Inter-frame delay when `-t` is absent or non-positive, in microseconds.
pub const DEFAULT_DELAY_US: i64 = 900_000;

pub const USAGE: &str = "usage:\n\
    bracetopia [-h] [-t N] [-c N] [-d dim] [-s %str] [-v %vac] [-e %end]\n";

pub const OPTION_TABLE: &str = "\
    Option      Default   Example   Description\n\
    '-h'        NA        -h        print this usage message.\n\
    '-t N'      900000    -t 5000   microseconds cycle delay.\n\
    '-c N'      NA        -c4       count cycle maximum value.\n\
    '-d dim'    15        -d 7      width and height dimension.\n\
    '-s %str'   50        -s 30     strength of preference.\n\
    '-v %vac'   20        -v30      percent vacancies.\n\
    '-e %endl'  60        -e75      percent Endline braces. Others want Newline.\n";

// ── Raw flags ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "bracetopia", disable_help_flag = true, args_override_self = true)]
struct RawArgs {
    /// Print the usage message and option table.
    #[arg(short = 'h')]
    help: bool,

    /// Microseconds between interactive frames.
    #[arg(short = 't', allow_negative_numbers = true)]
    delay_us: Option<i64>,

    /// Batch mode: number of the last printed cycle.
    #[arg(short = 'c', allow_negative_numbers = true)]
    cycles: Option<i64>,

    /// Board side length.
    #[arg(short = 'd', allow_negative_numbers = true)]
    dim: Option<i64>,

    /// Preference strength percentage.
    #[arg(short = 's', allow_negative_numbers = true)]
    strength: Option<i64>,

    /// Vacancy percentage.
    #[arg(short = 'v', allow_negative_numbers = true)]
    vacancy: Option<i64>,

    /// Endline percentage.
    #[arg(short = 'e', allow_negative_numbers = true)]
    endline: Option<i64>,

    /// Bare words are accepted and ignored.
    #[arg(hide = true)]
    extra: Vec<String>,
}

// ── Validated command ─────────────────────────────────────────────────────────

/// What the process should do, decided entirely by the arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the usage message and option table, then exit cleanly.
    Help,
    /// Run the simulation.
    Run(RunConfig),
}

/// A validated run request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub board: BoardConfig,
    pub mode: Mode,
}

/// Output mode, chosen by the presence of `-c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Repaint the terminal every `delay` until the user quits.
    Interactive { delay: Duration },
    /// Print snapshots for cycles `0..=cycles` to stdout.
    Batch { cycles: u64 },
}

/// A rejected command line: the diagnostic to print (if any) and the exit
/// code to end with.  Parse failures carry no diagnostic, just the usage.
#[derive(Debug, PartialEq, Eq)]
pub struct CliError {
    diagnostic: Option<String>,
    exit_code: u8,
}

impl CliError {
    fn bad_flags() -> Self {
        CliError {
            diagnostic: None,
            exit_code: 1,
        }
    }

    fn rejected(diagnostic: String, exit_code: u8) -> Self {
        CliError {
            diagnostic: Some(diagnostic),
            exit_code,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }

    /// Print the diagnostic (when present) followed by the usage, on stderr.
    pub fn report(&self) {
        if let Some(diagnostic) = self.diagnostic() {
            eprintln!("{diagnostic}");
        }
        eprint!("{USAGE}");
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse and validate a complete argv, program name included.
pub fn parse<I, T>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let raw = RawArgs::try_parse_from(args).map_err(|_| CliError::bad_flags())?;
    raw.resolve()
}

/// `-h`: the usage message plus the option table, on stderr.
pub fn print_help() {
    eprint!("{USAGE}");
    eprint!("{OPTION_TABLE}");
}

impl RawArgs {
    /// Range-check every given value, in a fixed order, and assemble the
    /// command.  Help short-circuits everything else.
    fn resolve(self) -> Result<Command, CliError> {
        if self.help {
            return Ok(Command::Help);
        }

        let pct_range = i64::from(PCT_MIN)..=i64::from(PCT_MAX);

        if let Some(count) = self.cycles {
            if count < 0 {
                return Err(CliError::rejected(
                    format!("count ({count}) must be a non-negative integer."),
                    2,
                ));
            }
        }
        if let Some(dim) = self.dim {
            if !((DIM_MIN as i64)..=(DIM_MAX as i64)).contains(&dim) {
                return Err(CliError::rejected(ConfigError::Dimension(dim).to_string(), 2));
            }
        }
        if let Some(strength) = self.strength {
            if !pct_range.contains(&strength) {
                // Exit code 1 here, not 2; the other range checks use 2.
                return Err(CliError::rejected(
                    ConfigError::Strength(strength).to_string(),
                    1,
                ));
            }
        }
        if let Some(vacancy) = self.vacancy {
            if !pct_range.contains(&vacancy) {
                return Err(CliError::rejected(ConfigError::Vacancy(vacancy).to_string(), 2));
            }
        }
        if let Some(endline) = self.endline {
            if !pct_range.contains(&endline) {
                return Err(CliError::rejected(ConfigError::Endline(endline).to_string(), 2));
            }
        }

        let defaults = BoardConfig::default();
        let board = BoardConfig {
            dim: self.dim.map_or(defaults.dim, |dim| dim as usize),
            vacancy_pct: self.vacancy.map_or(defaults.vacancy_pct, |pct| pct as u8),
            endline_pct: self.endline.map_or(defaults.endline_pct, |pct| pct as u8),
            strength_pct: self.strength.map_or(defaults.strength_pct, |pct| pct as u8),
        };

        let mode = match self.cycles {
            Some(cycles) => Mode::Batch {
                cycles: cycles as u64,
            },
            None => {
                let delay_us = self
                    .delay_us
                    .filter(|&delay| delay > 0)
                    .unwrap_or(DEFAULT_DELAY_US);
                Mode::Interactive {
                    delay: Duration::from_micros(delay_us as u64),
                }
            }
        };

        Ok(Command::Run(RunConfig { board, mode }))
    }
}
