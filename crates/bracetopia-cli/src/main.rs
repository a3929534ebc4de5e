//! `bracetopia` — a Schelling-style segregation simulator for the terminal.
//!
//! Without `-c`, the board repaints in place on the alternate screen every
//! `-t` microseconds until Ctrl-C; with `-c N`, snapshots for cycles `0..=N`
//! go straight to stdout.  Set `BRACETOPIA_SEED` to pin the board shuffle
//! and `RUST_LOG` to surface diagnostics on stderr.

mod cli;
mod driver;

#[cfg(test)]
mod tests;

use std::env;
use std::process::ExitCode;

use anyhow::Context;
use bracetopia_render::{BatchRenderer, ScreenRenderer};
use bracetopia_sim::SimulationBuilder;
use tracing::info;

use crate::cli::{Command, Mode, RunConfig};

fn main() -> ExitCode {
    init_tracing();

    match cli::parse(env::args_os()) {
        Ok(Command::Help) => {
            cli::print_help();
            ExitCode::SUCCESS
        }
        Ok(Command::Run(run)) => match run_simulation(run) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("bracetopia: {err:#}");
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            err.report();
            ExitCode::from(err.exit_code())
        }
    }
}

fn run_simulation(run: RunConfig) -> anyhow::Result<()> {
    let mut builder = SimulationBuilder::new(run.board);
    if let Some(seed) = seed_from_env() {
        info!(seed, "seeding the shuffle from BRACETOPIA_SEED");
        builder = builder.seed(seed);
    }
    let mut sim = builder.build().context("could not set up the board")?;

    match run.mode {
        Mode::Batch { cycles } => {
            info!(cycles, dim = run.board.dim, "batch run");
            let mut renderer = BatchRenderer::stdout();
            driver::run_batch(&mut sim, cycles, &mut renderer)?;
        }
        Mode::Interactive { delay } => {
            info!(?delay, dim = run.board.dim, "interactive run");
            let mut renderer =
                ScreenRenderer::new().context("could not initialise the terminal")?;
            driver::run_interactive(&mut sim, delay, &mut renderer)?;
        }
    }
    Ok(())
}

/// Optional deterministic shuffle seed, as a decimal u64.
fn seed_from_env() -> Option<u64> {
    env::var("BRACETOPIA_SEED")
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
