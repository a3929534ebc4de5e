//! Tests for argument handling and the driver loops.

use std::time::Duration;

use bracetopia_core::BoardConfig;
use bracetopia_render::{BatchRenderer, RenderResult, Renderer};
use bracetopia_sim::{CycleFrame, Simulation, SimulationBuilder};

use crate::cli::{self, CliError, Command, Mode, RunConfig};
use crate::driver;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse(args: &[&str]) -> Result<Command, CliError> {
    let mut argv = vec!["bracetopia"];
    argv.extend_from_slice(args);
    cli::parse(argv)
}

fn run_of(command: Command) -> RunConfig {
    match command {
        Command::Run(run) => run,
        Command::Help => panic!("expected a run command"),
    }
}

// ── Flag parsing ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn defaults_to_an_interactive_run() {
        let run = run_of(parse(&[]).unwrap());
        assert_eq!(run.board, BoardConfig::default());
        assert_eq!(
            run.mode,
            Mode::Interactive {
                delay: Duration::from_micros(900_000),
            }
        );
    }

    #[test]
    fn count_selects_batch_mode() {
        let run = run_of(parse(&["-c", "10"]).unwrap());
        assert_eq!(run.mode, Mode::Batch { cycles: 10 });
        assert_eq!(run.board, BoardConfig::default());
    }

    #[test]
    fn count_zero_is_a_valid_batch_run() {
        let run = run_of(parse(&["-c", "0"]).unwrap());
        assert_eq!(run.mode, Mode::Batch { cycles: 0 });
    }

    #[test]
    fn board_flags_land_in_the_config() {
        let run = run_of(parse(&["-d", "20", "-s", "30", "-v", "25", "-e", "75"]).unwrap());
        assert_eq!(
            run.board,
            BoardConfig {
                dim: 20,
                vacancy_pct: 25,
                endline_pct: 75,
                strength_pct: 30,
            }
        );
    }

    #[test]
    fn attached_values_parse_like_separated_ones() {
        let run = run_of(parse(&["-v30", "-e75", "-c4"]).unwrap());
        assert_eq!(run.board.vacancy_pct, 30);
        assert_eq!(run.board.endline_pct, 75);
        assert_eq!(run.mode, Mode::Batch { cycles: 4 });
    }

    #[test]
    fn delay_flag_sets_the_pause() {
        let run = run_of(parse(&["-t", "5000"]).unwrap());
        assert_eq!(
            run.mode,
            Mode::Interactive {
                delay: Duration::from_micros(5000),
            }
        );
    }

    #[test]
    fn non_positive_delays_keep_the_default() {
        for delay in ["0", "-250"] {
            let run = run_of(parse(&["-t", delay]).unwrap());
            assert_eq!(
                run.mode,
                Mode::Interactive {
                    delay: Duration::from_micros(900_000),
                },
                "-t {delay}"
            );
        }
    }

    #[test]
    fn repeated_flags_keep_the_last_value() {
        let run = run_of(parse(&["-d", "10", "-d", "20"]).unwrap());
        assert_eq!(run.board.dim, 20);

        let run = run_of(parse(&["-c", "3", "-c", "8"]).unwrap());
        assert_eq!(run.mode, Mode::Batch { cycles: 8 });
    }

    #[test]
    fn help_wins_over_everything_else() {
        assert_eq!(parse(&["-h"]).unwrap(), Command::Help);
        assert_eq!(parse(&["-h", "-d", "99"]).unwrap(), Command::Help);
        assert_eq!(parse(&["-h", "-h"]).unwrap(), Command::Help);
    }

    #[test]
    fn bare_words_are_tolerated() {
        let run = run_of(parse(&["leftover", "-d", "20"]).unwrap());
        assert_eq!(run.board.dim, 20);
    }
}

// ── Rejected command lines ────────────────────────────────────────────────────

#[cfg(test)]
mod rejection_tests {
    use super::*;

    fn rejected(args: &[&str]) -> CliError {
        parse(args).unwrap_err()
    }

    #[test]
    fn negative_counts_exit_2() {
        let err = rejected(&["-c", "-1"]);
        assert_eq!(err.exit_code(), 2);
        assert_eq!(
            err.diagnostic(),
            Some("count (-1) must be a non-negative integer.")
        );
    }

    #[test]
    fn out_of_range_dimensions_exit_2() {
        for dim in ["4", "40", "-7"] {
            assert_eq!(rejected(&["-d", dim]).exit_code(), 2, "-d {dim}");
        }
        assert_eq!(
            rejected(&["-d", "40"]).diagnostic(),
            Some("dimension (40) must be a value in [5...39]")
        );
    }

    #[test]
    fn out_of_range_strength_exits_1() {
        // The one range check with exit code 1.
        let err = rejected(&["-s", "0"]);
        assert_eq!(err.exit_code(), 1);
        assert_eq!(
            err.diagnostic(),
            Some("preference strength (0) must be a value in [1...99]")
        );
    }

    #[test]
    fn out_of_range_vacancy_and_endline_exit_2() {
        let err = rejected(&["-v", "100"]);
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.diagnostic(), Some("vacancy (100) must be a value in [1...99]"));

        let err = rejected(&["-e", "0"]);
        assert_eq!(err.exit_code(), 2);
        assert_eq!(
            err.diagnostic(),
            Some("endline proportion (0) must be a value in [1...99]")
        );
    }

    #[test]
    fn unknown_flags_exit_1_without_a_diagnostic() {
        let err = rejected(&["-x"]);
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.diagnostic(), None);
    }

    #[test]
    fn malformed_values_exit_1() {
        let err = rejected(&["-d", "seven"]);
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.diagnostic(), None);
    }

    #[test]
    fn range_checks_run_in_a_fixed_order() {
        // count is checked before dimension, whatever the argv order.
        let err = rejected(&["-d", "99", "-c", "-3"]);
        assert_eq!(
            err.diagnostic(),
            Some("count (-3) must be a non-negative integer.")
        );
    }
}

// ── Driver loops ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod driver_tests {
    use super::*;

    fn seeded_sim(seed: u64) -> Simulation {
        SimulationBuilder::new(BoardConfig::default())
            .seed(seed)
            .build()
            .unwrap()
    }

    #[test]
    fn batch_renders_cycles_zero_through_n() {
        let mut sim = seeded_sim(42);
        let mut renderer = BatchRenderer::new(Vec::new());
        driver::run_batch(&mut sim, 4, &mut renderer).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        let cycles: Vec<&str> = text
            .lines()
            .filter(|line| line.starts_with("cycle: "))
            .collect();
        assert_eq!(
            cycles,
            ["cycle: 0", "cycle: 1", "cycle: 2", "cycle: 3", "cycle: 4"]
        );

        let first_moves = text
            .lines()
            .find(|line| line.starts_with("moves this cycle:"))
            .unwrap();
        assert_eq!(first_moves, "moves this cycle: 0");

        // The driver steps once more after the final frame.
        assert_eq!(sim.cycle(), 5);
    }

    #[test]
    fn seeded_batch_runs_are_byte_identical() {
        let render = |seed| {
            let mut sim = seeded_sim(seed);
            let mut renderer = BatchRenderer::new(Vec::new());
            driver::run_batch(&mut sim, 10, &mut renderer).unwrap();
            renderer.into_inner()
        };
        assert_eq!(render(7), render(7));
        assert_ne!(render(7), render(8));
    }

    #[test]
    fn interactive_stops_on_the_first_quit_request() {
        struct QuitAfter {
            renders: usize,
            pauses_left: usize,
        }

        impl Renderer for QuitAfter {
            fn render(&mut self, _frame: &CycleFrame<'_>) -> RenderResult<()> {
                self.renders += 1;
                Ok(())
            }

            fn pause(&mut self, _delay: Duration) -> RenderResult<bool> {
                if self.pauses_left == 0 {
                    return Ok(true);
                }
                self.pauses_left -= 1;
                Ok(false)
            }
        }

        let mut sim = seeded_sim(1);
        let mut renderer = QuitAfter {
            renders: 0,
            pauses_left: 3,
        };
        driver::run_interactive(&mut sim, Duration::ZERO, &mut renderer).unwrap();

        assert_eq!(renderer.renders, 4);
        assert_eq!(sim.cycle(), 3);
    }
}
