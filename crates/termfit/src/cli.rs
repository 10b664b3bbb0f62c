//! Command-line argument handling.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! The parser and dispatcher live in [`run`], a pure function from arguments
//! to output, so every path is testable without spawning a process; `main`
//! only prints and picks the exit code.

use std::process::ExitCode;
use std::str::FromStr;

use termfit_core::display_width;
use termfit_text::{FitMode, UnknownModeError, fit_cell};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
termfit — measure and fit text for fixed-width terminal cells

USAGE:
    termfit <command> [args...]

COMMANDS:
    width <text>                   Print the display width of <text> in cells
    truncate <text> <width> [mode] Fit <text> into <width> cells
    fit <text> <width> [mode]      Alias for truncate

MODES:
    ellipsis   Cut the text and append … (default)
    wrap       Break the text into lines at word boundaries

OPTIONS:
    --help, -h     Show this help message
    --version, -V  Show version

Widths of zero or less yield empty output.";

/// A non-success outcome of [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `--help` / `-h`: print usage, exit 0.
    Help,
    /// `--version` / `-V`: print the version, exit 0.
    Version,
    /// No command given: print usage, exit 1.
    Usage,
    /// A command is missing required positional arguments.
    MissingArgs { command: &'static str, wanted: &'static str },
    /// The command word is not one we know.
    UnknownCommand(String),
    /// The `<width>` argument is not an integer.
    InvalidWidth(String),
    /// The `[mode]` argument is not a fitting mode.
    UnknownMode(UnknownModeError),
}

impl Outcome {
    /// Print this outcome to the right stream and return the exit code.
    pub fn report(&self) -> ExitCode {
        match self {
            Outcome::Help => {
                println!("{HELP_TEXT}");
                ExitCode::SUCCESS
            }
            Outcome::Version => {
                println!("termfit {VERSION}");
                ExitCode::SUCCESS
            }
            Outcome::Usage => {
                eprintln!("{HELP_TEXT}");
                ExitCode::FAILURE
            }
            Outcome::MissingArgs { command, wanted } => {
                eprintln!("error: {command} requires {wanted}");
                eprintln!("usage: termfit {command} {wanted}");
                ExitCode::FAILURE
            }
            Outcome::UnknownCommand(command) => {
                eprintln!("error: unknown command: {command}");
                eprintln!("Run with --help for usage information.");
                ExitCode::FAILURE
            }
            Outcome::InvalidWidth(value) => {
                eprintln!("error: invalid width value: {value}");
                ExitCode::FAILURE
            }
            Outcome::UnknownMode(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        }
    }
}

/// Parse arguments, dispatch, and return the text to print on stdout.
pub fn run(args: impl Iterator<Item = String>) -> Result<String, Outcome> {
    let args: Vec<String> = args.collect();

    let Some(command) = args.first() else {
        return Err(Outcome::Usage);
    };

    match command.as_str() {
        "--help" | "-h" => Err(Outcome::Help),
        "--version" | "-V" => Err(Outcome::Version),
        "width" => {
            let text = args.get(1).ok_or(Outcome::MissingArgs {
                command: "width",
                wanted: "<text>",
            })?;
            Ok(display_width(text).to_string())
        }
        "truncate" | "fit" => {
            let command: &'static str = if command == "fit" { "fit" } else { "truncate" };
            let (Some(text), Some(raw_width)) = (args.get(1), args.get(2)) else {
                return Err(Outcome::MissingArgs {
                    command,
                    wanted: "<text> <width> [mode]",
                });
            };

            let width: i64 = raw_width
                .parse()
                .map_err(|_| Outcome::InvalidWidth(raw_width.clone()))?;

            let mode = match args.get(3) {
                Some(raw_mode) => FitMode::from_str(raw_mode).map_err(Outcome::UnknownMode)?,
                None => FitMode::Ellipsis,
            };

            // Negative budgets behave like zero: nothing fits.
            let max_width = usize::try_from(width).unwrap_or(0);
            Ok(fit_cell(text, max_width, mode))
        }
        other => Err(Outcome::UnknownCommand(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(args: &[&str]) -> Result<String, Outcome> {
        run(args.iter().map(|s| (*s).to_string()))
    }

    // ── width ──────────────────────────────────────────────────────────

    #[test]
    fn width_prints_cell_count() {
        assert_eq!(run_with(&["width", "hello"]), Ok("5".into()));
        assert_eq!(run_with(&["width", "日本語"]), Ok("6".into()));
        assert_eq!(run_with(&["width", ""]), Ok("0".into()));
    }

    #[test]
    fn width_requires_text() {
        assert!(matches!(
            run_with(&["width"]),
            Err(Outcome::MissingArgs { command: "width", .. })
        ));
    }

    // ── truncate / fit ─────────────────────────────────────────────────

    #[test]
    fn truncate_defaults_to_ellipsis() {
        assert_eq!(run_with(&["truncate", "abcdefgh", "5"]), Ok("abcd…".into()));
    }

    #[test]
    fn fit_is_an_alias_for_truncate() {
        assert_eq!(
            run_with(&["fit", "abcdefgh", "5"]),
            run_with(&["truncate", "abcdefgh", "5"])
        );
    }

    #[test]
    fn wrap_mode_is_selectable() {
        assert_eq!(
            run_with(&["truncate", "a bb ccc dddd", "5", "wrap"]),
            Ok("a bb\nccc\ndddd".into())
        );
    }

    #[test]
    fn negative_width_yields_empty_output() {
        assert_eq!(run_with(&["truncate", "hello", "-3"]), Ok(String::new()));
        assert_eq!(run_with(&["truncate", "hello", "0", "wrap"]), Ok(String::new()));
    }

    #[test]
    fn truncate_requires_text_and_width() {
        assert!(matches!(
            run_with(&["truncate", "hello"]),
            Err(Outcome::MissingArgs { command: "truncate", .. })
        ));
        assert!(matches!(
            run_with(&["fit"]),
            Err(Outcome::MissingArgs { command: "fit", .. })
        ));
    }

    #[test]
    fn non_integer_width_is_rejected() {
        assert_eq!(
            run_with(&["truncate", "hello", "wide"]),
            Err(Outcome::InvalidWidth("wide".into()))
        );
    }

    #[test]
    fn unknown_mode_surfaces_the_error() {
        let Err(Outcome::UnknownMode(err)) = run_with(&["fit", "hello", "3", "middle"]) else {
            panic!("expected UnknownMode");
        };
        assert_eq!(err.mode(), "middle");
    }

    // ── dispatch ───────────────────────────────────────────────────────

    #[test]
    fn no_arguments_is_a_usage_error() {
        assert_eq!(run_with(&[]), Err(Outcome::Usage));
    }

    #[test]
    fn unknown_command_is_named() {
        assert_eq!(
            run_with(&["pad", "x", "4"]),
            Err(Outcome::UnknownCommand("pad".into()))
        );
    }

    #[test]
    fn help_and_version_flags() {
        assert_eq!(run_with(&["--help"]), Err(Outcome::Help));
        assert_eq!(run_with(&["-h"]), Err(Outcome::Help));
        assert_eq!(run_with(&["--version"]), Err(Outcome::Version));
        assert_eq!(run_with(&["-V"]), Err(Outcome::Version));
    }
}
