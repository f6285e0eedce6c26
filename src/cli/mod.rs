//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Subcommand implementations.
pub mod commands;

pub use args::{Args, Reserved};

use anyhow::Result;
use exitcode::ExitCode;
use std::io::{Read, Write};

use crate::highlight::Registry;
use crate::input::InputReader;
use crate::output::Output;
use args::{program_name, usage};
use commands::render::{RenderOptions, run_render};
use commands::{lexers, styles};

/// Exit code for usage errors, missing input and runtime failures.
pub const FAILURE: ExitCode = 1;

/// Runs the program for `args` (program name first) and returns the exit code.
///
/// Nothing here touches process-wide state: the caller supplies the input
/// and both output streams.
pub fn run<S, R, O, E>(args: &[S], input: InputReader<R>, stdout: O, stderr: E) -> ExitCode
where
    S: AsRef<str>,
    R: Read,
    O: Write,
    E: Write,
{
    let mut output = Output::new(stdout, stderr);

    let code = match dispatch(args, input, &mut output) {
        Ok(code) => code,
        Err(err) => {
            output.error(&err);
            return FAILURE;
        }
    };

    if let Err(err) = output.flush() {
        output.error(&err);
        return FAILURE;
    }
    code
}

fn dispatch<S, R, O, E>(
    args: &[S],
    input: InputReader<R>,
    output: &mut Output<O, E>,
) -> Result<ExitCode>
where
    S: AsRef<str>,
    R: Read,
    O: Write,
    E: Write,
{
    match Reserved::find(args) {
        Some(Reserved::Help) => {
            output.line(usage(program_name(args)).trim_end())?;
            return Ok(exitcode::OK);
        }
        Some(Reserved::GetLexers) => {
            lexers::print_lexers(Registry::shared()?, output)?;
            return Ok(exitcode::OK);
        }
        Some(Reserved::GetStyles) => {
            styles::print_styles(Registry::shared()?, output)?;
            return Ok(exitcode::OK);
        }
        None => {}
    }

    let Some(parsed) = Args::from_argv(args) else {
        output.line(usage(program_name(args)).trim_end())?;
        return Ok(FAILURE);
    };

    let options = RenderOptions {
        lang: parsed.lang,
        theme: parsed.theme,
    };
    run_render(&options, input, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    struct Captured {
        code: ExitCode,
        stdout: String,
        stderr: String,
    }

    fn run_with(args: &[&str], stdin: &str, interactive: bool) -> Captured {
        let (mut stdout, mut stderr) = (Vec::new(), Vec::new());
        let code = run(
            args,
            InputReader::new(Cursor::new(stdin.to_string()), interactive),
            &mut stdout,
            &mut stderr,
        );
        Captured {
            code,
            stdout: String::from_utf8(stdout).unwrap(),
            stderr: String::from_utf8(stderr).unwrap(),
        }
    }

    #[test]
    fn test_help() {
        let out = run_with(&["prog", "--help"], "", true);
        assert_eq!(out.code, exitcode::OK);
        assert!(out.stdout.contains("Usage: prog"));
        assert!(out.stderr.is_empty());
    }

    #[test]
    fn test_help_wins_over_positionals() {
        let out = run_with(&["prog", "python", "-h"], "print('hi')", false);
        assert_eq!(out.code, exitcode::OK);
        assert!(out.stdout.contains("getlexers"));
    }

    #[test]
    fn test_getlexers() {
        let out = run_with(&["prog", "getlexers"], "", true);
        assert_eq!(out.code, exitcode::OK);
        assert!(out.stdout.lines().all(|line| line.contains(';')));
        assert!(out.stdout.lines().any(|line| line.starts_with("Rust;")));
    }

    #[test]
    fn test_getstyles() {
        let out = run_with(&["prog", "getstyles"], "", true);
        assert_eq!(out.code, exitcode::OK);
        assert!(out.stdout.lines().any(|line| line == "InspiredGitHub"));
    }

    #[test]
    fn test_missing_arguments() {
        for args in [&["prog"][..], &["prog", "python"][..], &["prog", "a", "b", "c"][..]] {
            let out = run_with(args, "print('hi')", false);
            assert_eq!(out.code, FAILURE);
            assert!(out.stdout.contains("Usage:"));
        }
    }

    #[test]
    fn test_double_dash_is_an_ordinary_argument() {
        let out = run_with(&["prog", "--", "python", "default"], "print('hi')", false);
        assert_eq!(out.code, FAILURE);
        assert!(out.stdout.contains("Usage:"));
        assert!(out.stderr.is_empty());

        let out = run_with(&["prog", "python", "--"], "print('hi')", false);
        assert_eq!(out.code, exitcode::OK);
        assert!(out.stdout.contains("<div"));
        assert_eq!(
            out.stderr,
            "Successfully used lexer for given language :: python"
        );
    }

    #[test]
    fn test_terminal_input_is_rejected() {
        let out = run_with(&["prog", "python", "default"], "", true);
        assert_eq!(out.code, FAILURE);
        assert!(out.stdout.contains("No data on stdin."));
    }

    #[test]
    fn test_render_scenario() {
        let out = run_with(&["prog", "python", "default"], "print('hi')", false);
        assert_eq!(out.code, exitcode::OK);
        assert!(out.stdout.contains("<div"));
        assert!(out.stdout.contains("linenos"));
        assert_eq!(
            out.stderr,
            "Successfully used lexer for given language :: python"
        );
    }

    #[test]
    fn test_autodetect_plain_text() {
        let out = run_with(&["prog", "autodetect", "default"], "just some words", false);
        assert_eq!(out.code, exitcode::OK);
        assert_eq!(
            out.stderr,
            "Could not autodetect language (returning plain text).\n"
        );
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let (mut stdout, mut stderr) = (Vec::new(), Vec::new());
        let code = run(
            &["prog", "python", "default"],
            InputReader::new(Cursor::new(vec![0xff, 0xfe]), false),
            &mut stdout,
            &mut stderr,
        );
        assert_eq!(code, FAILURE);
        assert!(String::from_utf8(stderr).unwrap().contains("not valid UTF-8"));
    }
}
