use anyhow::Result;
use exitcode::ExitCode;
use std::io::{Read, Write};

use crate::cli::FAILURE;
use crate::highlight::{Registry, render};
use crate::input::InputReader;
use crate::output::Output;
use crate::ui::{Stream, Style};

pub struct RenderOptions {
    pub lang: String,
    pub theme: String,
}

/// Reads all of `input`, renders it and writes HTML and status.
///
/// Returns [`FAILURE`] without reading when nothing is piped in.
pub fn run_render<R: Read, O: Write, E: Write>(
    options: &RenderOptions,
    input: InputReader<R>,
    output: &mut Output<O, E>,
) -> Result<ExitCode> {
    if input.is_interactive() {
        output.line(format_args!(
            "{} No data on stdin.",
            Style::error(Stream::Stdout, "err :")
        ))?;
        return Ok(FAILURE);
    }

    let registry = Registry::shared()?;
    let code = input.read_to_end()?;
    let result = render(registry, &code, &options.lang, &options.theme)?;

    output.line(&result.html)?;
    output.status(&result.status)?;

    Ok(exitcode::OK)
}
