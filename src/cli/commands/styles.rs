use anyhow::Result;
use std::io::Write;

use crate::highlight::Registry;
use crate::output::Output;

/// Prints every theme name, one per line.
pub fn print_styles<O: Write, E: Write>(
    registry: &Registry,
    output: &mut Output<O, E>,
) -> Result<()> {
    for name in registry.styles() {
        output.line(name)?;
    }
    Ok(())
}
