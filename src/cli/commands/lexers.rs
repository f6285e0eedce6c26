use anyhow::Result;
use std::io::Write;

use crate::highlight::Registry;
use crate::output::Output;

/// Prints every lexer as `displayName;alias`, one per line.
pub fn print_lexers<O: Write, E: Write>(
    registry: &Registry,
    output: &mut Output<O, E>,
) -> Result<()> {
    for lexer in registry.lexers() {
        output.line(format_args!("{};{}", lexer.name, lexer.alias))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_lexers_format() {
        let registry = Registry::shared().unwrap();
        let (mut stdout, mut stderr) = (Vec::new(), Vec::new());
        print_lexers(registry, &mut Output::new(&mut stdout, &mut stderr)).unwrap();

        let stdout = String::from_utf8(stdout).unwrap();
        let lines: Vec<_> = stdout.lines().collect();
        assert_eq!(lines.len(), registry.lexers().len());
        assert!(lines.iter().all(|line| line.split(';').count() >= 2));
        assert!(lines.iter().any(|line| line.starts_with("Python;")));
        assert!(lines.contains(&"Python;python"));
        assert!(stderr.is_empty());
    }
}
