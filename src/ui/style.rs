//! Consistent styling utilities for CLI output.
//!
//! Provides color helpers using owo-colors. Colors are only applied when
//! the destination stream supports them, so piped output stays plain.

use owo_colors::{OwoColorize, Stream};
use std::fmt::Display;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for error prefixes (e.g., "Error:", "err :")
    pub fn error<T: Display>(stream: Stream, text: T) -> String {
        format!("{}", text.if_supports_color(stream, |text| text.red()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_keeps_text() {
        assert!(Style::error(Stream::Stderr, "Error:").contains("Error:"));
        assert!(Style::error(Stream::Stdout, "err :").contains("err :"));
    }
}
