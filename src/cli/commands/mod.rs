//! Subcommand implementations.

/// `getlexers` handler.
pub mod lexers;

/// Highlighting handler for `<lang> <theme>`.
pub mod render;

/// `getstyles` handler.
pub mod styles;
