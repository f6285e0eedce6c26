//! # highlighter-wrapper - HTML Syntax Highlighting CLI
//!
//! `highlighter-wrapper` reads source code on stdin and prints it as
//! syntax-highlighted HTML with inline styles and line numbers. Lexers and
//! themes come from syntect's bundled assets.
//!
//! ## Quick Start
//!
//! ```bash
//! # Highlight a file
//! highlighter-wrapper python InspiredGitHub < main.py > main.html
//!
//! # Let the content decide (shebangs, modelines, XML prologs)
//! highlighter-wrapper autodetect base16-ocean.dark < script
//!
//! # List lexers (displayname;lexer-name) and styles
//! highlighter-wrapper getlexers
//! highlighter-wrapper getstyles
//! ```
//!
//! The HTML goes to stdout; a single status line describing how the lexer
//! was chosen goes to stderr.
//!
//! ## Library use
//!
//! ```no_run
//! use highlighter_wrapper::highlight::{Registry, render};
//!
//! let registry = Registry::shared()?;
//! let result = render(registry, "print('hi')", "python", "InspiredGitHub")?;
//! println!("{}", result.html);
//! eprint!("{}", result.status);
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Lexer registry, lexer resolution and HTML formatting.
pub mod highlight;

/// Reading the source text from stdin.
pub mod input;

/// Output routing (stdout for payload, stderr for status and errors).
pub mod output;

/// Terminal styling helpers.
pub mod ui;
