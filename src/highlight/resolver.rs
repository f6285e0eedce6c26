//! Lexer resolution: exact match, then a content guess, then plain text.

use syntect::parsing::SyntaxReference;

use super::registry::Registry;

/// Language value that asks for detection instead of naming a lexer.
pub const AUTODETECT: &str = "autodetect";

/// Outcome of resolving a requested language against the registry.
#[derive(Debug, Clone)]
pub enum Resolution<'a> {
    /// The requested identifier named a lexer.
    Resolved {
        requested: String,
        syntax: &'a SyntaxReference,
    },
    /// The identifier was unknown but the content identified a lexer.
    Guessed {
        requested: String,
        alias: String,
        syntax: &'a SyntaxReference,
    },
    /// Neither worked; the content is treated as plain text.
    Fallback {
        requested: String,
        syntax: &'a SyntaxReference,
    },
}

impl<'a> Resolution<'a> {
    pub const fn syntax(&self) -> &'a SyntaxReference {
        match self {
            Self::Resolved { syntax, .. }
            | Self::Guessed { syntax, .. }
            | Self::Fallback { syntax, .. } => *syntax,
        }
    }

    pub fn requested(&self) -> &str {
        match self {
            Self::Resolved { requested, .. }
            | Self::Guessed { requested, .. }
            | Self::Fallback { requested, .. } => requested,
        }
    }

    /// Human readable description of how the lexer was picked.
    ///
    /// Fallback messages end with a newline; the others don't.
    pub fn status(&self) -> String {
        match self {
            Self::Resolved { requested, .. } => {
                format!("Successfully used lexer for given language :: {requested}")
            }
            Self::Guessed {
                requested, alias, ..
            } => {
                let mut status = format!("Lexer guessed :: {alias}");
                if alias != requested && requested != AUTODETECT {
                    status.push_str(&format!(" (although given language was {requested}) "));
                }
                status
            }
            Self::Fallback { requested, .. } if requested == AUTODETECT => {
                "Could not autodetect language (returning plain text).\n".to_string()
            }
            Self::Fallback { requested, .. } => {
                format!("Given language was not found :: '{requested}' (returning plain text).\n")
            }
        }
    }
}

/// Resolves `language` for `code`, trying each tier in order.
pub fn resolve<'a>(registry: &'a Registry, language: &str, code: &str) -> Resolution<'a> {
    let requested = language.to_string();

    if let Some(syntax) = registry.find_lexer(language) {
        return Resolution::Resolved { requested, syntax };
    }

    if let Some(syntax) = registry.guess_lexer(code) {
        return Resolution::Guessed {
            requested,
            alias: registry.alias(syntax),
            syntax,
        };
    }

    Resolution::Fallback {
        requested,
        syntax: registry.plain_text(),
    }
}
