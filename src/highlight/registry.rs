//! Lexer and theme registry backed by syntect's bundled assets.

use anyhow::{Result, bail};
use std::sync::OnceLock;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};

/// Theme used when the requested one is unknown.
pub const DEFAULT_THEME: &str = "InspiredGitHub";

const PLAIN_TEXT: &str = "Plain Text";

/// Common identifiers that don't match a syntect extension or syntax name.
const TOKEN_ALIASES: &[(&str, &str)] = &[
    ("text", PLAIN_TEXT),
    ("plaintext", PLAIN_TEXT),
    ("shell", "Bourne Again Shell (bash)"),
    ("csharp", "C#"),
    ("golang", "Go"),
];

static SHARED: OnceLock<Registry> = OnceLock::new();

/// A lexer entry as shown by `getlexers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerInfo {
    /// Human readable syntax name (e.g. `Python`).
    pub name: String,
    /// Identifier that resolves back to this lexer (e.g. `python`).
    pub alias: String,
}

/// Read-only set of syntaxes and themes.
pub struct Registry {
    syntaxes: SyntaxSet,
    themes: ThemeSet,
}

impl Registry {
    /// Loads the bundled syntaxes and themes.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled assets lack the plain text syntax or
    /// the default theme, which would leave the fallback path unusable.
    pub fn load() -> Result<Self> {
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let themes = ThemeSet::load_defaults();

        if syntaxes.find_syntax_by_name(PLAIN_TEXT).is_none() {
            bail!("Highlighting backend is unavailable: no '{PLAIN_TEXT}' syntax bundled");
        }
        if !themes.themes.contains_key(DEFAULT_THEME) {
            bail!("Highlighting backend is unavailable: no '{DEFAULT_THEME}' theme bundled");
        }

        Ok(Self { syntaxes, themes })
    }

    /// Returns the process-wide registry, loading it on first use.
    pub fn shared() -> Result<&'static Self> {
        if let Some(registry) = SHARED.get() {
            return Ok(registry);
        }
        let registry = Self::load()?;
        Ok(SHARED.get_or_init(|| registry))
    }

    pub const fn syntax_set(&self) -> &SyntaxSet {
        &self.syntaxes
    }

    /// Looks a lexer up by identifier: file extension or syntax name,
    /// ignoring ASCII case, then the small alias table.
    pub fn find_lexer(&self, token: &str) -> Option<&SyntaxReference> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }

        self.syntaxes
            .find_syntax_by_token(token)
            .or_else(|| {
                self.syntaxes
                    .find_syntax_by_token(&token.to_ascii_lowercase())
            })
            .or_else(|| {
                self.syntaxes
                    .syntaxes()
                    .iter()
                    .rev()
                    .find(|syntax| syntax.name.eq_ignore_ascii_case(token))
            })
            .or_else(|| {
                TOKEN_ALIASES
                    .iter()
                    .find(|(alias, _)| alias.eq_ignore_ascii_case(token))
                    .and_then(|(_, name)| self.syntaxes.find_syntax_by_name(name))
            })
    }

    /// Guesses a lexer from content.
    ///
    /// Only the first non-blank line is inspected (shebangs, modelines,
    /// `<?xml` prologs and the like). Plain text is never a guess.
    pub fn guess_lexer(&self, code: &str) -> Option<&SyntaxReference> {
        let first_line = code.lines().find(|line| !line.trim().is_empty())?;

        self.syntaxes
            .find_syntax_by_first_line(first_line)
            .filter(|syntax| syntax.name != PLAIN_TEXT)
    }

    pub fn plain_text(&self) -> &SyntaxReference {
        self.syntaxes.find_syntax_plain_text()
    }

    /// Returns the primary identifier for a lexer.
    ///
    /// Prefers the lowercased syntax name when it is a single word that
    /// resolves back to the same syntax, then the first such file extension.
    pub fn alias(&self, syntax: &SyntaxReference) -> String {
        let resolves_back = |token: &str| {
            self.find_lexer(token)
                .is_some_and(|found| found.scope == syntax.scope)
        };

        let lowercase_name = syntax.name.to_ascii_lowercase();
        if !lowercase_name.contains(char::is_whitespace) && resolves_back(&lowercase_name) {
            return lowercase_name;
        }

        syntax
            .file_extensions
            .iter()
            .find(|ext| resolves_back(ext))
            .or_else(|| syntax.file_extensions.first())
            .cloned()
            .unwrap_or(lowercase_name)
    }

    /// Lists every visible lexer in registry order.
    pub fn lexers(&self) -> Vec<LexerInfo> {
        self.syntaxes
            .syntaxes()
            .iter()
            .filter(|syntax| !syntax.hidden)
            .map(|syntax| LexerInfo {
                name: syntax.name.clone(),
                alias: self.alias(syntax),
            })
            .collect()
    }

    /// Lists theme names in sorted order.
    pub fn styles(&self) -> impl Iterator<Item = &str> {
        self.themes.themes.keys().map(String::as_str)
    }

    /// Looks a theme up by exact name, then ignoring ASCII case.
    pub fn theme(&self, name: &str) -> Option<&Theme> {
        self.themes.themes.get(name).or_else(|| {
            self.themes
                .themes
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, theme)| theme)
        })
    }

    /// Returns the requested theme, or the default theme when it is unknown.
    pub fn theme_or_default(&self, name: &str) -> &Theme {
        self.theme(name).unwrap_or_else(|| self.default_theme())
    }

    pub fn default_theme(&self) -> &Theme {
        // Presence is checked in `load`; the first theme is a last resort.
        self.themes
            .themes
            .get(DEFAULT_THEME)
            .or_else(|| self.themes.themes.values().next())
            .unwrap_or_else(|| fallback_theme())
    }
}

fn fallback_theme() -> &'static Theme {
    static EMPTY: OnceLock<Theme> = OnceLock::new();
    EMPTY.get_or_init(Theme::default)
}
