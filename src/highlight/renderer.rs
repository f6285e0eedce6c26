use anyhow::Result;

use super::formatter::{FormatterOptions, HtmlFormatter};
use super::registry::Registry;
use super::resolver::resolve;

/// Rendered HTML plus a description of how the lexer was picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    pub html: String,
    pub status: String,
}

/// Highlights `code` as `language` using `theme`.
///
/// An unknown language degrades to a guess and then to plain text, and an
/// unknown theme degrades to the default theme; neither is an error.
///
/// # Errors
///
/// Returns an error only if the highlighting engine itself fails.
pub fn render(
    registry: &Registry,
    code: &str,
    language: &str,
    theme: &str,
) -> Result<RenderResult> {
    let resolution = resolve(registry, language, code);
    let formatter = HtmlFormatter::new(
        registry.theme_or_default(theme),
        FormatterOptions::default(),
    );

    let html = formatter.format(code, resolution.syntax(), registry.syntax_set())?;

    Ok(RenderResult {
        html,
        status: resolution.status(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> &'static Registry {
        Registry::shared().unwrap()
    }

    #[test]
    fn test_render_exact_language() {
        let result = render(registry(), "print('hi')", "python", "InspiredGitHub").unwrap();
        assert!(result.html.contains("<div"));
        assert!(result.html.contains("linenos"));
        assert_eq!(
            result.status,
            "Successfully used lexer for given language :: python"
        );
    }

    #[test]
    fn test_render_unknown_theme_uses_default() {
        let unknown = render(registry(), "print('hi')", "python", "default").unwrap();
        let default = render(registry(), "print('hi')", "python", "InspiredGitHub").unwrap();
        assert_eq!(unknown.html, default.html);
    }

    #[test]
    fn test_render_theme_changes_colors() {
        let light = render(registry(), "print('hi')", "python", "InspiredGitHub").unwrap();
        let dark = render(registry(), "print('hi')", "python", "base16-ocean.dark").unwrap();
        assert_ne!(light.html, dark.html);
    }

    #[test]
    fn test_render_plain_text_fallback() {
        let result = render(registry(), "just some words", "nosuchlang", "InspiredGitHub").unwrap();
        assert!(result.html.contains("just some words"));
        assert_eq!(
            result.status,
            "Given language was not found :: 'nosuchlang' (returning plain text).\n"
        );
    }

    #[test]
    fn test_render_guessed_language() {
        let result = render(
            registry(),
            "#!/usr/bin/env python\nprint('hi')\n",
            "autodetect",
            "InspiredGitHub",
        )
        .unwrap();
        assert!(result.status.starts_with("Lexer guessed :: "));
        assert!(!result.status.contains("although"));
    }

    #[test]
    fn test_render_empty_input() {
        let result = render(registry(), "", "python", "InspiredGitHub").unwrap();
        assert!(result.html.contains("linenos"));
    }
}
