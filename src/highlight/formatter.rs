//! HTML formatter with inline styles and a line-number column.
//!
//! The layout follows the classic two-cell table: line numbers on the
//! left, highlighted code on the right. Every color comes from the theme
//! as an inline `style` attribute, so the output needs no stylesheet.

use anyhow::{Context, Result};
use std::fmt::Write as _;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Color, Theme};
use syntect::html::{IncludeBackground, styled_line_to_highlighted_html};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

const PRE_STYLE: &str = "margin:0;line-height:125%;";

/// Layout switches for [`HtmlFormatter`].
#[derive(Debug, Clone)]
pub struct FormatterOptions {
    /// Render the line-number column.
    pub line_numbers: bool,
    /// Emit `<a id="{prefix}-{n}">` anchors per line and link the line numbers to them.
    pub line_anchors: Option<String>,
}

impl Default for FormatterOptions {
    fn default() -> Self {
        Self {
            line_numbers: true,
            line_anchors: None,
        }
    }
}

pub struct HtmlFormatter<'t> {
    theme: &'t Theme,
    options: FormatterOptions,
}

impl<'t> HtmlFormatter<'t> {
    pub const fn new(theme: &'t Theme, options: FormatterOptions) -> Self {
        Self { theme, options }
    }

    /// Renders `code` as an HTML fragment (UTF-8 text).
    ///
    /// # Errors
    ///
    /// Returns an error if the highlighting engine fails on a line.
    pub fn format(
        &self,
        code: &str,
        syntax: &SyntaxReference,
        syntax_set: &SyntaxSet,
    ) -> Result<String> {
        let mut code_with_newline = code.to_string();
        if !code_with_newline.ends_with('\n') {
            code_with_newline.push('\n');
        }

        let background = self.background();
        let mut highlighter = HighlightLines::new(syntax, self.theme);
        let mut body = String::with_capacity(code_with_newline.len() * 4);
        let mut line_count = 0;

        for (index, line) in LinesWithEndings::from(code_with_newline.as_str()).enumerate() {
            let number = index + 1;
            let regions = highlighter
                .highlight_line(line, syntax_set)
                .with_context(|| format!("Failed to highlight line {number}"))?;
            let html = styled_line_to_highlighted_html(
                &regions,
                IncludeBackground::IfDifferent(background),
            )
            .with_context(|| format!("Failed to render line {number}"))?;

            if let Some(prefix) = &self.options.line_anchors {
                let _ = write!(body, "<a id=\"{prefix}-{number}\"></a>");
            }
            body.push_str(&html);
            line_count = number;
        }

        let code_block = format!(
            "<div class=\"highlight\" style=\"background-color:{};\"><pre style=\"{PRE_STYLE}color:{};\">{body}</pre></div>",
            css_color(background),
            css_color(self.foreground()),
        );

        if !self.options.line_numbers {
            return Ok(code_block);
        }

        Ok(format!(
            "<table class=\"highlighttable\" style=\"background-color:{};\"><tr>\
             <td class=\"linenos\"><div class=\"linenodiv\"><pre style=\"{PRE_STYLE}color:{};\">{}</pre></div></td>\
             <td class=\"code\">{code_block}</td>\
             </tr></table>",
            css_color(background),
            css_color(self.gutter()),
            self.line_number_column(line_count),
        ))
    }

    fn line_number_column(&self, line_count: usize) -> String {
        let width = line_count.to_string().len();
        (1..=line_count)
            .map(|number| match &self.options.line_anchors {
                Some(prefix) => format!("<a href=\"#{prefix}-{number}\">{number:>width$}</a>"),
                None => format!("{number:>width$}"),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn background(&self) -> Color {
        self.theme.settings.background.unwrap_or(Color::WHITE)
    }

    fn foreground(&self) -> Color {
        self.theme.settings.foreground.unwrap_or(Color::BLACK)
    }

    fn gutter(&self) -> Color {
        self.theme
            .settings
            .gutter_foreground
            .unwrap_or_else(|| self.foreground())
    }
}

fn css_color(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}
