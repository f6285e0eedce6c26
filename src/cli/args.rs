use clap::{CommandFactory, Parser};
use std::path::Path;

const DEFAULT_PROGRAM: &str = "highlighter-wrapper";

const RESERVED_HELP: &str = "\
Commands:
  getlexers   Print available lexers (displayname;lexer-name)
  getstyles   Print available styles
  -h, --help  Print this help

Code is read from stdin, e.g. highlighter-wrapper python InspiredGitHub < main.py
Use 'autodetect' as the language to guess it from the code.";

#[derive(Parser, Debug)]
#[command(name = DEFAULT_PROGRAM)]
#[command(about = "Syntax-highlights code read from stdin and prints it as HTML")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(after_help = RESERVED_HELP)]
pub struct Args {
    /// Language of the code (a lexer name or 'autodetect')
    #[arg(allow_hyphen_values = true)]
    pub lang: String,

    /// Theme (style) for the HTML formatter
    #[arg(allow_hyphen_values = true)]
    pub theme: String,
}

impl Args {
    /// Takes the language and theme from `args` (program name first).
    ///
    /// Exactly two values are required. They are used verbatim, so `--` or a
    /// leading `-` is just another value; clap only renders the usage text.
    pub fn from_argv<S: AsRef<str>>(args: &[S]) -> Option<Self> {
        match args {
            [_, lang, theme] => Some(Self {
                lang: lang.as_ref().to_string(),
                theme: theme.as_ref().to_string(),
            }),
            _ => None,
        }
    }
}

/// Words that switch the program into a listing or help mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reserved {
    Help,
    GetLexers,
    GetStyles,
}

impl Reserved {
    pub fn parse(arg: &str) -> Option<Self> {
        match arg {
            "-h" | "--help" => Some(Self::Help),
            "getlexers" => Some(Self::GetLexers),
            "getstyles" => Some(Self::GetStyles),
            _ => None,
        }
    }

    /// Finds the first reserved word after the program name.
    pub fn find<S: AsRef<str>>(args: &[S]) -> Option<Self> {
        args.iter().skip(1).find_map(|arg| Self::parse(arg.as_ref()))
    }
}

/// Returns the program name to show in usage text.
pub fn program_name<S: AsRef<str>>(args: &[S]) -> &str {
    args.first()
        .and_then(|arg| Path::new(arg.as_ref()).file_name())
        .and_then(|name| name.to_str())
        .unwrap_or(DEFAULT_PROGRAM)
}

/// Renders usage text for `program`.
pub fn usage(program: &str) -> String {
    Args::command()
        .bin_name(program)
        .render_help()
        .to_string()
}
