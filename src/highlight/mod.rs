mod formatter;
mod registry;
mod renderer;
mod resolver;

pub use formatter::{FormatterOptions, HtmlFormatter};
pub use registry::{DEFAULT_THEME, LexerInfo, Registry};
pub use renderer::{RenderResult, render};
pub use resolver::{AUTODETECT, Resolution, resolve};
