mod style;

pub use owo_colors::Stream;
pub use style::Style;
