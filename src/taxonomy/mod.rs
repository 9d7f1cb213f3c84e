pub mod colors;

pub use colors::{language_color, DEFAULT_LANG_COLOR};
