pub mod glob_matcher;
pub mod text;

pub use glob_matcher::*;
pub use text::*;
