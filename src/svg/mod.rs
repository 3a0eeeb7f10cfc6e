//! SVG input handling.
//!
//! - [`reader`]: lenient parsing into a [`ParsedSvg`]
//! - [`attributes`]: extraction of size, `viewBox` and title

pub mod attributes;
pub mod reader;

pub use attributes::*;
pub use reader::*;
