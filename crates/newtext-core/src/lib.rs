//! newtext core: the plain-data half of the HarfBuzz binding
//!
//! Nothing in this crate touches native code. It holds the values that
//! cross the boundary and the errors raised when a crossing fails:
//!
//! - [`Direction`] and [`Script`] - constant tables bit-identical to
//!   `hb_direction_t` and `hb_script_t`
//! - [`Tag`] - the four-byte packing both tables are built from
//! - [`GlyphInfo`] and [`GlyphPosition`] - owned copies of shaping output
//! - [`NewtextError`] - what every fallible operation returns
//!
//! ```
//! use newtext_core::{Direction, Script, Tag};
//!
//! assert_eq!(Script::LATIN.tag(), Tag::new(*b"Latn"));
//! assert_eq!("latn".parse::<Script>().unwrap(), Script::LATIN);
//! assert_eq!(Direction::LeftToRight.to_raw(), 4);
//! ```

pub mod direction;
pub mod error;
pub mod glyph;
pub mod script;
pub mod tag;

#[cfg(test)]
mod proptests;

pub use direction::Direction;
pub use error::{BufferError, FontLoadError, NewtextError, Result, ShapingError};
pub use glyph::{cumulative_advances, GlyphId, GlyphInfo, GlyphPosition};
pub use script::Script;
pub use tag::Tag;
