//! HarfBuzz binding for newtext
//!
//! Safe owning wrappers around the native HarfBuzz objects. Each wrapper
//! holds exactly one native handle and releases it on drop, so resources
//! are freed on every exit path and can never be released twice.
//!
//! The usual flow:
//!
//! ```no_run
//! use newtext_hb::{Blob, Buffer, Direction, Script};
//!
//! let blob = Blob::from_file("DejaVuSansMono.ttf")?;
//! let face = blob.face()?;
//! let mut font = face.create_font()?;
//! font.set_scale_pixels(16, face.upem())?;
//!
//! let mut buffer = Buffer::new()?;
//! buffer.add_text("AB")?;
//! buffer.set_direction(Direction::LeftToRight);
//! buffer.set_script(Script::LATIN);
//! font.shape(&mut buffer)?;
//!
//! for (info, pos) in buffer.glyphs()? {
//!     println!("glyph {} advances {}", info.codepoint, pos.x_advance);
//! }
//! # Ok::<(), newtext_hb::NewtextError>(())
//! ```
//!
//! All segmentation, script rules, OpenType features and positioning run
//! inside HarfBuzz; this crate only carries values across.

#![allow(unsafe_code)]

pub mod blob;
pub mod buffer;
pub mod face;
pub mod ffi;
pub mod font;
pub mod interop;
pub mod language;

pub use blob::{Blob, MemoryMode};
pub use buffer::{Buffer, ContentType};
pub use face::Face;
pub use font::{pixel_scale, Font};
pub use language::Language;

pub use newtext_core::{
    BufferError, Direction, FontLoadError, GlyphInfo, GlyphPosition, NewtextError, Result, Script,
    ShapingError, Tag,
};
