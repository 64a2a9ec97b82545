//! Bridges to the `harfbuzz_rs` engine
//!
//! Fonts loaded through `harfbuzz_rs` (for example by a font cache that
//! already keeps `Owned<harfbuzz_rs::Font<'static>>` around) can be adopted
//! directly, skipping the blob and face steps.

use harfbuzz_rs::{Direction as HbDirection, HarfbuzzObject, Tag as HbTag};
use newtext_core::{error::Result, Direction, Script, Tag};

use crate::ffi;
use crate::font::Font;

impl Font {
    /// Share the native font behind a `harfbuzz_rs` font.
    ///
    /// Takes a new native reference, so both handles stay valid
    /// independently. Scale changes made through either are visible to both.
    pub fn from_harfbuzz_rs(font: &harfbuzz_rs::Font<'static>) -> Result<Self> {
        let raw = font.as_raw() as *mut ffi::hb_font_t;
        // The 'static bound guarantees the font's bytes outlive our reference.
        unsafe { Font::from_raw(ffi::hb_font_reference(raw)) }
    }
}

/// Convert to `harfbuzz_rs`'s direction; `Invalid` has no counterpart.
pub fn to_hb_direction(dir: Direction) -> Option<HbDirection> {
    match dir {
        Direction::LeftToRight => Some(HbDirection::Ltr),
        Direction::RightToLeft => Some(HbDirection::Rtl),
        Direction::TopToBottom => Some(HbDirection::Ttb),
        Direction::BottomToTop => Some(HbDirection::Btt),
        Direction::Invalid => None,
    }
}

pub fn to_hb_tag(tag: Tag) -> HbTag {
    let [a, b, c, d] = tag.to_bytes();
    HbTag::new(a as char, b as char, c as char, d as char)
}

/// A script in the form `harfbuzz_rs::UnicodeBuffer::set_script` takes.
pub fn to_hb_script(script: Script) -> HbTag {
    to_hb_tag(script.tag())
}
