//! Scaled, shapeable font instances

use std::ffi::c_int;
use std::ptr::{self, NonNull};

use newtext_core::error::{FontLoadError, Result, ShapingError};

use crate::buffer::{Buffer, ContentType};
use crate::ffi;

/// A face at a particular scale, ready to shape.
///
/// Scale is in the same units HarfBuzz reports advances in; the usual
/// choice is `pixel_size * upem` (see [`Font::set_scale_pixels`]).
pub struct Font {
    raw: NonNull<ffi::hb_font_t>,
}

// Shaping only reads the font; setters need &mut.
unsafe impl Send for Font {}
unsafe impl Sync for Font {}

impl Font {
    /// Adopt one native reference to a font.
    ///
    /// This is the escape hatch for fonts created by another engine. Null
    /// and the shared empty font are rejected.
    ///
    /// # Safety
    ///
    /// `raw` must be null or a live `hb_font_t` from the HarfBuzz linked
    /// into this process, and the caller must own the reference being
    /// handed over; it is released when the `Font` drops.
    pub unsafe fn from_raw(raw: *mut ffi::hb_font_t) -> Result<Self> {
        let raw = NonNull::new(raw).ok_or(FontLoadError::InvalidFont)?;
        let font = Font { raw };
        if font.raw.as_ptr() == unsafe { ffi::hb_font_get_empty() } {
            return Err(FontLoadError::InvalidFont.into());
        }
        log::trace!("Created HarfBuzz font {:p}", font.raw);
        Ok(font)
    }

    /// Wrap a FreeType face through `hb_ft_font_create_referenced`.
    ///
    /// # Safety
    ///
    /// `ft_face` must be a live `FT_Face` from the FreeType the native
    /// HarfBuzz was built against. The font keeps its own FreeType
    /// reference.
    #[cfg(feature = "freetype")]
    pub unsafe fn from_ft_face(ft_face: *mut std::ffi::c_void) -> Result<Self> {
        if ft_face.is_null() {
            return Err(FontLoadError::InvalidFont.into());
        }
        unsafe { Font::from_raw(ffi::hb_ft_font_create_referenced(ft_face)) }
    }

    pub(crate) fn as_ptr(&self) -> *mut ffi::hb_font_t {
        self.raw.as_ptr()
    }

    pub fn set_scale(&mut self, x_scale: i32, y_scale: i32) {
        unsafe { ffi::hb_font_set_scale(self.as_ptr(), x_scale, y_scale) }
    }

    pub fn scale(&self) -> (i32, i32) {
        let (mut x, mut y): (c_int, c_int) = (0, 0);
        unsafe { ffi::hb_font_get_scale(self.as_ptr(), &mut x, &mut y) };
        (x, y)
    }

    /// Set both axes to `font_size * upem`.
    pub fn set_scale_pixels(&mut self, font_size: u32, upem: u32) -> Result<()> {
        let scale = pixel_scale(font_size, upem)?;
        self.set_scale(scale, scale);
        Ok(())
    }

    /// Shape `buffer` in place with the default feature set.
    ///
    /// The buffer must hold text, not glyphs, and have a direction (set it
    /// or call [`Buffer::guess_segment_properties`]). Shaping an empty
    /// buffer does nothing.
    pub fn shape(&self, buffer: &mut Buffer) -> Result<()> {
        if buffer.content_type() == ContentType::Glyphs {
            return Err(ShapingError::AlreadyShaped.into());
        }
        if buffer.is_empty() {
            return Ok(());
        }
        if !buffer.direction().is_valid() {
            return Err(ShapingError::DirectionUnset.into());
        }

        let chars = buffer.len();
        unsafe { ffi::hb_shape(self.as_ptr(), buffer.as_ptr(), ptr::null(), 0) };
        log::debug!(
            "Shaped {} chars into {} glyphs ({}, {})",
            chars,
            buffer.len(),
            buffer.direction(),
            buffer.script()
        );
        Ok(())
    }
}

/// The scale `set_scale_pixels` applies to both axes.
pub fn pixel_scale(font_size: u32, upem: u32) -> Result<i32> {
    font_size
        .checked_mul(upem)
        .and_then(|scale| i32::try_from(scale).ok())
        .ok_or_else(|| ShapingError::ScaleOverflow { font_size, upem }.into())
}

impl Drop for Font {
    fn drop(&mut self) {
        log::trace!("Destroying HarfBuzz font {:p}", self.raw);
        unsafe { ffi::hb_font_destroy(self.as_ptr()) }
    }
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font").field("scale", &self.scale()).finish()
    }
}
