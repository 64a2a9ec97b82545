//! A single parsed font out of a blob

use std::ptr::NonNull;

use newtext_core::error::{FontLoadError, Result};

use crate::ffi;
use crate::font::Font;

/// One face of a font file, e.g. a single member of a `.ttc` collection.
///
/// Immutable; any number of [`Font`]s can be created from it, each with its
/// own scale.
pub struct Face {
    raw: NonNull<ffi::hb_face_t>,
}

// Native faces are immutable after creation and safe to share.
unsafe impl Send for Face {}
unsafe impl Sync for Face {}

impl Face {
    /// Take ownership of a face returned by `hb_face_create`.
    ///
    /// Null, the shared empty face, and faces without a single glyph are
    /// all rejected: HarfBuzz reports bad data or a bad index that way.
    pub(crate) fn from_created(raw: *mut ffi::hb_face_t, index: u32) -> Result<Self> {
        let raw = NonNull::new(raw).ok_or(FontLoadError::InvalidFace { index })?;
        let face = Face { raw };

        if face.raw.as_ptr() == unsafe { ffi::hb_face_get_empty() } || face.glyph_count() == 0 {
            log::warn!("HarfBuzz found no usable face at index {}", index);
            return Err(FontLoadError::InvalidFace { index }.into());
        }

        log::debug!(
            "Created HarfBuzz face {:p} (index {}, upem {}, {} glyphs)",
            face.raw,
            index,
            face.upem(),
            face.glyph_count()
        );
        Ok(face)
    }

    pub(crate) fn as_ptr(&self) -> *mut ffi::hb_face_t {
        self.raw.as_ptr()
    }

    /// Create a new, independently scaled font.
    pub fn create_font(&self) -> Result<Font> {
        let raw = unsafe { ffi::hb_font_create(self.as_ptr()) };
        unsafe { Font::from_raw(raw) }
    }

    /// Units per em of the design grid.
    pub fn upem(&self) -> u32 {
        unsafe { ffi::hb_face_get_upem(self.as_ptr()) }
    }

    pub fn glyph_count(&self) -> u32 {
        unsafe { ffi::hb_face_get_glyph_count(self.as_ptr()) }
    }

    /// Collection index this face was created with.
    pub fn index(&self) -> u32 {
        unsafe { ffi::hb_face_get_index(self.as_ptr()) }
    }
}

impl Drop for Face {
    fn drop(&mut self) {
        log::trace!("Destroying HarfBuzz face {:p}", self.raw);
        unsafe { ffi::hb_face_destroy(self.as_ptr()) }
    }
}

impl std::fmt::Debug for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Face")
            .field("index", &self.index())
            .field("upem", &self.upem())
            .field("glyph_count", &self.glyph_count())
            .finish()
    }
}
