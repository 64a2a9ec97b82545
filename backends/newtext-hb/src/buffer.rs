//! The text-in, glyphs-out buffer

use std::ffi::{c_char, c_int, c_uint};
use std::ptr::NonNull;

use newtext_core::{
    error::{BufferError, Result},
    Direction, GlyphInfo, GlyphPosition, Script,
};

use crate::ffi;
use crate::language::Language;

/// What a buffer currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// Freshly created or reset.
    Invalid,
    /// Text waiting to be shaped.
    Unicode,
    /// Output of a shape call.
    Glyphs,
}

impl ContentType {
    fn from_raw(raw: ffi::hb_buffer_content_type_t) -> Self {
        match raw {
            ffi::HB_BUFFER_CONTENT_TYPE_UNICODE => ContentType::Unicode,
            ffi::HB_BUFFER_CONTENT_TYPE_GLYPHS => ContentType::Glyphs,
            _ => ContentType::Invalid,
        }
    }
}

/// A native shaping buffer.
///
/// Holds text plus direction/script/language hints until a
/// [`Font`](crate::Font) shapes it in place, after which it holds glyphs.
/// Dropping the buffer releases the native object.
pub struct Buffer {
    raw: NonNull<ffi::hb_buffer_t>,
}

// A buffer is only touched through &mut for writes; moving it is fine.
unsafe impl Send for Buffer {}

impl Buffer {
    /// Allocate an empty buffer.
    pub fn new() -> Result<Self> {
        let raw = unsafe { ffi::hb_buffer_create() };
        let raw = NonNull::new(raw).ok_or(BufferError::Allocation)?;
        let buffer = Buffer { raw };
        // On failure HarfBuzz hands back its inert singleton instead of null.
        if !buffer.allocation_successful() {
            return Err(BufferError::Allocation.into());
        }
        log::trace!("Created HarfBuzz buffer {:p}", buffer.raw);
        Ok(buffer)
    }

    pub(crate) fn as_ptr(&self) -> *mut ffi::hb_buffer_t {
        self.raw.as_ptr()
    }

    fn allocation_successful(&self) -> bool {
        unsafe { ffi::hb_buffer_allocation_successful(self.as_ptr()) != 0 }
    }

    /// Append UTF-8 text.
    ///
    /// Fails once the buffer holds glyphs; call [`Buffer::reset`] or
    /// [`Buffer::clear_contents`] to reuse it.
    pub fn add_text(&mut self, text: &str) -> Result<()> {
        if self.content_type() == ContentType::Glyphs {
            return Err(BufferError::AlreadyShaped.into());
        }
        let len = c_int::try_from(text.len()).map_err(|_| BufferError::TextTooLong(text.len()))?;

        unsafe {
            ffi::hb_buffer_add_utf8(self.as_ptr(), text.as_ptr() as *const c_char, len, 0, -1);
        }

        if !self.allocation_successful() {
            return Err(BufferError::Allocation.into());
        }
        Ok(())
    }

    pub fn set_direction(&mut self, direction: Direction) {
        unsafe { ffi::hb_buffer_set_direction(self.as_ptr(), direction.to_raw()) }
    }

    pub fn direction(&self) -> Direction {
        Direction::from_raw(unsafe { ffi::hb_buffer_get_direction(self.as_ptr()) })
    }

    pub fn set_script(&mut self, script: Script) {
        unsafe { ffi::hb_buffer_set_script(self.as_ptr(), script.to_raw()) }
    }

    pub fn script(&self) -> Script {
        Script::from_raw(unsafe { ffi::hb_buffer_get_script(self.as_ptr()) })
    }

    pub fn set_language(&mut self, language: Language) {
        unsafe { ffi::hb_buffer_set_language(self.as_ptr(), language.as_raw()) }
    }

    /// Resolve `language` to an interned handle and set it.
    pub fn set_language_str(&mut self, language: &str) -> Result<()> {
        let language: Language = language.parse()?;
        self.set_language(language);
        Ok(())
    }

    /// The language hint, if one was set or guessed.
    pub fn language(&self) -> Option<Language> {
        Language::from_raw(unsafe { ffi::hb_buffer_get_language(self.as_ptr()) })
    }

    /// Fill in whichever of direction, script and language is still unset,
    /// inferring them from the buffered text.
    ///
    /// Hints set explicitly are left alone.
    pub fn guess_segment_properties(&mut self) {
        unsafe { ffi::hb_buffer_guess_segment_properties(self.as_ptr()) }
    }

    pub fn content_type(&self) -> ContentType {
        ContentType::from_raw(unsafe { ffi::hb_buffer_get_content_type(self.as_ptr()) })
    }

    /// Number of items: characters before shaping, glyphs after.
    pub fn len(&self) -> usize {
        unsafe { ffi::hb_buffer_get_length(self.as_ptr()) as usize }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop contents and every hint, returning to the freshly created state.
    pub fn reset(&mut self) {
        unsafe { ffi::hb_buffer_reset(self.as_ptr()) }
    }

    /// Drop contents and hints but keep the buffer's Unicode functions and
    /// replacement settings.
    pub fn clear_contents(&mut self) {
        unsafe { ffi::hb_buffer_clear_contents(self.as_ptr()) }
    }

    fn ensure_shaped(&self) -> Result<()> {
        if self.content_type() == ContentType::Glyphs || self.is_empty() {
            Ok(())
        } else {
            Err(BufferError::NotShaped.into())
        }
    }

    /// Copy out the shaped glyph ids and clusters.
    ///
    /// The returned records are owned and stay valid after the buffer is
    /// reshaped, reset or dropped.
    pub fn glyph_infos(&self) -> Result<Vec<GlyphInfo>> {
        self.ensure_shaped()?;

        let mut len: c_uint = 0;
        let raw = unsafe { ffi::hb_buffer_get_glyph_infos(self.as_ptr(), &mut len) };
        Ok(copy_native_array(raw, len)
            .iter()
            .map(|info| GlyphInfo {
                codepoint: info.codepoint,
                cluster: info.cluster,
            })
            .collect())
    }

    /// Copy out the shaped glyph positions, index-aligned with
    /// [`Buffer::glyph_infos`].
    pub fn glyph_positions(&self) -> Result<Vec<GlyphPosition>> {
        self.ensure_shaped()?;

        let mut len: c_uint = 0;
        let raw = unsafe { ffi::hb_buffer_get_glyph_positions(self.as_ptr(), &mut len) };
        Ok(copy_native_array(raw, len)
            .iter()
            .map(|pos| GlyphPosition {
                x_advance: pos.x_advance,
                y_advance: pos.y_advance,
                x_offset: pos.x_offset,
                y_offset: pos.y_offset,
            })
            .collect())
    }

    /// Infos and positions zipped together.
    pub fn glyphs(&self) -> Result<Vec<(GlyphInfo, GlyphPosition)>> {
        let infos = self.glyph_infos()?;
        let positions = self.glyph_positions()?;
        debug_assert_eq!(infos.len(), positions.len());
        Ok(infos.into_iter().zip(positions).collect())
    }
}

/// Copy a native array into owned memory in one pass.
fn copy_native_array<T: Copy>(raw: *const T, len: c_uint) -> Vec<T> {
    if raw.is_null() || len == 0 {
        return Vec::new();
    }
    // The native array holds `len` initialized records until the next
    // mutation of the buffer, which cannot happen while `&self` is held.
    unsafe { std::slice::from_raw_parts(raw, len as usize) }.to_vec()
}

impl Drop for Buffer {
    fn drop(&mut self) {
        log::trace!("Destroying HarfBuzz buffer {:p}", self.raw);
        unsafe { ffi::hb_buffer_destroy(self.as_ptr()) }
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("len", &self.len())
            .field("content_type", &self.content_type())
            .field("direction", &self.direction())
            .field("script", &self.script())
            .field("language", &self.language())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newtext_core::NewtextError;

    #[test]
    fn test_new_buffer_is_empty() {
        let buffer = Buffer::new().unwrap();
        assert!(buffer.is_empty());
        assert_eq!(buffer.content_type(), ContentType::Invalid);
        assert_eq!(buffer.direction(), Direction::Invalid);
        assert_eq!(buffer.script(), Script::INVALID);
    }

    #[test]
    fn test_add_text_counts_characters() {
        let mut buffer = Buffer::new().unwrap();
        buffer.add_text("héllo").unwrap();
        assert_eq!(buffer.len(), 5);
        assert_eq!(buffer.content_type(), ContentType::Unicode);

        buffer.add_text(" world").unwrap();
        assert_eq!(buffer.len(), 11);
    }

    #[test]
    fn test_guess_latin_ltr() {
        let mut buffer = Buffer::new().unwrap();
        buffer.add_text("Hello World").unwrap();
        buffer.guess_segment_properties();

        assert_eq!(buffer.direction(), Direction::LeftToRight);
        assert_eq!(buffer.script(), Script::LATIN);
    }

    #[test]
    fn test_guess_hebrew_rtl() {
        let mut buffer = Buffer::new().unwrap();
        buffer.add_text("שלום").unwrap();
        buffer.guess_segment_properties();

        assert_eq!(buffer.direction(), Direction::RightToLeft);
        assert_eq!(buffer.script(), Script::HEBREW);
    }

    #[test]
    fn test_guess_keeps_explicit_hints() {
        let mut buffer = Buffer::new().unwrap();
        buffer.add_text("Hello").unwrap();
        buffer.set_direction(Direction::TopToBottom);
        buffer.set_script(Script::CYRILLIC);
        buffer.set_language_str("ru").unwrap();
        buffer.guess_segment_properties();

        assert_eq!(buffer.direction(), Direction::TopToBottom);
        assert_eq!(buffer.script(), Script::CYRILLIC);
        assert_eq!(buffer.language().unwrap().as_str(), "ru");
    }

    #[test]
    fn test_hints_overwrite() {
        let mut buffer = Buffer::new().unwrap();
        buffer.set_direction(Direction::LeftToRight);
        buffer.set_direction(Direction::RightToLeft);
        assert_eq!(buffer.direction(), Direction::RightToLeft);

        buffer.set_script(Script::ARABIC);
        buffer.set_script(Script::SYRIAC);
        assert_eq!(buffer.script(), Script::SYRIAC);
    }

    #[test]
    fn test_unshaped_extraction_is_rejected() {
        let mut buffer = Buffer::new().unwrap();
        buffer.add_text("abc").unwrap();
        assert!(matches!(
            buffer.glyph_infos(),
            Err(NewtextError::Buffer(BufferError::NotShaped))
        ));
        assert!(matches!(
            buffer.glyph_positions(),
            Err(NewtextError::Buffer(BufferError::NotShaped))
        ));
    }

    #[test]
    fn test_empty_buffer_extracts_nothing() {
        let buffer = Buffer::new().unwrap();
        assert!(buffer.glyph_infos().unwrap().is_empty());
        assert!(buffer.glyph_positions().unwrap().is_empty());
    }

    #[test]
    fn test_reset_clears_text_and_hints() {
        let mut buffer = Buffer::new().unwrap();
        buffer.add_text("abc").unwrap();
        buffer.set_direction(Direction::RightToLeft);
        buffer.reset();

        assert!(buffer.is_empty());
        assert_eq!(buffer.direction(), Direction::Invalid);
        assert_eq!(buffer.content_type(), ContentType::Invalid);
        buffer.add_text("again").unwrap();
        assert_eq!(buffer.len(), 5);
    }
}
