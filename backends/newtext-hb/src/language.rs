//! Interned BCP 47 language handles

use std::ffi::{c_char, c_int, CStr};
use std::fmt;
use std::ptr::NonNull;
use std::str::FromStr;

use newtext_core::error::{NewtextError, Result};

use crate::ffi;

/// A language as HarfBuzz knows it.
///
/// The native library interns languages for the life of the process, so the
/// handle is never released. Two lookups of the same string are not
/// guaranteed to return the same handle; compare with `==` only when both
/// came from this type, which compares the rendered tags.
#[derive(Clone, Copy)]
pub struct Language(NonNull<ffi::hb_language_impl_t>);

// Interned native languages are immutable and live forever.
unsafe impl Send for Language {}
unsafe impl Sync for Language {}

impl Language {
    /// Wrap a raw handle, rejecting `HB_LANGUAGE_INVALID`.
    pub(crate) fn from_raw(raw: ffi::hb_language_t) -> Option<Self> {
        NonNull::new(raw as *mut ffi::hb_language_impl_t).map(Language)
    }

    pub(crate) fn as_raw(self) -> ffi::hb_language_t {
        self.0.as_ptr()
    }

    /// The opaque handle's address; non-zero by construction.
    pub fn handle(self) -> usize {
        self.0.as_ptr() as usize
    }

    /// The canonical lowercase tag, e.g. `"en-us"`.
    pub fn as_str(self) -> &'static str {
        // Interned strings are static and ASCII.
        let raw = unsafe { ffi::hb_language_to_string(self.as_raw()) };
        if raw.is_null() {
            return "";
        }
        unsafe { CStr::from_ptr(raw) }.to_str().unwrap_or("")
    }
}

impl FromStr for Language {
    type Err = NewtextError;

    fn from_str(s: &str) -> Result<Self> {
        let len = c_int::try_from(s.len())
            .map_err(|_| NewtextError::InvalidLanguage(s.to_string()))?;
        let raw = unsafe { ffi::hb_language_from_string(s.as_ptr() as *const c_char, len) };
        Language::from_raw(raw).ok_or_else(|| NewtextError::InvalidLanguage(s.to_string()))
    }
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 || self.as_str() == other.as_str()
    }
}

impl Eq for Language {}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Language({:?})", self.as_str())
    }
}
