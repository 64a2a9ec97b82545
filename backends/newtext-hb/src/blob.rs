//! Font-file bytes handed to native code

use std::ffi::{c_char, c_uint, c_void};
use std::fs::File;
use std::path::Path;
use std::ptr::{self, NonNull};

use memmap2::Mmap;
use newtext_core::error::{FontLoadError, Result};

use crate::face::Face;
use crate::ffi;

/// How native code may treat the bytes behind a blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryMode {
    /// Native code copies the bytes up front.
    Duplicate,
    /// Bytes are borrowed and never written.
    ReadOnly,
    /// Bytes are borrowed and may be written in place.
    Writable,
    /// Bytes are borrowed; native code copies them if it ever needs to write.
    ReadOnlyMayMakeWritable,
}

impl MemoryMode {
    fn to_raw(self) -> ffi::hb_memory_mode_t {
        match self {
            MemoryMode::Duplicate => ffi::HB_MEMORY_MODE_DUPLICATE,
            MemoryMode::ReadOnly => ffi::HB_MEMORY_MODE_READONLY,
            MemoryMode::Writable => ffi::HB_MEMORY_MODE_WRITABLE,
            MemoryMode::ReadOnlyMayMakeWritable => {
                ffi::HB_MEMORY_MODE_READONLY_MAY_MAKE_WRITABLE
            },
        }
    }
}

/// Drops the owner handed to `hb_blob_create` once native code is done with it
unsafe extern "C" fn release_owned<T>(user_data: *mut c_void) {
    if !user_data.is_null() {
        drop(unsafe { Box::from_raw(user_data as *mut T) });
    }
}

/// Immutable font-file bytes known to HarfBuzz.
///
/// Every constructor picks a memory mode that keeps the bytes alive for as
/// long as native code can see them, so a blob never borrows from Rust.
/// Faces created from the blob hold their own native reference and outlive
/// it safely.
pub struct Blob {
    raw: NonNull<ffi::hb_blob_t>,
}

// Blobs are immutable once created; the owners behind them are Send + Sync.
unsafe impl Send for Blob {}
unsafe impl Sync for Blob {}

impl Blob {
    /// Copy `data` into a native blob.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let len = native_len(data.len())?;
        unsafe {
            Self::create(
                data.as_ptr(),
                len,
                MemoryMode::Duplicate,
                ptr::null_mut(),
                None,
            )
        }
    }

    /// Share `data` with native code without copying.
    pub fn from_static(data: &'static [u8]) -> Result<Self> {
        let len = native_len(data.len())?;
        unsafe { Self::create(data.as_ptr(), len, MemoryMode::ReadOnly, ptr::null_mut(), None) }
    }

    /// Move an owner of bytes into the blob; native code drops it when the
    /// last face or blob reference is released.
    pub fn from_owned<T>(data: T) -> Result<Self>
    where
        T: AsRef<[u8]> + Send + Sync + 'static,
    {
        let owner = Box::new(data);
        let bytes = (*owner).as_ref();
        let (data_ptr, len) = (bytes.as_ptr(), native_len(bytes.len())?);
        let user_data = Box::into_raw(owner) as *mut c_void;

        // The boxed owner's bytes stay put; on failure HarfBuzz calls
        // `release_owned` itself.
        unsafe {
            Self::create(
                data_ptr,
                len,
                MemoryMode::ReadOnly,
                user_data,
                Some(release_owned::<T>),
            )
        }
    }

    /// Memory-map a font file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let size = file.metadata()?.len();
        if size == 0 {
            log::warn!("Font file {} is empty", path.display());
            return Self::from_bytes(&[]);
        }
        if size > u64::from(c_uint::MAX) {
            return Err(FontLoadError::TooLarge(size).into());
        }

        // The mapping is read-only; callers must not truncate the file while
        // a blob or face created from it is alive.
        let mmap = unsafe { Mmap::map(&file)? };
        log::debug!("Mapped font file {} ({} bytes)", path.display(), size);
        Self::from_owned(mmap)
    }

    unsafe fn create(
        data: *const u8,
        len: c_uint,
        mode: MemoryMode,
        user_data: *mut c_void,
        destroy: ffi::hb_destroy_func_t,
    ) -> Result<Self> {
        let raw = unsafe {
            ffi::hb_blob_create(data as *const c_char, len, mode.to_raw(), user_data, destroy)
        };
        let raw = NonNull::new(raw).ok_or(FontLoadError::Allocation)?;
        let blob = Blob { raw };

        // Zero-length input legitimately maps to the shared empty blob; for
        // anything else the empty blob means allocation failed.
        if len > 0 && blob.is_empty() {
            return Err(FontLoadError::Allocation.into());
        }
        log::trace!("Created HarfBuzz blob {:p} ({} bytes, {:?})", blob.raw, len, mode);
        Ok(blob)
    }

    pub(crate) fn as_ptr(&self) -> *mut ffi::hb_blob_t {
        self.raw.as_ptr()
    }

    pub fn len(&self) -> usize {
        unsafe { ffi::hb_blob_get_length(self.as_ptr()) as usize }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0 || self.raw.as_ptr() == unsafe { ffi::hb_blob_get_empty() }
    }

    /// Parse the face at `index` of a font file or collection.
    ///
    /// Malformed bytes, an empty blob and an out-of-range collection index
    /// all yield [`FontLoadError::InvalidFace`]. Files holding a single font
    /// ignore `index`.
    pub fn create_face(&self, index: u32) -> Result<Face> {
        let raw = unsafe { ffi::hb_face_create(self.as_ptr(), index) };
        Face::from_created(raw, index)
    }

    /// The first face, index 0.
    pub fn face(&self) -> Result<Face> {
        self.create_face(0)
    }
}

fn native_len(len: usize) -> Result<c_uint> {
    c_uint::try_from(len).map_err(|_| FontLoadError::TooLarge(len as u64).into())
}

impl Drop for Blob {
    fn drop(&mut self) {
        log::trace!("Destroying HarfBuzz blob {:p}", self.raw);
        unsafe { ffi::hb_blob_destroy(self.as_ptr()) }
    }
}

impl std::fmt::Debug for Blob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Blob").field("len", &self.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newtext_core::NewtextError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_from_bytes_copies() {
        let data = vec![1u8, 2, 3, 4];
        let blob = Blob::from_bytes(&data).unwrap();
        drop(data);
        assert_eq!(blob.len(), 4);
    }

    #[test]
    fn test_empty_input_gives_empty_blob() {
        let blob = Blob::from_bytes(&[]).unwrap();
        assert!(blob.is_empty());
        assert_eq!(blob.len(), 0);
    }

    #[test]
    fn test_empty_blob_has_no_face() {
        let blob = Blob::from_bytes(&[]).unwrap();
        assert!(matches!(
            blob.create_face(0),
            Err(NewtextError::FontLoad(FontLoadError::InvalidFace { index: 0 }))
        ));
    }

    #[test]
    fn test_garbage_has_no_face() {
        let blob = Blob::from_static(b"definitely not an OpenType font").unwrap();
        assert!(blob.face().is_err());
    }

    struct CountedBytes {
        bytes: Vec<u8>,
        drops: Arc<AtomicUsize>,
    }

    impl AsRef<[u8]> for CountedBytes {
        fn as_ref(&self) -> &[u8] {
            &self.bytes
        }
    }

    impl Drop for CountedBytes {
        fn drop(&mut self) {
            self.drops.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_owned_bytes_released_once() {
        let drops = Arc::new(AtomicUsize::new(0));
        let blob = Blob::from_owned(CountedBytes {
            bytes: vec![0u8; 64],
            drops: Arc::clone(&drops),
        })
        .unwrap();
        assert_eq!(blob.len(), 64);
        assert_eq!(drops.load(Ordering::SeqCst), 0);

        drop(blob);
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_owned_empty_bytes_released_immediately() {
        let drops = Arc::new(AtomicUsize::new(0));
        let blob = Blob::from_owned(CountedBytes {
            bytes: Vec::new(),
            drops: Arc::clone(&drops),
        })
        .unwrap();
        assert!(blob.is_empty());
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Blob::from_file("/nonexistent/font.ttf"),
            Err(NewtextError::Io(_))
        ));
    }
}
