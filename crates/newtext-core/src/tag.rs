//! Four-byte tags in the native packing

use std::fmt;
use std::str::FromStr;

use crate::error::NewtextError;

/// Four ASCII bytes packed most-significant-byte-first into a `u32`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag(pub u32);

impl Tag {
    /// The all-zero tag (`HB_TAG_NONE`).
    pub const NONE: Tag = Tag(0);

    /// Pack four bytes: `(c1 << 24) | (c2 << 16) | (c3 << 8) | c4`.
    pub const fn new(bytes: [u8; 4]) -> Self {
        Tag(((bytes[0] as u32) << 24)
            | ((bytes[1] as u32) << 16)
            | ((bytes[2] as u32) << 8)
            | bytes[3] as u32)
    }

    pub const fn from_raw(raw: u32) -> Self {
        Tag(raw)
    }

    pub const fn to_raw(self) -> u32 {
        self.0
    }

    /// Unpack into the four original bytes.
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl From<[u8; 4]> for Tag {
    fn from(bytes: [u8; 4]) -> Self {
        Tag::new(bytes)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes() {
            if byte.is_ascii_graphic() || byte == b' ' {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "\\x{:02x}", byte)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({})", self)
    }
}

/// Parses one to four ASCII characters, padding short input with spaces.
impl FromStr for Tag {
    type Err = NewtextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.len() > 4 || !s.is_ascii() {
            return Err(NewtextError::InvalidTag(s.to_string()));
        }

        let mut bytes = [b' '; 4];
        bytes[..s.len()].copy_from_slice(s.as_bytes());
        Ok(Tag::new(bytes))
    }
}
