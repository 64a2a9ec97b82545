//! Text direction in the native numbering

use std::fmt;
use std::str::FromStr;

use crate::error::NewtextError;

/// Which way the text flows.
///
/// Discriminants match `hb_direction_t`, so `to_raw` can be handed straight
/// to the native library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum Direction {
    #[default]
    Invalid = 0,
    LeftToRight = 4,
    RightToLeft = 5,
    TopToBottom = 6,
    BottomToTop = 7,
}

impl Direction {
    /// Map a native value back; anything unknown becomes `Invalid`.
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            4 => Direction::LeftToRight,
            5 => Direction::RightToLeft,
            6 => Direction::TopToBottom,
            7 => Direction::BottomToTop,
            _ => Direction::Invalid,
        }
    }

    pub const fn to_raw(self) -> i32 {
        self as i32
    }

    pub const fn is_valid(self) -> bool {
        (self.to_raw() & !3) == 4
    }

    pub const fn is_horizontal(self) -> bool {
        (self.to_raw() & !1) == 4
    }

    pub const fn is_vertical(self) -> bool {
        (self.to_raw() & !1) == 6
    }

    pub const fn is_forward(self) -> bool {
        (self.to_raw() & !2) == 4
    }

    pub const fn is_backward(self) -> bool {
        (self.to_raw() & !2) == 5
    }

    /// Opposite direction on the same axis. `Invalid` stays `Invalid`.
    pub const fn reverse(self) -> Self {
        if self.is_valid() {
            Direction::from_raw(self.to_raw() ^ 1)
        } else {
            Direction::Invalid
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Invalid => "invalid",
            Direction::LeftToRight => "ltr",
            Direction::RightToLeft => "rtl",
            Direction::TopToBottom => "ttb",
            Direction::BottomToTop => "btt",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Only the first letter counts, so `ltr`, `LTR` and `left-to-right` all parse.
impl FromStr for Direction {
    type Err = NewtextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.bytes().next().map(|b| b.to_ascii_lowercase()) {
            Some(b'l') => Ok(Direction::LeftToRight),
            Some(b'r') => Ok(Direction::RightToLeft),
            Some(b't') => Ok(Direction::TopToBottom),
            Some(b'b') => Ok(Direction::BottomToTop),
            _ => Err(NewtextError::InvalidDirection(s.to_string())),
        }
    }
}
