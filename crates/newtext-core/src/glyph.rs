//! Glyph records copied out of a shaped buffer

/// Unique identifier for a glyph within a font
pub type GlyphId = u32;

/// One shaped glyph.
///
/// After shaping, `codepoint` holds the glyph id, not a Unicode value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphInfo {
    pub codepoint: GlyphId,
    /// Byte offset of the source text this glyph came from.
    pub cluster: u32,
}

/// Placement of one glyph, in the font's scaled units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphPosition {
    pub x_advance: i32,
    pub y_advance: i32,
    pub x_offset: i32,
    pub y_offset: i32,
}

impl GlyphPosition {
    pub const fn offset(&self) -> (i32, i32) {
        (self.x_offset, self.y_offset)
    }

    pub const fn advance(&self) -> (i32, i32) {
        (self.x_advance, self.y_advance)
    }
}

/// Running pen position after each glyph, starting from the origin.
pub fn cumulative_advances(positions: &[GlyphPosition]) -> Vec<(i64, i64)> {
    positions
        .iter()
        .scan((0i64, 0i64), |pen, pos| {
            pen.0 += i64::from(pos.x_advance);
            pen.1 += i64::from(pos.y_advance);
            Some(*pen)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let pos = GlyphPosition {
            x_advance: 1229,
            y_advance: 0,
            x_offset: -3,
            y_offset: 7,
        };
        assert_eq!(pos.advance(), (1229, 0));
        assert_eq!(pos.offset(), (-3, 7));
    }

    #[test]
    fn test_cumulative_advances() {
        let positions = [
            GlyphPosition { x_advance: 10, ..Default::default() },
            GlyphPosition { x_advance: 20, y_advance: -5, ..Default::default() },
        ];
        assert_eq!(cumulative_advances(&positions), vec![(10, 0), (30, -5)]);
        assert!(cumulative_advances(&[]).is_empty());
    }
}
