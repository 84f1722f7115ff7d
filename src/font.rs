//! Fixed-width bitmap fonts
//!
//! Glyph tables are plain byte slices supplied by the application. Each
//! glyph is stored in display-native order: one byte per column, LSB at the
//! top, one run of `width` bytes per page row. The glyph for character code
//! `c` starts at `c * stride`.
//!
//! | Size                 | Cell    | Page rows | Stride |
//! |----------------------|---------|-----------|--------|
//! | [`FontSize::Normal`] | 8 x 8   | 1         | 8      |
//! | [`FontSize::Small`]  | 6 x 8   | 1         | 6      |
//! | [`FontSize::Large`]  | 16 x 24 | 3         | 64     |
//!
//! Large glyphs occupy 48 bytes of their 64-byte slot; the rest is padding.
//!
//! ## Example
//!
//! ```
//! use uc1701::{Font, FontSize};
//!
//! static TABLE: [u8; 256 * 6] = [0; 256 * 6];
//! let font = Font::new(FontSize::Small, &TABLE);
//!
//! assert_eq!(font.glyph(b'A').map(<[u8]>::len), Some(6));
//! // 20 columns left of a 128-wide display fit three 6-pixel cells
//! assert_eq!(font.fit(108, 10), Some(3));
//! ```

use crate::framebuffer::WIDTH;

/// Font cell geometry
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum FontSize {
    /// 8x8 cells
    #[default]
    Normal,
    /// 6x8 cells
    Small,
    /// 16x24 cells spanning three pages
    Large,
}

impl FontSize {
    /// Glyph width in columns
    pub const fn width(self) -> usize {
        match self {
            Self::Normal => 8,
            Self::Small => 6,
            Self::Large => 16,
        }
    }

    /// Glyph height in pages
    pub const fn pages(self) -> usize {
        match self {
            Self::Normal | Self::Small => 1,
            Self::Large => 3,
        }
    }

    /// Distance in bytes between consecutive glyphs in a table
    pub const fn stride(self) -> usize {
        match self {
            Self::Normal => 8,
            Self::Small => 6,
            Self::Large => 64,
        }
    }

    /// Bytes of pixel data per glyph
    pub const fn glyph_len(self) -> usize {
        self.width() * self.pages()
    }
}

/// A glyph table paired with its cell geometry
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Font<'a> {
    size: FontSize,
    table: &'a [u8],
    offset: usize,
}

impl<'a> Font<'a> {
    /// Wrap a glyph table whose first glyph is character code 0
    pub const fn new(size: FontSize, table: &'a [u8]) -> Self {
        Self {
            size,
            table,
            offset: 0,
        }
    }

    /// Wrap a glyph table that starts `offset` bytes into `table`
    ///
    /// Useful when several sizes share one combined blob.
    pub const fn at_offset(size: FontSize, table: &'a [u8], offset: usize) -> Self {
        Self {
            size,
            table,
            offset,
        }
    }

    /// Cell geometry
    pub const fn size(&self) -> FontSize {
        self.size
    }

    /// Glyph bytes for `code`, or `None` if the table does not cover it
    pub fn glyph(&self, code: u8) -> Option<&'a [u8]> {
        let start = self
            .offset
            .checked_add(code as usize * self.size.stride())?;
        let end = start.checked_add(self.size.glyph_len())?;
        self.table.get(start..end)
    }

    /// Number of characters of a `len`-character string that fit when
    /// drawn from column `x`
    ///
    /// Returns `None` if `x` lies past the right edge.
    pub fn fit(&self, x: usize, len: usize) -> Option<usize> {
        let room = WIDTH.checked_sub(x)?;
        Some(len.min(room / self.size.width()))
    }
}
