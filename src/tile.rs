//! 16x16 tiles and their rotation/flip transforms
//!
//! A [`Tile`] is stored row-major, two bytes per row, with the most
//! significant bit of each byte as the leftmost pixel. The display wants
//! the opposite layout: one byte per column, least significant bit at the
//! top. [`Tile::page_columns`] performs that conversion while applying a
//! [`TileTransform`], so rotation and bit reordering happen in one pass.
//!
//! ## Transforms
//!
//! - **Rotate0**: as stored
//! - **Rotate90**: 90° clockwise
//! - **Rotate180**: upside down
//! - **Rotate270**: 90° counter-clockwise
//! - **FlipX**: mirrored left-to-right
//! - **FlipY**: mirrored top-to-bottom
//!
//! ## Example
//!
//! ```
//! use uc1701::{Tile, TileTransform};
//!
//! // Single pixel in the top-left corner
//! let mut rows = [0u16; 16];
//! rows[0] = 0x8000;
//! let tile = Tile::from_rows(rows);
//!
//! // Rotated clockwise it ends up in the top-right corner
//! let rotated = tile.transformed(TileTransform::Rotate90);
//! assert!(rotated.pixel(15, 0));
//! assert!(!rotated.pixel(0, 0));
//! ```

/// Tile edge length in pixels
pub const TILE_SIZE: usize = 16;

/// Bytes in a packed tile
pub const TILE_BYTES: usize = TILE_SIZE * TILE_SIZE / 8;

/// Rotation or mirror applied when drawing a tile
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TileTransform {
    /// No change
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
    /// Mirror horizontally
    FlipX,
    /// Mirror vertically
    FlipY,
}

impl TileTransform {
    /// Source pixel that lands on destination `(x, y)`
    ///
    /// # Example
    ///
    /// ```
    /// use uc1701::TileTransform;
    ///
    /// assert_eq!(TileTransform::Rotate180.source(0, 0), (15, 15));
    /// assert_eq!(TileTransform::FlipX.source(3, 7), (12, 7));
    /// ```
    pub const fn source(self, x: usize, y: usize) -> (usize, usize) {
        let n = TILE_SIZE - 1;
        match self {
            Self::Rotate0 => (x, y),
            Self::Rotate90 => (y, n - x),
            Self::Rotate180 => (n - x, n - y),
            Self::Rotate270 => (n - y, x),
            Self::FlipX => (n - x, y),
            Self::FlipY => (x, n - y),
        }
    }
}

/// A 16x16 one-bit pattern
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tile {
    bytes: [u8; TILE_BYTES],
}

impl Tile {
    /// Wrap packed tile bytes (2 per row, MSB left)
    pub const fn new(bytes: [u8; TILE_BYTES]) -> Self {
        Self { bytes }
    }

    /// Build a tile from 16 rows, bit 15 being the leftmost pixel
    pub fn from_rows(rows: [u16; TILE_SIZE]) -> Self {
        let mut bytes = [0u8; TILE_BYTES];
        for (chunk, row) in bytes.chunks_exact_mut(2).zip(rows) {
            chunk.copy_from_slice(&row.to_be_bytes());
        }
        Self { bytes }
    }

    /// Packed tile bytes
    pub fn as_bytes(&self) -> &[u8; TILE_BYTES] {
        &self.bytes
    }

    /// Pixel at `(x, y)`; coordinates outside the tile read as unset
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= TILE_SIZE || y >= TILE_SIZE {
            return false;
        }
        self.bytes[y * 2 + x / 8] & (0x80 >> (x % 8)) != 0
    }

    fn set_pixel(&mut self, x: usize, y: usize) {
        self.bytes[y * 2 + x / 8] |= 0x80 >> (x % 8);
    }

    /// Copy of the tile with `transform` applied
    pub fn transformed(&self, transform: TileTransform) -> Self {
        let mut out = Self::default();
        for y in 0..TILE_SIZE {
            for x in 0..TILE_SIZE {
                let (sx, sy) = transform.source(x, y);
                if self.pixel(sx, sy) {
                    out.set_pixel(x, y);
                }
            }
        }
        out
    }

    /// Column bytes for the two pages the tile covers, after `transform`
    ///
    /// `columns[p][x]` holds rows `p * 8 ..= p * 8 + 7` of column `x`, with
    /// the topmost row in bit 0.
    pub fn page_columns(&self, transform: TileTransform) -> [[u8; TILE_SIZE]; 2] {
        let mut columns = [[0u8; TILE_SIZE]; 2];
        for (page, row) in columns.iter_mut().enumerate() {
            for (x, column) in row.iter_mut().enumerate() {
                for bit in 0..8 {
                    let (sx, sy) = transform.source(x, page * 8 + bit);
                    if self.pixel(sx, sy) {
                        *column |= 1 << bit;
                    }
                }
            }
        }
        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arrow() -> Tile {
        // Asymmetric so every transform gives a distinct result
        Tile::from_rows([
            0xC000, 0xF000, 0xFC00, 0xFF00, 0xC3C0, 0xC0F0, 0xC03C, 0xC00F, 0xC000, 0xC000,
            0xC000, 0xC000, 0xC000, 0xC000, 0xFFFF, 0x0001,
        ])
    }

    #[test]
    fn test_from_rows_is_msb_left() {
        let mut rows = [0u16; 16];
        rows[2] = 0x8001;
        let tile = Tile::from_rows(rows);
        assert_eq!(tile.as_bytes()[4], 0x80);
        assert_eq!(tile.as_bytes()[5], 0x01);
        assert!(tile.pixel(0, 2));
        assert!(tile.pixel(15, 2));
        assert!(!tile.pixel(1, 2));
    }

    #[test]
    fn test_rotate90_twice_is_rotate180() {
        let tile = arrow();
        let twice = tile
            .transformed(TileTransform::Rotate90)
            .transformed(TileTransform::Rotate90);
        assert_eq!(twice, tile.transformed(TileTransform::Rotate180));
    }

    #[test]
    fn test_rotate90_then_rotate270_is_identity() {
        let tile = arrow();
        let back = tile
            .transformed(TileTransform::Rotate90)
            .transformed(TileTransform::Rotate270);
        assert_eq!(back, tile);
    }

    #[test]
    fn test_flips_are_involutions() {
        let tile = arrow();
        for t in [TileTransform::FlipX, TileTransform::FlipY] {
            assert_eq!(tile.transformed(t).transformed(t), tile);
            assert_ne!(tile.transformed(t), tile);
        }
    }

    #[test]
    fn test_flip_x_then_flip_y_is_rotate180() {
        let tile = arrow();
        let flipped = tile
            .transformed(TileTransform::FlipX)
            .transformed(TileTransform::FlipY);
        assert_eq!(flipped, tile.transformed(TileTransform::Rotate180));
    }

    #[test]
    fn test_rotate90_moves_corners_clockwise() {
        let mut rows = [0u16; 16];
        rows[15] = 0x8000; // bottom-left
        let tile = Tile::from_rows(rows).transformed(TileTransform::Rotate90);
        assert!(tile.pixel(0, 0));

        let mut rows = [0u16; 16];
        rows[0] = 0x8000; // top-left
        let tile = Tile::from_rows(rows).transformed(TileTransform::Rotate270);
        assert!(tile.pixel(0, 15));
    }

    #[test]
    fn test_page_columns_identity() {
        let mut rows = [0u16; 16];
        rows[0] = 0x8000;
        rows[9] = 0x0001;
        let columns = Tile::from_rows(rows).page_columns(TileTransform::Rotate0);
        assert_eq!(columns[0][0], 0x01);
        assert_eq!(columns[1][15], 0x02);
        assert_eq!(columns[0][1..].iter().filter(|b| **b != 0).count(), 0);
    }

    #[test]
    fn test_page_columns_matches_transformed() {
        let tile = arrow();
        for t in [
            TileTransform::Rotate0,
            TileTransform::Rotate90,
            TileTransform::Rotate180,
            TileTransform::Rotate270,
            TileTransform::FlipX,
            TileTransform::FlipY,
        ] {
            assert_eq!(
                tile.page_columns(t),
                tile.transformed(t).page_columns(TileTransform::Rotate0)
            );
        }
    }

    #[test]
    fn test_pixel_outside_tile_is_unset() {
        let tile = Tile::new([0xFF; TILE_BYTES]);
        assert!(tile.pixel(15, 15));
        assert!(!tile.pixel(16, 0));
        assert!(!tile.pixel(0, 16));
    }
}
