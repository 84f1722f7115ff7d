//! Framebuffer mirror of the controller's display RAM
//!
//! The UC1701 organizes its memory as 8 horizontal **pages**, each 128
//! columns wide and 8 pixels tall. Every byte is one vertical column slice
//! of a page: bit `k` of the byte at `(page, x)` is the pixel at
//! `(x, page * 8 + k)`, with the least significant bit at the top.
//!
//! ```text
//!          x=0   x=1   ...  x=127
//! page 0  [b0]  [b1]  ...  [b127]     rows 0..=7
//! page 1  [b128][b129] ... [b255]     rows 8..=15
//! ...
//! page 7  [b896]       ... [b1023]    rows 56..=63
//! ```
//!
//! [`Framebuffer`] keeps a copy of what has been written to the device so
//! that pixel reads never touch the hardware.
//!
//! ## Example
//!
//! ```
//! use uc1701::framebuffer::{bit_of, index_of, page_of};
//!
//! assert_eq!(page_of(13), 1);
//! assert_eq!(bit_of(13), 0x20);
//! assert_eq!(index_of(5, 13), 128 + 5);
//! ```

/// Display width in pixels (columns)
pub const WIDTH: usize = 128;

/// Display height in pixels (rows)
pub const HEIGHT: usize = 64;

/// Number of 8-pixel pages
pub const PAGES: usize = HEIGHT / 8;

/// Size of the display RAM mirror in bytes
pub const BUFFER_SIZE: usize = WIDTH * PAGES;

/// Page that contains pixel row `y`
pub const fn page_of(y: usize) -> usize {
    y >> 3
}

/// Bit mask selecting pixel row `y` within its page byte
pub const fn bit_of(y: usize) -> u8 {
    1 << (y & 7)
}

/// Linear mirror offset of column `x` in `page`
pub const fn offset_of(x: usize, page: usize) -> usize {
    page * WIDTH + x
}

/// Linear mirror index of the byte holding pixel `(x, y)`
pub const fn index_of(x: usize, y: usize) -> usize {
    offset_of(x, page_of(y))
}

/// Whether `(x, y)` lies on the display
pub const fn in_bounds(x: usize, y: usize) -> bool {
    x < WIDTH && y < HEIGHT
}

/// In-memory copy of the display RAM
#[derive(Clone, Debug, PartialEq)]
pub struct Framebuffer {
    bytes: [u8; BUFFER_SIZE],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create a cleared mirror
    pub const fn new() -> Self {
        Self {
            bytes: [0; BUFFER_SIZE],
        }
    }

    /// Read-only view of the mirrored bytes
    pub fn as_bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.bytes
    }

    /// Byte at a linear offset, if in range
    pub fn byte(&self, offset: usize) -> Option<u8> {
        self.bytes.get(offset).copied()
    }

    /// Pixel value at `(x, y)`; off-display coordinates read as unset
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if !in_bounds(x, y) {
            return false;
        }
        self.bytes[index_of(x, y)] & bit_of(y) != 0
    }

    /// Byte that would hold `(x, y)` after setting it to `on`
    ///
    /// Returns the linear index together with the updated byte, or `None`
    /// when the coordinates are off the display.
    pub fn with_pixel(&self, x: usize, y: usize, on: bool) -> Option<(usize, u8)> {
        if !in_bounds(x, y) {
            return None;
        }
        let index = index_of(x, y);
        let mask = bit_of(y);
        let current = self.bytes[index];
        let updated = if on { current | mask } else { current & !mask };
        Some((index, updated))
    }

    /// Copy `data` into the mirror starting at `offset`
    ///
    /// Bytes that would fall past the end of the mirror are dropped; callers
    /// validate ranges before touching the device.
    pub(crate) fn store(&mut self, offset: usize, data: &[u8]) {
        let Some(dest) = self.bytes.get_mut(offset..) else {
            return;
        };
        let len = data.len().min(dest.len());
        dest[..len].copy_from_slice(&data[..len]);
    }
}
