//! Text, line and tile drawing
//!
//! Everything here is built on [`Display::set_position`],
//! [`Display::write_block`] and [`Display::set_pixel`], so the mirror stays
//! authoritative no matter which drawing call touched the display.
//!
//! ## Example
//!
//! ```rust,no_run
//! use uc1701::{Builder, Display, Font, FontSize, Interface, Tile, TileTransform};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # static FONT_8X8: [u8; 256 * 8] = [0; 256 * 8];
//! # let config = match Builder::new().build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! let mut display = Display::new(Interface::new(MockSpi, MockPin, MockPin), config);
//! let _ = display.init(&mut MockDelay);
//!
//! let font = Font::new(FontSize::Normal, &FONT_8X8);
//! let _ = display.write_string(36, 0, "Another", &font);
//! let _ = display.draw_line(0, 63, 127, 0);
//! let _ = display.draw_tile(&Tile::new([0xFF; 32]), 100, 4, TileTransform::Rotate90);
//! ```

use log::trace;

use crate::display::Display;
use crate::error::Error;
use crate::font::Font;
use crate::framebuffer::{HEIGHT, PAGES, WIDTH};
use crate::interface::DisplayInterface;
use crate::tile::{TILE_SIZE, Tile, TileTransform};

type DrawResult<I> = core::result::Result<(), Error<I>>;

/// Widest glyph row any [`FontSize`](crate::FontSize) produces
const MAX_GLYPH_WIDTH: usize = 16;

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Draw a string starting at column `x` of page row `page`
    ///
    /// Each byte of `text` selects a glyph. Characters that would run past
    /// the right edge are dropped; codes missing from the font table draw
    /// as blank cells.
    ///
    /// # Errors
    ///
    /// - `Error::TextDoesNotFit` if `x` is beyond the right edge
    /// - `Error::PositionOutOfRange` if the glyph rows would extend below
    ///   the last page
    pub fn write_string<T>(&mut self, x: u16, page: u16, text: &T, font: &Font<'_>) -> DrawResult<I>
    where
        T: AsRef<[u8]> + ?Sized,
    {
        self.draw_text(x, page, text.as_ref(), font, false)
    }

    /// Like [`write_string`](Self::write_string) with every glyph inverted
    pub fn write_string_inverted<T>(
        &mut self,
        x: u16,
        page: u16,
        text: &T,
        font: &Font<'_>,
    ) -> DrawResult<I>
    where
        T: AsRef<[u8]> + ?Sized,
    {
        self.draw_text(x, page, text.as_ref(), font, true)
    }

    fn draw_text(
        &mut self,
        x: u16,
        page: u16,
        text: &[u8],
        font: &Font<'_>,
        invert: bool,
    ) -> DrawResult<I> {
        if !self.is_initialized() {
            return Err(Error::NotInitialized);
        }
        let size = font.size();
        let (width, rows) = (size.width(), size.pages());
        if page as usize + rows > PAGES {
            return Err(Error::PositionOutOfRange { x, page });
        }
        let count = font
            .fit(x as usize, text.len())
            .ok_or(Error::TextDoesNotFit { x })?;
        let text = &text[..count];
        if text.is_empty() {
            return Ok(());
        }
        trace!("text {} chars at x={} page={}", text.len(), x, page);

        let mut cell = [0u8; MAX_GLYPH_WIDTH];
        let cell = &mut cell[..width];

        if rows == 1 {
            // Glyphs on one page are contiguous; position once
            self.set_position(x, page)?;
            for &code in text {
                glyph_row(font, code, 0, invert, cell);
                self.write_block(cell)?;
            }
            return Ok(());
        }

        for (i, &code) in text.iter().enumerate() {
            let column = x + (i * width) as u16;
            for row in 0..rows {
                glyph_row(font, code, row, invert, cell);
                self.set_position(column, page + row as u16)?;
                self.write_block(cell)?;
            }
        }
        Ok(())
    }

    /// Draw a one-pixel line between two points
    ///
    /// Points that fall off the display are skipped.
    pub fn draw_line(&mut self, x1: i16, y1: i16, x2: i16, y2: i16) -> DrawResult<I> {
        if !self.is_initialized() {
            return Err(Error::NotInitialized);
        }
        let (mut x, mut y) = (i32::from(x1), i32::from(y1));
        let (x2, y2) = (i32::from(x2), i32::from(y2));
        let dx = (x2 - x).abs();
        let dy = -(y2 - y).abs();
        let sx = if x < x2 { 1 } else { -1 };
        let sy = if y < y2 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x, y)?;
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
        Ok(())
    }

    fn plot(&mut self, x: i32, y: i32) -> DrawResult<I> {
        if !(0..WIDTH as i32).contains(&x) || !(0..HEIGHT as i32).contains(&y) {
            return Ok(());
        }
        self.set_pixel(x as u16, y as u16, true)
    }

    /// Draw a 16x16 tile with its top-left corner at column `x`, page row
    /// `page`
    ///
    /// The tile covers `page` and `page + 1`. Columns past the right edge
    /// are clipped.
    ///
    /// # Errors
    ///
    /// Returns `Error::PositionOutOfRange` if `x` is off the display or the
    /// tile would extend below the last page.
    pub fn draw_tile(
        &mut self,
        tile: &Tile,
        x: u16,
        page: u16,
        transform: TileTransform,
    ) -> DrawResult<I> {
        if !self.is_initialized() {
            return Err(Error::NotInitialized);
        }
        if x as usize >= WIDTH || page as usize + 2 > PAGES {
            return Err(Error::PositionOutOfRange { x, page });
        }
        let visible = (WIDTH - x as usize).min(TILE_SIZE);
        for (row, columns) in tile.page_columns(transform).iter().enumerate() {
            self.set_position(x, page + row as u16)?;
            self.write_block(&columns[..visible])?;
        }
        Ok(())
    }
}

/// Copy page row `row` of the glyph for `code` into `cell`
fn glyph_row(font: &Font<'_>, code: u8, row: usize, invert: bool, cell: &mut [u8]) {
    let width = cell.len();
    match font.glyph(code) {
        Some(glyph) => cell.copy_from_slice(&glyph[row * width..(row + 1) * width]),
        None => cell.fill(0),
    }
    if invert {
        for byte in cell.iter_mut() {
            *byte = !*byte;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use crate::font::FontSize;
    use crate::mock::{MockInterface, Op, ready_display};
    use alloc::vec::Vec;

    /// Glyph for code `c` filled with byte `c` (normal/small)
    fn table(size: FontSize) -> Vec<u8> {
        let mut table = Vec::new();
        for code in 0..=255u8 {
            for _ in 0..size.stride() {
                table.push(code);
            }
        }
        table
    }

    /// Large glyph rows tagged with the row number in the high nibble
    fn large_table() -> Vec<u8> {
        let mut table = Vec::new();
        for code in 0..=255u8 {
            for i in 0..64usize {
                let row = (i / 16) as u8;
                table.push((row << 4) | (code & 0x0F));
            }
        }
        table
    }

    fn data_ops(display: &Display<MockInterface>) -> Vec<Vec<u8>> {
        display
            .interface()
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Data(d) => Some(d.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_write_string_normal() {
        let mut display = ready_display();
        let table = table(FontSize::Normal);
        let font = Font::new(FontSize::Normal, &table);
        display.write_string(8, 1, "AB", &font).unwrap();

        // One position, then one block per glyph
        assert_eq!(display.interface().commands(), [0xB1, 0x10, 0x08]);
        assert_eq!(data_ops(&display), [alloc::vec![b'A'; 8], alloc::vec![b'B'; 8]]);
        assert_eq!(&display.buffer()[128 + 8..128 + 16], &[b'A'; 8]);
        assert_eq!(&display.buffer()[128 + 16..128 + 24], &[b'B'; 8]);
        assert_eq!(display.cursor(), 128 + 24);
    }

    #[test]
    fn test_write_string_truncates_normal() {
        let mut display = ready_display();
        let table = table(FontSize::Normal);
        let font = Font::new(FontSize::Normal, &table);
        display.write_string(120, 0, "Hello", &font).unwrap();
        assert_eq!(data_ops(&display), [alloc::vec![b'H'; 8]]);
        assert_eq!(display.cursor(), 128);
    }

    #[test]
    fn test_write_string_truncates_small() {
        let mut display = ready_display();
        let table = table(FontSize::Small);
        let font = Font::new(FontSize::Small, &table);
        display.write_string(110, 3, "abcdef", &font).unwrap();
        assert_eq!(data_ops(&display).len(), 3);
        assert_eq!(&display.buffer()[3 * 128 + 122..3 * 128 + 128], &[b'c'; 6]);
    }

    #[test]
    fn test_write_string_nothing_fits_is_ok() {
        let mut display = ready_display();
        let table = table(FontSize::Normal);
        let font = Font::new(FontSize::Normal, &table);
        display.write_string(125, 0, "xyz", &font).unwrap();
        display.write_string(128, 0, "xyz", &font).unwrap();
        display.write_string(0, 0, "", &font).unwrap();
        assert!(display.interface().ops.is_empty());
    }

    #[test]
    fn test_write_string_past_right_edge_errors() {
        let mut display = ready_display();
        let table = table(FontSize::Normal);
        let font = Font::new(FontSize::Normal, &table);
        assert!(matches!(
            display.write_string(129, 0, "x", &font),
            Err(Error::TextDoesNotFit { x: 129 })
        ));
        assert!(matches!(
            display.write_string(0, 8, "x", &font),
            Err(Error::PositionOutOfRange { .. })
        ));
        assert!(display.interface().ops.is_empty());
    }

    #[test]
    fn test_write_string_large_positions_each_row() {
        let mut display = ready_display();
        let table = large_table();
        let font = Font::new(FontSize::Large, &table);
        display.write_string(0, 5, b"\x01\x02", &font).unwrap();

        let commands = display.interface().commands();
        assert_eq!(commands.len(), 2 * 3 * 3);
        assert_eq!(&commands[..3], &[0xB5, 0x10, 0x00]);
        assert_eq!(&commands[3..6], &[0xB6, 0x10, 0x00]);
        assert_eq!(&commands[9..12], &[0xB5, 0x11, 0x00]);

        assert_eq!(display.buffer()[5 * 128], 0x01);
        assert_eq!(display.buffer()[6 * 128 + 15], 0x11);
        assert_eq!(display.buffer()[7 * 128 + 16], 0x22);
    }

    #[test]
    fn test_write_string_large_must_fit_vertically() {
        let mut display = ready_display();
        let table = large_table();
        let font = Font::new(FontSize::Large, &table);
        assert!(matches!(
            display.write_string(0, 6, "A", &font),
            Err(Error::PositionOutOfRange { x: 0, page: 6 })
        ));
        assert!(display.interface().ops.is_empty());
    }

    #[test]
    fn test_write_string_missing_glyph_is_blank() {
        let mut display = ready_display();
        display.fill(0xFF).unwrap();
        display.interface_mut().ops.clear();

        let table = [0x3Cu8; 8 * 66]; // covers codes 0..=65
        let font = Font::new(FontSize::Normal, &table);
        display.write_string(0, 0, "AZ", &font).unwrap();
        assert_eq!(&display.buffer()[..8], &[0x3C; 8]);
        assert_eq!(&display.buffer()[8..16], &[0x00; 8]);
        assert_eq!(display.buffer()[16], 0xFF);
    }

    #[test]
    fn test_write_string_inverted() {
        let mut display = ready_display();
        let table = table(FontSize::Normal);
        let font = Font::new(FontSize::Normal, &table);
        display.write_string_inverted(0, 2, b"\x0F", &font).unwrap();
        assert_eq!(&display.buffer()[256..264], &[0xF0; 8]);
    }

    #[test]
    fn test_write_string_uninitialized() {
        let mut display = Display::new(MockInterface::new(), Builder::new().build().unwrap());
        let table = table(FontSize::Normal);
        let font = Font::new(FontSize::Normal, &table);
        assert!(matches!(
            display.write_string(0, 0, "x", &font),
            Err(Error::NotInitialized)
        ));
    }

    #[test]
    fn test_draw_line_horizontal_and_diagonal() {
        let mut display = ready_display();
        display.draw_line(0, 10, 9, 10).unwrap();
        for x in 0..10 {
            assert!(display.get_pixel(x, 10));
        }
        assert!(!display.get_pixel(10, 10));

        display.draw_line(20, 20, 25, 25).unwrap();
        for i in 0..6 {
            assert!(display.get_pixel(20 + i, 20 + i));
        }
        assert!(!display.get_pixel(21, 20));
    }

    #[test]
    fn test_draw_line_is_symmetric_for_reversed_endpoints() {
        let mut a = ready_display();
        let mut b = ready_display();
        a.draw_line(3, 7, 40, 19).unwrap();
        b.draw_line(40, 19, 3, 7).unwrap();
        let count = |d: &Display<MockInterface>| {
            d.buffer().iter().map(|b| b.count_ones()).sum::<u32>()
        };
        assert_eq!(count(&a), 38);
        assert_eq!(count(&b), 38);
    }

    #[test]
    fn test_draw_line_single_point() {
        let mut display = ready_display();
        display.draw_line(7, 7, 7, 7).unwrap();
        assert!(display.get_pixel(7, 7));
        assert_eq!(display.interface().data_writes(), 1);
    }

    #[test]
    fn test_draw_line_clips_offscreen_points() {
        let mut display = ready_display();
        display.draw_line(-5, 0, 4, 0).unwrap();
        for x in 0..5 {
            assert!(display.get_pixel(x, 0));
        }
        display.draw_line(120, 63, 140, 63).unwrap();
        assert!(display.get_pixel(127, 63));
    }

    fn pattern() -> Tile {
        Tile::from_rows([
            0x8001, 0x4002, 0x2004, 0x1008, 0x0810, 0x0420, 0x0240, 0x0180, 0xFF00, 0x0F00,
            0x00F0, 0x000F, 0xAAAA, 0x5555, 0x0000, 0xFFFE,
        ])
    }

    #[test]
    fn test_draw_tile_identity() {
        let mut display = ready_display();
        let tile = pattern();
        display.draw_tile(&tile, 10, 2, TileTransform::Rotate0).unwrap();
        for y in 0..16u16 {
            for x in 0..16u16 {
                assert_eq!(
                    display.get_pixel(10 + x, 16 + y),
                    tile.pixel(x as usize, y as usize)
                );
            }
        }
        assert_eq!(display.interface().data_writes(), 2);
    }

    #[test]
    fn test_draw_tile_rotate90_twice_matches_rotate180() {
        let tile = pattern();

        let mut twice = ready_display();
        let once = tile.transformed(TileTransform::Rotate90);
        twice.draw_tile(&once, 37, 3, TileTransform::Rotate90).unwrap();

        let mut direct = ready_display();
        direct.draw_tile(&tile, 37, 3, TileTransform::Rotate180).unwrap();

        assert_eq!(twice.buffer(), direct.buffer());
        assert_ne!(direct.buffer(), ready_display().buffer());
    }

    #[test]
    fn test_draw_tile_clips_right_edge() {
        let mut display = ready_display();
        let tile = Tile::new([0xFF; 32]);
        display.draw_tile(&tile, 120, 0, TileTransform::Rotate0).unwrap();
        assert!(data_ops(&display).iter().all(|d| d.len() == 8));
        assert!(display.get_pixel(127, 15));
    }

    #[test]
    fn test_draw_tile_out_of_range() {
        let mut display = ready_display();
        let tile = pattern();
        assert!(matches!(
            display.draw_tile(&tile, 128, 0, TileTransform::Rotate0),
            Err(Error::PositionOutOfRange { x: 128, page: 0 })
        ));
        assert!(matches!(
            display.draw_tile(&tile, 0, 7, TileTransform::Rotate0),
            Err(Error::PositionOutOfRange { x: 0, page: 7 })
        ));
        assert!(display.interface().ops.is_empty());
    }
}
