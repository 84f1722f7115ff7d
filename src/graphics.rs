//! Graphics support via embedded-graphics
//!
//! [`Display`] implements [`DrawTarget`] directly with
//! [`BinaryColor`]: `On` is a dark pixel, `Off` a clear one. Every pixel goes
//! through [`Display::set_pixel`], so unchanged bytes are never resent and
//! there is no separate flush step.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
//! # use uc1701::{Builder, Display, Interface};
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
//! # let config = match Builder::new().build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! let mut display = Display::new(Interface::new(MockSpi, MockPin, MockPin), config);
//! let _ = display.init(&mut MockDelay);
//!
//! let _ = Rectangle::new(Point::new(2, 2), Size::new(40, 20))
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(80, 10), 30)
//!     .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
//!     .draw(&mut display);
//!
//! let _ = Text::new(
//!     "UC1701",
//!     Point::new(4, 50),
//!     MonoTextStyle::new(&FONT_6X10, BinaryColor::On),
//! )
//! .draw(&mut display);
//! ```

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    prelude::Pixel,
};

use crate::display::Display;
use crate::error::Error;
use crate::framebuffer::{HEIGHT, WIDTH};
use crate::interface::DisplayInterface;

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = BinaryColor;
    type Error = Error<I>;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
                continue;
            }
            self.set_pixel(x as u16, y as u16, color.is_on())?;
        }
        Ok(())
    }

    /// Rewrites all of display RAM in eight page transfers
    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(if color.is_on() { 0xFF } else { 0x00 })
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use crate::mock::{MockInterface, ready_display};
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

    #[test]
    fn test_size_is_panel_resolution() {
        let display = ready_display();
        assert_eq!(display.size(), Size::new(128, 64));
        assert_eq!(display.bounding_box().top_left, Point::zero());
    }

    #[test]
    fn test_filled_rectangle_sets_page_bytes() {
        let mut display = ready_display();
        Rectangle::new(Point::new(0, 8), Size::new(8, 8))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut display)
            .unwrap();
        assert_eq!(&display.buffer()[128..136], &[0xFF; 8]);
        assert_eq!(display.buffer()[136], 0x00);
        assert_eq!(display.buffer()[0], 0x00);
    }

    #[test]
    fn test_off_pixels_clear_bits() {
        let mut display = ready_display();
        display.clear(BinaryColor::On).unwrap();
        display
            .draw_iter([Pixel(Point::new(5, 3), BinaryColor::Off)])
            .unwrap();
        assert!(!display.get_pixel(5, 3));
        assert_eq!(display.buffer()[5], !0x08);
    }

    #[test]
    fn test_offscreen_pixels_are_skipped() {
        let mut display = ready_display();
        display
            .draw_iter([
                Pixel(Point::new(-1, 0), BinaryColor::On),
                Pixel(Point::new(0, -1), BinaryColor::On),
                Pixel(Point::new(128, 0), BinaryColor::On),
                Pixel(Point::new(0, 64), BinaryColor::On),
            ])
            .unwrap();
        assert!(display.interface().ops.is_empty());
    }

    #[test]
    fn test_clear_uses_page_fill() {
        let mut display = ready_display();
        display.clear(BinaryColor::On).unwrap();
        assert!(display.buffer().iter().all(|b| *b == 0xFF));
        assert_eq!(display.interface().data_writes(), 8);

        display.clear(BinaryColor::Off).unwrap();
        assert!(display.buffer().iter().all(|b| *b == 0x00));
    }

    #[test]
    fn test_line_matches_native_line() {
        let mut native = ready_display();
        native.draw_line(0, 0, 40, 40).unwrap();

        let mut styled = ready_display();
        Line::new(Point::new(0, 0), Point::new(40, 40))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut styled)
            .unwrap();

        assert_eq!(native.buffer(), styled.buffer());
    }

    #[test]
    fn test_draw_before_init_fails() {
        let mut display = Display::new(MockInterface::new(), Builder::new().build().unwrap());
        let result = display.draw_iter([Pixel(Point::new(1, 1), BinaryColor::On)]);
        assert!(matches!(result, Err(Error::NotInitialized)));
    }
}
