//! UC1701 LCD Driver
//!
//! A driver for the UC1701 controller driving 128x64 monochrome LCD panels
//! over 4-wire SPI.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - On-chip mirror of display RAM with per-byte write suppression
//! - Fixed-width text in three sizes, with normal and inverted rendering
//! - Lines and 16x16 tiles with rotation and mirroring
//! - Power up/down, contrast, orientation and backlight control
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use uc1701::{Builder, Display, Interface};
//!
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
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, rst);
//! let config = match Builder::new().flip_180(true).contrast(40).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.init(&mut delay);
//! let _ = display.set_pixel(10, 20, true);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// UC1701 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Text, line and tile drawing
pub mod draw;
/// Error types for the driver
pub mod error;
/// Fixed-width bitmap fonts
pub mod font;
/// Display RAM geometry and mirror
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;
/// 16x16 tiles and transforms
pub mod tile;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

#[cfg(test)]
mod mock;

pub use config::{Bias, Builder, Config, DEFAULT_CONTRAST};
pub use display::{Display, PowerState};
pub use error::{BuilderError, Error};
pub use font::{Font, FontSize};
pub use framebuffer::{BUFFER_SIZE, HEIGHT, PAGES, WIDTH};
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, Interface, NoBacklight, RESET_PULSE_MS};
pub use tile::{TILE_SIZE, Tile, TileTransform};
