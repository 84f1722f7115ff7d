//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the UC1701 controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The UC1701 requires:
//! - SPI bus (MOSI + SCK, chip select handled by the [`SpiDevice`])
//! - 2 or 3 GPIO outputs:
//!   - **DC**: Data/Command select (low=command, high=data)
//!   - **RST**: Reset (active low)
//!   - **LED**: Backlight (optional, active high)
//!
//! ## Example
//!
//! ```rust,no_run
//! use uc1701::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! // Interface with a backlight pin
//! let mut interface = Interface::with_backlight(MockSpi, MockPin, MockPin, MockPin);
//!
//! // Display on
//! let _ = interface.send_command(0xAF);
//!
//! // Pixel data at the current cursor
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//!
//! let _ = interface.set_backlight(true);
//! ```

use core::convert::Infallible;
use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error as _, ErrorKind, ErrorType, OutputPin};
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Length of the low phase of the hardware reset pulse
pub const RESET_PULSE_MS: u32 = 5;

/// Trait for hardware interface to the UC1701 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation that satisfies embedded-hal traits.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. Implement this
/// trait yourself for other transports (parallel bus, a bit-banged port,
/// a recording mock in tests).
pub trait DisplayInterface {
    /// Error type for interface operations
    type Error: Debug;

    /// Send a single command byte with DC low
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send a run of command bytes with DC low
    ///
    /// The default implementation sends them one at a time.
    fn send_commands(&mut self, commands: &[u8]) -> InterfaceResult<(), Self::Error> {
        for &command in commands {
            self.send_command(command)?;
        }
        Ok(())
    }

    /// Send display data bytes with DC high
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Pulse the reset line
    ///
    /// The implementation must hold RST high for `hold_ms`, drive it low for
    /// at least [`RESET_PULSE_MS`], then release it high.
    fn reset<D: DelayNs>(&mut self, delay: &mut D, hold_ms: u32)
    -> InterfaceResult<(), Self::Error>;

    /// Switch the backlight, if one is wired
    fn set_backlight(&mut self, on: bool) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// DC or RST pin error
    Pin(PinErr),
    /// Backlight pin error
    Backlight(ErrorKind),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
            Self::Backlight(kind) => write!(f, "Backlight pin error: {kind:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Placeholder for boards without a backlight control line
#[derive(Clone, Copy, Debug, Default)]
pub struct NoBacklight;

impl ErrorType for NoBacklight {
    type Error = Infallible;
}

impl OutputPin for NoBacklight {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Hardware interface implementation for UC1701
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
/// * `BL` - Backlight pin implementing [`OutputPin`], or [`NoBacklight`]
pub struct Interface<SPI, DC, RST, BL = NoBacklight> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
    /// Backlight pin (active high)
    backlight: BL,
}

impl<SPI, DC, RST> Interface<SPI, DC, RST, NoBacklight>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create an interface without backlight control
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self {
            spi,
            dc,
            rst,
            backlight: NoBacklight,
        }
    }
}

impl<SPI, DC, RST, BL> Interface<SPI, DC, RST, BL>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    BL: OutputPin,
{
    /// Create an interface that also drives a backlight pin
    pub fn with_backlight(spi: SPI, dc: DC, rst: RST, backlight: BL) -> Self {
        Self {
            spi,
            dc,
            rst,
            backlight,
        }
    }

    /// Give back the SPI device and pins
    pub fn release(self) -> (SPI, DC, RST, BL) {
        (self.spi, self.dc, self.rst, self.backlight)
    }
}

impl<SPI, DC, RST, BL, PinErr> DisplayInterface for Interface<SPI, DC, RST, BL>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    BL: OutputPin,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.send_commands(&[command])
    }

    fn send_commands(&mut self, commands: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(commands).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(data).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn reset<D: DelayNs>(
        &mut self,
        delay: &mut D,
        hold_ms: u32,
    ) -> InterfaceResult<(), Self::Error> {
        // HIGH -> hold -> LOW -> pulse -> HIGH
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(hold_ms);
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_PULSE_MS);
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        Ok(())
    }

    fn set_backlight(&mut self, on: bool) -> InterfaceResult<(), Self::Error> {
        let result = if on {
            self.backlight.set_high()
        } else {
            self.backlight.set_low()
        };
        result.map_err(|e| InterfaceError::Backlight(e.kind()))
    }
}
