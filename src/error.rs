//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! Range and state checks run before anything is sent, so an `Err` other
//! than [`Error::Interface`] means the device saw no traffic.
//!
//! ## Example
//!
//! ```
//! use uc1701::{Builder, BuilderError};
//!
//! let result = Builder::new().resistor_ratio(9).build();
//! assert!(matches!(result, Err(BuilderError::InvalidResistorRatio(9))));
//! ```

use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// The display has not been initialized, or has been shut down
    NotInitialized,
    /// Cursor position outside the display RAM
    PositionOutOfRange {
        /// Column
        x: u16,
        /// Page row
        page: u16,
    },
    /// Pixel coordinates outside the display
    PixelOutOfRange {
        /// X coordinate
        x: u16,
        /// Y coordinate
        y: u16,
    },
    /// Block write that is empty or runs past the end of display RAM
    InvalidBlockLength {
        /// Cursor offset the write would start at
        offset: usize,
        /// Requested length in bytes
        len: usize,
    },
    /// Text start column lies beyond the right edge of the display
    TextDoesNotFit {
        /// Start column
        x: u16,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::NotInitialized => write!(f, "Display not initialized"),
            Self::PositionOutOfRange { x, page } => {
                write!(f, "Position out of range: x={x}, page={page}")
            }
            Self::PixelOutOfRange { x, y } => write!(f, "Pixel out of range: x={x}, y={y}"),
            Self::InvalidBlockLength { offset, len } => {
                write!(f, "Invalid block write: {len} bytes at offset {offset}")
            }
            Self::TextDoesNotFit { x } => write!(f, "Text does not fit at column {x}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Booster ratio register must be 0..=3
    InvalidBoosterRatio(u8),
    /// Resistor ratio must be 0..=7
    InvalidResistorRatio(u8),
    /// Start line must be 0..=63
    InvalidStartLine(u8),
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidBoosterRatio(v) => write!(f, "Invalid booster ratio {v} (max 3)"),
            Self::InvalidResistorRatio(v) => write!(f, "Invalid resistor ratio {v} (max 7)"),
            Self::InvalidStartLine(v) => write!(f, "Invalid start line {v} (max 63)"),
        }
    }
}

impl core::error::Error for BuilderError {}
