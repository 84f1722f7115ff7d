//! UC1701 command definitions
//!
//! Every UC1701 instruction is sent over SPI with the DC pin low. Commands
//! that carry a parameter either OR it into the opcode (page address,
//! column nibbles, start line) or expect it as the following command byte
//! (contrast, booster ratio, static indicator).
//!
//! Pixel data is sent with DC high and lands at the current page/column
//! address, which auto-increments by one column per byte.
//!
//! ## Example
//!
//! ```
//! use uc1701::command;
//!
//! // Position the write cursor at column 0x2A of page 3
//! assert_eq!(command::position(0x2A, 3), [0xB3, 0x12, 0x0A]);
//!
//! // Contrast is clamped to the 6-bit electronic volume range
//! assert_eq!(command::contrast(200), [command::SET_CONTRAST, 63]);
//! ```

use crate::config::{Bias, Config};

// System control

/// System reset (0xE2)
pub const SYSTEM_RESET: u8 = 0xE2;

/// Set display start line (0x40 | line), line in 0..=63
pub const SET_START_LINE: u8 = 0x40;

/// SEG direction normal (0xA0)
pub const SEG_DIRECTION_NORMAL: u8 = 0xA0;

/// SEG direction reversed (0xA1), mirrors the display horizontally
pub const SEG_DIRECTION_REVERSE: u8 = 0xA1;

/// COM direction normal (0xC0)
pub const COM_DIRECTION_NORMAL: u8 = 0xC0;

/// COM direction reversed (0xC8)
///
/// The panel's default orientation scans COM in reverse; selecting
/// [`COM_DIRECTION_NORMAL`] flips it vertically.
pub const COM_DIRECTION_REVERSE: u8 = 0xC8;

/// LCD bias 1/9 (0xA2)
pub const BIAS_1_9: u8 = 0xA2;

/// LCD bias 1/7 (0xA3)
pub const BIAS_1_7: u8 = 0xA3;

// Power control

/// Power control: booster on (0x2C)
pub const POWER_BOOST_ON: u8 = 0x2C;

/// Power control: booster and regulator on (0x2E)
pub const POWER_REGULATOR_ON: u8 = 0x2E;

/// Power control: booster, regulator and follower on (0x2F)
pub const POWER_FOLLOWER_ON: u8 = 0x2F;

/// Set booster ratio (0xF8), followed by the ratio byte
pub const SET_BOOSTER_RATIO: u8 = 0xF8;

/// Set VLCD resistor ratio (0x20 | ratio), ratio in 0..=7
pub const SET_RESISTOR_RATIO: u8 = 0x20;

/// Set electronic volume (0x81), followed by the level 0..=63
pub const SET_CONTRAST: u8 = 0x81;

/// Highest electronic volume level
pub const MAX_CONTRAST: u8 = 63;

/// Static indicator off (0xAC), followed by 0x00
pub const STATIC_INDICATOR_OFF: u8 = 0xAC;

// Display control

/// Normal (non-inverted) display (0xA6)
pub const INVERSE_OFF: u8 = 0xA6;

/// Inverted display (0xA7)
pub const INVERSE_ON: u8 = 0xA7;

/// Show RAM contents (0xA4)
pub const ALL_POINTS_OFF: u8 = 0xA4;

/// Turn every pixel on regardless of RAM (0xA5)
pub const ALL_POINTS_ON: u8 = 0xA5;

/// Display enable (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

/// Display disable / sleep (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

// Addressing

/// Set page address (0xB0 | page)
pub const SET_PAGE: u8 = 0xB0;

/// Set column address high nibble (0x10 | (x >> 4))
pub const SET_COLUMN_HIGH: u8 = 0x10;

/// Set column address low nibble (0x00 | (x & 0x0F))
pub const SET_COLUMN_LOW: u8 = 0x00;

/// Number of bytes in [`power_up_sequence`]
pub const POWER_UP_LEN: usize = 17;

/// Commands that move the write cursor to column `x` of `page`
///
/// Arguments are masked to their field widths; range checking is the
/// caller's job.
pub const fn position(x: u8, page: u8) -> [u8; 3] {
    [
        SET_PAGE | (page & 0x0F),
        SET_COLUMN_HIGH | ((x >> 4) & 0x0F),
        SET_COLUMN_LOW | (x & 0x0F),
    ]
}

/// Contrast command pair, clamping `level` to [`MAX_CONTRAST`]
pub fn contrast(level: u8) -> [u8; 2] {
    [SET_CONTRAST, level.min(MAX_CONTRAST)]
}

/// SEG direction opcode for the horizontal flip setting
pub const fn seg_direction(flip_horizontal: bool) -> u8 {
    if flip_horizontal {
        SEG_DIRECTION_REVERSE
    } else {
        SEG_DIRECTION_NORMAL
    }
}

/// COM direction opcode for the vertical flip setting
pub const fn com_direction(flip_vertical: bool) -> u8 {
    if flip_vertical {
        COM_DIRECTION_NORMAL
    } else {
        COM_DIRECTION_REVERSE
    }
}

/// Inverse display opcode
pub const fn inverse(invert: bool) -> u8 {
    if invert { INVERSE_ON } else { INVERSE_OFF }
}

/// Controller setup sequence sent on power-up
///
/// Ends with display enable. The all-points test pattern and the settling
/// delays around it are issued separately by
/// [`Display::power_up`](crate::Display::power_up).
pub fn power_up_sequence(config: &Config) -> [u8; POWER_UP_LEN] {
    let bias = match config.bias {
        Bias::OneNinth => BIAS_1_9,
        Bias::OneSeventh => BIAS_1_7,
    };
    let [contrast_cmd, contrast_level] = contrast(config.contrast);
    [
        SYSTEM_RESET,
        SET_START_LINE | (config.start_line & 0x3F),
        seg_direction(config.flip_horizontal),
        com_direction(config.flip_vertical),
        bias,
        POWER_BOOST_ON,
        POWER_REGULATOR_ON,
        POWER_FOLLOWER_ON,
        SET_BOOSTER_RATIO,
        config.booster_ratio & 0x03,
        SET_RESISTOR_RATIO | (config.resistor_ratio & 0x07),
        contrast_cmd,
        contrast_level,
        STATIC_INDICATOR_OFF,
        0x00,
        inverse(config.invert),
        DISPLAY_ON,
    ]
}
