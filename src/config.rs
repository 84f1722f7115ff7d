//! Display configuration types and builder

pub use crate::error::BuilderError;

/// Default electronic volume applied on power-up
pub const DEFAULT_CONTRAST: u8 = 48;

/// LCD bias ratio
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Bias {
    /// 1/9 bias (most 128x64 panels)
    #[default]
    OneNinth,
    /// 1/7 bias
    OneSeventh,
}

/// Display configuration
///
/// Holds the controller register values and power-up timing. Use
/// [`Builder`] to create a Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Mirror the display horizontally (SEG direction reversed)
    pub flip_horizontal: bool,
    /// Mirror the display vertically (COM direction normal)
    pub flip_vertical: bool,
    /// Show inverted pixels
    pub invert: bool,
    /// Electronic volume, 0..=63
    pub contrast: u8,
    /// LCD bias ratio
    pub bias: Bias,
    /// Booster ratio register, 0..=3 (0 = 4x)
    pub booster_ratio: u8,
    /// VLCD resistor ratio, 0..=7
    pub resistor_ratio: u8,
    /// Display start line, 0..=63
    pub start_line: u8,
    /// Hold time for each phase of the hardware reset pulse
    pub reset_delay_ms: u32,
    /// Settling time after display enable
    pub settle_delay_ms: u32,
    /// Duration of the all-points-on pattern shown during power-up
    pub all_points_delay_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            flip_horizontal: false,
            flip_vertical: false,
            invert: false,
            contrast: DEFAULT_CONTRAST,
            bias: Bias::OneNinth,
            booster_ratio: 0,
            resistor_ratio: 3,
            start_line: 0,
            reset_delay_ms: 50,
            settle_delay_ms: 100,
            all_points_delay_ms: 200,
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use uc1701::{Bias, Builder};
///
/// let config = match Builder::new().flip_horizontal(true).bias(Bias::OneSeventh).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert!(config.flip_horizontal);
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirror the display horizontally
    pub fn flip_horizontal(mut self, value: bool) -> Self {
        self.config.flip_horizontal = value;
        self
    }

    /// Mirror the display vertically
    pub fn flip_vertical(mut self, value: bool) -> Self {
        self.config.flip_vertical = value;
        self
    }

    /// Rotate the display by 180 degrees (flip both axes)
    pub fn flip_180(self, value: bool) -> Self {
        self.flip_horizontal(value).flip_vertical(value)
    }

    /// Invert pixel polarity
    pub fn invert(mut self, value: bool) -> Self {
        self.config.invert = value;
        self
    }

    /// Set the power-up contrast (clamped to 63)
    pub fn contrast(mut self, value: u8) -> Self {
        self.config.contrast = value.min(crate::command::MAX_CONTRAST);
        self
    }

    /// Set the LCD bias ratio
    pub fn bias(mut self, value: Bias) -> Self {
        self.config.bias = value;
        self
    }

    /// Set the booster ratio register (0..=3)
    pub fn booster_ratio(mut self, value: u8) -> Self {
        self.config.booster_ratio = value;
        self
    }

    /// Set the VLCD resistor ratio (0..=7)
    pub fn resistor_ratio(mut self, value: u8) -> Self {
        self.config.resistor_ratio = value;
        self
    }

    /// Set the display start line (0..=63)
    pub fn start_line(mut self, value: u8) -> Self {
        self.config.start_line = value;
        self
    }

    /// Set the reset pulse hold time
    pub fn reset_delay_ms(mut self, value: u32) -> Self {
        self.config.reset_delay_ms = value;
        self
    }

    /// Set the settling time after display enable
    pub fn settle_delay_ms(mut self, value: u32) -> Self {
        self.config.settle_delay_ms = value;
        self
    }

    /// Set how long the all-points-on pattern is held during power-up
    pub fn all_points_delay_ms(mut self, value: u32) -> Self {
        self.config.all_points_delay_ms = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns a [`BuilderError`] if a register value does not fit its field.
    pub fn build(self) -> Result<Config, BuilderError> {
        let config = self.config;
        if config.booster_ratio > 3 {
            return Err(BuilderError::InvalidBoosterRatio(config.booster_ratio));
        }
        if config.resistor_ratio > 7 {
            return Err(BuilderError::InvalidResistorRatio(config.resistor_ratio));
        }
        if config.start_line > 63 {
            return Err(BuilderError::InvalidStartLine(config.start_line));
        }
        Ok(config)
    }
}
