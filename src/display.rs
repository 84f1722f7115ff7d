//! Core display operations
//!
//! [`Display`] owns the interface, a [`Framebuffer`] mirror of display RAM
//! and the write cursor. All pixel data reaches the controller through
//! [`Display::write_block`], which keeps the mirror and cursor in step with
//! the controller's auto-incrementing column address.

use embedded_hal::delay::DelayNs;
use log::{debug, trace, warn};

use crate::command::{self, ALL_POINTS_OFF, ALL_POINTS_ON, DISPLAY_OFF};
use crate::config::Config;
use crate::error::Error;
use crate::framebuffer::{BUFFER_SIZE, Framebuffer, PAGES, WIDTH, offset_of, page_of};
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Controller power state
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PowerState {
    /// Display disabled (after [`Display::power_down`] or before init)
    #[default]
    Off,
    /// Display enabled
    On,
}

/// Core display driver for UC1701
///
/// Operations other than [`get_pixel`](Self::get_pixel) and
/// [`buffer`](Self::buffer) fail with [`Error::NotInitialized`] until
/// [`init`](Self::init) succeeds, and again after [`shutdown`](Self::shutdown).
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Copy of display RAM
    framebuffer: Framebuffer,
    /// Mirror offset matching the controller's write address
    cursor: usize,
    /// Whether init completed
    initialized: bool,
    /// Whether the display is enabled
    power: PowerState,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            framebuffer: Framebuffer::new(),
            cursor: 0,
            initialized: false,
            power: PowerState::Off,
        }
    }

    /// Reset the controller, power it up, switch the backlight on and
    /// clear display RAM
    ///
    /// On error the display stays uninitialized.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        debug!("initializing UC1701");
        self.initialized = false;
        self.cursor = 0;
        self.framebuffer = Framebuffer::new();

        let result = self.init_sequence(delay);
        if let Err(ref err) = result {
            warn!("UC1701 init failed: {}", err);
            self.initialized = false;
            self.power = PowerState::Off;
        }
        result
    }

    fn init_sequence<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.interface
            .reset(delay, self.config.reset_delay_ms)
            .map_err(Error::Interface)?;
        self.set_backlight(true)?;
        self.power_up(delay)?;
        self.initialized = true;
        self.fill(0x00)
    }

    /// Switch the backlight off, disable the display and mark the driver
    /// uninitialized
    ///
    /// Does nothing if the display is not initialized. On error the driver
    /// stays initialized so the call can be retried.
    pub fn shutdown(&mut self) -> DisplayResult<I> {
        if !self.initialized {
            return Ok(());
        }
        debug!("shutting down UC1701");
        self.set_backlight(false)?;
        self.power_down()?;
        self.initialized = false;
        Ok(())
    }

    /// Consume the driver and return the interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Send the controller setup sequence and enable the display
    ///
    /// Orientation and contrast come from the current [`Config`]. The
    /// settling delays are unconditional.
    pub fn power_up<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        debug!(
            "powering up UC1701 (flip_h={}, flip_v={}, invert={}, contrast={})",
            self.config.flip_horizontal,
            self.config.flip_vertical,
            self.config.invert,
            self.config.contrast
        );
        self.send_commands(&command::power_up_sequence(&self.config))?;
        delay.delay_ms(self.config.settle_delay_ms);
        self.send_command(ALL_POINTS_ON)?;
        delay.delay_ms(self.config.all_points_delay_ms);
        self.send_command(ALL_POINTS_OFF)?;
        self.power = PowerState::On;
        Ok(())
    }

    /// Disable the display
    ///
    /// Display RAM and the mirror are left untouched.
    pub fn power_down(&mut self) -> DisplayResult<I> {
        debug!("powering down UC1701");
        self.send_command(DISPLAY_OFF)?;
        self.power = PowerState::Off;
        Ok(())
    }

    /// Switch the backlight
    pub fn set_backlight(&mut self, on: bool) -> DisplayResult<I> {
        self.interface.set_backlight(on).map_err(Error::Interface)
    }

    /// Set the electronic volume (0..=63, larger values are clamped)
    ///
    /// The level is also kept in the configuration for the next power-up.
    pub fn set_contrast(&mut self, level: u8) -> DisplayResult<I> {
        if !self.initialized {
            return Err(Error::NotInitialized);
        }
        let [cmd, level] = command::contrast(level);
        debug!("setting contrast to {}", level);
        self.send_commands(&[cmd, level])?;
        self.config.contrast = level;
        Ok(())
    }

    /// Set contrast from a 0..=255 scale
    pub fn set_contrast_scaled(&mut self, level: u8) -> DisplayResult<I> {
        self.set_contrast(level >> 2)
    }

    /// Change mirroring and inversion
    ///
    /// Takes effect on the next [`power_up`](Self::power_up); nothing is
    /// sent now.
    pub fn set_orientation(&mut self, flip_horizontal: bool, flip_vertical: bool, invert: bool) {
        debug!(
            "orientation for next power-up: flip_h={}, flip_v={}, invert={}",
            flip_horizontal, flip_vertical, invert
        );
        self.config.flip_horizontal = flip_horizontal;
        self.config.flip_vertical = flip_vertical;
        self.config.invert = invert;
    }

    /// Move the controller's write address to column `x` of `page`
    ///
    /// # Errors
    ///
    /// Returns `Error::PositionOutOfRange` unless `x < 128` and `page < 8`.
    pub fn set_position(&mut self, x: u16, page: u16) -> DisplayResult<I> {
        if !self.initialized {
            return Err(Error::NotInitialized);
        }
        if x as usize >= WIDTH || page as usize >= PAGES {
            return Err(Error::PositionOutOfRange { x, page });
        }
        trace!("position x={} page={}", x, page);
        self.send_commands(&command::position(x as u8, page as u8))?;
        self.cursor = offset_of(x as usize, page as usize);
        Ok(())
    }

    /// Write display data at the cursor and advance it
    ///
    /// The mirror is updated only once the interface has accepted the bytes,
    /// so a failed transfer leaves mirror and cursor unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidBlockLength` if `data` is empty or would run
    /// past the end of display RAM.
    pub fn write_block(&mut self, data: &[u8]) -> DisplayResult<I> {
        if !self.initialized {
            return Err(Error::NotInitialized);
        }
        let len = data.len();
        if len == 0 || len > BUFFER_SIZE - self.cursor {
            return Err(Error::InvalidBlockLength {
                offset: self.cursor,
                len,
            });
        }
        trace!("block write {} bytes at {}", len, self.cursor);
        self.send_data(data)?;
        self.framebuffer.store(self.cursor, data);
        self.cursor += len;
        Ok(())
    }

    /// Fill display RAM with a repeating byte pattern
    ///
    /// Every page is rewritten, whatever the mirror holds.
    pub fn fill(&mut self, pattern: u8) -> DisplayResult<I> {
        if !self.initialized {
            return Err(Error::NotInitialized);
        }
        let row = [pattern; WIDTH];
        for page in 0..PAGES {
            self.set_position(0, page as u16)?;
            self.write_block(&row)?;
        }
        Ok(())
    }

    /// Set or clear one pixel
    ///
    /// Only bytes that actually change are sent, so repeating a call is free.
    ///
    /// # Errors
    ///
    /// Returns `Error::PixelOutOfRange` if `(x, y)` is off the display.
    pub fn set_pixel(&mut self, x: u16, y: u16, on: bool) -> DisplayResult<I> {
        if !self.initialized {
            return Err(Error::NotInitialized);
        }
        let Some((index, updated)) = self.framebuffer.with_pixel(x as usize, y as usize, on)
        else {
            return Err(Error::PixelOutOfRange { x, y });
        };
        if self.framebuffer.byte(index) == Some(updated) {
            return Ok(());
        }
        self.set_position(x, page_of(y as usize) as u16)?;
        self.write_block(&[updated])
    }

    /// Read one pixel from the mirror
    ///
    /// Returns `false` when uninitialized or off the display.
    pub fn get_pixel(&self, x: u16, y: u16) -> bool {
        self.initialized && self.framebuffer.pixel(x as usize, y as usize)
    }

    /// Read-only view of the mirrored display RAM
    pub fn buffer(&self) -> &[u8; BUFFER_SIZE] {
        self.framebuffer.as_bytes()
    }

    /// Current mirror offset of the controller's write address
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether [`init`](Self::init) has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether the display is enabled
    pub fn power_state(&self) -> PowerState {
        self.power
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Access the underlying interface
    pub fn interface(&self) -> &I {
        &self.interface
    }

    #[cfg(test)]
    pub(crate) fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send a run of commands to the display controller
    fn send_commands(&mut self, cmds: &[u8]) -> DisplayResult<I> {
        self.interface.send_commands(cmds).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }
}
