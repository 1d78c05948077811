//! A device abstraction that paints a NeoPixel-style (WS2812) LED strip one color.
//!
//! [`LedStrip`] owns the pixel buffer and the hardware output. It is the only thing
//! that writes pixels or flushes them to the strip.
//!
//! # Example: Paint the Strip Orange
//!
//! Any [`smart_leds::SmartLedsWrite`] driver can be the output. Here a driver that
//! drops every frame stands in for real hardware.
//!
//! ```
//! use strip_envoy::{Result, color::{Rgb, hsv}, led_strip::{LedStrip, SmartLedsOutput}};
//!
//! struct Discard;
//!
//! impl smart_leds::SmartLedsWrite for Discard {
//!     type Error = core::convert::Infallible;
//!     type Color = Rgb;
//!
//!     fn write<T, I>(&mut self, iterator: T) -> core::result::Result<(), Self::Error>
//!     where
//!         T: IntoIterator<Item = I>,
//!         I: Into<Self::Color>,
//!     {
//!         iterator.into_iter().for_each(drop);
//!         Ok(())
//!     }
//! }
//!
//! fn example() -> Result<()> {
//!     let mut led_strip: LedStrip<_> = LedStrip::new(SmartLedsOutput::new(Discard));
//!     led_strip.init()?;
//!     led_strip.set_color(hsv(30.0, 1.0, 1.0))?;
//!     assert_eq!(led_strip.frame()[0], Rgb::new(255, 127, 0));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

use core::ops::{Deref, DerefMut};

use smart_leds::SmartLedsWrite;

use crate::color::{self, Rgb};
use crate::{Error, HardwareFault, Result};

#[cfg(any(feature = "pico1", feature = "pico2"))]
mod pio_output;

#[cfg(any(feature = "pico1", feature = "pico2"))]
pub use pio_output::PioLedOutput;

/// Number of WS2812 LEDs on the strip unless a [`LedStrip`] says otherwise.
pub const LED_STRIP_LENGTH: usize = 32;

/// [`Rgb`] pixel data for an LED strip.
///
/// Frames deref to `[Rgb; N]`, so pixel slots can be read by index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame1d<const N: usize>(pub [Rgb; N]);

impl<const N: usize> Frame1d<N> {
    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([Rgb::new(0, 0, 0); N])
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub const fn filled(color: Rgb) -> Self {
        Self([color; N])
    }
}

impl<const N: usize> Deref for Frame1d<N> {
    type Target = [Rgb; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for Frame1d<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> Default for Frame1d<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Hardware that turns a frame into light: the one-wire WS2812 encoder.
///
/// Bit timing lives entirely behind this trait. Implementations must return only once
/// the frame has been handed off, since [`LedStrip::set_color`] is synchronous.
pub trait LedOutput<const N: usize> {
    /// Failure reported by the hardware.
    type Error;

    /// Configure the output line and any buffers. Called once by [`LedStrip::init`].
    ///
    /// # Errors
    ///
    /// Returns the hardware's error if the output cannot be brought up.
    fn begin(&mut self) -> core::result::Result<(), Self::Error>;

    /// Transmit every pixel of `frame` to the strip.
    ///
    /// # Errors
    ///
    /// Returns the hardware's error if the transmission fails.
    fn show(&mut self, frame: &Frame1d<N>) -> core::result::Result<(), Self::Error>;
}

/// Use any [`SmartLedsWrite`] driver (SPI, RMT, bit-bang, ...) as an [`LedOutput`].
///
/// These drivers are ready once constructed, so `begin` does nothing.
#[derive(Debug)]
pub struct SmartLedsOutput<W>(W);

impl<W> SmartLedsOutput<W> {
    /// Wrap a `smart_leds` driver.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self(writer)
    }

    /// Recover the wrapped driver.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<W, const N: usize> LedOutput<N> for SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    type Error = W::Error;

    fn begin(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }

    fn show(&mut self, frame: &Frame1d<N>) -> core::result::Result<(), Self::Error> {
        self.0.write(frame.iter().copied())
    }
}

/// An LED strip of `N` pixels painted through an [`LedOutput`].
///
/// Construct it once at startup, call [`init`](Self::init), then pass it to whatever
/// needs to change the color.
///
/// See the [module documentation](mod@crate::led_strip) for example usage.
pub struct LedStrip<O, const N: usize = LED_STRIP_LENGTH> {
    output: O,
    frame: Frame1d<N>,
    ready: bool,
}

impl<O, const N: usize> LedStrip<O, N>
where
    O: LedOutput<N>,
{
    /// Number of LEDs in the strip.
    pub const LEN: usize = N;

    /// Take ownership of the output. Nothing is sent to the hardware until
    /// [`init`](Self::init).
    #[must_use]
    pub const fn new(output: O) -> Self {
        Self {
            output,
            frame: Frame1d::new(),
            ready: false,
        }
    }

    /// Bring up the hardware output. Must run before [`set_color`](Self::set_color).
    ///
    /// Calling it again is a no-op: the output is not restarted and the frame is kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Hardware`] with [`HardwareFault::Begin`] if the output fails to
    /// start. The strip stays uninitialized, so `init` may be retried.
    pub fn init(&mut self) -> Result<()> {
        if self.ready {
            strip_debug!("LedStrip::init: already initialized");
            return Ok(());
        }
        self.output.begin().map_err(|_| {
            strip_warn!("LedStrip::init: output failed to begin");
            Error::Hardware(HardwareFault::Begin)
        })?;
        self.ready = true;
        strip_info!("LedStrip::init: {} LEDs ready", N);
        Ok(())
    }

    /// Set every pixel to the packed `0x00RRGGBB` color, then show the frame.
    ///
    /// Pixels are all updated before the single flush, so the strip never shows a
    /// partial frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInitialized`] before [`init`](Self::init), and
    /// [`Error::Hardware`] with [`HardwareFault::Show`] if the transmission fails.
    /// In the latter case the frame already holds the new color.
    pub fn set_color(&mut self, color: u32) -> Result<()> {
        if !self.ready {
            return Err(Error::NotInitialized);
        }
        let pixel = color::unpack(color);
        self.frame.fill(pixel);
        strip_trace!("LedStrip::set_color: {:#x}", color);
        self.output.show(&self.frame).map_err(|_| {
            strip_warn!("LedStrip::set_color: output failed to show");
            Error::Hardware(HardwareFault::Show)
        })
    }

    /// The pixel slots as last written.
    #[must_use]
    pub const fn frame(&self) -> &Frame1d<N> {
        &self.frame
    }

    /// Whether [`init`](Self::init) has succeeded.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    /// Borrow the hardware output.
    #[must_use]
    pub const fn output(&self) -> &O {
        &self.output
    }

    /// Give back the hardware output.
    #[must_use]
    pub fn into_output(self) -> O {
        self.output
    }
}
