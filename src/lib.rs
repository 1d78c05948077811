//! Paint a NeoPixel-style (WS2812, GRB) LED strip a single color.
//!
//! Pick a color with [`color::hsv`] or [`color::rgb`], then hand the packed value to
//! [`LedStrip::set_color`](led_strip::LedStrip::set_color), which fills every pixel and
//! flushes the frame to the hardware.
//!
//! # Glossary
//!
//! - **Packed color:** a `u32` laid out as `0x00RRGGBB`. The high byte is unused.
//! - **Pixel slot:** one LED's stored color inside a [`Frame1d`](led_strip::Frame1d).
//! - **Show:** transmitting the whole frame to the strip over the one-wire protocol.
//! - **PIO ([Programmable I/O](https://medium.com/data-science/nine-pico-pio-wats-with-rust-part-1-9d062067dc25)):**
//!   the Pico block that generates WS2812 timing for `led_strip::PioLedOutput`.
#![cfg_attr(not(any(test, feature = "host")), no_std)]

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

// Must come first so the logging macros are visible to later modules.
#[macro_use]
mod fmt;

pub mod color;
mod error;
pub mod led_strip;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, HardwareFault, Result};
