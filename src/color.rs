//! Pack HSV and RGB colors into the `0x00RRGGBB` layout that
//! [`LedStrip::set_color`](crate::led_strip::LedStrip::set_color) takes.
//!
//! Channels are floats nominally in `0.0..=1.0` and are never validated or clamped.
//! Each one is scaled by 255 and truncated toward zero, so `0.999` packs to `254`,
//! not `255`. A channel outside the nominal range wraps inside its own byte.
//!
//! ```
//! use strip_envoy::color::{hsv, rgb, unpack};
//!
//! assert_eq!(rgb(1.0, 0.0, 0.0), 0x00FF_0000);
//! assert_eq!(hsv(240.0, 1.0, 1.0), rgb(0.0, 0.0, 1.0));
//! assert_eq!(unpack(0x0012_3456), strip_envoy::color::Rgb::new(0x12, 0x34, 0x56));
//! ```

/// Predefined RGB color constants from the `smart_leds` crate.
#[doc(inline)]
pub use smart_leds::colors;

/// RGB color representation re-exported from the `smart_leds` crate.
pub type Rgb = smart_leds::RGB8;

const CHANNEL_MAX: f32 = 255.0;
const DEGREES_PER_TURN: f32 = 360.0;
const DEGREES_PER_SECTOR: f32 = 60.0;

/// Build a packed color from red, green and blue.
///
/// Matches `(r*255) << 16 | (g*255) << 8 | (b*255)` with C-style truncating casts.
#[must_use]
pub fn rgb(r: f32, g: f32, b: f32) -> u32 {
    (channel_byte(r) << 16) | (channel_byte(g) << 8) | channel_byte(b)
}

/// Build a packed color from hue (degrees), saturation and value.
///
/// Any hue is accepted and wrapped into `[0, 360)` with floor modulo, so `-30.0`
/// and `330.0` give the same color.
#[must_use]
pub fn hsv(h: f32, s: f32, v: f32) -> u32 {
    let h = h - libm::floorf(h / DEGREES_PER_TURN) * DEGREES_PER_TURN;

    let sector_position = h / DEGREES_PER_SECTOR;
    let sector = libm::floorf(sector_position);
    let f = sector_position - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    #[expect(
        clippy::cast_possible_truncation,
        reason = "sector is a whole number; NaN and overflow fall through to the default row"
    )]
    let sector = sector as i32;
    match sector {
        1 => rgb(q, v, p),
        2 => rgb(p, v, t),
        3 => rgb(p, q, v),
        4 => rgb(t, p, v),
        5 => rgb(v, p, q),
        // Sector 0, plus anything rounding pushed out of 0..=5.
        _ => rgb(v, t, p),
    }
}

/// Split a packed color into its red, green and blue bytes. The high byte is ignored.
#[must_use]
pub const fn unpack(color: u32) -> Rgb {
    let [_, r, g, b] = color.to_be_bytes();
    Rgb::new(r, g, b)
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "truncation toward zero and byte wrap are the packing rules"
)]
fn channel_byte(value: f32) -> u32 {
    let scaled = (value * CHANNEL_MAX) as i32;
    (scaled as u32) & 0xFF
}
