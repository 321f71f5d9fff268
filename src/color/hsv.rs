//! Integer HSV to RGB conversion
//!
//! Hue is expressed in degrees (0-359) rather than the 0-255 circle used by
//! `smart_leds::hsv`, and every intermediate term is kept as an 8-bit value so
//! the output matches the reference APA102 rainbow byte for byte.

use super::Rgb;

/// Width of one hue sextant in degrees
const HUE_SEXTANT: u16 = 60;

/// Convert a hue in degrees, saturation and value into an RGB color.
///
/// # Arguments
/// * `hue` - Hue in degrees, expected in `0..360`; larger values fold back
///   through the sextant selection
/// * `sat` - Saturation (0-255)
/// * `val` - Value (0-255)
#[allow(clippy::cast_possible_truncation)]
pub fn hsv_to_rgb(hue: u16, sat: u8, val: u8) -> Rgb {
    let s = u32::from(sat);
    let v = u32::from(val);

    let f = (u32::from(hue % HUE_SEXTANT) * 255 / u32::from(HUE_SEXTANT)) as u8;
    let p = ((255 - s) * v / 255) as u8;
    let q = ((255 - u32::from(f) * s / 255) * v / 255) as u8;
    let t = ((255 - (255 - u32::from(f)) * s / 255) * v / 255) as u8;

    let (r, g, b) = match (hue / HUE_SEXTANT) % 6 {
        0 => (val, t, p),
        1 => (q, val, p),
        2 => (p, val, t),
        3 => (p, q, val),
        4 => (t, p, val),
        _ => (val, p, q),
    };

    Rgb { r, g, b }
}
