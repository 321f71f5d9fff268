mod hsv;

use smart_leds::RGB8;

pub use hsv::hsv_to_rgb;

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
