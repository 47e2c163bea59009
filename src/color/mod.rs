mod mix;
mod palette;
mod utils;

use smart_leds::RGB8;
use smart_leds::hsv::Hsv as HSV;

pub use mix::{MixMode, mix_colors};
pub use palette::{fill_rainbow_palette, fill_scaling_palette};
pub use utils::{blend_colors, hsv2rgb, rgb_from_u32, scale_color};

pub type Rgb = RGB8;
pub type Hsv = HSV;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
pub const YELLOW: Rgb = Rgb { r: 255, g: 255, b: 0 };
pub const CYAN: Rgb = Rgb { r: 0, g: 255, b: 255 };
pub const MAGENTA: Rgb = Rgb { r: 255, g: 0, b: 255 };
pub const ORANGE: Rgb = Rgb { r: 255, g: 128, b: 0 };
pub const PURPLE: Rgb = Rgb { r: 128, g: 0, b: 255 };

/// Six-color rainbow, handy as a default palette
pub const COLORWHEEL: [Rgb; 6] = [RED, ORANGE, YELLOW, GREEN, BLUE, PURPLE];
