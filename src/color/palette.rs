//! Palette generators
//!
//! Fill caller-provided buffers so palettes can live in static memory or
//! in a section's own storage.

use crate::{
    color::{Hsv, Rgb, blend_colors, hsv2rgb},
    math8::progress8,
};

/// Fill `palette` with a linear gradient from `base` towards `target`
///
/// The first entry is `base`; the last entry stops one step short of
/// `target` so that a cycling animation wraps back to `base` smoothly.
/// With `reverse` the second half of the palette walks back to `base`,
/// producing a seamless there-and-back loop.
#[allow(clippy::cast_possible_truncation)]
pub fn fill_scaling_palette(palette: &mut [Rgb], base: Rgb, target: Rgb, reverse: bool) {
    let len = palette.len();
    if len == 0 {
        return;
    }

    let span = if reverse { len.div_ceil(2) } else { len };
    for (index, color) in palette.iter_mut().enumerate() {
        let position = if index < span { index } else { len - index };
        let amount = progress8(position as u32, span as u32);
        *color = blend_colors(base, target, amount);
    }
}

/// Fill `palette` with evenly spaced hues around the color wheel
#[allow(clippy::cast_possible_truncation)]
pub fn fill_rainbow_palette(palette: &mut [Rgb], start_hue: u8, sat: u8, val: u8) {
    let len = palette.len();
    if len == 0 {
        return;
    }

    for (index, color) in palette.iter_mut().enumerate() {
        let offset = ((index * 256) / len) as u8;
        *color = hsv2rgb(Hsv {
            hue: start_hue.wrapping_add(offset),
            sat,
            val,
        });
    }
}
