use crate::{
    color::{Rgb, blend_colors},
    math8::mul8,
};

/// How an overlay color is combined with the color underneath it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MixMode {
    /// Ignore the overlay, keep the base color
    None,
    /// Linear blend: `base * (1 - alpha) + overlay * alpha`
    #[default]
    Alpha,
    /// Channel-wise product of both colors, blended in by alpha
    Multiply,
    /// The overlay color replaces the base color entirely
    Replace,
}

/// Combine `base` and `overlay` using `mode`
///
/// `alpha` maps 0-255 onto 0.0-1.0 and is ignored by [`MixMode::None`] and
/// [`MixMode::Replace`].
pub fn mix_colors(base: Rgb, overlay: Rgb, mode: MixMode, alpha: u8) -> Rgb {
    match mode {
        MixMode::None => base,
        MixMode::Alpha => blend_colors(base, overlay, alpha),
        MixMode::Multiply => {
            let product = Rgb {
                r: mul8(base.r, overlay.r),
                g: mul8(base.g, overlay.g),
                b: mul8(base.b, overlay.b),
            };
            blend_colors(base, product, alpha)
        }
        MixMode::Replace => overlay,
    }
}
