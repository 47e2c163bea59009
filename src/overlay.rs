//! Overlay - a section mixed on top of another

use alloc::boxed::Box;

use crate::color::{MixMode, Rgb, mix_colors};
use crate::layout::Layout;
use crate::section::Section;

/// A secondary section composited on top of its owner
///
/// The inner section animates on its own; the owner only reads its
/// composited colors and mixes them with its own.
#[derive(Debug)]
pub struct Overlay {
    section: Box<Section>,
    mix_mode: MixMode,
    /// Opacity, 0 (transparent) to 255 (opaque)
    alpha: u8,
}

impl Overlay {
    /// Create an overlay over a blank section of `layout` size
    pub fn new(layout: Layout, mix_mode: MixMode, alpha: u8) -> Self {
        Self {
            section: Box::new(Section::new(layout)),
            mix_mode,
            alpha,
        }
    }

    /// Inner section
    pub fn section(&self) -> &Section {
        &self.section
    }

    /// Mutable access to the inner section
    pub fn section_mut(&mut self) -> &mut Section {
        &mut self.section
    }

    /// How the overlay color is combined with the base
    pub const fn mix_mode(&self) -> MixMode {
        self.mix_mode
    }

    /// Change how the overlay color is combined with the base
    pub fn set_mix_mode(&mut self, mix_mode: MixMode) {
        self.mix_mode = mix_mode;
    }

    /// Opacity used by the alpha mix
    pub const fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Set the opacity, 0 (transparent) to 255 (opaque)
    pub fn set_alpha(&mut self, alpha: u8) {
        self.alpha = alpha;
    }

    /// Mix `base` with this overlay's color at `index`
    pub fn mix(&self, base: Rgb, index: usize) -> Rgb {
        if self.mix_mode == MixMode::None {
            return base;
        }
        mix_colors(base, self.section.get_pixel_color(index), self.mix_mode, self.alpha)
    }
}
