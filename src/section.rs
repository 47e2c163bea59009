//! Section - an independently animated grid of pixels
//!
//! A section owns its pixels, palette and animation, plus an optional
//! canvas mask and an optional overlay section. Each refresh it updates the
//! overlay and canvas first, then lets the animation pick target colors,
//! then steps every pixel's fade.

use alloc::vec;
use alloc::vec::Vec;

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::{Animation, AnimationType, FadeTiming, Frame};
use crate::canvas::Canvas;
use crate::color::{BLACK, MixMode, Rgb};
use crate::interval::{IntervalHandle, RefreshSource, is_due};
use crate::layout::{Layout, Orientation};
use crate::overlay::Overlay;
use crate::pixel::Pixel;

#[derive(Debug)]
pub struct Section {
    layout: Layout,
    pixels: Vec<Pixel>,
    palette: Vec<Rgb>,
    animation: Option<Animation>,
    canvas: Option<Canvas>,
    overlay: Option<Overlay>,
    refresh: RefreshSource,
    /// Interval set on this section itself
    refresh_override: Option<Duration>,
    last_refresh: Option<Instant>,
}

impl Section {
    /// Create a section of black pixels with no animation
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            pixels: vec![Pixel::default(); layout.size()],
            palette: Vec::new(),
            animation: None,
            canvas: None,
            overlay: None,
            refresh: RefreshSource::default(),
            refresh_override: None,
            last_refresh: None,
        }
    }

    /// Start with `animation`
    #[must_use]
    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = Some(animation);
        self
    }

    /// Start with `colors` as the palette
    #[must_use]
    pub fn with_colors(mut self, colors: &[Rgb]) -> Self {
        self.set_colors(colors);
        self
    }

    /// Grid dimensions
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// Number of pixels in the section
    pub fn size(&self) -> usize {
        self.pixels.len()
    }

    /// All pixels in row-major order
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Pixel at `index`, if in range
    pub fn pixel(&self, index: usize) -> Option<&Pixel> {
        self.pixels.get(index)
    }

    /// Mutable pixel at `index`, if in range
    pub fn pixel_mut(&mut self, index: usize) -> Option<&mut Pixel> {
        self.pixels.get_mut(index)
    }

    /// Index of the pixel at column `x`, row `y`
    pub const fn get_pixel_index(&self, x: u16, y: u16) -> Option<usize> {
        self.layout.index_of(x, y)
    }

    /// Resize the pixel grid
    ///
    /// Pixels restart black. A bound canvas is cleared and reshaped and a
    /// bound overlay is resized along with the section.
    pub fn set_dimensions(&mut self, layout: Layout) {
        #[cfg(feature = "esp32-log")]
        println!("[Section.set_dimensions] {:?} -> {:?}", self.layout, layout);
        self.layout = layout;
        self.pixels.clear();
        self.pixels.resize(layout.size(), Pixel::default());

        if let Some(canvas) = self.canvas.as_mut() {
            canvas.resize(layout);
        }
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.section_mut().set_dimensions(layout);
        }
    }

    /// Colors the animation draws from
    pub fn palette(&self) -> &[Rgb] {
        &self.palette
    }

    /// Replace the palette
    ///
    /// The cycle index is pulled back into range for the new palette.
    pub fn set_colors(&mut self, colors: &[Rgb]) {
        self.palette.clear();
        self.palette.extend_from_slice(colors);
        let num_colors = self.palette.len();
        if let Some(animation) = self.animation.as_mut() {
            animation.set_cycle_index(animation.cycle_index(), num_colors);
        }
    }

    /// Current animation, if any
    pub const fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    /// Mutable access to the current animation
    pub fn animation_mut(&mut self) -> Option<&mut Animation> {
        self.animation.as_mut()
    }

    /// Replace the animation
    ///
    /// The new animation starts at cycle index 0 and steps on the next
    /// refresh. With `preserve_cycle_index` it resumes at the previous
    /// animation's cycle index instead.
    pub fn set_animation(&mut self, mut animation: Animation, preserve_cycle_index: bool) -> &mut Animation {
        let previous = self.animation.as_ref().map(Animation::cycle_index);
        animation.restart();
        if let (true, Some(index)) = (preserve_cycle_index, previous) {
            animation.set_cycle_index(index, self.palette.len());
        }
        self.animation.insert(animation)
    }

    /// Switch the animation type, keeping timing and direction settings
    ///
    /// `None` selects the type after the current one. A section without an
    /// animation gets a fresh one.
    pub fn change_animation(&mut self, kind: Option<AnimationType>, preserve_cycle_index: bool) {
        let num_colors = self.palette.len();
        match self.animation.as_mut() {
            Some(animation) => {
                let kind = kind.unwrap_or_else(|| animation.kind().next());
                animation.set_kind(kind, preserve_cycle_index, num_colors);
            }
            None => {
                self.animation = Some(Animation::new(kind.unwrap_or(AnimationType::Solid)));
            }
        }
    }

    /// Detach the animation; pixels keep their colors
    pub fn remove_animation(&mut self) -> Option<Animation> {
        self.animation.take()
    }

    /// Animation cycle position; 0 without an animation
    pub fn cycle_index(&self) -> usize {
        self.animation.as_ref().map_or(0, Animation::cycle_index)
    }

    /// Jump the animation to a cycle position
    pub fn set_cycle_index(&mut self, index: usize) {
        let num_colors = self.palette.len();
        if let Some(animation) = self.animation.as_mut() {
            animation.set_cycle_index(index, num_colors);
        }
    }

    /// Time between animation cycles
    pub fn cycle_interval(&self) -> Option<Duration> {
        self.animation.as_ref().map(Animation::speed)
    }

    /// Set the time between animation cycles and the pause within each one
    pub fn set_cycle_interval(&mut self, interval: Duration, pause: Duration) {
        if let Some(animation) = self.animation.as_mut() {
            animation.set_speed(interval, pause);
        }
    }

    /// Enable or disable fading between colors
    pub fn set_fade(&mut self, fade: bool) {
        if let Some(animation) = self.animation.as_mut() {
            animation.set_fade(fade);
        }
    }

    /// Flip the fade setting
    pub fn toggle_fade(&mut self) {
        if let Some(animation) = self.animation.as_mut() {
            animation.set_fade(!animation.fade());
        }
    }

    /// Run the animation backwards
    pub fn set_reverse(&mut self, reverse: bool) {
        if let Some(animation) = self.animation.as_mut() {
            animation.set_reverse(reverse);
        }
    }

    /// Axis the animation runs along
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if let Some(animation) = self.animation.as_mut() {
            animation.set_orientation(orientation);
        }
    }

    /// Bound canvas, if any
    pub const fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    /// Mutable access to the bound canvas
    pub fn canvas_mut(&mut self) -> Option<&mut Canvas> {
        self.canvas.as_mut()
    }

    /// Get the canvas, creating a blank one if none is bound
    pub fn add_canvas(&mut self) -> &mut Canvas {
        let layout = self.layout;
        self.canvas.get_or_insert_with(|| Canvas::new(layout))
    }

    /// Bind a canvas, reshaping it (and clearing it) if its size differs
    pub fn set_canvas(&mut self, mut canvas: Canvas) -> &mut Canvas {
        if canvas.layout() != self.layout {
            canvas.resize(self.layout);
        }
        self.canvas.insert(canvas)
    }

    /// Unbind the canvas; every pixel shows again
    pub fn remove_canvas(&mut self) -> Option<Canvas> {
        self.canvas.take()
    }

    /// Bound overlay, if any
    pub const fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    /// Mutable access to the bound overlay
    pub fn overlay_mut(&mut self) -> Option<&mut Overlay> {
        self.overlay.as_mut()
    }

    /// Get the overlay, creating one if none is bound
    ///
    /// A new overlay section takes this section's size and refresh interval.
    /// An existing overlay gets the new mix mode and alpha.
    pub fn add_overlay(&mut self, mix_mode: MixMode, alpha: u8) -> &mut Overlay {
        let layout = self.layout;
        let refresh = self.downstream_refresh();
        let overlay = self.overlay.get_or_insert_with(|| {
            let mut overlay = Overlay::new(layout, mix_mode, alpha);
            overlay.section_mut().inherit_refresh(refresh);
            overlay
        });
        overlay.set_mix_mode(mix_mode);
        overlay.set_alpha(alpha);
        overlay
    }

    /// Unbind the overlay
    pub fn remove_overlay(&mut self) -> Option<Overlay> {
        self.overlay.take()
    }

    /// Time between pixel refreshes
    pub fn refresh_interval(&self) -> Duration {
        self.refresh_override.unwrap_or_else(|| self.refresh.get())
    }

    /// Override the refresh interval for this section
    ///
    /// Overlay sections without an override of their own follow it. The
    /// override survives binding the section to a Maestro.
    pub fn set_refresh_interval(&mut self, interval: Duration) {
        self.refresh_override = Some(interval);
        self.pass_refresh_down();
    }

    /// Drop the override and follow the inherited interval again
    pub fn clear_refresh_interval(&mut self) {
        self.refresh_override = None;
        self.pass_refresh_down();
    }

    /// Check if the refresh interval is set on this section itself
    pub const fn has_refresh_override(&self) -> bool {
        self.refresh_override.is_some()
    }

    /// Follow a shared interval wherever no override is set
    pub(crate) fn bind_refresh(&mut self, handle: &IntervalHandle) {
        self.inherit_refresh(RefreshSource::Shared(handle.clone()));
    }

    fn inherit_refresh(&mut self, source: RefreshSource) {
        self.refresh = source;
        self.pass_refresh_down();
    }

    fn pass_refresh_down(&mut self) {
        let source = self.downstream_refresh();
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.section_mut().inherit_refresh(source);
        }
    }

    /// Source an overlay section follows
    fn downstream_refresh(&self) -> RefreshSource {
        match self.refresh_override {
            Some(interval) => RefreshSource::Local(interval),
            None => self.refresh.clone(),
        }
    }

    fn fade_timing(&self) -> FadeTiming {
        let tick = self.refresh_interval();
        match self.animation.as_ref() {
            Some(animation) => FadeTiming {
                enabled: animation.fade(),
                duration: animation.fade_duration(),
                tick,
            },
            None => FadeTiming {
                enabled: false,
                duration: Duration::from_millis(0),
                tick,
            },
        }
    }

    /// Set one pixel to move to `color`; out-of-range indices are ignored
    pub fn set_one(&mut self, index: usize, color: Rgb) {
        let fade = self.fade_timing();
        if let Some(pixel) = self.pixels.get_mut(index) {
            pixel.set_next_color(color, fade.enabled, fade.duration, fade.tick);
        }
    }

    /// Set the pixel at column `x`, row `y`; points outside the grid are ignored
    pub fn set_point(&mut self, x: u16, y: u16, color: Rgb) {
        if let Some(index) = self.layout.index_of(x, y) {
            self.set_one(index, color);
        }
    }

    /// Set every pixel to move to `color`
    pub fn set_all(&mut self, color: Rgb) {
        let fade = self.fade_timing();
        for pixel in &mut self.pixels {
            pixel.set_next_color(color, fade.enabled, fade.duration, fade.tick);
        }
    }

    /// Final color of a pixel after canvas masking and overlay mixing
    ///
    /// Out-of-range indices read as black. Reading never changes pixel state.
    pub fn get_pixel_color(&self, index: usize) -> Rgb {
        if let Some(canvas) = self.canvas.as_ref() {
            if !canvas.is_lit(index) {
                return BLACK;
            }
        }

        let Some(pixel) = self.pixels.get(index) else {
            return BLACK;
        };

        match self.overlay.as_ref() {
            Some(overlay) => overlay.mix(pixel.color(), index),
            None => pixel.color(),
        }
    }

    /// Main update routine
    pub fn update(&mut self, now: Instant) {
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.section_mut().update(now);
        }
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.update(now);
        }

        if !is_due(self.last_refresh, now, self.refresh_interval()) {
            return;
        }
        self.last_refresh = Some(now);

        let fade = self.fade_timing();
        if let Some(animation) = self.animation.as_mut() {
            let mut frame = Frame::new(self.layout, &mut self.pixels, &self.palette, fade);
            animation.update(now, &mut frame);
        }

        for pixel in &mut self.pixels {
            pixel.update();
        }
    }
}
