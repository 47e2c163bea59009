#![no_std]

extern crate alloc;

pub mod animation;
pub mod bitmap;
pub mod canvas;
pub mod color;
pub mod command;
pub mod frame_scheduler;
pub mod interval;
pub mod layout;
pub mod maestro;
pub mod math8;
pub mod overlay;
pub mod pixel;
pub mod rng;
pub mod section;
pub mod show;
pub mod transition;

pub use animation::{Animation, AnimationSlot, AnimationType, Pattern};
pub use bitmap::{Bitmap, BitmapError};
pub use canvas::Canvas;
pub use command::{CommandChannel, CommandReceiver, CommandSender, TryReceiveError, TrySendError};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use layout::{Layout, Offset, Orientation, Point};
pub use maestro::{Maestro, MaestroConfig};
pub use overlay::Overlay;
pub use pixel::Pixel;
pub use section::Section;
pub use show::{Action, Event, SectionId, Show, TimingMode};

pub use color::{Hsv, MixMode, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
