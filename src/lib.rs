#![no_std]

pub mod color;
pub mod config;
pub mod frame_scheduler;
pub mod report;
pub mod rng;
pub mod shutdown;
pub mod sky;
pub mod star;

pub use color::{Hsv, Rgb, hsv_to_rgb};
pub use config::{FadeMode, SaturationPolicy, TwinkleConfig};
pub use frame_scheduler::{DEFAULT_FPS, DEFAULT_FRAME_DURATION, FrameResult, FrameScheduler};
pub use report::{ErrorChannel, ErrorSender};
pub use rng::SplitMix64;
pub use shutdown::Shutdown;
pub use sky::Sky;
pub use star::Star;

pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait; a rejected frame is
/// reported, never retried, and the animation continues at the next tick.
pub trait OutputDriver {
    /// Transmission error reported when a frame is rejected.
    type Error;

    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error>;
}
