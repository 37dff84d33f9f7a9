//! Fixed-rate frame loop.
//!
//! Periodically asks the sky for its current frame and hands it to the
//! output driver. The frame buffer lives here and is mutated by nothing
//! else; the returned slice aliases it and is overwritten on the next
//! frame, matching the driver's draw-and-discard usage. Re-allocating at
//! render cadence (24-60 Hz) against much slower per-star mutation would
//! only churn.

use embassy_time::{Duration, Instant, Timer};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::color::Rgb;
use crate::report::ErrorSender;
use crate::shutdown::Shutdown;
use crate::sky::Sky;

/// Default target frame rate (24 FPS).
pub const DEFAULT_FPS: u32 = 24;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Drives a [`Sky`] at a fixed cadence into an [`OutputDriver`].
///
/// A frame rejected by the driver is reported to the error channel and
/// never retried; the next tick supersedes it.
pub struct FrameScheduler<'a, O: OutputDriver, const N: usize, const ERRORS: usize> {
    output: O,
    sky: &'a Sky<N>,
    errors: ErrorSender<'a, O::Error, ERRORS>,
    frame_buffer: [Rgb; N],
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O: OutputDriver, const N: usize, const ERRORS: usize>
    FrameScheduler<'a, O, N, ERRORS>
{
    /// Create a new frame scheduler at `DEFAULT_FRAME_DURATION` (24 FPS).
    pub fn new(sky: &'a Sky<N>, driver: O, errors: ErrorSender<'a, O::Error, ERRORS>) -> Self {
        Self::with_frame_duration(sky, driver, errors, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with a custom frame duration.
    pub fn with_frame_duration(
        sky: &'a Sky<N>,
        driver: O,
        errors: ErrorSender<'a, O::Error, ERRORS>,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            sky,
            errors,
            frame_buffer: [Rgb::default(); N],
            next_frame: Instant::from_ticks(0),
            frame_duration,
        }
    }

    /// Compose the current frame and return it.
    ///
    /// The slice aliases internal storage reused on every call; consume it
    /// before the next `frame`/`tick`.
    pub fn frame(&mut self) -> &[Rgb; N] {
        self.sky.compose(&mut self.frame_buffer);
        &self.frame_buffer
    }

    /// Process one frame and return timing information.
    ///
    /// Applies drift correction (a stall longer than two frames skips the
    /// backlog instead of replaying it), composes and writes the frame, and
    /// returns the deadline the caller should wait for before the next
    /// `tick`.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let max_drift = 2 * self.frame_duration.as_ticks();
        if now.as_ticks() > self.next_frame.as_ticks() + max_drift {
            self.next_frame = now;
        }

        self.draw();

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_ticks() > now.as_ticks() {
            Duration::from_ticks(self.next_frame.as_ticks() - now.as_ticks())
        } else {
            Duration::from_ticks(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Run the loop until shutdown, then render one final all-dark frame.
    ///
    /// After the shutdown request this waits for every star activity to
    /// exit (each forces its value to zero on the way out) before drawing
    /// the last frame, so the strip visibly powers down instead of freezing
    /// mid-animation. The wait is bounded by the longest pending star
    /// sleep.
    pub async fn run(&mut self, shutdown: &Shutdown) {
        #[cfg(feature = "esp32-log")]
        println!("starfield: frame loop started ({} leds)", N);

        while !shutdown.is_requested() {
            let result = self.tick(Instant::now());
            Timer::after(result.sleep_duration).await;
        }

        #[cfg(feature = "esp32-log")]
        println!("starfield: shutdown requested, waiting for stars");

        shutdown.wait_idle().await;
        self.draw();
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the output driver.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    fn draw(&mut self) {
        self.sky.compose(&mut self.frame_buffer);
        if let Err(err) = self.output.write(&self.frame_buffer) {
            self.errors.report(err);
        }
    }
}
