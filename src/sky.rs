//! The aggregate star-field.
//!
//! An ordered collection of independently-running stars; index equals
//! physical LED position. The sky itself holds no state beyond the stars:
//! composition samples each star's lock in turn, which keeps the snapshot
//! cost O(N) without a global lock serializing star updates. A frame may
//! therefore contain colors sampled at slightly different instants per
//! pixel; acceptable for a visual animation.

use crate::color::Rgb;
use crate::config::TwinkleConfig;
use crate::rng::SplitMix64;
use crate::shutdown::Shutdown;
use crate::star::Star;

/// A fixed-size field of N stars.
///
/// Each star is driven by its own activity. Spawn one task per star, or
/// join the futures directly:
///
/// ```ignore
/// #[embassy_executor::task(pool_size = LED_COUNT)]
/// async fn star_task(sky: &'static Sky<LED_COUNT>, index: usize) {
///     sky.run_star(index, &SHUTDOWN).await;
/// }
/// ```
pub struct Sky<const N: usize> {
    stars: [Star; N],
}

impl<const N: usize> Sky<N> {
    /// Build N dark stars, deriving an independent random stream for each
    /// from `rng`.
    pub fn new(config: TwinkleConfig, mut rng: SplitMix64) -> Self {
        Self {
            stars: core::array::from_fn(|_| Star::new(config, rng.next_u64())),
        }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn star(&self, index: usize) -> &Star {
        &self.stars[index]
    }

    /// Sample every star into `frame`, in index order.
    pub fn compose(&self, frame: &mut [Rgb; N]) {
        for (led, star) in frame.iter_mut().zip(&self.stars) {
            *led = star.color();
        }
    }

    /// Drive the star at `index` until shutdown is observed.
    pub async fn run_star(&self, index: usize, shutdown: &Shutdown) {
        self.stars[index].run(shutdown).await;
    }
}
