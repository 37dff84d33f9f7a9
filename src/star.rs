//! A single independent light source.
//!
//! Each star owns its color and a randomized lifecycle timer, and runs its
//! own update activity. Mutation happens only inside that activity, under
//! the star's own lock; frame composition reads cross the boundary through
//! the same lock. No lock is ever shared between two stars.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::{Duration, Timer};

use crate::color::{Hsv, Rgb};
use crate::config::{FadeMode, SaturationPolicy, TwinkleConfig};
use crate::rng::SplitMix64;
use crate::shutdown::Shutdown;

/// Brightness steps of one smooth-fade lifetime.
const SMOOTH_STEPS: u64 = 100;
const SMOOTH_STEP: f32 = 0.01;

struct StarState {
    color: Hsv,
    lifetime: Duration,
    rng: SplitMix64,
}

/// One independent light source. Created dark; ignites on its first tick.
pub struct Star {
    state: Mutex<RefCell<StarState>>,
    config: TwinkleConfig,
}

impl Star {
    pub const fn new(config: TwinkleConfig, seed: u64) -> Self {
        Self {
            state: Mutex::new(RefCell::new(StarState {
                color: Hsv::BLACK,
                lifetime: Duration::from_ticks(0),
                rng: SplitMix64::new(seed),
            })),
            config,
        }
    }

    /// Current color as a packed pixel. The HSV state is copied under the
    /// star's lock; packing happens outside it.
    pub fn color(&self) -> Rgb {
        critical_section::with(|cs| self.state.borrow(cs).borrow().color).to_pixel()
    }

    /// Re-seed with a fresh random hue, saturation per policy, full value
    /// and a new lifetime drawn from the configured range.
    pub fn ignite(&self) {
        critical_section::with(|cs| {
            let mut state = self.state.borrow(cs).borrow_mut();
            Self::ignite_state(&mut state, &self.config);
        });
    }

    /// Advance one scheduling step and return the sleep before the next.
    ///
    /// Binary mode re-ignites on every step and sleeps the full lifetime;
    /// smooth mode decays value by one step and re-ignites once it reaches
    /// zero, sleeping lifetime/100 between steps. A dark star (fresh or
    /// expired) ignites immediately.
    pub fn tick(&self) -> Duration {
        critical_section::with(|cs| {
            let mut state = self.state.borrow(cs).borrow_mut();
            match self.config.fade {
                FadeMode::Smooth => state.color.v -= SMOOTH_STEP,
                FadeMode::Binary => state.color.v = 0.0,
            }
            if state.color.v <= 0.0 || state.lifetime.as_ticks() == 0 {
                Self::ignite_state(&mut state, &self.config);
            }
            match self.config.fade {
                FadeMode::Smooth => {
                    Duration::from_micros(state.lifetime.as_micros() / SMOOTH_STEPS)
                }
                FadeMode::Binary => state.lifetime,
            }
        })
    }

    /// The star's update activity: loop ticking until shutdown is observed,
    /// then go dark and exit.
    ///
    /// Starts with a random jitter sleep so that N stars do not visibly
    /// synchronize. Cancellation is cooperative; a star mid-sleep observes
    /// it only after the sleep completes.
    pub async fn run(&self, shutdown: &Shutdown) {
        let _active = shutdown.track();

        let jitter = critical_section::with(|cs| {
            let mut state = self.state.borrow(cs).borrow_mut();
            let bound = self.config.ignition_jitter.as_micros();
            Duration::from_micros(state.rng.next_below(bound))
        });
        Timer::after(jitter).await;

        while !shutdown.is_requested() {
            let sleep = self.tick();
            Timer::after(sleep).await;
        }

        // lights off before the final frame
        critical_section::with(|cs| {
            self.state.borrow(cs).borrow_mut().color.v = 0.0;
        });
    }

    fn ignite_state(state: &mut StarState, config: &TwinkleConfig) {
        let saturation = match config.saturation {
            SaturationPolicy::Vivid => 0.5 + 0.5 * state.rng.next_f32(),
            SaturationPolicy::Full => 1.0,
        };
        state.color = Hsv::new(state.rng.next_f32(), saturation, 1.0);

        let span = config
            .lifetime_max
            .as_micros()
            .saturating_sub(config.lifetime_min.as_micros());
        state.lifetime =
            config.lifetime_min + Duration::from_micros(state.rng.next_below(span));
    }
}
