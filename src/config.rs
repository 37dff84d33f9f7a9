//! Star lifecycle tunables.
//!
//! Everything that was a process-wide flag in earlier firmware is an explicit
//! configuration value here, so independently-configured star-fields can
//! coexist and be tested in isolation.

use embassy_time::Duration;

/// How a star leaves its "on" phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeMode {
    /// Hold full brightness for the whole lifetime, then go dark at once.
    Binary,
    /// Decay brightness in ~100 small steps spread across the lifetime.
    Smooth,
}

/// Saturation drawn at ignition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaturationPolicy {
    /// Uniform in [0.5, 1]; biased away from washed-out colors.
    Vivid,
    /// Fixed at 1.0.
    Full,
}

/// Tunables for star lifecycles.
#[derive(Debug, Clone, Copy)]
pub struct TwinkleConfig {
    pub fade: FadeMode,
    pub saturation: SaturationPolicy,
    /// Shortest lifetime a single ignition can draw.
    pub lifetime_min: Duration,
    /// Longest lifetime a single ignition can draw.
    pub lifetime_max: Duration,
    /// Upper bound of the random startup delay, so that a freshly started
    /// field does not ignite in lockstep.
    pub ignition_jitter: Duration,
}

impl TwinkleConfig {
    /// Smooth fade, 3-10 s lifetimes, vivid colors.
    pub const DEFAULT: Self = Self {
        fade: FadeMode::Smooth,
        saturation: SaturationPolicy::Vivid,
        lifetime_min: Duration::from_secs(3),
        lifetime_max: Duration::from_secs(10),
        ignition_jitter: Duration::from_secs(5),
    };

    /// Slower variant: binary fade, 10-20 s lifetimes, fully saturated.
    pub const SLOW: Self = Self {
        fade: FadeMode::Binary,
        saturation: SaturationPolicy::Full,
        lifetime_min: Duration::from_secs(10),
        lifetime_max: Duration::from_secs(20),
        ignition_jitter: Duration::from_secs(5),
    };
}

impl Default for TwinkleConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
