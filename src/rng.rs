//! Small deterministic PRNG for lifecycle randomization.
//!
//! SplitMix64: two multiply-xorshift rounds per output. Not cryptographic,
//! just cheap uncorrelated streams that can be seeded for reproducible
//! tests. The production default seeds from the monotonic clock.

use embassy_time::Instant;

#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seed from the monotonic clock. Production default.
    pub fn from_clock() -> Self {
        Self::new(Instant::now().as_micros() ^ 0x9e37_79b9_7f4a_7c15)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform f32 in [0, 1), using the top 24 bits of the next output.
    #[allow(clippy::cast_precision_loss)]
    pub fn next_f32(&mut self) -> f32 {
        ((self.next_u64() >> 40) as f32) * (1.0 / 16_777_216.0)
    }

    /// Uniform u64 in [0, bound). Returns 0 when `bound` is 0.
    pub fn next_below(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        self.next_u64() % bound
    }
}
