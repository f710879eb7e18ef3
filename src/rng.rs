//! Deterministic pseudo-random stream.
//!
//! Every randomized behavior (dithering, blinking, flame jitter) owns its own
//! stream so tests can seed each component explicitly and replay a run
//! bit-for-bit.

/// SplitMix64 generator.
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform value in `[0, bound)`. Returns 0 when `bound` is 0.
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        (self.next_u64() % u64::from(bound)) as u32
    }

    /// Uniform value in `[low, high]` (inclusive).
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn next_inclusive(&mut self, low: i32, high: i32) -> i32 {
        debug_assert!(low <= high);
        let span = (high - low + 1) as u32;
        low + self.next_below(span) as i32
    }
}
