//! Uniform random sources for spawn rolls and particle bursts.
//!
//! # Determinism
//!
//! Every implementation here is deterministic: the same seed (or script)
//! always yields the same sequence, so a run can be replayed tick for tick.

/// Produces uniform values in `[0, 1)`.
pub trait RandomSource: Send {
    fn next_f32(&mut self) -> f32;

    /// Uniform integer in `0..bound`. Returns 0 when `bound` is 0.
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        let roll = (self.next_f32() * bound as f32) as u32;
        roll.min(bound - 1)
    }

    /// Uniform value in `[-magnitude, magnitude)`.
    fn symmetric(&mut self, magnitude: f32) -> f32 {
        (self.next_f32() - 0.5) * 2.0 * magnitude
    }

    /// True with probability `p`.
    fn chance(&mut self, p: f32) -> bool {
        self.next_f32() < p
    }
}

/// Seeded PCG-XSH-RR generator (64-bit state, 32-bit output).
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        // Advance once so that nearby seeds diverge on the first draw.
        let mut rng = Self {
            state: seed.wrapping_add(Self::INCREMENT),
        };
        rng.step();
        rng
    }

    /// Current internal state, enough to resume the sequence later.
    pub fn state(&self) -> u64 {
        self.state
    }

    #[inline]
    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
    }

    /// XSH-RR output permutation.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.step();
        Self::output(old)
    }
}

impl Default for PcgRng {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RandomSource for PcgRng {
    fn next_f32(&mut self) -> f32 {
        // 24 high bits fit the f32 mantissa exactly, so the result is < 1.0.
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }
}

/// Adapts any `FnMut() -> f32` closure, e.g. a host-provided generator.
///
/// Values outside `[0, 1)` are clamped into range.
pub struct FnSource<F>(pub F);

impl<F> RandomSource for FnSource<F>
where
    F: FnMut() -> f32 + Send,
{
    fn next_f32(&mut self) -> f32 {
        let value = (self.0)();
        if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, ScriptedRng::MAX_BELOW_ONE)
        }
    }
}

impl<F> core::fmt::Debug for FnSource<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("FnSource(..)")
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// An empty script always yields 0.0.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScriptedRng {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedRng {
    /// Largest f32 strictly below 1.0.
    const MAX_BELOW_ONE: f32 = 1.0 - f32::EPSILON / 2.0;

    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Always returns the same value.
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn next_f32(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, Self::MAX_BELOW_ONE)
    }
}
