//! RNG oracle for reproducible random number generation.
//!
//! Every roll in the battle system (accuracy, damage variance, critical hits,
//! enemy move choice, run attempts, level-up growth) goes through an injected
//! [`RngOracle`]. Given the same seed, a battle replays identically.

/// Stateful random source used by all battle and encounter rolls.
pub trait RngOracle {
    /// Generate the next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform float in `[0, 1)`.
    fn next_f32(&mut self) -> f32 {
        // 24 high bits fit exactly in an f32 mantissa.
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform float in `[0, 100)`.
    ///
    /// Common for percentage-based mechanics like accuracy.
    fn roll_percent(&mut self) -> f32 {
        self.next_f32() * 100.0
    }

    /// Returns `true` with the given probability (0-100 scale).
    fn chance(&mut self, percent: f32) -> bool {
        self.roll_percent() < percent
    }

    /// Uniform float in `[min, max]`. Returns `min` when the range is empty.
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        (min + (max - min) * self.next_f32()).min(max)
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = (max - min) as u64 + 1;
        min + (self.next_u32() as u64 % span) as u32
    }

    /// Pick an index with probability proportional to its weight.
    ///
    /// Negative and non-finite weights count as zero. Returns `None` when
    /// there is nothing to pick from, i.e. every weight is zero.
    fn weighted_index(&mut self, weights: &[f32]) -> Option<usize> {
        let sanitized = |w: f32| if w.is_finite() && w > 0.0 { w } else { 0.0 };
        let total: f32 = weights.iter().copied().map(sanitized).sum();
        if total <= 0.0 || !total.is_finite() {
            return None;
        }

        let mut target = self.next_f32() * total;
        let mut last_positive = None;
        for (index, weight) in weights.iter().copied().map(sanitized).enumerate() {
            if weight <= 0.0 {
                continue;
            }
            if target < weight {
                return Some(index);
            }
            target -= weight;
            last_positive = Some(index);
        }
        // Rounding can leave a sliver past the final bucket.
        last_positive
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 64-bit LCG state, 32-bit output through an xorshift and a
/// random rotation.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Create a generator from a seed. Equal seeds give equal sequences.
    pub fn new(seed: u64) -> Self {
        let mut rng = Self { state: 0 };
        rng.state = Self::pcg_step(rng.state.wrapping_add(seed));
        rng.state = Self::pcg_step(rng.state);
        rng
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state * multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = PcgRng::new(42);
        let mut b = PcgRng::new(42);
        for _ in 0..64 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn unit_float_stays_in_range() {
        let mut rng = PcgRng::new(7);
        for _ in 0..10_000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn inclusive_range_hits_both_ends() {
        let mut rng = PcgRng::new(3);
        let mut seen = [false; 9];
        for _ in 0..2_000 {
            seen[rng.range(0, 8) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
        assert_eq!(rng.range(5, 5), 5);
    }

    #[test]
    fn weighted_index_never_picks_zero_weight() {
        let mut rng = PcgRng::new(11);
        for _ in 0..2_000 {
            let index = rng.weighted_index(&[0.0, 3.0, 0.0, 1.0]).unwrap();
            assert!(index == 1 || index == 3);
        }
    }

    #[test]
    fn weighted_index_all_zero_is_none() {
        let mut rng = PcgRng::new(11);
        assert_eq!(rng.weighted_index(&[]), None);
        assert_eq!(rng.weighted_index(&[0.0, 0.0]), None);
        assert_eq!(rng.weighted_index(&[-1.0, f32::NAN]), None);
    }

    #[test]
    fn uniform_degenerate_range_is_exact() {
        let mut rng = PcgRng::new(1);
        assert_eq!(rng.uniform(1.0, 1.0), 1.0);
    }
}
