// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Deterministic shuffling so permutation tests are reproducible.

/// Tiny deterministic RNG (xorshift64*) so tests don't need `rand`.
#[derive(Clone, Debug)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Creates a new PRNG with the given seed.
    ///
    /// A zero seed is replaced with 1; xorshift never leaves the zero state.
    pub fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    /// Next value in the xorshift64* sequence.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Pseudo-random value in `[0, upper)`. Modulo bias is acceptable for tests.
    pub fn gen_range_usize(&mut self, upper: usize) -> usize {
        if upper <= 1 {
            return 0;
        }
        let bound = u64::try_from(upper).unwrap_or(u64::MAX);
        usize::try_from(self.next_u64() % bound).unwrap_or(0)
    }

    /// Fisher–Yates shuffle in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.gen_range_usize(i + 1);
            items.swap(i, j);
        }
    }
}

/// Shuffled copy of `items` for the given seed.
///
/// ```
/// use equiv_dry_tests::shuffled;
///
/// let a = shuffled(&[1, 2, 3, 4], 7);
/// let b = shuffled(&[1, 2, 3, 4], 7);
/// assert_eq!(a, b);
/// ```
pub fn shuffled<T: Clone>(items: &[T], seed: u64) -> Vec<T> {
    let mut out = items.to_vec();
    XorShift64::new(seed).shuffle(&mut out);
    out
}
