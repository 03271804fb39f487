//! Seeded generators.
//!
//! Nothing in the workspace touches a global or thread-local RNG.  A run
//! seed fans out into:
//!
//! - one [`SimRng`] per concern (policy grouping, conformance swaps,
//!   manifest sampling), each from [`SimRng::stream`];
//! - one [`PassengerRng`] per passenger for its stow and shuffle delays.
//!
//! Both derive their `SmallRng` seed as `seed ^ (k * φ)`, with `φ` the 64-bit
//! golden-ratio constant, so neighbouring ids and stream numbers land far
//! apart.  A passenger's draws therefore do not depend on how many other
//! passengers drew first.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::PassengerId;

const GOLDEN: u64 = 0x9e37_79b9_7f4a_7c15;

#[inline]
fn mixed(seed: u64, k: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed ^ k.wrapping_mul(GOLDEN))
}

/// A passenger's private generator.
pub struct PassengerRng(SmallRng);

impl PassengerRng {
    pub fn new(run_seed: u64, passenger: PassengerId) -> Self {
        PassengerRng(mixed(run_seed, passenger.0 as u64))
    }

    /// For sampling `rand_distr` distributions.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

/// Run-level generator, owned by whichever step of run setup needs it.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Generator for `stream` under `seed`.  Streams never share state, so
    /// adding draws to one leaves the others unchanged.
    pub fn stream(seed: u64, stream: u64) -> SimRng {
        SimRng(mixed(seed, stream))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p`, clamped to `[0, 1]`.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Fisher-Yates shuffle in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.0);
    }
}
