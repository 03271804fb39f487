//! Fluent builder for `PassengerStore` + `PassengerRngs`.
//!
//! ```rust
//! use ab_cabin::{CabinLayout, Manifest};
//! use ab_core::DelayDistribution;
//! use ab_passenger::PassengerStoreBuilder;
//!
//! let layout = CabinLayout::new(5, 3);
//! let manifest = Manifest::full(&layout);
//! let (store, rngs) = PassengerStoreBuilder::new(&manifest, 42)
//!     .stow_delay(DelayDistribution::Uniform { min: 2, max: 6 })
//!     .build();
//!
//! assert_eq!(store.count, 30);
//! assert_eq!(rngs.len(), 30);
//! assert!(store.stow_delay.iter().all(|d| (2..=6).contains(d)));
//! ```

use ab_cabin::Manifest;
use ab_core::{DelayDistribution, PassengerId};

use crate::{PassengerRngs, PassengerStore};

/// Stow delay used when none is configured: 2 s at the default tick length.
pub const DEFAULT_STOW_DELAY: DelayDistribution = DelayDistribution::Fixed { ticks: 4 };

pub struct PassengerStoreBuilder<'a> {
    manifest:   &'a Manifest,
    seed:       u64,
    stow_delay: DelayDistribution,
}

impl<'a> PassengerStoreBuilder<'a> {
    /// One passenger per manifest entry, RNGs derived from `seed`.
    pub fn new(manifest: &'a Manifest, seed: u64) -> Self {
        Self { manifest, seed, stow_delay: DEFAULT_STOW_DELAY }
    }

    pub fn stow_delay(mut self, dist: DelayDistribution) -> Self {
        self.stow_delay = dist;
        self
    }

    /// Allocate every array and draw each passenger's stow delay from its
    /// own generator, so the draw does not depend on boarding order.
    pub fn build(self) -> (PassengerStore, PassengerRngs) {
        let count = self.manifest.len();
        let mut rngs = PassengerRngs::new(count, self.seed);
        let stow_delay = (0..count as u32)
            .map(|i| {
                let rng = rngs.get_mut(PassengerId(i));
                self.stow_delay.sample_at_least(rng.inner(), 1)
            })
            .collect();

        let store = PassengerStore::new(self.manifest.seats().to_vec(), stow_delay);
        (store, rngs)
    }
}
