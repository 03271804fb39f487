//! Random deviation from the policy order.

use tracing::debug;

use ab_core::{PassengerId, SimRng};

use crate::{PolicyError, PolicyResult};

/// Perturb `order` in place.
///
/// Each position `i` is, with probability `rate`, swapped with a uniformly
/// chosen later position `j > i`.  `rate` is the probability of deviating:
/// `0.0` keeps the pure order and consumes no randomness, `1.0` moves every
/// passenger but the last.
pub fn apply_conformance(order: &mut [PassengerId], rate: f64, rng: &mut SimRng) -> PolicyResult<()> {
    if !(0.0..=1.0).contains(&rate) {
        return Err(PolicyError::InvalidConformance(rate));
    }
    if rate == 0.0 {
        return Ok(());
    }

    let n = order.len();
    let mut swaps = 0usize;
    for i in 0..n.saturating_sub(1) {
        if rng.gen_bool(rate) {
            let j = rng.gen_range(i + 1..n);
            order.swap(i, j);
            swaps += 1;
        }
    }
    debug!(rate, swaps, "applied conformance");
    Ok(())
}
