//! Delay distributions for luggage stowing and seat shuffles.
//!
//! Delays are sampled in whole ticks.  Continuous distributions are rounded
//! to the nearest tick and clamped at zero; callers that need a strictly
//! positive delay use [`DelayDistribution::sample_at_least`].

use rand::Rng;
use rand_distr::{Distribution, Normal, Weibull};

use crate::{AbError, AbResult};

/// A distribution of non-negative tick counts.
///
/// With the `serde` feature the enum is internally tagged by `kind`:
///
/// ```yaml
/// stow_delay:
///   kind: weibull
///   scale: 12.0
///   shape: 1.7
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum DelayDistribution {
    /// Always `ticks`.  Consumes no randomness.
    Fixed { ticks: u32 },
    /// Uniform over `min..=max`.
    Uniform { min: u32, max: u32 },
    /// Gaussian, rounded and clamped at zero.
    Normal { mean: f64, std_dev: f64 },
    /// Weibull with the given scale (in ticks) and shape, rounded.
    Weibull { scale: f64, shape: f64 },
}

impl DelayDistribution {
    /// Check parameters once at configuration time so `sample` never has to
    /// report an error.
    pub fn validate(&self, what: &str) -> AbResult<()> {
        let ok = match *self {
            DelayDistribution::Fixed { .. } => true,
            DelayDistribution::Uniform { min, max } => min <= max,
            DelayDistribution::Normal { mean, std_dev } => {
                mean.is_finite() && mean >= 0.0 && std_dev.is_finite() && std_dev >= 0.0
            }
            DelayDistribution::Weibull { scale, shape } => {
                scale.is_finite() && scale > 0.0 && shape.is_finite() && shape > 0.0
            }
        };
        if ok {
            Ok(())
        } else {
            Err(AbError::InvalidDelay { what: what.to_string(), detail: format!("bad parameters {self:?}") })
        }
    }

    /// Draw one delay in ticks.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        match *self {
            DelayDistribution::Fixed { ticks } => ticks,
            DelayDistribution::Uniform { min, max } => rng.gen_range(min..=max),
            DelayDistribution::Normal { mean, std_dev } => match Normal::new(mean, std_dev) {
                Ok(d) => round_ticks(d.sample(rng)),
                Err(_) => round_ticks(mean),
            },
            DelayDistribution::Weibull { scale, shape } => match Weibull::new(scale, shape) {
                Ok(d) => round_ticks(d.sample(rng)),
                Err(_) => round_ticks(scale),
            },
        }
    }

    /// Draw one delay, never returning less than `floor`.
    #[inline]
    pub fn sample_at_least<R: Rng + ?Sized>(&self, rng: &mut R, floor: u32) -> u32 {
        self.sample(rng).max(floor)
    }
}

fn round_ticks(x: f64) -> u32 {
    if x.is_nan() {
        return 0;
    }
    x.round().clamp(0.0, u32::MAX as f64) as u32
}
