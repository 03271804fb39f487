//! Boarding-order policies.
//!
//! | Policy             | Groups                          | Within a group |
//! |--------------------|---------------------------------|----------------|
//! | `Random`           | one                             | random         |
//! | `BackToFront`      | row zones, rear zone first      | random         |
//! | `OutsideIn`        | window, middle, aisle           | random         |
//! | `SegmentedRandom`  | row zones, zone order random    | random         |
//! | `SteffenPerfect`   | every seat its own slot         | fixed          |
//!
//! Every policy starts from the manifest in id order, so the result depends
//! only on `(manifest, layout, rng seed)`.  Random grouping is done by
//! shuffling the ids once and then stable-sorting by group key.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use ab_cabin::{CabinLayout, Hand, Manifest, SeatInfo};
use ab_core::{PassengerId, SimRng};

use crate::{PolicyError, PolicyResult};

/// Zone count used when a zoned policy is named without one.
pub const DEFAULT_ZONES: u16 = 3;

/// A boarding strategy.
///
/// In YAML the enum is tagged by `kind`:
///
/// ```yaml
/// policy:
///   kind: back_to_front
///   zones: 5
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoardingPolicy {
    Random,
    BackToFront { zones: u16 },
    OutsideIn,
    SegmentedRandom { zones: u16 },
    SteffenPerfect,
}

impl BoardingPolicy {
    /// Canonical kebab-case name, without zone count.
    pub fn name(&self) -> &'static str {
        match self {
            BoardingPolicy::Random                 => "random",
            BoardingPolicy::BackToFront { .. }     => "back-to-front",
            BoardingPolicy::OutsideIn              => "outside-in",
            BoardingPolicy::SegmentedRandom { .. } => "segmented-random",
            BoardingPolicy::SteffenPerfect         => "steffen-perfect",
        }
    }

    pub fn zones(&self) -> Option<u16> {
        match *self {
            BoardingPolicy::BackToFront { zones } | BoardingPolicy::SegmentedRandom { zones } => {
                Some(zones)
            }
            _ => None,
        }
    }

    /// Replace the zone count of a zoned policy.  Other policies are
    /// returned unchanged.
    pub fn with_zones(self, zones: u16) -> Self {
        match self {
            BoardingPolicy::BackToFront { .. }     => BoardingPolicy::BackToFront { zones },
            BoardingPolicy::SegmentedRandom { .. } => BoardingPolicy::SegmentedRandom { zones },
            other => other,
        }
    }

    /// `true` if `generate_order` draws from the rng.
    pub fn is_stochastic(&self) -> bool {
        !matches!(self, BoardingPolicy::SteffenPerfect)
    }

    pub fn validate(&self, layout: &CabinLayout) -> PolicyResult<()> {
        if let Some(zones) = self.zones() {
            if zones == 0 || zones > layout.rows {
                return Err(PolicyError::InvalidZones { zones, rows: layout.rows });
            }
        }
        Ok(())
    }

    /// Produce the pure boarding order: a permutation of the manifest's ids.
    pub fn generate_order(
        &self,
        manifest: &Manifest,
        layout:   &CabinLayout,
        rng:      &mut SimRng,
    ) -> PolicyResult<Vec<PassengerId>> {
        self.validate(layout)?;
        let seats = manifest.seats();
        let mut order: Vec<PassengerId> = manifest.passenger_ids().collect();

        match *self {
            BoardingPolicy::Random => rng.shuffle(&mut order),

            BoardingPolicy::BackToFront { zones } => {
                rng.shuffle(&mut order);
                order.sort_by_key(|p| Reverse(zone_of(&seats[p.index()], zones, layout.rows)));
            }

            BoardingPolicy::OutsideIn => {
                rng.shuffle(&mut order);
                order.sort_by_key(|p| Reverse(seats[p.index()].distance));
            }

            BoardingPolicy::SegmentedRandom { zones } => {
                let mut zone_order: Vec<u16> = (0..zones).collect();
                rng.shuffle(&mut zone_order);
                let mut rank = vec![0usize; zones as usize];
                for (i, z) in zone_order.iter().enumerate() {
                    rank[*z as usize] = i;
                }
                rng.shuffle(&mut order);
                order.sort_by_key(|p| rank[zone_of(&seats[p.index()], zones, layout.rows) as usize]);
            }

            BoardingPolicy::SteffenPerfect => {
                let rear_parity = layout.rows.saturating_sub(1) % 2;
                order.sort_by_key(|p| {
                    let s = &seats[p.index()];
                    (
                        Reverse(s.distance),
                        s.row % 2 != rear_parity,
                        s.hand != Hand::Starboard,
                        Reverse(s.row),
                    )
                });
            }
        }

        debug!(policy = %self, passengers = order.len(), "generated boarding order");
        Ok(order)
    }
}

/// Zone of a seat's row; 0 is the front zone.
#[inline]
fn zone_of(seat: &SeatInfo, zones: u16, rows: u16) -> u16 {
    (seat.row as u32 * zones as u32 / rows as u32) as u16
}

impl fmt::Display for BoardingPolicy {
    /// `back-to-front:5` for zoned policies, the bare name otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.zones() {
            Some(z) => write!(f, "{}:{}", self.name(), z),
            None => f.write_str(self.name()),
        }
    }
}

impl FromStr for BoardingPolicy {
    type Err = PolicyError;

    /// Accepts the kebab or snake case name, optionally followed by
    /// `:<zones>` for zoned policies.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || PolicyError::UnknownPolicy(s.to_string());
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let (name, zones) = match normalized.split_once(':') {
            Some((name, z)) => (name.to_string(), Some(z.parse::<u16>().map_err(|_| unknown())?)),
            None => (normalized.clone(), None),
        };

        let policy = match name.as_str() {
            "random"           => BoardingPolicy::Random,
            "back-to-front"    => BoardingPolicy::BackToFront { zones: zones.unwrap_or(DEFAULT_ZONES) },
            "outside-in"       => BoardingPolicy::OutsideIn,
            "segmented-random" => BoardingPolicy::SegmentedRandom { zones: zones.unwrap_or(DEFAULT_ZONES) },
            "steffen-perfect"  => BoardingPolicy::SteffenPerfect,
            _ => return Err(unknown()),
        };
        if zones.is_some() && policy.zones().is_none() {
            return Err(unknown());
        }
        Ok(policy)
    }
}
