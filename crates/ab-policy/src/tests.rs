//! Unit tests for ab-policy.

use ab_cabin::{CabinLayout, Manifest};
use ab_core::{PassengerId, SimRng};

use crate::BoardingPolicy;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn all_policies() -> Vec<BoardingPolicy> {
    vec![
        BoardingPolicy::Random,
        BoardingPolicy::BackToFront { zones: 3 },
        BoardingPolicy::OutsideIn,
        BoardingPolicy::SegmentedRandom { zones: 4 },
        BoardingPolicy::SteffenPerfect,
    ]
}

fn is_permutation(order: &[PassengerId], n: usize) -> bool {
    let mut seen = vec![false; n];
    for p in order {
        if p.index() >= n || seen[p.index()] {
            return false;
        }
        seen[p.index()] = true;
    }
    order.len() == n
}

// ── Order generation ──────────────────────────────────────────────────────────

#[cfg(test)]
mod generate {
    use super::*;

    #[test]
    fn every_policy_yields_a_permutation() {
        let layout = CabinLayout::a320();
        let full = Manifest::full(&layout);
        let partial = Manifest::sample(&layout, 61, &mut SimRng::new(9)).unwrap();
        for policy in all_policies() {
            for m in [&full, &partial] {
                let order = policy.generate_order(m, &layout, &mut SimRng::new(1)).unwrap();
                assert!(is_permutation(&order, m.len()), "{policy} is not a permutation");
            }
        }
    }

    #[test]
    fn same_seed_same_order() {
        let layout = CabinLayout::a320();
        let m = Manifest::full(&layout);
        for policy in all_policies() {
            let a = policy.generate_order(&m, &layout, &mut SimRng::new(77)).unwrap();
            let b = policy.generate_order(&m, &layout, &mut SimRng::new(77)).unwrap();
            assert_eq!(a, b, "{policy}");
        }
    }

    #[test]
    fn random_differs_across_seeds() {
        let layout = CabinLayout::a320();
        let m = Manifest::full(&layout);
        let a = BoardingPolicy::Random.generate_order(&m, &layout, &mut SimRng::new(1)).unwrap();
        let b = BoardingPolicy::Random.generate_order(&m, &layout, &mut SimRng::new(2)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn steffen_is_deterministic_and_ignores_rng() {
        let layout = CabinLayout::a320();
        let m = Manifest::full(&layout);
        let a = BoardingPolicy::SteffenPerfect.generate_order(&m, &layout, &mut SimRng::new(1)).unwrap();
        let b = BoardingPolicy::SteffenPerfect.generate_order(&m, &layout, &mut SimRng::new(999)).unwrap();
        assert_eq!(a, b);
        assert!(!BoardingPolicy::SteffenPerfect.is_stochastic());
    }

    #[test]
    fn steffen_alternates_rows_and_sides() {
        // 4 rows of 3+3: ids are row * 6 + seat index, port window first.
        let layout = CabinLayout::new(4, 3);
        let m = Manifest::full(&layout);
        let order = BoardingPolicy::SteffenPerfect.generate_order(&m, &layout, &mut SimRng::new(0)).unwrap();
        let head: Vec<u32> = order[..8].iter().map(|p| p.0).collect();
        assert_eq!(head, vec![23, 11, 18, 6, 17, 5, 12, 0]);
        // Aisle seats board last.
        assert!(order[16..].iter().all(|p| m.seat_of(*p).unwrap().distance == 1));
    }

    #[test]
    fn back_to_front_boards_rear_zone_first() {
        let layout = CabinLayout::new(5, 3);
        let m = Manifest::full(&layout);
        let order = BoardingPolicy::BackToFront { zones: 5 }
            .generate_order(&m, &layout, &mut SimRng::new(3))
            .unwrap();
        let rows: Vec<u16> = order.iter().map(|p| m.seat_of(*p).unwrap().row).collect();
        assert!(rows.windows(2).all(|w| w[0] >= w[1]), "{rows:?}");
        assert_eq!(rows[0], 4);
    }

    #[test]
    fn outside_in_boards_window_first() {
        let layout = CabinLayout::a320();
        let m = Manifest::full(&layout);
        let order = BoardingPolicy::OutsideIn.generate_order(&m, &layout, &mut SimRng::new(4)).unwrap();
        let d: Vec<u16> = order.iter().map(|p| m.seat_of(*p).unwrap().distance).collect();
        assert!(d.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(d[0], 3);
    }

    #[test]
    fn segmented_random_keeps_zones_contiguous() {
        let layout = CabinLayout::a320();
        let m = Manifest::full(&layout);
        let zones = 4u16;
        let order = BoardingPolicy::SegmentedRandom { zones }
            .generate_order(&m, &layout, &mut SimRng::new(5))
            .unwrap();
        let zone_seq: Vec<u16> = order
            .iter()
            .map(|p| m.seat_of(*p).unwrap().row * zones / layout.rows)
            .collect();
        let mut blocks = zone_seq.clone();
        blocks.dedup();
        assert_eq!(blocks.len(), zones as usize, "each zone is one block: {blocks:?}");
    }

    #[test]
    fn invalid_zones_rejected() {
        let layout = CabinLayout::new(5, 3);
        let m = Manifest::full(&layout);
        for policy in [BoardingPolicy::BackToFront { zones: 0 }, BoardingPolicy::SegmentedRandom { zones: 6 }] {
            assert!(matches!(
                policy.generate_order(&m, &layout, &mut SimRng::new(0)),
                Err(crate::PolicyError::InvalidZones { .. })
            ));
        }
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod parse {
    use crate::{BoardingPolicy, PolicyError};

    #[test]
    fn names_parse() {
        assert_eq!("random".parse::<BoardingPolicy>().unwrap(), BoardingPolicy::Random);
        assert_eq!("outside_in".parse::<BoardingPolicy>().unwrap(), BoardingPolicy::OutsideIn);
        assert_eq!(
            "Steffen-Perfect".parse::<BoardingPolicy>().unwrap(),
            BoardingPolicy::SteffenPerfect
        );
        assert_eq!(
            "back-to-front".parse::<BoardingPolicy>().unwrap(),
            BoardingPolicy::BackToFront { zones: 3 }
        );
        assert_eq!(
            "segmented_random:6".parse::<BoardingPolicy>().unwrap(),
            BoardingPolicy::SegmentedRandom { zones: 6 }
        );
    }

    #[test]
    fn display_round_trips() {
        for p in super::all_policies() {
            assert_eq!(p.to_string().parse::<BoardingPolicy>().unwrap(), p);
        }
    }

    #[test]
    fn unknown_names_rejected() {
        assert!(matches!("front-to-back".parse::<BoardingPolicy>(), Err(PolicyError::UnknownPolicy(_))));
        assert!("random:3".parse::<BoardingPolicy>().is_err(), "zones on a non-zoned policy");
        assert!("back-to-front:x".parse::<BoardingPolicy>().is_err());
    }

    #[test]
    fn with_zones_only_touches_zoned_policies() {
        assert_eq!(BoardingPolicy::Random.with_zones(7), BoardingPolicy::Random);
        assert_eq!(
            BoardingPolicy::BackToFront { zones: 3 }.with_zones(7),
            BoardingPolicy::BackToFront { zones: 7 }
        );
    }
}

// ── Conformance ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod conformance {
    use super::*;
    use crate::{PolicyError, apply_conformance};

    fn identity(n: u32) -> Vec<PassengerId> {
        (0..n).map(PassengerId).collect()
    }

    /// Spearman rank correlation between queue position and original position.
    fn rank_correlation(order: &[PassengerId]) -> f64 {
        let n = order.len() as f64;
        let d2: f64 = order
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let d = i as f64 - p.index() as f64;
                d * d
            })
            .sum();
        1.0 - 6.0 * d2 / (n * (n * n - 1.0))
    }

    #[test]
    fn zero_rate_keeps_order() {
        let mut order = identity(174);
        apply_conformance(&mut order, 0.0, &mut SimRng::new(1)).unwrap();
        assert_eq!(order, identity(174));
    }

    #[test]
    fn full_rate_removes_correlation() {
        let mut total = 0.0;
        for seed in 0..20 {
            let mut order = identity(174);
            apply_conformance(&mut order, 1.0, &mut SimRng::new(seed)).unwrap();
            assert!(is_permutation(&order, 174));
            // Every swap moves position i to a later slot, so nobody stays put.
            assert!(order.iter().enumerate().all(|(i, p)| p.index() != i));
            total += rank_correlation(&order).abs();
        }
        assert!(total / 20.0 < 0.2, "mean |rho| = {}", total / 20.0);
    }

    #[test]
    fn partial_rate_stays_correlated() {
        let mut order = identity(174);
        apply_conformance(&mut order, 0.1, &mut SimRng::new(8)).unwrap();
        assert!(is_permutation(&order, 174));
        assert_ne!(order, identity(174));
        assert!(rank_correlation(&order) > 0.3);
    }

    #[test]
    fn out_of_range_rate_rejected() {
        for rate in [-0.1, 1.5, f64::NAN] {
            let mut order = identity(4);
            assert!(matches!(
                apply_conformance(&mut order, rate, &mut SimRng::new(0)),
                Err(PolicyError::InvalidConformance(_))
            ));
        }
    }

    #[test]
    fn short_orders_are_untouched() {
        let mut empty: Vec<PassengerId> = Vec::new();
        apply_conformance(&mut empty, 1.0, &mut SimRng::new(0)).unwrap();
        let mut one = identity(1);
        apply_conformance(&mut one, 1.0, &mut SimRng::new(0)).unwrap();
        assert_eq!(one, identity(1));
    }
}

// ── BoardingQueue ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue {
    use ab_core::PassengerId;

    use crate::BoardingQueue;

    #[test]
    fn cursor_walks_the_order() {
        let mut q = BoardingQueue::new(vec![PassengerId(2), PassengerId(0), PassengerId(1)]);
        assert_eq!(q.len(), 3);
        assert_eq!(q.peek(), Some(PassengerId(2)));
        assert_eq!(q.advance(), Some(PassengerId(2)));
        assert_eq!(q.remaining(), 2);
        assert_eq!(q.admitted(), 1);
        assert_eq!(q.advance(), Some(PassengerId(0)));
        assert_eq!(q.advance(), Some(PassengerId(1)));
        assert_eq!(q.advance(), None);
        assert_eq!(q.peek(), None);
        assert_eq!(q.remaining(), 0);
    }

    #[test]
    fn position_lookup() {
        let q = BoardingQueue::new(vec![PassengerId(3), PassengerId(0)]);
        assert_eq!(q.position_of(PassengerId(3)), Some(0));
        assert_eq!(q.position_of(PassengerId(0)), Some(1));
        assert_eq!(q.position_of(PassengerId(1)), None);
        assert_eq!(q.position_of(PassengerId(40)), None);
    }
}
