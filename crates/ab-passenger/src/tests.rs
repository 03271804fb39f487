//! Unit tests for ab-passenger.

#[cfg(test)]
mod state {
    use crate::PassengerState::{self, *};

    const ALL: [PassengerState; 6] = [
        WaitingToBoard,
        WalkingAisle,
        AtRow,
        StowingLuggage { remaining: 3 },
        ShuffleWait,
        Seated,
    ];

    #[test]
    fn happy_path_is_legal() {
        assert!(WaitingToBoard.can_transition_to(WalkingAisle));
        assert!(WalkingAisle.can_transition_to(AtRow));
        assert!(AtRow.can_transition_to(StowingLuggage { remaining: 5 }));
        assert!(StowingLuggage { remaining: 5 }.can_transition_to(StowingLuggage { remaining: 4 }));
        assert!(StowingLuggage { remaining: 0 }.can_transition_to(Seated));
        assert!(StowingLuggage { remaining: 0 }.can_transition_to(ShuffleWait));
        assert!(ShuffleWait.can_transition_to(Seated));
    }

    #[test]
    fn seated_is_terminal() {
        assert!(ALL.iter().all(|next| !Seated.can_transition_to(*next)));
    }

    #[test]
    fn no_skipping_or_going_back() {
        assert!(!WaitingToBoard.can_transition_to(AtRow));
        assert!(!WaitingToBoard.can_transition_to(Seated));
        assert!(!WalkingAisle.can_transition_to(Seated));
        assert!(!AtRow.can_transition_to(WalkingAisle));
        assert!(!ShuffleWait.can_transition_to(StowingLuggage { remaining: 1 }));
    }

    #[test]
    fn aisle_states() {
        let in_aisle: Vec<bool> = ALL.iter().map(|s| s.is_in_aisle()).collect();
        assert_eq!(in_aisle, vec![false, true, true, true, true, false]);
        assert_eq!(StowingLuggage { remaining: 2 }.to_string(), "stowing_luggage(2)");
        assert_eq!(ShuffleWait.to_string(), "shuffle_wait");
    }
}

#[cfg(test)]
mod store {
    use ab_cabin::{CabinLayout, Manifest};
    use ab_core::{DelayDistribution, PassengerId, Tick};

    use crate::{PassengerError, PassengerState, PassengerStoreBuilder};

    fn manifest() -> Manifest {
        Manifest::full(&CabinLayout::new(5, 3))
    }

    #[test]
    fn builder_allocates_everything() {
        let m = manifest();
        let (store, rngs) = PassengerStoreBuilder::new(&m, 1).build();
        assert_eq!(store.count, 30);
        assert_eq!(rngs.len(), 30);
        assert_eq!(store.seat.len(), 30);
        assert_eq!(store.seat[7], m.seats()[7]);
        assert!(store.states().iter().all(|s| *s == PassengerState::WaitingToBoard));
        assert!(store.position.iter().all(Option::is_none));
        assert_eq!(store.seated_count(), 0);
    }

    #[test]
    fn stow_delay_is_at_least_one() {
        let m = manifest();
        let (store, _) = PassengerStoreBuilder::new(&m, 1)
            .stow_delay(DelayDistribution::Fixed { ticks: 0 })
            .build();
        assert!(store.stow_delay.iter().all(|d| *d == 1));
    }

    #[test]
    fn stow_delay_is_seed_reproducible() {
        let m = manifest();
        let dist = DelayDistribution::Normal { mean: 8.0, std_dev: 3.0 };
        let (a, _) = PassengerStoreBuilder::new(&m, 9).stow_delay(dist.clone()).build();
        let (b, _) = PassengerStoreBuilder::new(&m, 9).stow_delay(dist.clone()).build();
        let (c, _) = PassengerStoreBuilder::new(&m, 10).stow_delay(dist).build();
        assert_eq!(a.stow_delay, b.stow_delay);
        assert_ne!(a.stow_delay, c.stow_delay);
    }

    #[test]
    fn transition_tracks_seated_count() {
        let m = manifest();
        let (mut store, _) = PassengerStoreBuilder::new(&m, 1).build();
        let p = PassengerId(3);
        store.transition(p, PassengerState::WalkingAisle).unwrap();
        store.transition(p, PassengerState::AtRow).unwrap();
        store.transition(p, PassengerState::StowingLuggage { remaining: 1 }).unwrap();
        let prev = store.transition(p, PassengerState::Seated).unwrap();
        assert_eq!(prev, PassengerState::StowingLuggage { remaining: 1 });
        assert!(store.is_seated(p));
        assert_eq!(store.seated_count(), 1);
        assert!(!store.all_seated());
    }

    #[test]
    fn illegal_transition_leaves_state() {
        let m = manifest();
        let (mut store, _) = PassengerStoreBuilder::new(&m, 1).build();
        let err = store.transition(PassengerId(0), PassengerState::Seated).unwrap_err();
        assert!(matches!(err, PassengerError::IllegalTransition { from: PassengerState::WaitingToBoard, .. }));
        assert_eq!(store.state(PassengerId(0)).unwrap(), PassengerState::WaitingToBoard);
        assert_eq!(store.seated_count(), 0);
    }

    #[test]
    fn unknown_passenger() {
        let m = manifest();
        let (mut store, _) = PassengerStoreBuilder::new(&m, 1).build();
        assert!(matches!(store.state(PassengerId(30)), Err(PassengerError::NotFound(_))));
        assert!(store.transition(PassengerId(99), PassengerState::WalkingAisle).is_err());
        assert!(!store.is_seated(PassengerId(99)));
    }

    #[test]
    fn boarding_ticks_needs_both_ends() {
        let m = manifest();
        let (mut store, _) = PassengerStoreBuilder::new(&m, 1).build();
        store.admitted_tick[0] = Some(Tick(4));
        assert_eq!(store.boarding_ticks(PassengerId(0)), None);
        store.seated_tick[0] = Some(Tick(19));
        assert_eq!(store.boarding_ticks(PassengerId(0)), Some(15));
    }
}
