//! Unit tests for ab-cabin.

#[cfg(test)]
mod layout {
    use crate::{CabinLayout, Hand, SeatSide};

    #[test]
    fn a320_dimensions() {
        let l = CabinLayout::a320();
        l.validate().unwrap();
        assert_eq!(l.seat_count(), 174);
        assert_eq!(l.height(), 7);
        assert_eq!(l.aisle_column(), 3);
        // 6 entrance cells, 28 * 2 to the last row, 3 aft, plus the last row itself.
        assert_eq!(l.width(), 6 + 56 + 3 + 1);
        assert_eq!(l.row_x(28), 62);
    }

    #[test]
    fn seat_sides_by_distance() {
        let l = CabinLayout::new(5, 3);
        assert_eq!(l.seat_info(0, 0).unwrap().side, SeatSide::Window);
        assert_eq!(l.seat_info(0, 1).unwrap().side, SeatSide::Middle);
        assert_eq!(l.seat_info(0, 2).unwrap().side, SeatSide::Aisle);
        assert!(l.seat_info(0, 3).is_none(), "aisle column is not a seat");
        let s = l.seat_info(0, 6).unwrap();
        assert_eq!((s.hand, s.side, s.distance), (Hand::Starboard, SeatSide::Window, 3));
        assert!(l.seat_info(5, 0).is_none(), "row out of range");
    }

    #[test]
    fn column_at_inverts_distance() {
        let l = CabinLayout::new(5, 3);
        for s in l.seats() {
            assert_eq!(l.column_at(s.hand, s.distance), s.column);
        }
    }

    #[test]
    fn seat_labels_skip_aisle() {
        let l = CabinLayout::new(30, 3);
        assert_eq!(l.seat_label(0, 0), "1A");
        assert_eq!(l.seat_label(11, 2), "12C");
        assert_eq!(l.seat_label(11, 4), "12D");
        assert_eq!(l.seat_label(29, 6), "30F");
    }

    #[test]
    fn validate_rejects_degenerate_layouts() {
        assert!(CabinLayout::new(0, 3).validate().is_err());
        let mut l = CabinLayout::new(5, 3);
        l.aft_clearance = 1;
        assert!(l.validate().is_err());
        l.aft_clearance = 2;
        assert!(l.validate().is_ok());
        l.entrance_length = 0;
        assert!(l.validate().is_err());
    }
}

#[cfg(test)]
mod grid {
    use ab_core::PassengerId;

    use crate::{CabinError, CabinLayout, CellKind, Coord, Grid};

    fn small() -> Grid {
        Grid::new(CabinLayout::new(5, 3)).unwrap()
    }

    #[test]
    fn cell_kinds() {
        let g = small();
        assert_eq!(g.kind(Coord::new(0, 3)).unwrap(), CellKind::Door);
        assert_eq!(g.kind(Coord::new(1, 3)).unwrap(), CellKind::Aisle);
        assert_eq!(g.kind(Coord::new(1, 0)).unwrap(), CellKind::Void);
        assert!(matches!(g.kind(Coord::new(2, 0)).unwrap(), CellKind::Seat(_)));
    }

    #[test]
    fn place_and_vacate() {
        let mut g = small();
        let at = Coord::new(2, 3);
        assert!(g.is_free(at));
        g.place(PassengerId(1), at).unwrap();
        assert_eq!(g.occupant_at(at), Some(PassengerId(1)));
        assert!(!g.is_free(at));
        assert_eq!(g.occupied_count(), 1);
        assert_eq!(g.vacate(at).unwrap(), Some(PassengerId(1)));
        assert_eq!(g.vacate(at).unwrap(), None);
        assert_eq!(g.occupied_count(), 0);
    }

    #[test]
    fn double_place_is_occupied_error() {
        let mut g = small();
        let at = Coord::new(2, 3);
        g.place(PassengerId(1), at).unwrap();
        let err = g.place(PassengerId(2), at).unwrap_err();
        assert!(matches!(
            err,
            CabinError::OccupiedCell { occupant: PassengerId(1), passenger: PassengerId(2), .. }
        ));
    }

    #[test]
    fn out_of_bounds_and_void() {
        let mut g = small();
        assert!(matches!(
            g.place(PassengerId(0), Coord::new(999, 0)),
            Err(CabinError::OutOfBounds(_))
        ));
        assert!(matches!(
            g.place(PassengerId(0), Coord::new(1, 0)),
            Err(CabinError::NotWalkable(_))
        ));
        assert!(!g.is_free(Coord::new(999, 999)));
        assert_eq!(g.occupant_at(Coord::new(999, 999)), None);
    }

    #[test]
    fn neighbors_exclude_void() {
        let g = small();
        // Door: only the aisle cell ahead (the sides are void).
        assert_eq!(g.neighbors(Coord::new(0, 3)), vec![Coord::new(1, 3)]);
        // Row 0 aisle cell: fore, aft, and both aisle seats.
        let mut n = g.neighbors(Coord::new(2, 3));
        n.sort();
        assert_eq!(n, vec![Coord::new(1, 3), Coord::new(2, 2), Coord::new(2, 4), Coord::new(3, 3)]);
    }

    #[test]
    fn relocate_keeps_grid_on_error() {
        let mut g = small();
        g.place(PassengerId(0), Coord::new(1, 3)).unwrap();
        g.place(PassengerId(1), Coord::new(2, 3)).unwrap();
        assert!(g.relocate(PassengerId(0), Coord::new(1, 3), Coord::new(2, 3)).is_err());
        assert_eq!(g.occupant_at(Coord::new(1, 3)), Some(PassengerId(0)));
        g.relocate(PassengerId(1), Coord::new(2, 3), Coord::new(3, 3)).unwrap();
        assert_eq!(g.occupant_at(Coord::new(3, 3)), Some(PassengerId(1)));
        assert_eq!(g.aisle_occupancy(), 2);
    }

    #[test]
    fn relocate_requires_the_mover_on_its_source_cell() {
        let mut g = small();
        g.place(PassengerId(0), Coord::new(1, 3)).unwrap();
        let err = g.relocate(PassengerId(5), Coord::new(1, 3), Coord::new(2, 3)).unwrap_err();
        assert!(matches!(
            err,
            CabinError::NotOccupant { passenger: PassengerId(5), found: Some(PassengerId(0)), .. }
        ));
        assert_eq!(g.occupant_at(Coord::new(1, 3)), Some(PassengerId(0)));
        assert_eq!(g.occupant_at(Coord::new(2, 3)), None);
        assert_eq!(g.occupied_count(), 1);

        let err = g.relocate(PassengerId(5), Coord::new(4, 3), Coord::new(5, 3)).unwrap_err();
        assert!(matches!(err, CabinError::NotOccupant { found: None, .. }));
        assert_eq!(g.occupied_count(), 1);
    }
}

#[cfg(test)]
mod manifest {
    use ab_core::{PassengerId, SimRng};

    use crate::{CabinError, CabinLayout, Manifest, ManifestEntry, load_manifest_reader};

    fn entry(id: u32, row: u16, column: u16) -> ManifestEntry {
        ManifestEntry { passenger: PassengerId(id), row, column }
    }

    #[test]
    fn full_manifest_covers_every_seat() {
        let l = CabinLayout::new(5, 3);
        let m = Manifest::full(&l);
        assert_eq!(m.len(), 30);
        assert_eq!(m.seats().len(), 30);
        assert!(m.passenger_ids().enumerate().all(|(i, id)| id.index() == i));
    }

    #[test]
    fn sample_is_partial_and_valid() {
        let l = CabinLayout::a320();
        let mut rng = SimRng::new(5);
        let m = Manifest::sample(&l, 120, &mut rng).unwrap();
        assert_eq!(m.len(), 120);
        // Round-trips through validation.
        Manifest::new(m.entries().to_vec(), &l).unwrap();
        assert!(Manifest::sample(&l, 175, &mut rng).is_err());
    }

    #[test]
    fn rejects_duplicate_seat() {
        let l = CabinLayout::new(5, 3);
        let err = Manifest::new(vec![entry(0, 0, 0), entry(1, 0, 0)], &l).unwrap_err();
        assert!(matches!(err, CabinError::ManifestMismatch(_)));
    }

    #[test]
    fn rejects_aisle_and_missing_rows() {
        let l = CabinLayout::new(5, 3);
        assert!(Manifest::new(vec![entry(0, 0, 3)], &l).is_err());
        assert!(Manifest::new(vec![entry(0, 9, 0)], &l).is_err());
    }

    #[test]
    fn rejects_sparse_ids() {
        let l = CabinLayout::new(5, 3);
        assert!(Manifest::new(vec![entry(0, 0, 0), entry(2, 0, 1)], &l).is_err());
    }

    #[test]
    fn csv_loader_sorts_by_id() {
        let l = CabinLayout::new(5, 3);
        let csv = "passenger_id,row,column\n2,1,2\n0,0,0\n1, 0, 6\n";
        let m = load_manifest_reader(csv.as_bytes(), &l).unwrap();
        assert_eq!(m.len(), 3);
        assert_eq!(m.entries()[1], entry(1, 0, 6));
        assert_eq!(m.seat_of(PassengerId(2)).unwrap().row, 1);
    }

    #[test]
    fn csv_loader_reports_bad_rows() {
        let l = CabinLayout::new(5, 3);
        let csv = "passenger_id,row,column\nzero,0,0\n";
        assert!(matches!(load_manifest_reader(csv.as_bytes(), &l), Err(CabinError::Csv(_))));
    }
}
