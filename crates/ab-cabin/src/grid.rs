//! Occupancy grid.
//!
//! # Data layout
//!
//! Cell kinds and occupants are two dense `Vec`s in row-major order
//! (`index = y * width + x`), so `occupant_at`, `is_free`, `place` and
//! `vacate` are all O(1).  The grid is owned by a single run and mutated
//! only from the scheduler thread.

use ab_core::PassengerId;

use crate::{CabinError, CabinLayout, CabinResult, CellKind, Coord, SeatInfo};

/// Cabin topology plus per-cell occupancy.
#[derive(Clone, Debug)]
pub struct Grid {
    layout:    CabinLayout,
    width:     usize,
    height:    usize,
    kinds:     Vec<CellKind>,
    occupants: Vec<Option<PassengerId>>,
    occupied:  usize,
}

impl Grid {
    /// Build the grid for `layout`.  Fails only if the layout is invalid.
    pub fn new(layout: CabinLayout) -> CabinResult<Self> {
        layout.validate()?;
        let width = layout.width();
        let height = layout.height();
        let aisle = layout.aisle_column();

        let mut kinds = vec![CellKind::Void; width * height];
        for x in 0..width {
            kinds[aisle as usize * width + x] = CellKind::Aisle;
        }
        kinds[aisle as usize * width] = CellKind::Door;
        for seat in layout.seats() {
            let at = layout.seat_coord(seat.row, seat.column);
            kinds[at.y as usize * width + at.x as usize] = CellKind::Seat(seat);
        }

        Ok(Self {
            layout,
            width,
            height,
            kinds,
            occupants: vec![None; width * height],
            occupied: 0,
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn layout(&self) -> &CabinLayout {
        &self.layout
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn door(&self) -> Coord {
        self.layout.door()
    }

    #[inline]
    pub fn aisle_column(&self) -> u16 {
        self.layout.aisle_column()
    }

    #[inline]
    pub fn in_bounds(&self, at: Coord) -> bool {
        (at.x as usize) < self.width && (at.y as usize) < self.height
    }

    #[inline]
    fn idx(&self, at: Coord) -> CabinResult<usize> {
        if self.in_bounds(at) {
            Ok(at.y as usize * self.width + at.x as usize)
        } else {
            Err(CabinError::OutOfBounds(at))
        }
    }

    // ── Topology queries ──────────────────────────────────────────────────

    pub fn kind(&self, at: Coord) -> CabinResult<CellKind> {
        Ok(self.kinds[self.idx(at)?])
    }

    /// Seat identity at `at`, or `None` if it is not a seat cell.
    pub fn seat_info(&self, at: Coord) -> Option<SeatInfo> {
        match self.kind(at) {
            Ok(CellKind::Seat(info)) => Some(info),
            _ => None,
        }
    }

    /// Walkable cells one orthogonal step away from `at`.
    pub fn neighbors(&self, at: Coord) -> Vec<Coord> {
        let mut out = Vec::with_capacity(4);
        let candidates = [
            at.x.checked_sub(1).map(|x| Coord::new(x, at.y)),
            at.x.checked_add(1).map(|x| Coord::new(x, at.y)),
            at.y.checked_sub(1).map(|y| Coord::new(at.x, y)),
            at.y.checked_add(1).map(|y| Coord::new(at.x, y)),
        ];
        for c in candidates.into_iter().flatten() {
            if let Ok(kind) = self.kind(c) {
                if kind.is_walkable() {
                    out.push(c);
                }
            }
        }
        out
    }

    // ── Occupancy ─────────────────────────────────────────────────────────

    /// The passenger at `at`, or `None` if empty or out of bounds.
    #[inline]
    pub fn occupant_at(&self, at: Coord) -> Option<PassengerId> {
        self.idx(at).ok().and_then(|i| self.occupants[i])
    }

    /// `true` if `at` is a walkable, unoccupied cell.
    #[inline]
    pub fn is_free(&self, at: Coord) -> bool {
        match self.idx(at) {
            Ok(i) => self.kinds[i].is_walkable() && self.occupants[i].is_none(),
            Err(_) => false,
        }
    }

    /// Put `passenger` on `at`.
    pub fn place(&mut self, passenger: PassengerId, at: Coord) -> CabinResult<()> {
        let i = self.idx(at)?;
        if !self.kinds[i].is_walkable() {
            return Err(CabinError::NotWalkable(at));
        }
        if let Some(occupant) = self.occupants[i] {
            return Err(CabinError::OccupiedCell { at, passenger, occupant });
        }
        self.occupants[i] = Some(passenger);
        self.occupied += 1;
        Ok(())
    }

    /// Clear `at`, returning the previous occupant.
    pub fn vacate(&mut self, at: Coord) -> CabinResult<Option<PassengerId>> {
        let i = self.idx(at)?;
        let prev = self.occupants[i].take();
        if prev.is_some() {
            self.occupied -= 1;
        }
        Ok(prev)
    }

    /// Move `passenger` from `from` to `to`.  The grid is unchanged on error.
    pub fn relocate(&mut self, passenger: PassengerId, from: Coord, to: Coord) -> CabinResult<()> {
        let from_idx = self.idx(from)?;
        if self.occupants[from_idx] != Some(passenger) {
            return Err(CabinError::NotOccupant { at: from, passenger, found: self.occupants[from_idx] });
        }
        let to_idx = self.idx(to)?;
        if !self.kinds[to_idx].is_walkable() {
            return Err(CabinError::NotWalkable(to));
        }
        if let Some(occupant) = self.occupants[to_idx] {
            return Err(CabinError::OccupiedCell { at: to, passenger, occupant });
        }
        self.vacate(from)?;
        self.place(passenger, to)
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// Number of passengers currently on door or aisle cells.
    pub fn aisle_occupancy(&self) -> usize {
        let aisle = self.aisle_column() as usize;
        self.occupants[aisle * self.width..(aisle + 1) * self.width]
            .iter()
            .filter(|o| o.is_some())
            .count()
    }

    /// Copy of the occupancy array, row-major.  Used for determinism checks
    /// and by front ends that render the cabin.
    pub fn occupancy_snapshot(&self) -> Vec<Option<PassengerId>> {
        self.occupants.clone()
    }

    /// Iterator over `(coord, occupant)` for every occupied cell.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (Coord, PassengerId)> + '_ {
        let width = self.width;
        self.occupants.iter().enumerate().filter_map(move |(i, o)| {
            o.map(|p| (Coord::new((i % width) as u16, (i / width) as u16), p))
        })
    }
}
