//! The `Sim` struct and its tick loop.

use tracing::{info, trace, warn};

use ab_cabin::{Coord, Grid};
use ab_core::{PassengerId, RunId, SimClock, Tick};
use ab_interference::{InterferenceEvent, InterferenceResolver, ShuffleType, blockers};
use ab_passenger::{PassengerRngs, PassengerState, PassengerStore};
use ab_policy::BoardingQueue;

use crate::{
    MetricsCollector, NoopObserver, RunConfig, RunRecord, RunSummary, ShuffleRecord, SimError,
    SimObserver, SimResult, TickMetrics,
};

/// Result of one [`Sim::step`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Running,
    /// Every passenger is seated.  Further steps do nothing.
    Complete,
}

/// What one activation did to a passenger.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Activity {
    /// Already seated; not activated.
    Idle,
    /// Entered the door or moved one aisle cell.
    Moved,
    /// Walking, still covering the current cell.
    Pacing,
    /// Walking, next cell occupied.
    Blocked,
    /// Queued, stowing, or waiting on a shuffle.
    Waited,
    Seated,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// One boarding run.
///
/// Each tick every passenger that is not yet seated is activated exactly
/// once, in boarding-queue order:
///
/// | State            | Activation                                                   |
/// |------------------|--------------------------------------------------------------|
/// | `WaitingToBoard` | head of queue enters the door if free and the interval passed |
/// | `WalkingAisle`   | one cell aft every `walk_ticks_per_cell` ticks if free (reaching the row ⇒ `AtRow`) |
/// | `AtRow`          | start stowing                                                |
/// | `StowingLuggage` | count down; when done, sit or open a seat shuffle            |
/// | `ShuffleWait`    | advance the shuffle; sit when it resolves                    |
///
/// Queue order is also aisle order (nobody overtakes), so passengers further
/// down the aisle move first and free cells for those behind them within the
/// same tick.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub(crate) config:         RunConfig,
    pub(crate) clock:          SimClock,
    pub(crate) run_id:         RunId,
    pub(crate) grid:           Grid,
    pub(crate) passengers:     PassengerStore,
    pub(crate) rngs:           PassengerRngs,
    pub(crate) queue:          BoardingQueue,
    pub(crate) resolver:       InterferenceResolver,
    pub(crate) metrics:        MetricsCollector,
    pub(crate) last_admission: Option<Tick>,
    /// Set once `on_run_end` has fired.
    pub(crate) finished:       bool,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Process exactly one tick without observer callbacks.
    pub fn step(&mut self) -> SimResult<StepOutcome> {
        self.step_with(&mut NoopObserver)
    }

    /// Process exactly one tick.  Ignores `max_ticks`.
    pub fn step_with<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<StepOutcome> {
        if self.is_complete() {
            return Ok(StepOutcome::Complete);
        }
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let seated_before = self.passengers.seated_count();

        let mut blocked = 0;
        let mut waiting = 0;
        for i in 0..self.queue.len() {
            let p = self.queue.order()[i];
            match self.activate(p, now, observer)? {
                Activity::Blocked => blocked += 1,
                Activity::Waited => waiting += 1,
                Activity::Idle | Activity::Moved | Activity::Pacing | Activity::Seated => {}
            }
        }

        let m = TickMetrics {
            tick:            now,
            seated:          self.passengers.seated_count(),
            aisle_occupancy: self.grid.aisle_occupancy(),
            blocked,
            waiting,
            shuffling:       self.resolver.active_count(),
        };
        self.metrics.record_tick(m);
        observer.on_tick_end(now, &m);

        if cfg!(debug_assertions) {
            self.check_invariants(now, seated_before)?;
        }
        self.clock.advance();

        Ok(if self.is_complete() { StepOutcome::Complete } else { StepOutcome::Running })
    }

    /// Step until every passenger is seated.
    ///
    /// Fails with [`SimError::RunAborted`] once `max_ticks` ticks have been
    /// processed without completion; the sim is left in its last state.
    pub fn run_to_completion<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        while !self.is_complete() {
            if self.clock.current_tick.0 >= self.config.max_ticks {
                warn!(
                    run = self.run_id.0,
                    max_ticks = self.config.max_ticks,
                    seated = self.passengers.seated_count(),
                    passengers = self.passengers.count,
                    "run aborted"
                );
                self.finish(observer, false);
                return Err(SimError::RunAborted { max_ticks: self.config.max_ticks });
            }
            self.step_with(observer)?;
        }
        self.finish(observer, true);

        let summary = self.summary();
        info!(
            run = self.run_id.0,
            ticks = summary.total_boarding_ticks,
            secs = summary.boarding_time_secs,
            mean_wait = summary.mean_passenger_wait,
            "run complete"
        );
        Ok(summary)
    }

    /// Like [`run_to_completion`](Self::run_to_completion) but an aborted
    /// run is reported in the record instead of as an error.
    pub fn run_record<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunRecord> {
        let aborted = match self.run_to_completion(observer) {
            Ok(_) => false,
            Err(SimError::RunAborted { .. }) => true,
            Err(e) => return Err(e),
        };
        Ok(self.record(aborted))
    }

    /// Totals as of the current tick.
    pub fn summary(&self) -> RunSummary {
        RunSummary::from_run(&self.passengers, &self.metrics, &self.clock)
    }

    pub fn record(&self, aborted: bool) -> RunRecord {
        let s = self.summary();
        RunRecord {
            run_id:               self.run_id,
            policy:               self.config.policy.to_string(),
            conformance_rate:     self.config.conformance_rate,
            seed:                 self.config.seed,
            passenger_count:      s.passenger_count,
            total_boarding_ticks: s.total_boarding_ticks,
            boarding_time_secs:   s.boarding_time_secs,
            mean_passenger_wait:  s.mean_passenger_wait,
            total_shuffle_wait:   s.total_shuffle_ticks,
            aborted,
        }
    }

    // ── Snapshots ─────────────────────────────────────────────────────────

    /// The next tick to be processed.
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn passengers(&self) -> &PassengerStore {
        &self.passengers
    }

    pub fn state_of(&self, passenger: PassengerId) -> SimResult<PassengerState> {
        Ok(self.passengers.state(passenger)?)
    }

    pub fn occupancy_snapshot(&self) -> Vec<Option<PassengerId>> {
        self.grid.occupancy_snapshot()
    }

    pub fn metrics(&self) -> &MetricsCollector {
        &self.metrics
    }

    /// Consume the sim, keeping only its metrics.
    pub fn into_metrics(self) -> MetricsCollector {
        self.metrics
    }

    pub fn queue(&self) -> &BoardingQueue {
        &self.queue
    }

    pub fn resolver(&self) -> &InterferenceResolver {
        &self.resolver
    }

    pub fn is_complete(&self) -> bool {
        self.passengers.all_seated()
    }

    // ── Activation ────────────────────────────────────────────────────────

    fn activate<O: SimObserver>(
        &mut self,
        p:        PassengerId,
        now:      Tick,
        observer: &mut O,
    ) -> SimResult<Activity> {
        match self.passengers.state(p)? {
            PassengerState::Seated => Ok(Activity::Idle),

            PassengerState::WaitingToBoard => {
                let door = self.grid.door();
                if self.queue.peek() == Some(p) && self.grid.is_free(door) && self.interval_elapsed(now) {
                    self.grid.place(p, door)?;
                    self.passengers.position[p.index()] = Some(door);
                    self.passengers.admitted_tick[p.index()] = Some(now);
                    self.passengers.transition(p, PassengerState::WalkingAisle)?;
                    self.queue.advance();
                    self.last_admission = Some(now);
                    trace!(passenger = %p, %now, "admitted");
                    Ok(Activity::Moved)
                } else {
                    self.wait(p);
                    Ok(Activity::Waited)
                }
            }

            PassengerState::WalkingAisle => self.walk(p, now),

            PassengerState::AtRow => {
                let remaining = self.passengers.stow_delay[p.index()];
                self.passengers.transition(p, PassengerState::StowingLuggage { remaining })?;
                self.wait(p);
                Ok(Activity::Waited)
            }

            PassengerState::StowingLuggage { remaining } => {
                let left = remaining.saturating_sub(1);
                if left > 0 {
                    self.passengers.transition(p, PassengerState::StowingLuggage { remaining: left })?;
                    self.wait(p);
                    Ok(Activity::Waited)
                } else {
                    self.finish_stowing(p, now, observer)
                }
            }

            PassengerState::ShuffleWait => {
                match self.resolver.advance(p, &mut self.grid, &mut self.passengers, now)? {
                    Some(event) => {
                        self.record_shuffle(&event);
                        self.seat(p, now, observer)?;
                        Ok(Activity::Seated)
                    }
                    None => {
                        self.wait(p);
                        Ok(Activity::Waited)
                    }
                }
            }
        }
    }

    fn walk(&mut self, p: PassengerId, now: Tick) -> SimResult<Activity> {
        let i = p.index();
        let Some(at) = self.passengers.position[i] else {
            return Err(SimError::Invariant { tick: now, what: format!("walking {p} has no position") });
        };
        let target = self.grid.layout().row_x(self.passengers.seat[i].row);
        if at.x >= target {
            self.passengers.transition(p, PassengerState::AtRow)?;
            return Ok(Activity::Pacing);
        }

        // Progress is kept while blocked, so a slow walker steps as soon as
        // the cell ahead frees up.
        if self.passengers.walk_progress[i] + 1 < self.config.walk_ticks_per_cell {
            self.passengers.walk_progress[i] += 1;
            return Ok(Activity::Pacing);
        }
        let next = Coord::new(at.x + 1, at.y);
        if !self.grid.is_free(next) {
            self.passengers.blocked_ticks[i] += 1;
            return Ok(Activity::Blocked);
        }
        self.grid.relocate(p, at, next)?;
        self.passengers.position[i] = Some(next);
        self.passengers.walk_progress[i] = 0;
        if next.x == target {
            self.passengers.transition(p, PassengerState::AtRow)?;
        }
        Ok(Activity::Moved)
    }

    /// Stowing is done: sit down directly or open a seat shuffle.
    fn finish_stowing<O: SimObserver>(
        &mut self,
        p:        PassengerId,
        now:      Tick,
        observer: &mut O,
    ) -> SimResult<Activity> {
        let i = p.index();
        let seat = self.passengers.seat[i];
        let in_the_way = blockers(&seat, self.grid.layout(), &self.grid, &self.passengers);

        if in_the_way.is_empty() {
            let layout = self.grid.layout();
            let from = layout.row_aisle_cell(seat.row);
            let to = layout.seat_coord(seat.row, seat.column);
            self.grid.relocate(p, from, to)?;
            self.passengers.position[i] = Some(to);
            self.metrics.record_shuffle(ShuffleRecord {
                passenger:     p,
                row:           seat.row,
                column:        seat.column,
                shuffle_type:  ShuffleType::A,
                blockers:      0,
                shuffle_ticks: 0,
                waiting_ticks: 0,
            });
            self.seat(p, now, observer)?;
            return Ok(Activity::Seated);
        }

        self.passengers.transition(p, PassengerState::ShuffleWait)?;
        let rng = self.rngs.get_mut(p);
        self.resolver
            .begin(p, in_the_way, self.grid.layout(), &self.passengers, now, rng)?;
        self.wait(p);
        Ok(Activity::Waited)
    }

    fn seat<O: SimObserver>(&mut self, p: PassengerId, now: Tick, observer: &mut O) -> SimResult<()> {
        self.passengers.transition(p, PassengerState::Seated)?;
        self.passengers.seated_tick[p.index()] = Some(now);
        observer.on_passenger_seated(now, p);
        Ok(())
    }

    fn record_shuffle(&mut self, event: &InterferenceEvent) {
        let i = event.passenger.index();
        let seat = self.passengers.seat[i];
        let shuffle_ticks = event.shuffle_ticks().unwrap_or(0);
        self.passengers.shuffle_ticks[i] = shuffle_ticks as u32;
        self.passengers.shuffle_wait_ticks[i] = event.waiting_ticks;
        self.metrics.record_shuffle(ShuffleRecord {
            passenger:     event.passenger,
            row:           seat.row,
            column:        seat.column,
            shuffle_type:  event.shuffle_type,
            blockers:      event.blockers.len(),
            shuffle_ticks,
            waiting_ticks: event.waiting_ticks,
        });
    }

    #[inline]
    fn wait(&mut self, p: PassengerId) {
        self.passengers.wait_ticks[p.index()] += 1;
    }

    fn interval_elapsed(&self, now: Tick) -> bool {
        match self.last_admission {
            None => true,
            Some(t) => now.since(t) >= self.config.boarding_interval_ticks as u64,
        }
    }

    fn finish<O: SimObserver>(&mut self, observer: &mut O, completed: bool) {
        if self.finished {
            return;
        }
        self.metrics.finalize(&self.passengers);
        observer.on_run_end(self.clock.current_tick, completed);
        self.finished = true;
    }

    // ── Invariants ────────────────────────────────────────────────────────

    /// Grid and store agree on who is where, and nobody got up for good.
    fn check_invariants(&self, now: Tick, seated_before: usize) -> SimResult<()> {
        let fail = |what: String| Err(SimError::Invariant { tick: now, what });

        let mut positioned = 0usize;
        for p in self.passengers.passenger_ids() {
            let state = self.passengers.state(p)?;
            match (state, self.passengers.position[p.index()]) {
                (PassengerState::WaitingToBoard, None) => {}
                (PassengerState::WaitingToBoard, Some(at)) => {
                    return fail(format!("{p} is queued but placed at {at}"));
                }
                (_, None) => return fail(format!("{p} is {state} but not on the grid")),
                (_, Some(at)) => {
                    positioned += 1;
                    if self.grid.occupant_at(at) != Some(p) {
                        return fail(format!("{p} believes it is at {at}, grid disagrees"));
                    }
                }
            }
        }
        if positioned != self.grid.occupied_count() {
            return fail(format!(
                "{positioned} passengers positioned, {} cells occupied",
                self.grid.occupied_count()
            ));
        }
        if self.passengers.seated_count() < seated_before {
            return fail("seated count decreased".into());
        }
        Ok(())
    }
}
