//! Session state machine and driver
//!
//! `Game` owns the state aggregate, the held input, the scheduler and the RNG.
//! Every task handler runs to completion before the next one starts, so no
//! locking is involved: mutation is interleaved, never concurrent.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::input::{InputEvent, InputState};
use super::scheduler::{Scheduler, TaskHandle, TaskKind};
use super::spawner::spawn_projectile;
use super::state::{EndReason, GameEvent, GameState, SessionPhase};
use super::tick::{countdown_step, frame_step};
use crate::consts::{COUNTDOWN_MS, FRAME_MS, MAX_ADVANCE_MS};
use crate::tuning::Tuning;
use crate::view::RenderSnapshot;

pub struct Game {
    state: GameState,
    input: InputState,
    tuning: Tuning,
    scheduler: Scheduler,
    rng: Pcg32,
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            state: GameState::new(&tuning),
            input: InputState::default(),
            tuning,
            scheduler: Scheduler::new(),
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for scripted setups (tests, demos)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase
    }

    /// Begin a round from Idle or Ended. Returns false (and does nothing) while
    /// a round is already running.
    pub fn start(&mut self) -> bool {
        if self.state.is_running() {
            return false;
        }

        self.scheduler.cancel_all();
        self.state.restore_initial(&self.tuning);
        self.state.phase = SessionPhase::Running;
        self.state.fresh = false;

        self.scheduler.schedule(TaskKind::Frame, FRAME_MS);
        self.scheduler.schedule(TaskKind::Countdown, COUNTDOWN_MS);
        self.scheduler
            .schedule(TaskKind::Spawn, self.state.difficulty.spawn_interval_ms);

        self.events.push(GameEvent::Started);
        self.events.push(GameEvent::BackdropPlay);
        log::info!("Round started ({}s)", self.state.time_remaining);
        true
    }

    /// Stop everything and return to Idle with fresh round values. Valid from any phase.
    pub fn reset(&mut self) {
        self.scheduler.cancel_all();
        self.state.restore_initial(&self.tuning);
        self.state.phase = SessionPhase::Idle;
        self.state.fresh = false;

        self.events.push(GameEvent::Reset);
        self.events.push(GameEvent::BackdropStop);
        log::info!("Game reset");
    }

    /// Finish a running round. The final score is kept for display.
    pub fn end(&mut self, reason: EndReason) -> bool {
        if !self.state.is_running() {
            return false;
        }

        self.scheduler.cancel_all();
        self.state.phase = SessionPhase::Ended(reason);
        self.state.projectiles.clear();

        self.events.push(GameEvent::Ended {
            reason,
            score: self.state.score,
        });
        self.events.push(GameEvent::BackdropStop);
        log::info!(
            "Round ended ({:?}) with score {} at {}s left",
            reason,
            self.state.score,
            self.state.time_remaining
        );
        true
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Pressed(dir) => self.input.set(dir, true),
            InputEvent::Released(dir) => self.input.set(dir, false),
            InputEvent::StartRequested => {
                if !self.state.is_running() {
                    self.start();
                }
            }
            InputEvent::ResetRequested => self.reset(),
        }
    }

    /// Advance the virtual clock by `dt_ms` of wall time, running every task that
    /// comes due in order.
    pub fn advance(&mut self, dt_ms: f64) {
        let dt = dt_ms.clamp(0.0, MAX_ADVANCE_MS);
        let until = self.scheduler.now_ms() + dt;
        while let Some(handle) = self.scheduler.pop_due(until) {
            self.run_task(handle);
        }
        self.scheduler.settle(until);
    }

    fn run_task(&mut self, handle: TaskHandle) {
        // A task revoked between being queued and firing lands here as a no-op
        if handle.generation != self.scheduler.generation() || !self.state.is_running() {
            return;
        }

        match handle.kind {
            TaskKind::Frame => {
                match frame_step(&mut self.state, &self.input, &self.tuning, &mut self.events) {
                    Some(reason) => {
                        self.end(reason);
                    }
                    None => {
                        self.scheduler.schedule(TaskKind::Frame, FRAME_MS);
                    }
                }
            }
            TaskKind::Countdown => match countdown_step(&mut self.state, &self.tuning, &mut self.events) {
                Some(reason) => {
                    self.end(reason);
                }
                None => {
                    self.scheduler.schedule(TaskKind::Countdown, COUNTDOWN_MS);
                }
            },
            TaskKind::Spawn => {
                if let Some(idx) = spawn_projectile(&mut self.state, &mut self.rng) {
                    self.events
                        .push(GameEvent::Spawned(self.state.projectiles[idx].kind));
                }
                // Next spawn uses whatever interval is in effect right now
                self.scheduler
                    .schedule(TaskKind::Spawn, self.state.difficulty.spawn_interval_ms);
            }
        }
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::from_state(&self.state)
    }
}
