//! Cooperative task scheduling on a virtual clock
//!
//! Three kinds of work interleave on one execution context: the frame step,
//! the 1 Hz countdown, and the self-rescheduling spawn. Each kind has at most
//! one pending slot. A slot carries the generation it was scheduled under;
//! `cancel_all` bumps the generation and empties every slot, so nothing queued
//! before a reset or end can fire afterward.

use serde::{Deserialize, Serialize};

/// Kinds of scheduled work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskKind {
    Frame,
    Countdown,
    Spawn,
}

impl TaskKind {
    pub const ALL: [TaskKind; 3] = [TaskKind::Frame, TaskKind::Countdown, TaskKind::Spawn];

    fn slot(self) -> usize {
        match self {
            TaskKind::Frame => 0,
            TaskKind::Countdown => 1,
            TaskKind::Spawn => 2,
        }
    }
}

/// Revocable token for a pending task
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaskHandle {
    pub kind: TaskKind,
    pub due_ms: f64,
    pub generation: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scheduler {
    now_ms: f64,
    generation: u64,
    slots: [Option<TaskHandle>; 3],
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Schedule `kind` to fire `delay_ms` from now, replacing any pending one
    pub fn schedule(&mut self, kind: TaskKind, delay_ms: f64) -> TaskHandle {
        let handle = TaskHandle {
            kind,
            due_ms: self.now_ms + delay_ms.max(0.0),
            generation: self.generation,
        };
        self.slots[kind.slot()] = Some(handle);
        handle
    }

    pub fn pending(&self, kind: TaskKind) -> Option<TaskHandle> {
        self.slots[kind.slot()]
    }

    pub fn has_pending(&self) -> bool {
        self.slots.iter().any(Option::is_some)
    }

    /// Revoke every pending task
    pub fn cancel_all(&mut self) {
        self.generation += 1;
        self.slots = [None; 3];
    }

    /// Take the earliest task due at or before `until_ms`, moving the clock to
    /// its due time. Ties go to the lowest slot (frame, countdown, spawn).
    pub fn pop_due(&mut self, until_ms: f64) -> Option<TaskHandle> {
        let next = self
            .slots
            .iter()
            .flatten()
            .filter(|h| h.due_ms <= until_ms)
            .min_by(|a, b| {
                a.due_ms
                    .partial_cmp(&b.due_ms)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .copied()?;
        self.slots[next.kind.slot()] = None;
        self.now_ms = self.now_ms.max(next.due_ms);
        Some(next)
    }

    /// Move the clock forward with nothing left to run
    pub fn settle(&mut self, until_ms: f64) {
        self.now_ms = self.now_ms.max(until_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_due_order() {
        let mut s = Scheduler::new();
        s.schedule(TaskKind::Spawn, 900.0);
        s.schedule(TaskKind::Countdown, 1000.0);
        s.schedule(TaskKind::Frame, 16.0);

        assert_eq!(s.pop_due(2000.0).map(|h| h.kind), Some(TaskKind::Frame));
        assert_eq!(s.now_ms(), 16.0);
        assert_eq!(s.pop_due(2000.0).map(|h| h.kind), Some(TaskKind::Spawn));
        assert_eq!(s.pop_due(2000.0).map(|h| h.kind), Some(TaskKind::Countdown));
        assert_eq!(s.pop_due(2000.0), None);
    }

    #[test]
    fn test_not_due_yet() {
        let mut s = Scheduler::new();
        s.schedule(TaskKind::Countdown, 1000.0);
        assert_eq!(s.pop_due(999.0), None);
        assert!(s.pending(TaskKind::Countdown).is_some());
    }

    #[test]
    fn test_ties_go_to_frame_first() {
        let mut s = Scheduler::new();
        s.schedule(TaskKind::Spawn, 100.0);
        s.schedule(TaskKind::Frame, 100.0);
        assert_eq!(s.pop_due(100.0).map(|h| h.kind), Some(TaskKind::Frame));
    }

    #[test]
    fn test_cancel_all_revokes_handles() {
        let mut s = Scheduler::new();
        let h = s.schedule(TaskKind::Spawn, 10.0);
        assert_eq!(h.generation, s.generation());
        s.cancel_all();
        assert_ne!(h.generation, s.generation());
        assert!(!s.has_pending());
        assert_eq!(s.pop_due(f64::MAX), None);

        // Rescheduling after cancellation yields a handle from the new generation
        let h2 = s.schedule(TaskKind::Spawn, 10.0);
        assert_ne!(h.generation, h2.generation);
    }

    #[test]
    fn test_reschedule_replaces_slot() {
        let mut s = Scheduler::new();
        s.schedule(TaskKind::Spawn, 900.0);
        s.schedule(TaskKind::Spawn, 300.0);
        let h = s.pop_due(1000.0).expect("due");
        assert_eq!(h.due_ms, 300.0);
        assert_eq!(s.pop_due(1000.0), None);
    }
}
