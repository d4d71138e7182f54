//! Countdown scheduling.
//!
//! A chain is a one-shot entry that the event loop fires once it is due and
//! re-arms after each step that keeps the countdown going. Chains are plain
//! data driven from the UI loop, so no thread is ever spawned per timer.

use crate::domain::Day;
use crate::ticker::countdown_interval;
use std::time::{Duration, Instant};

/// Identity of a countdown chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// A chain that came due and was taken out of the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueTick {
    pub handle: TimerHandle,
    pub day: Day,
    pub task: String,
}

#[derive(Debug, Clone)]
struct Chain {
    handle: TimerHandle,
    day: Day,
    task: String,
    due: Instant,
}

/// Pending countdown chains, keyed by (day, task) but not unique per pair
#[derive(Debug)]
pub struct TimerEngine {
    pending: Vec<Chain>,
    next_handle: u64,
    interval: Duration,
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::with_interval(countdown_interval())
    }
}

impl TimerEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            pending: Vec::new(),
            next_handle: 1,
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Register a new chain for `task` that is due right away.
    ///
    /// An existing chain for the same task is left alone, so starting twice
    /// yields two chains stepping the same countdown.
    pub fn start(&mut self, day: Day, task: &str, now: Instant) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(Chain {
            handle,
            day,
            task: task.to_string(),
            due: now,
        });
        handle
    }

    /// Remove and return every chain due at `now`, oldest due first
    pub fn take_due(&mut self, now: Instant) -> Vec<DueTick> {
        let (mut due, waiting): (Vec<Chain>, Vec<Chain>) =
            self.pending.drain(..).partition(|chain| chain.due <= now);
        self.pending = waiting;

        due.sort_by_key(|chain| (chain.due, chain.handle));
        due.into_iter()
            .map(|chain| DueTick {
                handle: chain.handle,
                day: chain.day,
                task: chain.task,
            })
            .collect()
    }

    /// Schedule the next step of a chain one interval after `now`
    pub fn rearm(&mut self, tick: DueTick, now: Instant) {
        self.pending.push(Chain {
            handle: tick.handle,
            day: tick.day,
            task: tick.task,
            due: now + self.interval,
        });
    }

    /// Whether the chain is still scheduled
    pub fn is_live(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|chain| chain.handle == handle)
    }

    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|chain| chain.handle != handle);
        self.pending.len() != before
    }

    /// Cancel every chain of `task` on `day`, returning how many were dropped
    pub fn cancel_task(&mut self, day: Day, task: &str) -> usize {
        let before = self.pending.len();
        self.pending
            .retain(|chain| !(chain.day == day && chain.task == task));
        before - self.pending.len()
    }

    /// Cancel every chain of `day`, returning how many were dropped
    pub fn cancel_day(&mut self, day: Day) -> usize {
        let before = self.pending.len();
        self.pending.retain(|chain| chain.day != day);
        before - self.pending.len()
    }

    /// Number of scheduled chains for `task` on `day`
    pub fn chains_for(&self, day: Day, task: &str) -> usize {
        self.pending
            .iter()
            .filter(|chain| chain.day == day && chain.task == task)
            .count()
    }

    /// Earliest due instant among pending chains
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|chain| chain.due).min()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn test_start_is_due_immediately() {
        let mut engine = TimerEngine::new();
        let now = Instant::now();
        let handle = engine.start(Day::Monday, "Pushups", now);

        assert!(engine.is_live(handle));
        assert_eq!(engine.next_due(), Some(now));

        let due = engine.take_due(now);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].handle, handle);
        assert_eq!(due[0].task, "Pushups");
        assert!(!engine.is_live(handle));
        assert!(engine.is_empty());
    }

    #[test]
    fn test_rearm_waits_one_interval() {
        let mut engine = TimerEngine::new();
        let start = Instant::now();
        engine.start(Day::Monday, "Pushups", start);

        let tick = engine.take_due(start).remove(0);
        let handle = tick.handle;
        engine.rearm(tick, start);

        assert!(engine.is_live(handle));
        assert!(engine.take_due(start + Duration::from_millis(999)).is_empty());

        let due = engine.take_due(start + SECOND);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].handle, handle);
    }

    #[test]
    fn test_duplicate_chains_are_independent() {
        let mut engine = TimerEngine::new();
        let now = Instant::now();
        let first = engine.start(Day::Friday, "Run", now);
        let second = engine.start(Day::Friday, "Run", now);

        assert_ne!(first, second);
        assert_eq!(engine.chains_for(Day::Friday, "Run"), 2);

        let due = engine.take_due(now);
        let handles: Vec<TimerHandle> = due.iter().map(|t| t.handle).collect();
        assert_eq!(handles, vec![first, second]);
    }

    #[test]
    fn test_cancel_variants() {
        let mut engine = TimerEngine::new();
        let now = Instant::now();
        let a = engine.start(Day::Monday, "A", now);
        engine.start(Day::Monday, "B", now);
        engine.start(Day::Monday, "B", now);
        engine.start(Day::Tuesday, "B", now);

        assert!(engine.cancel(a));
        assert!(!engine.cancel(a));
        assert_eq!(engine.cancel_task(Day::Monday, "B"), 2);
        assert_eq!(engine.chains_for(Day::Tuesday, "B"), 1);
        assert_eq!(engine.cancel_day(Day::Tuesday), 1);
        assert!(engine.is_empty());
    }

    #[test]
    fn test_custom_interval() {
        let mut engine = TimerEngine::with_interval(Duration::from_millis(10));
        let now = Instant::now();
        engine.start(Day::Saturday, "Swim", now);
        let tick = engine.take_due(now).remove(0);
        engine.rearm(tick, now);

        assert_eq!(engine.interval(), Duration::from_millis(10));
        assert_eq!(engine.next_due(), Some(now + Duration::from_millis(10)));
    }
}
