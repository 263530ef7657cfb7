//! Deferred effects on a virtual clock.
//!
//! Labs delay some outcomes ("analyzing..." pauses, auto-advancing between
//! puzzle levels). Rather than owning real timers, the core queues the effect
//! here and the front end advances the clock on every tick. Each entry carries
//! the [`CancellationToken`] of the session that scheduled it; once that token
//! is cancelled the entry is dropped without ever being returned.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Shared cancel flag tied to the lifetime of one lab session
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
struct Entry<E> {
    due: Duration,
    seq: u64,
    token: CancellationToken,
    effect: E,
}

/// Fire-once effect queue driven by [`Scheduler::advance`]
#[derive(Debug)]
pub struct Scheduler<E> {
    now: Duration,
    next_seq: u64,
    entries: Vec<Entry<E>>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            entries: Vec::new(),
        }
    }

    /// Time elapsed on the virtual clock
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of live (not cancelled) entries
    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| !e.token.is_cancelled())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn schedule(&mut self, delay: Duration, token: &CancellationToken, effect: E) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            due: self.now + delay,
            seq,
            token: token.clone(),
            effect,
        });
    }

    /// Drop every entry whose session was cancelled
    pub fn purge_cancelled(&mut self) {
        self.entries.retain(|e| !e.token.is_cancelled());
    }

    /// Move the clock forward and return the effects that came due, oldest first.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<E> {
        self.now += elapsed;
        self.purge_cancelled();

        let now = self.now;
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.entries.drain(..).partition(|e| e.due <= now);
        self.entries = pending;

        due.sort_by_key(|e| (e.due, e.seq));
        due.into_iter().map(|e| e.effect).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effects_fire_in_due_order() {
        let token = CancellationToken::new();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Duration::from_millis(300), &token, "late");
        scheduler.schedule(Duration::from_millis(100), &token, "early");

        assert!(scheduler.advance(Duration::from_millis(50)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_millis(250)), vec!["early", "late"]);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_cancelled_entries_never_fire() {
        let token = CancellationToken::new();
        let other = CancellationToken::new();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Duration::from_millis(10), &token, 1);
        scheduler.schedule(Duration::from_millis(10), &other, 2);

        token.cancel();
        assert_eq!(scheduler.len(), 1);
        assert_eq!(scheduler.advance(Duration::from_secs(1)), vec![2]);
    }

    #[test]
    fn test_same_due_time_keeps_schedule_order() {
        let token = CancellationToken::new();
        let mut scheduler = Scheduler::new();
        for n in 0..5 {
            scheduler.schedule(Duration::from_millis(20), &token, n);
        }
        assert_eq!(
            scheduler.advance(Duration::from_millis(20)),
            vec![0, 1, 2, 3, 4]
        );
    }
}
