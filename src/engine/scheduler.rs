//! Timer queue for deferred game actions
//!
//! Stands in for chained timeout callbacks: actions are queued with a due
//! time and handed back, in order, once the caller's clock passes them.

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
    time::Duration,
};

struct Entry<A> {
    due: Duration,
    /// Insertion counter, breaks ties so equal due times stay FIFO
    seq: u64,
    action: A,
}

impl<A> Entry<A> {
    fn key(&self) -> (Duration, u64) {
        (self.due, self.seq)
    }
}

impl<A> PartialEq for Entry<A> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<A> Eq for Entry<A> {}

impl<A> PartialOrd for Entry<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A> Ord for Entry<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Min-heap of actions keyed by due time
pub struct Scheduler<A> {
    queue: BinaryHeap<Reverse<Entry<A>>>,
    next_seq: u64,
}

impl<A> Scheduler<A> {
    pub fn new() -> Self {
        Self {
            queue: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Queue `action` to fire once the clock reaches `due`
    pub fn schedule(&mut self, due: Duration, action: A) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(Entry { due, seq, action }));
    }

    /// Remove and return the earliest action due at or before `now`
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, A)> {
        if self.next_due()? > now {
            return None;
        }
        self.queue
            .pop()
            .map(|Reverse(entry)| (entry.due, entry.action))
    }

    /// Due time of the earliest pending action
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse(entry)| entry.due)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drop every pending action
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn pops_in_due_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(300), "c");
        scheduler.schedule(ms(100), "a");
        scheduler.schedule(ms(200), "b");

        assert_eq!(scheduler.next_due(), Some(ms(100)));
        let fired: Vec<_> = std::iter::from_fn(|| scheduler.pop_due(ms(1_000)))
            .map(|(_, a)| a)
            .collect();
        assert_eq!(fired, vec!["a", "b", "c"]);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn equal_due_times_are_fifo() {
        let mut scheduler = Scheduler::new();
        for i in 0..5 {
            scheduler.schedule(ms(50), i);
        }
        let fired: Vec<_> = std::iter::from_fn(|| scheduler.pop_due(ms(50)))
            .map(|(_, a)| a)
            .collect();
        assert_eq!(fired, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn holds_back_future_actions() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(100), 1);
        scheduler.schedule(ms(500), 2);

        assert_eq!(scheduler.pop_due(ms(99)), None);
        assert_eq!(scheduler.pop_due(ms(100)), Some((ms(100), 1)));
        assert_eq!(scheduler.pop_due(ms(499)), None);
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn clear_drops_everything() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(1), ());
        scheduler.schedule(ms(2), ());
        scheduler.clear();
        assert!(scheduler.is_empty());
        assert_eq!(scheduler.next_due(), None);
        assert_eq!(scheduler.pop_due(ms(10)), None);
    }
}
