// File: src/core/memory.rs
use std::collections::HashMap;
use std::hash::Hash;

/// A fixed-capacity window of recently produced keys, ordered by age.
///
/// Age 0 is the most recent push. Ages are always distinct and lie in
/// `0..capacity`; the entry at age `capacity - 1` is the next to go.
#[derive(Debug, Clone)]
pub struct RecencyMemory<T> {
    ages: HashMap<T, usize>,
    capacity: usize,
}

impl<T: Eq + Hash + Clone> RecencyMemory<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            ages: HashMap::with_capacity(capacity),
            capacity,
        }
    }

    pub fn has_recent(&self, item: &T) -> bool {
        self.ages.contains_key(item)
    }

    pub fn age(&self, item: &T) -> Option<usize> {
        self.ages.get(item).copied()
    }

    /// Marks `item` as the most recent entry.
    ///
    /// A new item ages every tracked entry by one and evicts the oldest when
    /// the window is full. A tracked item is refreshed in place: only the
    /// entries younger than it move, and nothing is evicted.
    /// O(capacity).
    pub fn push(&mut self, item: T) {
        if self.capacity == 0 {
            return;
        }

        match self.ages.get(&item).copied() {
            Some(previous) => {
                for age in self.ages.values_mut() {
                    if *age < previous {
                        *age += 1;
                    }
                }
            }
            None => {
                let oldest = self.capacity - 1;
                self.ages.retain(|_, age| *age < oldest);
                for age in self.ages.values_mut() {
                    *age += 1;
                }
            }
        }
        self.ages.insert(item, 0);
    }

    pub fn len(&self) -> usize {
        self.ages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ages.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.ages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_entry_is_evicted_when_full() {
        let mut mem = RecencyMemory::new(3);

        mem.push("first");
        assert!(mem.has_recent(&"first"));

        mem.push("second");
        assert!(mem.has_recent(&"first"));
        assert!(mem.has_recent(&"second"));

        mem.push("third");
        assert!(mem.has_recent(&"first"));
        assert!(mem.has_recent(&"second"));
        assert!(mem.has_recent(&"third"));

        mem.push("fourth");
        assert!(!mem.has_recent(&"first"));
        assert!(mem.has_recent(&"second"));
        assert!(mem.has_recent(&"third"));
        assert!(mem.has_recent(&"fourth"));
        assert_eq!(mem.len(), 3);
    }

    #[test]
    fn refresh_does_not_evict() {
        let mut mem = RecencyMemory::new(3);
        mem.push('a');
        mem.push('b');
        mem.push('c');

        mem.push('b');
        assert_eq!(mem.age(&'b'), Some(0));
        assert_eq!(mem.age(&'c'), Some(1));
        assert_eq!(mem.age(&'a'), Some(2));

        // 'a' sits in the oldest slot; refreshing it evicts nobody.
        mem.push('a');
        assert_eq!(mem.len(), 3);
        assert_eq!(mem.age(&'a'), Some(0));
        assert_eq!(mem.age(&'b'), Some(1));
        assert_eq!(mem.age(&'c'), Some(2));

        mem.push('d');
        assert!(!mem.has_recent(&'c'));
        assert!(mem.has_recent(&'a'));
        assert!(mem.has_recent(&'b'));
    }

    #[test]
    fn refreshing_the_newest_changes_nothing() {
        let mut mem = RecencyMemory::new(2);
        mem.push(1);
        mem.push(2);
        mem.push(2);
        assert_eq!(mem.age(&2), Some(0));
        assert_eq!(mem.age(&1), Some(1));
    }

    #[test]
    fn zero_capacity_tracks_nothing() {
        let mut mem = RecencyMemory::new(0);
        mem.push("x");
        mem.push("x");
        assert!(!mem.has_recent(&"x"));
        assert!(mem.is_empty());
    }

    #[test]
    fn capacity_one_keeps_only_latest() {
        let mut mem = RecencyMemory::new(1);
        mem.push("x");
        mem.push("y");
        assert!(!mem.has_recent(&"x"));
        assert_eq!(mem.age(&"y"), Some(0));
    }
}
