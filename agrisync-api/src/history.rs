use std::collections::VecDeque;

use serde::{Serialize, Serializer};

/// Bounded FIFO of recent rounded samples for one channel.
///
/// Holds at most `capacity` entries in insertion order, oldest first.
/// Appending at capacity evicts the oldest sample before the new one is
/// stored, so survivors keep their relative order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelHistory {
    samples: VecDeque<i32>,
    capacity: usize,
}

impl ChannelHistory {
    /// Rolling window length used by the dashboard.
    pub const DEFAULT_CAPACITY: usize = 10;

    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Creates a history pre-filled with seed samples. A seed longer than
    /// the capacity keeps only its newest entries.
    pub fn from_seed(capacity: usize, seed: &[i32]) -> Self {
        let mut history = Self::new(capacity);
        for &sample in seed {
            history.push(sample);
        }
        history
    }

    /// Appends a sample, evicting the oldest one when at capacity.
    pub fn push(&mut self, sample: i32) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the last `n` samples in insertion order, or the whole
    /// history when it holds fewer than `n`.
    pub fn last(&self, n: usize) -> Vec<i32> {
        let skip = self.samples.len().saturating_sub(n);
        self.samples.iter().skip(skip).copied().collect()
    }

    /// Returns the k-th most recent sample (1 = most recent), or `None`
    /// when the history holds fewer than `k` samples.
    pub fn last_at(&self, k: usize) -> Option<i32> {
        if k == 0 {
            return None;
        }
        self.samples
            .len()
            .checked_sub(k)
            .map(|index| self.samples[index])
    }

    /// Most recent sample, if any.
    pub fn latest(&self) -> Option<i32> {
        self.samples.back().copied()
    }

    /// Owned copy of the full window, oldest first.
    pub fn to_vec(&self) -> Vec<i32> {
        self.samples.iter().copied().collect()
    }
}

impl Serialize for ChannelHistory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.samples.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_below_capacity() {
        let mut history = ChannelHistory::new(4);
        history.push(1);
        history.push(2);
        history.push(3);

        assert_eq!(history.len(), 3);
        assert_eq!(history.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_push_at_capacity_evicts_oldest() {
        let mut history = ChannelHistory::from_seed(3, &[1, 2, 3]);
        history.push(4);

        assert_eq!(history.len(), 3);
        assert_eq!(history.to_vec(), vec![2, 3, 4]);
    }

    #[test]
    fn test_reference_eviction_sequence() {
        let seed = [62, 65, 68, 64, 67, 65, 63, 66, 64, 68];
        let mut history = ChannelHistory::from_seed(10, &seed);
        history.push(67);

        assert_eq!(
            history.to_vec(),
            vec![65, 68, 64, 67, 65, 63, 66, 64, 68, 67]
        );
    }

    #[test]
    fn test_from_seed_longer_than_capacity() {
        let history = ChannelHistory::from_seed(3, &[1, 2, 3, 4, 5]);

        assert_eq!(history.to_vec(), vec![3, 4, 5]);
    }

    #[test]
    fn test_last_window() {
        let history = ChannelHistory::from_seed(10, &[1, 2, 3, 4, 5, 6, 7, 8]);

        assert_eq!(history.last(6), vec![3, 4, 5, 6, 7, 8]);
        assert_eq!(history.last(8), vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(history.last(20), vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(history.last(0), Vec::<i32>::new());
    }

    #[test]
    fn test_last_window_shorter_history() {
        let history = ChannelHistory::from_seed(10, &[4, 5, 6]);

        assert_eq!(history.last(6), vec![4, 5, 6]);
    }

    #[test]
    fn test_last_at() {
        let history = ChannelHistory::from_seed(10, &[10, 20, 30]);

        assert_eq!(history.last_at(1), Some(30));
        assert_eq!(history.last_at(2), Some(20));
        assert_eq!(history.last_at(3), Some(10));
        assert_eq!(history.last_at(4), None);
        assert_eq!(history.last_at(0), None);
    }

    #[test]
    fn test_serialize_as_sequence() {
        let history = ChannelHistory::from_seed(10, &[1, 2, 3]);
        let json = serde_json::to_string(&history).unwrap();

        assert_eq!(json, "[1,2,3]");
    }
}
