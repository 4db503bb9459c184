//! Track History
//!
//! Fixed-capacity ring of per-tick snapshots kept in memory for display
//! and inspection. Oldest samples are evicted once capacity is reached.

use crate::TrackSnapshot;
use std::collections::VecDeque;

/// Ring buffer of [`TrackSnapshot`] records in chronological order.
pub struct TrackHistory {
    capacity: usize,
    samples: VecDeque<TrackSnapshot>,
}

impl TrackHistory {
    /// Capacity is clamped to at least one sample.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            samples: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a sample, evicting the oldest at capacity.
    pub fn push(&mut self, sample: TrackSnapshot) {
        if self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Samples oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &TrackSnapshot> {
        self.samples.iter()
    }

    pub fn latest(&self) -> Option<&TrackSnapshot> {
        self.samples.back()
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

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AngularErrors, AntennaAngles, AntennaCommands, TargetState};
    use nalgebra::Vector3;

    fn sample(time: f64) -> TrackSnapshot {
        TrackSnapshot {
            time,
            target: TargetState {
                position: Vector3::new(time, 0.0, 0.0),
                velocity: Vector3::zeros(),
            },
            antenna: AntennaAngles::default(),
            errors: AngularErrors::default(),
            commands: AntennaCommands::default(),
            sum_magnitude: 1.0,
        }
    }

    #[test]
    fn test_push_and_chronological_order() {
        let mut history = TrackHistory::new(8);
        for i in 0..5 {
            history.push(sample(i as f64));
        }
        assert_eq!(history.len(), 5);
        let times: Vec<f64> = history.iter().map(|s| s.time).collect();
        assert_eq!(times, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(history.latest().unwrap().time, 4.0);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = TrackHistory::new(3);
        for i in 0..6 {
            history.push(sample(i as f64));
        }
        assert_eq!(history.len(), 3);
        let times: Vec<f64> = history.iter().map(|s| s.time).collect();
        assert_eq!(times, vec![3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_zero_capacity_is_clamped_to_one() {
        let mut history = TrackHistory::new(0);
        assert_eq!(history.capacity(), 1);
        history.push(sample(1.0));
        history.push(sample(2.0));
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().unwrap().time, 2.0);
    }

    #[test]
    fn test_clear_empties_buffer() {
        let mut history = TrackHistory::new(4);
        history.push(sample(1.0));
        history.clear();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }
}
