//! Temporal smoothing of per-frame gesture labels.
//!
//! Keeps a bounded window of recent labels for one tracked hand and
//! reports the majority, so a gesture has to dominate several frames
//! before it is treated as stable.

use crate::gestures::GestureLabel;
use std::collections::VecDeque;

/// Sliding-window majority vote over gesture labels
#[derive(Debug, Clone)]
pub struct GestureSmoother {
    capacity: usize,
    history: VecDeque<GestureLabel>,
}

impl GestureSmoother {
    /// Create a smoother holding up to `capacity` labels
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Window size must be greater than 0");
        Self {
            capacity,
            history: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a label, evicting the oldest when full
    pub fn push(&mut self, label: GestureLabel) {
        if self.history.len() >= self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(label);
    }

    /// Most frequent label and its vote count.
    ///
    /// Ties go to the tied label that appears earliest in the window.
    /// An empty window yields `(Unknown, 0)`.
    pub fn majority(&self) -> (GestureLabel, usize) {
        let mut counts = [0usize; GestureLabel::ALL.len()];
        let mut order: Vec<GestureLabel> = Vec::with_capacity(GestureLabel::ALL.len());

        for &label in &self.history {
            if counts[label.index()] == 0 {
                order.push(label);
            }
            counts[label.index()] += 1;
        }

        let mut best = (GestureLabel::Unknown, 0);
        for label in order {
            let votes = counts[label.index()];
            if votes > best.1 {
                best = (label, votes);
            }
        }
        best
    }

    /// Labels currently in the window, oldest first
    pub fn history(&self) -> impl Iterator<Item = &GestureLabel> {
        self.history.iter()
    }

    /// Number of labels held
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether the window is empty
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Maximum number of labels held
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gestures::GestureLabel::{Fist, OpenPalm, Peace, Pointing, Unknown};

    fn smoother_with(capacity: usize, labels: &[GestureLabel]) -> GestureSmoother {
        let mut smoother = GestureSmoother::new(capacity);
        for &label in labels {
            smoother.push(label);
        }
        smoother
    }

    #[test]
    fn test_empty_majority() {
        let smoother = GestureSmoother::new(7);
        assert_eq!(smoother.majority(), (Unknown, 0));
        assert!(smoother.is_empty());
    }

    #[test]
    fn test_majority_counts() {
        let smoother = smoother_with(7, &[Fist, Fist, Peace, Fist]);
        assert_eq!(smoother.majority(), (Fist, 3));
    }

    #[test]
    fn test_tie_goes_to_earliest() {
        let smoother = smoother_with(4, &[Peace, Fist, Peace, Fist]);
        assert_eq!(smoother.majority(), (Peace, 2));

        let smoother = smoother_with(4, &[Fist, Peace, Peace, Fist]);
        assert_eq!(smoother.majority(), (Fist, 2));
    }

    #[test]
    fn test_tie_break_follows_eviction() {
        // Pointing is evicted, so Peace becomes the earliest of the tied labels
        let smoother = smoother_with(4, &[Pointing, Peace, OpenPalm, Peace, OpenPalm]);
        assert_eq!(smoother.len(), 4);
        assert_eq!(smoother.majority(), (Peace, 2));
    }

    #[test]
    fn test_capacity_bound() {
        let mut smoother = GestureSmoother::new(3);
        for _ in 0..10 {
            smoother.push(Fist);
        }
        assert_eq!(smoother.len(), 3);
        assert_eq!(smoother.majority(), (Fist, 3));

        smoother.push(Peace);
        assert_eq!(smoother.history().copied().collect::<Vec<_>>(), vec![Fist, Fist, Peace]);
    }

    #[test]
    #[should_panic(expected = "Window size must be greater than 0")]
    fn test_zero_capacity() {
        let _ = GestureSmoother::new(0);
    }
}
