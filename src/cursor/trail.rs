//! Bounded trail of recent pointer positions.
//!
//! Oldest first. Rendering fades older ghosts: entry `i` of `n` gets
//! `((i + 1) / n) * max_opacity`.

use std::collections::VecDeque;

use super::events::PointerSample;

/// FIFO history of pointer samples, capped at `capacity`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    samples: VecDeque<PointerSample>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Push a sample, then drop from the front until within capacity.
    pub fn append(&mut self, sample: PointerSample) {
        self.samples.push_back(sample);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointerSample> + '_ {
        self.samples.iter()
    }

    /// Opacity of the entry at `index` for the current length.
    pub fn opacity_at(&self, index: usize, max_opacity: f64) -> f64 {
        ghost_opacity(index, self.samples.len(), max_opacity)
    }
}

/// `((index + 1) / len) * max_opacity`, or 0 for an empty trail.
pub fn ghost_opacity(index: usize, len: usize, max_opacity: f64) -> f64 {
    if len == 0 {
        return 0.0;
    }
    ((index + 1) as f64 / len as f64) * max_opacity
}
