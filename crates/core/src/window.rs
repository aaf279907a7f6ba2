use std::collections::VecDeque;
use tracing::debug;

/// Number of samples kept when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 10;

/// Bounded FIFO of the most recent samples plus their arithmetic mean.
///
/// Once the window holds `capacity` samples, every insertion evicts the
/// oldest one before appending.
#[derive(Debug, Clone)]
pub struct WindowAverager {
    window:   VecDeque<f64>,
    capacity: usize,
}

/// Immutable record of one insertion.
///
/// Both windows are owned copies, so a snapshot stays stable while the
/// averager keeps mutating.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Window contents before the insertion.
    pub previous_window: Vec<f64>,
    /// Window contents after the insertion.
    pub current_window:  Vec<f64>,
    /// Samples added by this insertion (always exactly one).
    pub added_samples:   Vec<f64>,
    /// Mean of `current_window`.
    pub average:         f64,
}

impl Default for WindowAverager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowAverager {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// A capacity of zero is clamped to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            window: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push `sample`, evicting the oldest value when full.
    pub fn insert(&mut self, sample: f64) -> Snapshot {
        let previous_window = self.window();

        if self.window.len() >= self.capacity {
            self.window.pop_front();
        }
        self.window.push_back(sample);

        let current_window = self.window();
        let average = mean(&current_window);

        debug!(
            sample,
            len = current_window.len(),
            average,
            "sample inserted"
        );

        Snapshot {
            previous_window,
            current_window,
            added_samples: vec![sample],
            average,
        }
    }

    /// Copy of the resident samples, oldest first.
    pub fn window(&self) -> Vec<f64> {
        self.window.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn average(&self) -> f64 {
        mean(&self.window())
    }
}

/// Arithmetic mean; `0.0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
