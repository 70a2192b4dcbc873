// Time-windowed input buffer

use super::action::ActionKind;
use std::collections::VecDeque;

/// How long a press stays eligible for consumption (in seconds)
pub const ACTION_VALIDITY_WINDOW: f32 = 0.8;

/// A single timestamped press
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSample {
    pub kind: ActionKind,
    /// Simulation time of the press, in seconds
    pub received_at: f64,
}

impl InputSample {
    pub fn new(kind: ActionKind, received_at: f64) -> Self {
        Self { kind, received_at }
    }

    /// Check whether the sample can still be consumed at `now`
    pub fn is_valid(&self, now: f64, window: f32) -> bool {
        self.received_at + f64::from(window) >= now
    }
}

/// FIFO of presses waiting for the simulation step
///
/// Consumption walks the queue oldest-first and removes every sample it looks
/// at. The first sample still inside its validity window is returned; stale
/// ones in front of it are dropped on the way. Samples behind the returned one
/// are left for later ticks.
#[derive(Debug)]
pub struct InputBuffer {
    samples: VecDeque<InputSample>,
    window: f32,
}

impl InputBuffer {
    /// Create a buffer with the standard validity window
    pub fn new() -> Self {
        Self::with_window(ACTION_VALIDITY_WINDOW)
    }

    /// Create a buffer with a custom validity window
    pub fn with_window(window: f32) -> Self {
        Self {
            samples: VecDeque::new(),
            window,
        }
    }

    /// Append a press. Duplicates are kept.
    pub fn record(&mut self, kind: ActionKind, now: f64) {
        self.samples.push_back(InputSample::new(kind, now));
    }

    /// Pop samples until a valid one is found
    pub fn consume_one(&mut self, now: f64) -> Option<ActionKind> {
        while let Some(sample) = self.samples.pop_front() {
            if sample.is_valid(now, self.window) {
                return Some(sample.kind);
            }
            log::trace!(
                "Discarded expired {:?} press ({:.3}s old)",
                sample.kind,
                now - sample.received_at
            );
        }
        None
    }

    /// Peek at the oldest pending sample
    pub fn front(&self) -> Option<&InputSample> {
        self.samples.front()
    }

    pub fn window(&self) -> f32 {
        self.window
    }

    /// Clear all buffered presses
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new()
    }
}
