use crate::TcError;

use super::{Interval, Time};

/// A map from one time to another, e.g. for clips
/// played back at a different speed than recorded.
pub trait Speed {
    /// Returns the time that `time` maps to.
    fn map(&self, time: &Time) -> Result<Time, TcError>;
}

/// Linear speed map, e.g. 2.0x. The origin is the
/// start of the interval. Output is unclipped (no loops).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearSpeed {
    interval: Interval,
    scale: f64,
}

impl LinearSpeed {
    pub fn new(interval: Interval, scale: f64) -> Self {
        Self { interval, scale }
    }

    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    /// Realtime multiplier.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Speed for LinearSpeed {
    /// `start + (time - start) * scale`
    fn map(&self, time: &Time) -> Result<Time, TcError> {
        let start = self.interval.start();
        let delta = time.try_sub(&start)? * self.scale;
        start.try_add(&delta)
    }
}
