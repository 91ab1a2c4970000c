use std::fmt;

use crate::TcError;

use super::{Time, TimeBase};

/// Where a `Time` lies relative to an `Interval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Before,
    Inside,
    After,
}

/// Contiguous interval from a start to an end time.
///
/// The end is available either as timecode or as frame:
/// the end timecode is exclusive (first time not part of the interval),
/// the end frame is inclusive (last frame part of the interval),
/// and the two are always exactly one frame apart.
/// Frame range 1 - 2 is frames 1 and 2.
/// Timecode range 00:00:00:01 - 00:00:00:02 is one frame 00:00:00:01.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    start: Time,
    end_tc: Time,
}

impl Interval {
    /// New interval from start and exclusive end timecode.
    /// Zero length intervals, where `end_tc` equals `start`, are allowed.
    pub fn from_end_tc(start: Time, end_tc: Time) -> Result<Self, TcError> {
        start.check_base(&end_tc.base())?;
        if end_tc.frame() < start.frame() {
            return Err(TcError::NegativeInterval{start: start.frame(), end: end_tc.frame()})
        }
        Ok(Self { start, end_tc })
    }

    /// New interval from start and inclusive end frame.
    pub fn from_end_fr(start: Time, end_fr: Time) -> Result<Self, TcError> {
        start.check_base(&end_fr.base())?;
        if end_fr.frame() < start.frame() {
            return Err(TcError::NegativeInterval{start: start.frame(), end: end_fr.frame()})
        }
        Ok(Self {
            start,
            end_tc: Time::new(end_fr.frame() + 1, end_fr.base()),
        })
    }

    pub fn start(&self) -> Time {
        self.start
    }

    /// Exclusive end.
    pub fn end_tc(&self) -> Time {
        self.end_tc
    }

    /// Inclusive end.
    pub fn end_fr(&self) -> Time {
        Time::new(self.end_tc.frame() - 1, self.end_tc.base())
    }

    pub fn base(&self) -> TimeBase {
        self.start.base()
    }

    /// Length in frames.
    pub fn len(&self) -> i64 {
        self.end_tc.frame() - self.start.frame()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns duration as a time value.
    pub fn duration(&self) -> Time {
        Time::new(self.len(), self.base())
    }

    /// Returns string representing interval in frames.
    /// Note that end frame is inclusive.
    pub fn as_fr(&self) -> String {
        format!("{} - {}", self.start.frame(), self.end_fr().frame())
    }

    /// Returns string representing interval as timecode.
    /// Note that end timecode is exclusive.
    pub fn as_tc(&self) -> String {
        format!("{} - {}", self.start, self.end_tc)
    }

    /// Iterates over each frame in the interval.
    pub fn frames(&self) -> impl Iterator<Item = Time> {
        let base = self.base();
        (self.start.frame() .. self.end_tc.frame())
            .map(move |f| Time::new(f, base))
    }

    /// Returns `true` if `time` is within the interval. Bases must match.
    pub fn contains(&self, time: &Time) -> Result<bool, TcError> {
        time.check_base(&self.base())?;
        Ok(self.start.frame() <= time.frame() && time.frame() < self.end_tc.frame())
    }

    /// Returns `true` if `other` is completely within the interval.
    /// Bases must match.
    pub fn contains_interval(&self, other: &Interval) -> Result<bool, TcError> {
        other.start.check_base(&self.base())?;
        Ok(other.start.frame() >= self.start.frame() && other.end_tc.frame() <= self.end_tc.frame())
    }

    /// Returns a single, new interval encompassing both.
    pub fn merge(&self, other: &Interval) -> Result<Interval, TcError> {
        other.start.check_base(&self.base())?;
        let start = self.start.frame().min(other.start.frame());
        let end = self.end_tc.frame().max(other.end_tc.frame());
        Interval::from_end_tc(Time::new(start, self.base()), Time::new(end, self.base()))
    }

    /// Returns the overlap of both intervals,
    /// or `None` if these do not overlap.
    pub fn intersect(&self, other: &Interval) -> Result<Option<Interval>, TcError> {
        other.start.check_base(&self.base())?;
        let start = self.start.frame().max(other.start.frame());
        let end = self.end_tc.frame().min(other.end_tc.frame());
        if start >= end {
            return Ok(None)
        }
        Interval::from_end_tc(Time::new(start, self.base()), Time::new(end, self.base()))
            .map(Some)
    }
}

/// Equivalent to `as_tc()`.
impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tc())
    }
}
