use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Mul, Neg, Sub},
};

use ::time::{Duration, Time as TimeOfDay};

use crate::TcError;

use super::{Interval, Position, TimeBase, TimecodeCounts};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// A moment expressed as a signed frame count in a `TimeBase`.
/// No subframes.
///
/// Arithmetic and ordering are only defined between times
/// with equal bases and never convert between bases.
#[derive(Debug, Clone, Copy)]
pub struct Time {
    frame: i64,
    base: TimeBase,
}

impl Time {
    /// Time at `frame` in `base`.
    pub fn new(frame: i64, base: TimeBase) -> Self {
        Self { frame, base }
    }

    pub fn zero(base: TimeBase) -> Self {
        Self::new(0, base)
    }

    /// Time from a timecode string, e.g. `01:00:00:00` or `-00:00:00:01`.
    pub fn from_timecode(timecode: &str, base: TimeBase) -> Result<Self, TcError> {
        Ok(Self::new(base.timecode_to_frame(timecode)?, base))
    }

    /// Time from milliseconds, rounded to the closest frame
    /// in `base`. Logged takes store their start and end
    /// as milliseconds since midnight.
    pub fn from_millis(millis: i64, base: TimeBase) -> Self {
        let frame = millis as f64 / base.fps_to_scale(1000.0);
        Self::new((frame + 0.5).trunc() as i64, base)
    }

    pub fn frame(&self) -> i64 {
        self.frame
    }

    pub fn base(&self) -> TimeBase {
        self.base
    }

    /// Returns sign, hours, minutes, seconds and frames.
    pub fn counts(&self) -> TimecodeCounts {
        self.base.frame_to_counts(self.frame)
    }

    /// Returns time as string in timecode format for current base.
    pub fn timecode(&self) -> String {
        self.counts().to_string()
    }

    /// Returns wall clock seconds.
    pub fn realtime_seconds(&self) -> f64 {
        self.base.frame_to_realtime_seconds(self.frame)
    }

    /// Returns wall clock duration.
    pub fn realtime_duration(&self) -> Duration {
        Duration::seconds_f64(self.realtime_seconds())
    }

    /// Returns time of day, treating this time
    /// as counted from midnight.
    pub fn time_of_day(&self) -> Result<TimeOfDay, TcError> {
        let secs = self.realtime_seconds();
        if !(0.0..SECONDS_PER_DAY).contains(&secs) {
            return Err(TcError::TimeOfDayOutOfRange(secs))
        }
        Ok(TimeOfDay::MIDNIGHT + Duration::seconds_f64(secs))
    }

    /// Returns `true` for frame 0.
    pub fn is_zero(&self) -> bool {
        self.frame == 0
    }

    pub(crate) fn check_base(&self, other: &TimeBase) -> Result<(), TcError> {
        if &self.base != other {
            return Err(TcError::BaseMismatch{left: self.base, right: *other})
        }
        Ok(())
    }

    /// Adds `other` to this time. Bases must match.
    pub fn try_add(&self, other: &Time) -> Result<Time, TcError> {
        self.check_base(&other.base)?;
        Ok(Self::new(self.frame + other.frame, self.base))
    }

    /// Subtracts `other` from this time. Bases must match.
    pub fn try_sub(&self, other: &Time) -> Result<Time, TcError> {
        self.check_base(&other.base)?;
        Ok(Self::new(self.frame - other.frame, self.base))
    }

    /// Orders this time relative to `other`. Bases must match.
    pub fn try_cmp(&self, other: &Time) -> Result<Ordering, TcError> {
        self.check_base(&other.base)?;
        Ok(self.frame.cmp(&other.frame))
    }

    /// Returns whether this time is before, inside, or after `interval`.
    /// Bases must match.
    pub fn position(&self, interval: &Interval) -> Result<Position, TcError> {
        if interval.contains(self)? {
            Ok(Position::Inside)
        } else if self.frame < interval.start().frame() {
            Ok(Position::Before)
        } else {
            Ok(Position::After)
        }
    }
}

impl Add for Time {
    type Output = Result<Time, TcError>;

    fn add(self, rhs: Time) -> Self::Output {
        self.try_add(&rhs)
    }
}

impl Sub for Time {
    type Output = Result<Time, TcError>;

    fn sub(self, rhs: Time) -> Self::Output {
        self.try_sub(&rhs)
    }
}

impl Neg for Time {
    type Output = Time;

    fn neg(self) -> Self::Output {
        Self::new(-self.frame, self.base)
    }
}

/// Scales frame count, rounded to closest frame.
impl Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new((self.frame as f64 * rhs).round() as i64, self.base)
    }
}

impl PartialEq for Time {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.frame == other.frame
    }
}

/// `None` if bases differ.
impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl From<Time> for i64 {
    fn from(value: Time) -> Self {
        value.frame
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.counts())
    }
}
