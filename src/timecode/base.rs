use std::fmt;

use crate::{
    consts::{RTS_TOLERANCE, RTS_VIDEO, RTS_WHOLE},
    TcError,
};

use super::TimecodeCounts;

/// A base for time representation, like a base for number representation:
/// number of frames per second, e.g. 24 fps,
/// and number of realtime seconds per frame time second.
///
/// Two bases are equal if the frame rates match and the
/// realtime scales are within `0.0001` of each other,
/// so `1.001` and `1000/999` describe the same video rate.
#[derive(Debug, Clone, Copy)]
pub struct TimeBase {
    frames_per_second: u32,
    realtime_scale: f64,
}

/// Timebase for 24fps film.
pub const TB_24: TimeBase = TimeBase::new_unchecked(24, RTS_WHOLE);
/// Timebase for 23.976 video (progressive video frames).
pub const TB_23976: TimeBase = TimeBase::new_unchecked(24, RTS_VIDEO);
/// Timebase for 30fps, not a video rate.
pub const TB_30: TimeBase = TimeBase::new_unchecked(30, RTS_WHOLE);
/// Timebase for 29.97 video (non-interlaced video frames).
pub const TB_2997: TimeBase = TimeBase::new_unchecked(30, RTS_VIDEO);
/// Timebase for 60fps, not a video rate.
pub const TB_60: TimeBase = TimeBase::new_unchecked(60, RTS_WHOLE);
/// Timebase for 59.94 video (interlaced video frames).
pub const TB_5994: TimeBase = TimeBase::new_unchecked(60, RTS_VIDEO);
/// Timebase for 120fps, not a video rate.
pub const TB_120: TimeBase = TimeBase::new_unchecked(120, RTS_WHOLE);
/// Default timebase.
pub const TB_DEFAULT: TimeBase = TB_24;

impl TimeBase {
    /// New time base from frames per second
    /// and realtime seconds per frame time second.
    /// Both must be positive, and the realtime scale finite.
    pub fn new(frames_per_second: u32, realtime_scale: f64) -> Result<Self, TcError> {
        // also rejects NaN
        if frames_per_second == 0 || !(realtime_scale > 0.0) || !realtime_scale.is_finite() {
            return Err(TcError::InvalidTimeBase{frames_per_second, realtime_scale})
        }
        Ok(Self::new_unchecked(frames_per_second, realtime_scale))
    }

    const fn new_unchecked(frames_per_second: u32, realtime_scale: f64) -> Self {
        Self {
            frames_per_second,
            realtime_scale,
        }
    }

    pub fn frames_per_second(&self) -> u32 {
        self.frames_per_second
    }

    pub fn realtime_scale(&self) -> f64 {
        self.realtime_scale
    }

    /// Given timecode as string, e.g. `-00:00:00:01`,
    /// returns frame number.
    ///
    /// The optional leading `-` applies to the
    /// whole frame count, not to individual fields.
    pub fn timecode_to_frame(&self, timecode: &str) -> Result<i64, TcError> {
        let invalid = |reason: &str| TcError::InvalidTimecode{
            timecode: timecode.to_owned(),
            reason: reason.to_owned(),
        };

        if timecode.len() < 11 {
            return Err(invalid("too short"))
        }

        let (arity, unsigned) = match timecode.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, timecode),
        };

        let fields = unsigned.split(':')
            .map(|s| s.parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid("fields must be non-negative integers"))?;

        let [h, m, s, f] = fields[..] else {
            return Err(invalid("expected 4 fields"))
        };

        for (value, limit) in [(m, 60), (s, 60), (f, self.frames_per_second)] {
            if value >= limit {
                return Err(invalid(&format!("bad value {value}, must be below {limit}")))
            }
        }

        let fps = self.frames_per_second as i64;
        let frame = h as i64 * 60 * 60 * fps
            + m as i64 * 60 * fps
            + s as i64 * fps
            + f as i64;

        Ok(frame * arity)
    }

    /// Given a frame number, returns sign, hours, minutes, seconds and frames.
    pub fn frame_to_counts(&self, frame: i64) -> TimecodeCounts {
        let negative = frame < 0;
        let fps = self.frames_per_second as u64;
        let mut rem = frame.unsigned_abs();

        let hours = rem / (60 * 60 * fps);
        rem %= 60 * 60 * fps;

        let minutes = rem / (60 * fps);
        rem %= 60 * fps;

        TimecodeCounts {
            negative,
            hours,
            minutes: minutes as u32,
            seconds: (rem / fps) as u32,
            frames: (rem % fps) as u32,
        }
    }

    /// Given a frame number, returns wall clock seconds.
    pub fn frame_to_realtime_seconds(&self, frame: i64) -> f64 {
        (frame as f64 / self.frames_per_second as f64) * self.realtime_scale
    }

    /// Given a playback speed in fps,
    /// returns ratio to this base's natural speed.
    ///
    /// E.g. `fps_to_scale(1000.0)` is the number of
    /// milliseconds per frame for this base.
    pub fn fps_to_scale(&self, fps: f64) -> f64 {
        fps / self.frames_per_second as f64
    }
}

impl PartialEq for TimeBase {
    fn eq(&self, other: &Self) -> bool {
        self.frames_per_second == other.frames_per_second
            && (self.realtime_scale - other.realtime_scale).abs() < RTS_TOLERANCE
    }
}

/// E.g. `TB(24, RTS_WHOLE)`, `TB(24, RTS_VIDEO)`, `TB(25, 1.5)`.
impl fmt::Display for TimeBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.realtime_scale == RTS_WHOLE {
            write!(f, "TB({}, RTS_WHOLE)", self.frames_per_second)
        } else if self.realtime_scale == RTS_VIDEO {
            write!(f, "TB({}, RTS_VIDEO)", self.frames_per_second)
        } else {
            write!(f, "TB({}, {})", self.frames_per_second, self.realtime_scale)
        }
    }
}
