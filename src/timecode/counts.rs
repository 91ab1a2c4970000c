//! Conversion between raw timecode sample values and
//! hours, minutes, seconds and frames, with or without drop-frame.
//!
//! In drop-frame timecode the frame labels `:00` and `:01` are skipped
//! at the start of every minute, except every tenth minute, so that
//! the labels keep up with realtime for fractional video rates.
//! A timecode track stores the plain number of frames counted since
//! midnight, so these are first "aligned", i.e. the skipped labels are
//! added back, before splitting into fields as if non-drop.

use std::fmt;

use super::TimeBase;

/// Frames in 10 minutes of drop-frame timecode
/// are this many fewer than the nominal rate gives.
const DROPPED_PER_TEN_MINUTES: u64 = 18;

/// Dropped frame labels per minute, except every tenth minute.
const DROPPED_PER_MINUTE: u64 = 2;

/// Timecode fields. Field values are
/// never negative, the sign is kept separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimecodeCounts {
    pub negative: bool,
    pub hours: u64,
    pub minutes: u32,
    pub seconds: u32,
    pub frames: u32,
}

/// `[-]HH:MM:SS:FF`. Hours are padded to two digits
/// but grow as needed, e.g. `999:59:59:00`.
impl fmt::Display for TimecodeCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}:{:02}:{:02}:{:02}",
            if self.negative {"-"} else {""},
            self.hours,
            self.minutes,
            self.seconds,
            self.frames
        )
    }
}

/// Adds back the frame labels skipped by drop-frame timecode
/// to a frame count since midnight, so that it can be split into
/// fields using non-drop arithmetic. Returns `samples` as is
/// for non-drop.
///
/// Each complete 10 minute span adds back 18 labels. In the remaining
/// partial span, the first minute drops nothing and each following
/// minute drops 2.
pub fn align_samples(samples: u64, rate: u32, drop_frame: bool) -> u64 {
    if !drop_frame || rate == 0 {
        return samples
    }

    let minute = 60 * rate as u64;
    let ten_minutes = 10 * minute - DROPPED_PER_TEN_MINUTES;

    let spans = samples / ten_minutes;
    let mut frames_to_add = spans * DROPPED_PER_TEN_MINUTES;
    let frames_left = samples - spans * ten_minutes;

    if frames_left >= minute {
        frames_to_add += DROPPED_PER_MINUTE
            * (1 + (frames_left - minute) / (minute - DROPPED_PER_MINUTE));
    }

    samples + frames_to_add
}

/// Converts a frame count since midnight into timecode fields,
/// counting at the whole number rate of `base`.
pub fn samples_to_counts(samples: u64, base: &TimeBase, drop_frame: bool) -> TimecodeCounts {
    let aligned = align_samples(samples, base.frames_per_second(), drop_frame);
    base.frame_to_counts(aligned as i64)
}

/// Converts timecode fields into a frame count since midnight.
/// For drop-frame, the skipped labels are subtracted:
/// 108 per hour and 2 per minute except every tenth minute.
pub fn counts_to_samples(
    hours: u64,
    minutes: u32,
    seconds: u32,
    frames: u32,
    rate: u32,
    drop_frame: bool,
) -> i64 {
    let (h, m) = (hours as i64, minutes as i64);
    let mut samples = (h * 3600 + m * 60 + seconds as i64) * rate as i64 + frames as i64;

    if drop_frame {
        samples -= h * 108 + 2 * (m - m / 10);
    }

    samples
}
