//! Time, duration, intervals, frame counts and timecode strings.
//!
//! Realtime seconds and frame time seconds are not equivalent.
//! Realtime seconds are the wall clock time of a duration,
//! whereas frame time seconds pass each time the number
//! of frames per second has been counted. For video rates
//! such as 29.97 the two drift apart, which is described by
//! the realtime scale of a `TimeBase`.

mod base;
mod counts;
mod interval;
mod speed;
mod time;

pub use base::{TimeBase, TB_24, TB_23976, TB_30, TB_2997, TB_60, TB_5994, TB_120, TB_DEFAULT};
pub use counts::{TimecodeCounts, align_samples, counts_to_samples, samples_to_counts};
pub use interval::{Interval, Position};
pub use speed::{LinearSpeed, Speed};
pub use self::time::Time;
