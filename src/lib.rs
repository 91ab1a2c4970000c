//! Read the timecode track of QuickTime/MP4 files, and match
//! the time range each file covers against logged takes.
//! Does not and will not support any kind of video de/encoding.
//!
//! The atom layout follows
//! <https://developer.apple.com/library/archive/documentation/QuickTime/QTFF/QTFFPreface/qtffPreface.html>.
//!
//! ```ignore
//! use tcmatch::{Candidate, CoverageMatcher, Mp4, TB_2997};
//! use std::path::Path;
//!
//! fn main() -> Result<(), tcmatch::TcError> {
//!     let mut mp4 = Mp4::new(Path::new("A001C003.MOV"))?;
//!
//!     let timing = mp4.timing()?;
//!     println!("{} - {} @ {} fps",
//!         timing.start_timecode(),
//!         timing.end_timecode(),
//!         timing.frames_per_second()
//!     );
//!
//!     // Logged takes, as milliseconds since midnight
//!     let takes = vec![
//!         Candidate::from_millis(1, 36_000_000, 36_120_000, timing.time_base())?,
//!         Candidate::from_millis(2, 36_120_000, 36_600_000, timing.time_base())?,
//!     ];
//!
//!     if let Some(take) = CoverageMatcher::default().find(&timing.interval()?, &takes)? {
//!         println!("Matched take {}", take.id);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod atom;
pub mod atom_types;
pub mod batch;
pub mod consts;
pub mod errors;
pub mod fourcc;
pub mod matcher;
pub mod mp4;
pub mod timecode;
pub mod timing;

// Internal reader
pub(crate) mod reader;


pub use atom::{AtomHeader, AtomId, AtomKind, AtomNode, AtomTree, ParseOptions};
pub use atom_types::{Co64, EditListEntry, Elst, Stco, Tmcd};
pub use batch::{extract_timings, try_extract_timings, FileTiming};
pub use consts::{CONTAINER, DEFAULT_COVERAGE, RTS_VIDEO, RTS_WHOLE};
pub use errors::{ErrorKind, TcError};
pub use fourcc::FourCC;
pub use matcher::{Candidate, CoverageMatcher};
pub use mp4::{extract_timing, Mp4};
pub use timecode::{
    align_samples,
    counts_to_samples,
    samples_to_counts,
    Interval,
    LinearSpeed,
    Position,
    Speed,
    Time,
    TimeBase,
    TimecodeCounts,
    TB_120,
    TB_23976,
    TB_24,
    TB_2997,
    TB_30,
    TB_5994,
    TB_60,
    TB_DEFAULT,
};
pub use timing::{Timing, TimingReport};
