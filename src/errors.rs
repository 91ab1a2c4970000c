//! Various timecode, interval and MP4-related errors.

use std::fmt;

use crate::TimeBase;

/// Timecode, interval, and MP4 read/parse errors.
#[derive(Debug)]
pub enum TcError {
    /// Converted `BinResult` error.
    BinReadError(binrw::Error),
    /// Converted `Utf8Error`.
    Utf8Error(std::string::FromUtf8Error),
    /// IO error
    IOError(std::io::Error),
    /// Timecode string that is not `[-]HH:MM:SS:FF`,
    /// or has field values out of range for the time base.
    InvalidTimecode{timecode: String, reason: String},
    /// Arithmetic or comparison between
    /// values with different time bases.
    BaseMismatch{left: TimeBase, right: TimeBase},
    /// Frame rate or realtime scale that is zero or negative.
    InvalidTimeBase{frames_per_second: u32, realtime_scale: f64},
    /// Interval end before its start.
    NegativeInterval{start: i64, end: i64},
    /// Required coverage outside `(0, 1]`.
    InvalidCoverage(f64),
    /// Realtime seconds that do not fit within a single day.
    TimeOfDayOutOfRange(f64),
    /// MP4 0 sized atoms,
    /// e.g. 1k Dropbox place holders.
    ZeroSizeAtom{name: String, offset: u64},
    /// Atom size smaller than its own header.
    InvalidAtomSize{name: String, size: u64, offset: u64},
    /// No such atom.
    NoSuchAtom(String),
    /// No `tmcd` entry inside a sample description atom (`stsd`).
    MissingTimecodeDescriptor,
    /// Timecode descriptor with a frame duration of 0.
    ZeroFrameDuration,
    /// Timecode descriptor with a time scale of 0.
    ZeroTimeScale,
    /// Number of frames that puts the end of
    /// the timecode track beyond what can be counted.
    FrameCountOutOfRange(i128),
    /// Edit list atom without entries.
    EmptyEditList,
    /// Chunk offset atom without entries.
    EmptyChunkOffsets(String),
    /// Exceeded nesting depth when parsing the atom tree.
    RecurseDepthExceeded((usize, usize)),
}

impl std::error::Error for TcError {}

/// Broad error categories, for callers that
/// decide between skipping a file and halting a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed timecode string or binary data.
    Format,
    /// Values from different time bases were combined.
    BaseMismatch,
    /// A required atom is missing.
    NotFound,
    /// A value is outside its valid range.
    Range,
    /// Platform IO failure.
    Io,
}

impl TcError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TcError::IOError(_) => ErrorKind::Io,
            TcError::BaseMismatch{..} => ErrorKind::BaseMismatch,
            TcError::NoSuchAtom(_)
            | TcError::MissingTimecodeDescriptor
            | TcError::EmptyEditList
            | TcError::EmptyChunkOffsets(_) => ErrorKind::NotFound,
            TcError::InvalidTimeBase{..}
            | TcError::NegativeInterval{..}
            | TcError::InvalidCoverage(_)
            | TcError::TimeOfDayOutOfRange(_)
            | TcError::FrameCountOutOfRange(_)
            | TcError::RecurseDepthExceeded(_) => ErrorKind::Range,
            TcError::BinReadError(_)
            | TcError::Utf8Error(_)
            | TcError::InvalidTimecode{..}
            | TcError::ZeroSizeAtom{..}
            | TcError::InvalidAtomSize{..}
            | TcError::ZeroFrameDuration
            | TcError::ZeroTimeScale => ErrorKind::Format,
        }
    }
}

impl fmt::Display for TcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TcError::BinReadError(err) => write!(f, "{err}"),
            TcError::Utf8Error(err) => write!(f, "{err}"),
            TcError::IOError(err) => write!(f, "IO error: {}", err),
            TcError::InvalidTimecode{timecode, reason} => write!(f, "Invalid timecode '{timecode}': {reason}"),
            TcError::BaseMismatch{left, right} => write!(f, "Mismatched time bases {left} != {right}"),
            TcError::InvalidTimeBase{frames_per_second, realtime_scale} => write!(f, "Invalid time base with {frames_per_second} fps and realtime scale {realtime_scale}"),
            TcError::NegativeInterval{start, end} => write!(f, "Negative interval from frame {start} to frame {end}"),
            TcError::InvalidCoverage(ratio) => write!(f, "Required coverage {ratio} is not within (0, 1]"),
            TcError::TimeOfDayOutOfRange(secs) => write!(f, "{secs} seconds is not a valid time of day"),
            TcError::ZeroSizeAtom{name, offset} => write!(f, "Zero sized atom '{name}' @ offset {offset}."),
            TcError::InvalidAtomSize{name, size, offset} => write!(f, "Invalid size of {size} bytes for atom '{name}' @ offset {offset}."),
            TcError::NoSuchAtom(name) => write!(f, "No such atom {name}."),
            TcError::MissingTimecodeDescriptor => write!(f, "No timecode entry in a sample description atom."),
            TcError::ZeroFrameDuration => write!(f, "Timecode descriptor has a frame duration of 0."),
            TcError::ZeroTimeScale => write!(f, "Timecode descriptor has a time scale of 0."),
            TcError::FrameCountOutOfRange(n) => write!(f, "Frame count {n} is out of range."),
            TcError::EmptyEditList => write!(f, "Edit list has no entries."),
            TcError::EmptyChunkOffsets(name) => write!(f, "Chunk offset atom '{name}' has no entries."),
            TcError::RecurseDepthExceeded((depth, max)) => write!(f, "Recurse depth {depth} exceeds max recurse depth {max}"),
        }
    }
}

/// Converts std::io::Error to TcError
impl From<std::io::Error> for TcError {
    fn from(err: std::io::Error) -> Self {
        TcError::IOError(err)
    }
}

/// Converts std::string::FromUtf8Error to TcError
impl From<std::string::FromUtf8Error> for TcError {
    fn from(err: std::string::FromUtf8Error) -> TcError {
        TcError::Utf8Error(err)
    }
}

/// Converts TcError to std::io::Error
impl From<TcError> for std::io::Error {
    fn from(err: TcError) -> Self {
        std::io::Error::new(std::io::ErrorKind::Other, err)
    }
}

/// Converts binrw::Error to TcError.
/// Running out of data is a read error,
/// any other IO failure an IO error.
impl From<binrw::Error> for TcError {
    fn from(err: binrw::Error) -> TcError {
        match err {
            binrw::Error::Io(e) if e.kind() != std::io::ErrorKind::UnexpectedEof => TcError::IOError(e),
            other => TcError::BinReadError(other),
        }
    }
}
