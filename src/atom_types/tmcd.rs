//! Time code entry (`tmcd`). Part of the sample description atom (`stsd`).
//!
//! > Note: Distinguish from `tmcd` with the same FourCC located at `moov/trak/tref/tmcd`.
//!
//! `tmcd` is not an atom in the main tree, but part of one. Describes
//! how the samples in the timecode track are counted: the frame rate,
//! and whether counts are dropped to keep up with realtime
//! (drop-frame timecode).
//!
//! Location: `moov/trak[multiple]/mdia/minf/stbl/stsd[tmcd]`

use std::io::Cursor;

use binrw::{BinRead, BinReaderExt};
use time::{Time, ext::NumericalDuration};

use crate::TcError;

/// Time code entry (`tmcd`). Part of the sample description atom (`stsd`).
///
/// Data load layout, after the 8 byte entry header
/// (offsets relative to the data load):
/// ```ignore
///  0  reserved              6 bytes
///  6  data reference index  u16
///  8  reserved              u32
/// 12  flags                 u32, bit 0 set = drop frame
/// 16  time scale            u32
/// 20  frame duration        u32
/// 24  number of frames      u8
/// 25  reserved              u8
/// ```
///
/// Location: `moov/trak[multiple]/mdia/minf/stbl/stsd[tmcd]`
#[derive(Debug, Default, BinRead, Clone)]
#[br(big)]
pub struct Tmcd {
    _reserved1: [u8; 6],
    pub(crate) data_reference_index: u16,
    _reserved2: u32,
    pub(crate) flags: u32,
    pub(crate) time_scale: u32,
    pub(crate) frame_duration: u32,
    pub(crate) number_of_frames: u8,
    /// Should be set to 0. Currently unused.
    _reserved3: u8,
}

impl Tmcd {
    /// Parses the data load of a `tmcd` sample description entry.
    pub fn from_payload(data: &[u8]) -> Result<Self, TcError> {
        Ok(Cursor::new(data).read_be::<Self>()?)
    }

    pub fn flags(&self) -> u32 {
        self.flags
    }

    /// Returns `true` if the timecode
    /// track counts in drop-frame timecode.
    pub fn drop_frame(&self) -> bool {
        self.flags & 1 == 1
    }

    pub fn time_scale(&self) -> u32 {
        self.time_scale
    }

    pub fn frame_duration(&self) -> u32 {
        self.frame_duration
    }

    /// Whole number of frames per second
    /// that the timecode counts in, e.g. 30 for 29.97.
    pub fn number_of_frames(&self) -> u8 {
        self.number_of_frames
    }

    /// Actual frame rate, e.g. 29.97 for
    /// time scale 30000 and frame duration 1001.
    pub fn frames_per_second(&self) -> Result<f64, TcError> {
        if self.frame_duration == 0 {
            return Err(TcError::ZeroFrameDuration)
        }
        if self.time_scale == 0 {
            return Err(TcError::ZeroTimeScale)
        }
        Ok(self.time_scale as f64 / self.frame_duration as f64)
    }

    /// Returns the time of day for a sample
    /// value, counting frames from midnight.
    /// May not correspond to actual start time if device
    /// clock is not set correctly, but can still be used
    /// for sorting clips belonging to the same recording session.
    pub fn time_of_day(&self, samples: u32) -> Result<Time, TcError> {
        let fps = self.frames_per_second()?;

        Ok(Time::MIDNIGHT + (samples as f64 / fps).seconds())
    }
}
