//! Start timecode, duration, and frame rate of the timecode track.
//!
//! The timecode track stores a single sample: the number of frames
//! counted since midnight when recording started. Locating it takes a few steps:
//! 1. Find the `tmcd` entry inside a sample description atom
//!    (`moov/trak/mdia/minf/stbl/stsd/tmcd`). The same FourCC is also
//!    used for track references (`moov/trak/tref/tmcd`), which are ignored.
//! 2. Read drop-frame flag, time scale, frame duration and
//!    number of frames (the whole number rate) from that entry.
//! 3. Walk up to the enclosing `trak`, and read the first chunk offset
//!    in that track (`stco`, or `co64` if `stco` is missing or empty).
//! 4. Read the 32-bit sample value at that offset.
//! 5. Divide the duration of the track's first edit (`edts/elst`)
//!    by the frame duration to get the number of frames.

use std::io::{Read, Seek};

use log::debug;

use crate::{
    atom::{AtomId, AtomTree},
    reader::Mp4Reader,
    timecode::{samples_to_counts, align_samples},
    Co64, Elst, FourCC, Interval, Stco, TcError, Time, TimeBase, TimecodeCounts, Tmcd,
};

/// Returns the `tmcd` sample description entry,
/// i.e. the `tmcd` atom whose parent is `stsd`.
pub fn find_timecode_descriptor(tree: &AtomTree) -> Result<AtomId, TcError> {
    tree.find_atoms(&FourCC::Tmcd)
        .into_iter()
        .find(|id| tree.parent(*id)
            .is_some_and(|p| tree.node(p).name() == &FourCC::Stsd))
        .ok_or(TcError::MissingTimecodeDescriptor)
}

/// Returns chunk offsets for `trak`.
/// Tries the 32-bit `stco` first, then the 64-bit `co64`
/// if `stco` is missing, unreadable, or empty.
pub fn chunk_offsets(tree: &AtomTree, trak: AtomId) -> Result<Co64, TcError> {
    let stco = tree.find_atom_in(trak, &FourCC::Stco)
        .ok_or_else(|| TcError::NoSuchAtom(FourCC::Stco.to_string()))
        .and_then(|id| Stco::from_payload(tree.node(id).payload()))
        .and_then(|stco| match stco.first() {
            Some(_) => Ok(Co64::from(stco)),
            None => Err(TcError::EmptyChunkOffsets(FourCC::Stco.to_string())),
        });

    match stco {
        Ok(offsets) => Ok(offsets),
        Err(err) => {
            debug!("No usable 'stco' ({err}), trying 'co64'");
            let id = tree.find_atom_in(trak, &FourCC::Co64)
                .ok_or_else(|| TcError::NoSuchAtom(FourCC::Co64.to_string()))?;
            Co64::from_payload(tree.node(id).payload())
        }
    }
}

/// Returns the number of timecode frames in `trak`, derived from the
/// first edit list entry and the frame duration of the timecode descriptor.
pub fn frame_count(tree: &AtomTree, trak: AtomId, tmcd: &Tmcd) -> Result<i64, TcError> {
    if tmcd.frame_duration() == 0 {
        return Err(TcError::ZeroFrameDuration)
    }

    let edts = tree.find_atom_in(trak, &FourCC::Edts)
        .ok_or_else(|| TcError::NoSuchAtom(FourCC::Edts.to_string()))?;
    let elst = Elst::from_edts_payload(tree.node(edts).payload())?;
    let entry = elst.first().ok_or(TcError::EmptyEditList)?;

    let frames = entry.track_duration() / tmcd.frame_duration() as u64;
    i64::try_from(frames)
        .map_err(|_| TcError::FrameCountOutOfRange(i128::from(frames)))
}

/// Timecode facts for a single file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    /// Frames counted since midnight at the first frame.
    start_frame: u32,
    /// Number of frames in the timecode track.
    frame_count: i64,
    /// Whole number rate the timecode counts in.
    sample_rate: u32,
    drop_frame: bool,
    /// Actual frame rate, e.g. 23.976.
    frames_per_second: f64,
    /// Counts at `sample_rate`, realtime scaled
    /// by `sample_rate / frames_per_second`.
    base: TimeBase,
}

/// Timing as timecode strings.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingReport {
    /// E.g. `10:00:00:00`.
    pub start_timecode: String,
    /// End timecode, used as the exclusive end of the file's interval.
    pub end_timecode: String,
    pub sample_rate: u32,
    pub frames_per_second: f64,
}

impl Timing {
    /// Timing from raw values. Sample rate and
    /// frames per second must be positive.
    ///
    /// The last frame, including any frames added
    /// for drop-frame timecode, must fit in an `i64`.
    pub fn from_parts(
        start_frame: u32,
        frame_count: i64,
        sample_rate: u32,
        drop_frame: bool,
        frames_per_second: f64,
    ) -> Result<Self, TcError> {
        let base = TimeBase::new(sample_rate, sample_rate as f64 / frames_per_second)?;

        let out_of_range = || TcError::FrameCountOutOfRange(i128::from(frame_count));
        let end_frame = (start_frame as i64).checked_add(frame_count)
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(out_of_range)?;
        if let Ok(end) = u64::try_from(end_frame) {
            i64::try_from(align_samples(end, sample_rate, drop_frame))
                .map_err(|_| out_of_range())?;
        }

        Ok(Self {
            start_frame,
            frame_count,
            sample_rate,
            drop_frame,
            frames_per_second,
            base,
        })
    }

    /// Reads timing for the timecode track in `tree`.
    /// `reader` must be the source `tree` was parsed from.
    pub fn new<R: Read + Seek>(tree: &AtomTree, reader: R) -> Result<Self, TcError> {
        let mut rdr = Mp4Reader::new(reader)?;
        Self::read(tree, &mut rdr)
    }

    pub(crate) fn read<R: Read + Seek>(
        tree: &AtomTree,
        rdr: &mut Mp4Reader<R>
    ) -> Result<Self, TcError> {
        let descriptor = find_timecode_descriptor(tree)?;
        let tmcd = Tmcd::from_payload(tree.node(descriptor).payload())?;
        debug!("Timecode descriptor @ offset {}: {tmcd:?}",
            tree.node(descriptor).header().offset());

        let trak = tree.ancestor(descriptor, &FourCC::Trak)
            .ok_or_else(|| TcError::NoSuchAtom(FourCC::Trak.to_string()))?;

        let offsets = chunk_offsets(tree, trak)?;
        let offset = offsets.first()
            .ok_or_else(|| TcError::EmptyChunkOffsets(FourCC::Co64.to_string()))?;

        rdr.seek_to(offset)?;
        let start_frame = rdr.read_be::<u32>()?;

        let frame_count = frame_count(tree, trak, &tmcd)?;

        Self::from_parts(
            start_frame,
            frame_count,
            tmcd.number_of_frames() as u32,
            tmcd.drop_frame(),
            tmcd.frames_per_second()?,
        )
    }

    pub fn start_frame(&self) -> u32 {
        self.start_frame
    }

    pub fn frame_count(&self) -> i64 {
        self.frame_count
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn drop_frame(&self) -> bool {
        self.drop_frame
    }

    pub fn frames_per_second(&self) -> f64 {
        self.frames_per_second
    }

    pub fn time_base(&self) -> TimeBase {
        self.base
    }

    /// Last frame as frames counted since midnight.
    fn end_frame(&self) -> i64 {
        self.start_frame as i64 + self.frame_count - 1
    }

    /// Drop-frame aware conversion into frames at the
    /// whole number rate, e.g. as parsed from the timecode string.
    fn aligned(&self, samples: i64) -> i64 {
        match u64::try_from(samples) {
            Ok(s) => align_samples(s, self.sample_rate, self.drop_frame) as i64,
            Err(_) => samples,
        }
    }

    fn counts(&self, samples: i64) -> TimecodeCounts {
        match u64::try_from(samples) {
            Ok(s) => samples_to_counts(s, &self.base, self.drop_frame),
            Err(_) => self.base.frame_to_counts(samples),
        }
    }

    pub fn start_timecode(&self) -> String {
        self.counts(self.start_frame as i64).to_string()
    }

    pub fn end_timecode(&self) -> String {
        self.counts(self.end_frame()).to_string()
    }

    pub fn start(&self) -> Time {
        Time::new(self.aligned(self.start_frame as i64), self.base)
    }

    pub fn end(&self) -> Time {
        Time::new(self.aligned(self.end_frame()), self.base)
    }

    /// Time range of the file, with `end()` as exclusive end.
    pub fn interval(&self) -> Result<Interval, TcError> {
        Interval::from_end_tc(self.start(), self.end())
    }

    pub fn report(&self) -> TimingReport {
        TimingReport {
            start_timecode: self.start_timecode(),
            end_timecode: self.end_timecode(),
            sample_rate: self.sample_rate,
            frames_per_second: self.frames_per_second,
        }
    }
}
