//! Core MP4 struct and methods.
//!
//! The atom tree is read once on creation. The source is kept open
//! for reading the timecode sample, which is located via chunk offsets
//! and may be anywhere in the file (usually inside `mdat`).
//!
//! ```ignore
//! use tcmatch::Mp4;
//! use std::path::Path;
//!
//! fn main() -> Result<(), tcmatch::TcError> {
//!     let mut mp4 = Mp4::new(Path::new("A001C003.MOV"))?;
//!
//!     // Indented atom hierarchy
//!     println!("{}", mp4.tree());
//!
//!     let timing = mp4.timing()?;
//!     println!("{} - {}", timing.start_timecode(), timing.end_timecode());
//!
//!     Ok(())
//! }
//! ```

use std::{
    fs::File,
    io::{BufReader, Read, Seek},
    path::Path,
};

use log::debug;

use crate::{
    atom::{AtomId, AtomTree, ParseOptions},
    reader::Mp4Reader,
    timing::{find_timecode_descriptor, Timing},
    FourCC,
    TcError,
    Tmcd,
};

/// MP4 file, or any other seekable source, with its atom tree.
#[derive(Debug)]
pub struct Mp4<R: Read + Seek = BufReader<File>> {
    reader: Mp4Reader<R>,
    tree: AtomTree,
}

impl Mp4 {
    /// New Mp4 from path, using default `ParseOptions`.
    pub fn new(path: &Path) -> Result<Self, TcError> {
        Self::with_options(path, &ParseOptions::default())
    }

    /// New Mp4 from path.
    pub fn with_options(path: &Path, options: &ParseOptions) -> Result<Self, TcError> {
        debug!("Parsing {}", path.display());
        let file = File::open(path)?;
        Self::from_reader_with_options(BufReader::new(file), options)
    }
}

impl<R: Read + Seek> Mp4<R> {
    /// New Mp4 from any seekable source, e.g. `Cursor<Vec<u8>>`,
    /// using default `ParseOptions`.
    pub fn from_reader(reader: R) -> Result<Self, TcError> {
        Self::from_reader_with_options(reader, &ParseOptions::default())
    }

    pub fn from_reader_with_options(
        reader: R,
        options: &ParseOptions
    ) -> Result<Self, TcError> {
        let mut reader = Mp4Reader::new(reader)?;
        let tree = AtomTree::read(&mut reader, options)?;
        Ok(Self { reader, tree })
    }

    /// Returns source size in bytes.
    pub fn len(&self) -> u64 {
        self.reader.len
    }

    pub fn is_empty(&self) -> bool {
        self.reader.len == 0
    }

    pub fn tree(&self) -> &AtomTree {
        &self.tree
    }

    pub fn into_tree(self) -> AtomTree {
        self.tree
    }

    /// Returns the ID of the timecode sample description entry.
    pub fn timecode_descriptor(&self) -> Result<AtomId, TcError> {
        find_timecode_descriptor(&self.tree)
    }

    /// Returns the parsed timecode sample description entry.
    ///
    /// Location: `moov/trak/mdia/minf/stbl/stsd/tmcd`
    pub fn tmcd(&self) -> Result<Tmcd, TcError> {
        let id = self.timecode_descriptor()?;
        Tmcd::from_payload(self.tree.node(id).payload())
    }

    /// Returns start, duration and frame rate of the timecode track.
    pub fn timing(&mut self) -> Result<Timing, TcError> {
        Timing::read(&self.tree, &mut self.reader)
    }

    /// Returns user data JSON, as written by some recorders.
    ///
    /// Location: `moov/udta/json`
    pub fn user_json(&self) -> Result<String, TcError> {
        let udta = self.tree.find_atom(&FourCC::Udta)
            .ok_or_else(|| TcError::NoSuchAtom(FourCC::Udta.to_string()))?;
        let json = self.tree.find_atom_in(udta, &FourCC::Json)
            .ok_or_else(|| TcError::NoSuchAtom(FourCC::Json.to_string()))?;
        Ok(String::from_utf8(self.tree.node(json).payload().to_vec())?)
    }
}

/// Extracts timing for the file at `path`.
/// The file is closed before returning, on success and failure alike.
pub fn extract_timing(path: &Path) -> Result<Timing, TcError> {
    let mut mp4 = Mp4::new(path)?;
    mp4.timing()
}
