//! Edit list atom (`elst`).
//!
//! Location: `moov/trak[multiple]/edts/elst`
//!
//! See: <https://developer.apple.com/documentation/quicktime-file-format/edit_list_atom>

use std::io::Cursor;

use binrw::{BinRead, BinReaderExt, BinResult};

use crate::{FourCC, TcError};

/// Edit list atom (`elst`).
///
/// Location: `moov/trak[multiple]/edts/elst`
///
/// See: <https://developer.apple.com/documentation/quicktime-file-format/edit_list_atom>
#[derive(Debug, Default, BinRead)]
#[br(big)]
pub struct Elst {
    version: u8,
    _flags: [u8; 3],
    number_of_entries: u32,
    #[br(args { count: number_of_entries as usize, inner: (version,) })]
    pub(crate) edit_list_table: Vec<EditListEntry>
}

impl Elst {
    /// Parses the `elst` atom at the start of an
    /// edit atom (`edts`) data load.
    pub fn from_edts_payload(data: &[u8]) -> Result<Self, TcError> {
        let mut cursor = Cursor::new(data);
        let _size = cursor.read_be::<u32>()?;
        let name = FourCC::from_slice(&cursor.read_be::<[u8; 4]>()?);
        if name != FourCC::Elst {
            return Err(TcError::NoSuchAtom(FourCC::Elst.to_string()))
        }
        Self::from_payload(&data[8..])
    }

    /// Parses an `elst` data load.
    pub fn from_payload(data: &[u8]) -> Result<Self, TcError> {
        Ok(Cursor::new(data).read_be::<Self>()?)
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn edit_list_table(&self) -> &[EditListEntry] {
        &self.edit_list_table
    }

    pub fn first(&self) -> Option<&EditListEntry> {
        self.edit_list_table.first()
    }
}

#[derive(Debug, Default, BinRead, Clone, Copy)]
#[br(big, import(version: u8))]
pub struct EditListEntry {
    /// Duration of this edit in movie time scale units.
    #[br(parse_with = versioned_u64, args(version))]
    pub track_duration: u64,
    /// Starting time within the media of this edit segment
    /// in media time scale units. If set to -1 the edit is empty.
    #[br(parse_with = versioned_i64, args(version))]
    pub media_time: i64,
    /// Fixed-point 16.16 number that specifies the relative rate
    /// at which to play the media.
    pub media_rate: u32,
}

impl EditListEntry {
    pub fn track_duration(&self) -> u64 {
        self.track_duration
    }

    pub fn media_time(&self) -> i64 {
        self.media_time
    }

    /// Media rate as float.
    pub fn media_rate(&self) -> f64 {
        (self.media_rate >> 16) as f64 + (self.media_rate & 0xFFFF) as f64 / 65536.0
    }

    /// Returns `true` if this is an empty edit
    /// (i.e. there is no media for its duration).
    pub fn is_empty(&self) -> bool {
        self.media_time == -1
    }
}

/// 32-bit value for version 0, 64-bit for version 1.
#[binrw::parser(reader, endian)]
fn versioned_u64(version: u8) -> BinResult<u64> {
    match version {
        1 => u64::read_options(reader, endian, ()),
        _ => u32::read_options(reader, endian, ()).map(u64::from),
    }
}

#[binrw::parser(reader, endian)]
fn versioned_i64(version: u8) -> BinResult<i64> {
    match version {
        1 => i64::read_options(reader, endian, ()),
        _ => i32::read_options(reader, endian, ()).map(i64::from),
    }
}
