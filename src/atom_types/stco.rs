//! Chunk offset atom for file sizes below the 32bit limit (`stco`).
//!
//! Location: `moov/trak[multiple]/mdia/minf/stbl/stco`
//!
//! See: <https://developer.apple.com/documentation/quicktime-file-format/chunk_offset_atom>

use std::io::Cursor;

use binrw::{BinRead, BinReaderExt};

use crate::TcError;

/// Chunk offset atom for file sizes below the 32bit limit (`stco`).
///
/// Only a prefix of the `stco` data load is kept in the atom tree,
/// so for large tables only the leading offsets are available,
/// while `len()` still reports the declared number of entries.
///
/// Location: `moov/trak[multiple]/mdia/minf/stbl/stco`
#[derive(Debug, Default, BinRead, Clone)]
#[br(big, import(available: u32))]
pub struct Stco {
    pub(crate) version: u8,
    pub(crate) flags: [u8; 3],
    pub(crate) no_of_entries: u32,
    /// Chunk offset table consisting of an array of offset values.
    #[br(count = no_of_entries.min(available))]
    pub(crate) offsets: Vec<u32>
}

impl Stco {
    /// Parses a (possibly truncated) `stco` data load.
    pub fn from_payload(data: &[u8]) -> Result<Self, TcError> {
        let available = (data.len().saturating_sub(8) / 4) as u32;
        Ok(Cursor::new(data).read_be_args::<Self>((available,))?)
    }

    /// Declared number of entries.
    pub fn len(&self) -> usize {
        self.no_of_entries as usize
    }

    pub fn is_empty(&self) -> bool {
        self.no_of_entries == 0
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    /// Offsets that were available in the data load.
    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    /// Returns chunk offset with specified ID.
    pub fn get(&self, chunk_id: usize) -> Option<&u32> {
        self.offsets.get(chunk_id)
    }

    /// Returns the byte offset of the first chunk.
    pub fn first(&self) -> Option<u64> {
        self.offsets.first().map(|o| *o as u64)
    }
}
