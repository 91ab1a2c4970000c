//! Chunk to offset atom for file sizes above the 32bit limit (`co64`).
//! The 64-bit equivalent of the `stco` atom.
//!
//! Path: `moov/trak[multiple]/mdia/minf/stbl/co64`

use std::io::Cursor;

use binrw::{BinRead, BinReaderExt};

use crate::{Stco, TcError};

/// Chunk to offset atom for file sizes above the 32bit limit (`co64`).
/// The 64-bit equivalent of the `stco` atom.
///
/// Path: `moov/trak/mdia/minf/stbl/co64`
#[derive(Debug, Default, BinRead, Clone)]
#[br(big, import(available: u32))]
pub struct Co64 {
    _version: u8,
    _flags: [u8; 3],
    no_of_entries: u32,
    #[br(count = no_of_entries.min(available))]
    offsets: Vec<u64>
}

impl Co64 {
    /// Parses a `co64` data load.
    pub fn from_payload(data: &[u8]) -> Result<Self, TcError> {
        let available = (data.len().saturating_sub(8) / 8) as u32;
        Ok(Cursor::new(data).read_be_args::<Self>((available,))?)
    }

    /// Returns number of chunks.
    /// (each chunk correspinds to one or more samples).
    pub fn len(&self) -> usize {
        self.no_of_entries as usize
    }

    pub fn is_empty(&self) -> bool {
        self.no_of_entries == 0
    }

    /// Returns chunk byte offsets.
    /// (each chunk correspinds to one or more samples).
    pub fn offsets(&self) -> &[u64] {
        &self.offsets
    }

    /// Returns the byte offset of the first chunk.
    pub fn first(&self) -> Option<u64> {
        self.offsets.first().copied()
    }
}

impl From<Stco> for Co64 {
    fn from(value: Stco) -> Self {
        Self {
            _version: value.version,
            _flags: value.flags,
            no_of_entries: value.no_of_entries,
            offsets: value.offsets
                .iter()
                .map(|n| *n as u64)
                .collect()
        }
    }
}
