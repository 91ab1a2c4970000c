use std::io::{Read, Seek, SeekFrom};

use binrw::{BinRead, BinReaderExt};

use crate::{AtomHeader, FourCC, TcError};

/// Reader over an MP4-file (or any other
/// seekable byte source) with a fixed length,
/// for reading atom headers and data loads.
#[derive(Debug)]
pub(crate) struct Mp4Reader<R: Read + Seek> {
    /// Source size in bytes.
    pub(crate) len: u64,
    /// Reader over the full source.
    pub(crate) reader: R,
}

impl<R: Read + Seek> Mp4Reader<R> {
    /// Wraps `reader` and determines its length.
    /// Position is reset to the start of the source.
    pub(crate) fn new(mut reader: R) -> Result<Self, TcError> {
        let len = reader.seek(SeekFrom::End(0))?;
        reader.seek(SeekFrom::Start(0))?;
        Ok(Self { len, reader })
    }

    /// Returns current position.
    pub(crate) fn pos(&mut self) -> Result<u64, TcError> {
        Ok(self.reader.stream_position()?)
    }

    /// Seeks from start.
    pub(crate) fn seek_to(&mut self, offset_from_start: u64) -> Result<u64, TcError> {
        Ok(self.reader.seek(SeekFrom::Start(offset_from_start))?)
    }

    /// Seeks back or forth relative to current position.
    pub(crate) fn seek(&mut self, offset_from_current: i64) -> Result<u64, TcError> {
        Ok(self.reader.seek(SeekFrom::Current(offset_from_current))?)
    }

    /// Read big endian type `T`.
    pub(crate) fn read_be<T>(&mut self) -> Result<T, TcError>
    where
        T: BinRead,
        <T as BinRead>::Args<'static>: Sized + Clone + Default,
    {
        Ok(self.reader.read_be::<T>()?)
    }

    /// Reads up to `max` bytes at current position.
    /// Returns fewer bytes if the source ends first,
    /// which is expected for truncated or partially
    /// written files.
    pub(crate) fn read_upto(&mut self, max: u64) -> Result<Vec<u8>, TcError> {
        let remaining = self.len.saturating_sub(self.pos()?);
        let mut buf = Vec::with_capacity(max.min(remaining) as usize);
        (&mut self.reader).take(max).read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Reads FourCC at current position.
    pub(crate) fn fourcc(&mut self) -> Result<FourCC, TcError> {
        Ok(FourCC::from_slice(&self.read_be::<[u8; 4]>()?))
    }

    /// Returns atom header at current position.
    ///
    /// Does not verify that current position
    /// is at atom boundary. Size 0 is returned as is,
    /// it is up to the caller to decide how to handle it.
    pub(crate) fn header(&mut self) -> Result<AtomHeader, TcError> {
        let mut hdr = AtomHeader::default();

        // Get offset for header
        hdr.offset = self.pos()?;

        // Read 32bit total atom size
        hdr.atom_size = self.read_be::<u32>()? as u64;

        // Can not read fourcc name as utf-8 since some
        // manufacturers use single-byte extended ascii/ISO8859-1
        hdr.name = self.fourcc()?;

        // Check if atom size is 64bit and read the 8 bytes
        // following directly after FourCC as new size if so
        if hdr.atom_size == 1 {
            hdr.atom_size = self.read_be::<u64>()?;
            // some cameras exclusively use 64bit size, even for sub-64bit sized atoms
            hdr.size_64bit = true;
        }

        Ok(hdr)
    }
}
