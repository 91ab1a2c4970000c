use std::ops::Range;

use crate::FourCC;

/// Atom header.
/// 8 or 16 bytes in MP4, depending on whether
/// 32 or 64-bit sized.
///
/// ```ignore
/// | [X X X X] [Y Y Y Y] [Z Z Z Z Z Z Z Z] |
///    |         |         |
///    |         |         64bit size (optional, only if 32 bit size == 1)
///    |         FourCC
///    32bit size
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtomHeader {
    /// Total atom size in bytes including 8/16 byte header.
    pub(crate) atom_size: u64,
    /// FourCC
    pub(crate) name: FourCC,
    /// Absolute byte offset for start of atom in MP4,
    /// i.e. byte offset for its header,
    /// starting with 32-bit size.
    pub(crate) offset: u64,
    /// Set to `true` if atom size specified
    /// in 64 bit area. E.g. insta360 seems to
    /// specify all sizes as 64 bit regardless
    /// of actual atom size. I.e. 32bit size
    /// is set to `1`. But this info can not
    /// be derived post-parse.
    pub(crate) size_64bit: bool
}

impl AtomHeader {
    /// Header for the pseudo atom spanning
    /// the entire source.
    pub(crate) fn root(len: u64) -> Self {
        Self {
            atom_size: len,
            name: FourCC::Root,
            offset: 0,
            // no header to skip
            size_64bit: false,
        }
    }

    /// Convenience method to check whether atom is
    /// a container or not.
    pub fn is_container(&self) -> bool {
        self.name.is_container()
    }

    pub fn start(&self) -> u64 {
        self.offset
    }

    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.atom_size)
    }

    pub fn atom_size(&self) -> u64 {
        self.atom_size
    }

    pub fn name(&self) -> &FourCC {
        &self.name
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Determine header size in bytes in MP4.
    /// Returns 0 for the root, 8 or 16 bytes otherwise.
    pub fn header_size(&self) -> u8 {
        match (&self.name, self.size_64bit) {
            (FourCC::Root, _) => 0,
            (_, true) => 16,
            (_, false) => 8,
        }
    }

    /// Data load absolute offset,
    /// i.e. position after header
    /// adjusted for optional 64bit size value.
    pub fn data_offset(&self) -> u64 {
        self.offset + self.header_size() as u64
    }

    /// Size of data load, adjusted for header size
    /// (excludes header size).
    pub fn data_size(&self) -> u64 {
        self.atom_size.saturating_sub(self.header_size() as u64)
    }

    /// Returns start, end offset range for atom.
    pub fn bounds(&self) -> Range<u64> {
        self.offset .. self.end()
    }

    /// Returns `true` is absolute offset `pos`
    /// is contained within atom span.
    ///
    /// Inclusive lower bound, exclusive upper bound.
    pub fn contains(&self, pos: u64) -> bool {
        self.bounds().contains(&pos)
    }
}
