//! MP4 atom FourCC.
//! See https://developer.apple.com/library/archive/documentation/QuickTime/QTFF/QTFFChap2/qtff2.html#//apple_ref/doc/uid/TP40000939-CH204-56313.
//! Only the FourCC:s involved in locating the timecode track are named,
//! everything else is kept as `Custom`.

use std::fmt;

use crate::consts::{CONTAINER, DATA};

/// MP4 atom Four CC.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FourCC {
    /// Pseudo atom spanning the whole file.
    Root,
    Edts,
    Elst,
    Mdat,
    Mdia,
    Minf,
    /// Movie Atom
    Moov,
    Stbl,
    /// Chunk offset, 32-bit values
    Stco,
    /// Chunk offset, 64-bit values
    Co64,
    /// Sample description
    Stsd,
    /// Timecode sample description entry,
    /// or timecode track reference
    Tmcd,
    /// Track description
    Trak,
    /// User data
    Udta,
    /// User metadata as JSON
    Json,

    Custom(String)
}

impl FourCC {
    pub fn from_slice(fourcc: &[u8]) -> Self {
        match fourcc {
            b"edts" => Self::Edts,
            b"elst" => Self::Elst,
            b"mdat" => Self::Mdat,
            b"mdia" => Self::Mdia,
            b"minf" => Self::Minf,
            b"moov" => Self::Moov,
            b"stbl" => Self::Stbl,
            b"stco" => Self::Stco,
            b"co64" => Self::Co64,
            b"stsd" => Self::Stsd,
            b"tmcd" => Self::Tmcd,
            b"trak" => Self::Trak,
            b"udta" => Self::Udta,
            b"json" => Self::Json,

            // UTF-8 does not work for single-byte char above 127
            // but ISO8859-1 mapping works for range 128-255
            _ => Self::Custom(
                fourcc
                    .iter()
                    .map(|n| *n as char)
                    .collect::<String>()
            ),
        }
    }

    pub fn from_u32(value: u32) -> Self {
        Self::from_slice(&value.to_be_bytes())
    }

    pub fn from_str(fourcc: &str) -> Self {
        match fourcc {
            "root" => Self::Root,
            _ => Self::from_slice(fourcc.as_bytes()),
        }
    }

    pub fn to_str(&self) -> &str {
        match self {
            Self::Root => "root",
            Self::Edts => "edts",
            Self::Elst => "elst",
            Self::Mdat => "mdat",
            Self::Mdia => "mdia",
            Self::Minf => "minf",
            Self::Moov => "moov",
            Self::Stbl => "stbl",
            Self::Stco => "stco",
            Self::Co64 => "co64",
            Self::Stsd => "stsd",
            Self::Tmcd => "tmcd",
            Self::Trak => "trak",
            Self::Udta => "udta",
            Self::Json => "json",
            Self::Custom(s) => s.as_str()
        }
    }

    /// Returns `true` if atoms with this FourCC
    /// nest other atoms directly after their header.
    pub fn is_container(&self) -> bool {
        CONTAINER.contains(&self.to_str())
    }

    /// Returns `true` if the full data load for
    /// atoms with this FourCC is kept when parsing.
    pub fn is_data(&self) -> bool {
        DATA.contains(&self.to_str())
    }
}

impl Default for FourCC {
    fn default() -> Self {
        Self::Custom("None".to_owned())
    }
}

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}
