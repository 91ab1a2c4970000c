/// FourCC:s for "container" atoms that are
/// parsed recursively when building the atom tree.
/// These are nested and contain more atoms,
/// within their specified, total size.
///
/// - `moov`: offset tables, timing, metadata
/// - `trak`: moov.trak (multiple)
/// - `mdia`: moov.trak.mdia
/// - `minf`: moov.trak.mdia.minf
/// - `stbl`: moov.trak.mdia.minf.stbl, contains sample descriptions (stsd), offsets (stco)
/// - `udta`: moov.udta, may contain custom data, specific to the device
///
/// The sample description atom (`stsd`) is also nested,
/// but has an 8 byte prefix before its first entry
/// and is handled separately.
pub const CONTAINER: [&'static str; 6] = [
    "moov",
    "trak",
    "mdia",
    "minf",
    "stbl",
    "udta",
];

/// FourCC:s for atoms whose full data load is kept in the atom tree.
///
/// - `tmcd`: timecode sample description entry (or track reference)
/// - `co64`: 64-bit chunk offsets
/// - `json`: user metadata inside `udta`
pub const DATA: [&'static str; 3] = [
    "tmcd",
    "co64",
    "json",
];

/// Max number of data load bytes kept for atoms that are neither
/// containers nor listed in `DATA`.
pub const PAYLOAD_LIMIT: usize = 1024;

/// Number of bytes kept from the start of the `mdat` data load.
pub const MDAT_PREFIX: usize = 4;

/// Size of the version, flags, and entry count fields
/// preceding the entries of a sample description atom (`stsd`).
pub const STSD_PREFIX: u64 = 8;

/// Nesting depth where atom tree parsing gives up.
pub const MAX_DEPTH: usize = 64;

/// Coverage a file needs to exceed to match a logged take.
pub const DEFAULT_COVERAGE: f64 = 0.6;

/// Realtime speed is whole number, e.g. frame rate is 1:1 with wallclock time.
pub const RTS_WHOLE: f64 = 1.0;

/// Realtime speed is video fraction, e.g. frame rate is NOT 1:1 with wallclock time.
pub const RTS_VIDEO: f64 = 1000.0 / 999.0;

/// Tolerance when comparing realtime scales.
pub(crate) const RTS_TOLERANCE: f64 = 0.0001;
