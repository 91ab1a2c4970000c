use crate::FourCC;

use super::AtomHeader;

/// Index of a node in an `AtomTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AtomId(pub(crate) usize);

impl AtomId {
    /// The root node, spanning the whole source.
    pub const ROOT: AtomId = AtomId(0);

    pub fn index(&self) -> usize {
        self.0
    }
}

/// What was kept for an atom when parsing,
/// depending on its FourCC.
#[derive(Debug, Clone, PartialEq)]
pub enum AtomKind {
    /// Pseudo atom spanning the whole source.
    Root,
    /// Nested atoms directly after the header,
    /// e.g. `moov`, `trak`.
    Container,
    /// Sample description atom (`stsd`).
    /// Nested entries after an 8 byte version, flags, count prefix.
    SampleDescription,
    /// Full data load, e.g. `tmcd`, `co64`.
    Data(Vec<u8>),
    /// The first few bytes of `mdat`.
    /// Media data may be many GB in size and is never read in full.
    MediaData(Vec<u8>),
    /// Capped data load prefix for all other atoms.
    Opaque(Vec<u8>),
}

/// Single atom in an `AtomTree`.
///
/// Children are owned by the tree and referenced
/// by index. `parent` is a back-reference used
/// for walking upwards, e.g. from a `tmcd` entry
/// to its enclosing `trak`.
#[derive(Debug, Clone)]
pub struct AtomNode {
    pub(crate) header: AtomHeader,
    pub(crate) kind: AtomKind,
    pub(crate) parent: Option<AtomId>,
    pub(crate) children: Vec<AtomId>,
}

impl AtomNode {
    pub fn header(&self) -> &AtomHeader {
        &self.header
    }

    pub fn name(&self) -> &FourCC {
        &self.header.name
    }

    pub fn kind(&self) -> &AtomKind {
        &self.kind
    }

    pub fn parent(&self) -> Option<AtomId> {
        self.parent
    }

    pub fn children(&self) -> &[AtomId] {
        &self.children
    }

    /// Returns the data load bytes kept for this atom.
    /// Empty for containers.
    pub fn payload(&self) -> &[u8] {
        match &self.kind {
            AtomKind::Data(b)
            | AtomKind::MediaData(b)
            | AtomKind::Opaque(b) => b.as_slice(),
            AtomKind::Root
            | AtomKind::Container
            | AtomKind::SampleDescription => &[],
        }
    }
}
