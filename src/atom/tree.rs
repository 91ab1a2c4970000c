//! Atom tree, read once from an MP4-file and queried afterwards.
//!
//! Parsing is recursive descent over the atom headers:
//! container atoms (see `CONTAINER`) and the sample description
//! atom (`stsd`) are descended into, data atoms (see `DATA`) keep
//! their full data load, `mdat` keeps only its first few bytes,
//! and all other atoms keep a capped prefix of their data load.
//! After each atom the reader is always moved to the end of that
//! atom, regardless of how much was read, so partially understood
//! atoms never throw off the position of the next one.
//!
//! Zero sized atoms are treated as corrupt. Their parent is abandoned
//! from that point on and parsing resumes after the parent, which
//! keeps everything read so far.

use std::{
    fmt,
    io::{Read, Seek},
};

use log::{debug, warn};

use crate::{
    consts::{MAX_DEPTH, MDAT_PREFIX, PAYLOAD_LIMIT, STSD_PREFIX},
    reader::Mp4Reader,
    FourCC,
    TcError,
};

use super::{AtomHeader, AtomId, AtomKind, AtomNode};

/// Settings for building an `AtomTree`.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Max number of data load bytes kept for
    /// atoms that are neither containers nor data atoms.
    pub payload_limit: usize,
    /// Number of bytes kept from the start of `mdat`.
    pub mdat_prefix: usize,
    /// Nesting depth where parsing gives up.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            payload_limit: PAYLOAD_LIMIT,
            mdat_prefix: MDAT_PREFIX,
            max_depth: MAX_DEPTH,
        }
    }
}

/// Atoms of an MP4-file, with the root
/// node spanning the entire file.
///
/// Nodes are stored in a flat table in the order
/// their headers were read. Nothing is mutated after parsing.
#[derive(Debug, Clone)]
pub struct AtomTree {
    nodes: Vec<AtomNode>,
}

impl AtomTree {
    /// Parses all atoms in `reader`, using default `ParseOptions`.
    pub fn parse<R: Read + Seek>(reader: R) -> Result<Self, TcError> {
        Self::parse_with(reader, &ParseOptions::default())
    }

    /// Parses all atoms in `reader`.
    pub fn parse_with<R: Read + Seek>(
        reader: R,
        options: &ParseOptions
    ) -> Result<Self, TcError> {
        let mut rdr = Mp4Reader::new(reader)?;
        Self::read(&mut rdr, options)
    }

    pub(crate) fn read<R: Read + Seek>(
        rdr: &mut Mp4Reader<R>,
        options: &ParseOptions
    ) -> Result<Self, TcError> {
        rdr.seek_to(0)?;

        let mut tree = Self {
            nodes: vec![AtomNode {
                header: AtomHeader::root(rdr.len),
                kind: AtomKind::Root,
                parent: None,
                children: Vec::new(),
            }]
        };

        let len = rdr.len;
        tree.read_children(rdr, AtomId::ROOT, len, 0, options)?;

        debug!("Parsed {} atoms from {len} bytes", tree.len() - 1);

        Ok(tree)
    }

    /// Reads sibling atoms from current position until `end`,
    /// adding these as children to `parent`.
    fn read_children<R: Read + Seek>(
        &mut self,
        rdr: &mut Mp4Reader<R>,
        parent: AtomId,
        end: u64,
        depth: usize,
        options: &ParseOptions,
    ) -> Result<(), TcError> {
        if depth > options.max_depth {
            warn!("Atom '{}' nested too deep. Aborting.", self.node(parent).name());
            return Err(TcError::RecurseDepthExceeded((depth, options.max_depth)));
        }

        // never read past the end of the source
        let end = end.min(rdr.len);

        loop {
            let offset = rdr.pos()?;
            if offset >= end {
                break;
            }

            if end - offset < 8 {
                warn!("Truncated atom header @ offset {offset} in '{}'. Skipped.",
                    self.node(parent).name());
                rdr.seek_to(end)?;
                break;
            }

            let header = match rdr.header() {
                Ok(hdr) => hdr,
                Err(TcError::BinReadError(err)) if err.is_eof() => {
                    warn!("Truncated atom header @ offset {offset} in '{}'. Skipped.",
                        self.node(parent).name());
                    rdr.seek_to(end)?;
                    break;
                },
                Err(err) => return Err(err),
            };

            // corrupt atom, abandon the rest of the parent
            let corrupt = match header.atom_size {
                0 => Some(TcError::ZeroSizeAtom{
                    name: header.name.to_string(),
                    offset
                }),
                n if n < header.header_size() as u64 => Some(TcError::InvalidAtomSize{
                    name: header.name.to_string(),
                    size: n,
                    offset
                }),
                _ => None,
            };
            if let Some(err) = corrupt {
                warn!("{err} Skipped remaining atoms in '{}'.", self.node(parent).name());
                rdr.seek_to(end)?;
                break;
            }

            let atom_end = header.end();
            let data_size = header.data_size();
            let name = header.name.to_owned();

            let id = AtomId(self.nodes.len());
            self.nodes.push(AtomNode {
                header,
                kind: AtomKind::Container,
                parent: Some(parent),
                children: Vec::new(),
            });

            let kind = match name {
                FourCC::Stsd => {
                    rdr.seek(STSD_PREFIX as i64)?;
                    self.read_children(rdr, id, atom_end.min(end), depth + 1, options)?;
                    AtomKind::SampleDescription
                },
                FourCC::Mdat => {
                    let n = data_size.min(options.mdat_prefix as u64);
                    AtomKind::MediaData(rdr.read_upto(n)?)
                },
                n if n.is_container() => {
                    self.read_children(rdr, id, atom_end.min(end), depth + 1, options)?;
                    AtomKind::Container
                },
                n if n.is_data() => AtomKind::Data(rdr.read_upto(data_size)?),
                _ => {
                    let n = data_size.min(options.payload_limit as u64);
                    AtomKind::Opaque(rdr.read_upto(n)?)
                },
            };

            self.nodes[id.0].kind = kind;
            self.nodes[parent.0].children.push(id);

            rdr.seek_to(atom_end)?;
        }

        Ok(())
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Never `true`, since there is always a root node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> &AtomNode {
        self.node(AtomId::ROOT)
    }

    /// Returns node with specified ID.
    ///
    /// Panics if `id` was not obtained from this tree.
    pub fn node(&self, id: AtomId) -> &AtomNode {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: AtomId) -> Option<&AtomNode> {
        self.nodes.get(id.0)
    }

    /// Iterates over all nodes in the order these were read,
    /// i.e. depth first.
    pub fn iter(&self) -> impl Iterator<Item = (AtomId, &AtomNode)> {
        self.nodes.iter()
            .enumerate()
            .map(|(i, n)| (AtomId(i), n))
    }

    pub fn parent(&self, id: AtomId) -> Option<AtomId> {
        self.node(id).parent
    }

    /// Returns the closest ancestor of `id` with specified FourCC,
    /// e.g. the `trak` that encloses a sample description entry.
    pub fn ancestor(&self, id: AtomId, fourcc: &FourCC) -> Option<AtomId> {
        let mut current = self.parent(id);
        while let Some(p) = current {
            if self.node(p).name() == fourcc {
                return Some(p);
            }
            current = self.parent(p);
        }
        None
    }

    /// Depth first search for the first atom with specified FourCC,
    /// starting from the root.
    pub fn find_atom(&self, fourcc: &FourCC) -> Option<AtomId> {
        self.find_atom_in(AtomId::ROOT, fourcc)
    }

    /// Depth first search for the first atom with specified FourCC
    /// below `from` (`from` itself is not considered).
    pub fn find_atom_in(&self, from: AtomId, fourcc: &FourCC) -> Option<AtomId> {
        for child in self.node(from).children() {
            if self.node(*child).name() == fourcc {
                return Some(*child);
            }
            if let Some(found) = self.find_atom_in(*child, fourcc) {
                return Some(found);
            }
        }
        None
    }

    /// Returns all atoms with specified FourCC, starting from the root.
    ///
    /// Note that e.g. `tmcd` may occur both as a sample description
    /// entry and as a track reference.
    pub fn find_atoms(&self, fourcc: &FourCC) -> Vec<AtomId> {
        self.find_atoms_in(AtomId::ROOT, fourcc)
    }

    /// Returns all atoms with specified FourCC below `from`,
    /// in depth first order. Matching atoms are not descended into.
    pub fn find_atoms_in(&self, from: AtomId, fourcc: &FourCC) -> Vec<AtomId> {
        let mut found = Vec::new();
        self.collect(from, fourcc, &mut found);
        found
    }

    fn collect(&self, from: AtomId, fourcc: &FourCC, found: &mut Vec<AtomId>) {
        for child in self.node(from).children() {
            if self.node(*child).name() == fourcc {
                found.push(*child);
            } else {
                self.collect(*child, fourcc, found);
            }
        }
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, id: AtomId, level: usize) -> fmt::Result {
        let node = self.node(id);
        writeln!(f, "{}{} @{} size: {}",
            "   ".repeat(level),
            node.name(),
            node.header.offset,
            node.header.atom_size
        )?;
        for child in node.children() {
            self.fmt_node(f, *child, level + 1)?;
        }
        Ok(())
    }
}

/// Indented atom hierarchy.
impl fmt::Display for AtomTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(f, AtomId::ROOT, 0)
    }
}
