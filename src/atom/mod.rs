//! Atom headers and the parsed atom tree.

mod header;
mod node;
mod tree;

pub use header::AtomHeader;
pub use node::{AtomId, AtomKind, AtomNode};
pub use tree::{AtomTree, ParseOptions};
