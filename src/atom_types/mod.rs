//! Typed data loads for the few atoms
//! needed to locate and read a timecode track.

mod co64;
mod elst;
mod stco;
mod tmcd;

pub use co64::Co64;
pub use elst::{Elst, EditListEntry};
pub use stco::Stco;
pub use tmcd::Tmcd;
