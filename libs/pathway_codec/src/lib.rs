//! Producers of the node and adjacency lists that `pathway` graphs are built from.
//!
//! The [`primitive`] module holds the identifier, node and edge types shared by
//! every graph family, and [`payload`] reduces a raw JSON dataset into them.

pub mod error;
pub mod payload;
pub mod primitive;

pub use error::CodecError;
pub use payload::{Payload, RawId};
pub use primitive::{Cell, CellId, Edge, Entry, Node, PointId};
