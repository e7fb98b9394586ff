#![doc = include_str!("../README.md")]

#[doc(hidden)]
pub mod error;
pub mod graph;
pub mod search;
pub mod util;

#[doc(inline)]
pub use error::{BuildError, InvalidInputError, LocateError, SearchError};
#[doc(inline)]
pub use graph::{Graph, Locate, Search};

pub use codec::{Cell, CellId, Edge, Entry, Node, Payload, PointId};
pub use pathway_geo::{Metric, Point, Region};
