//! Best-first shortest-path search with a recorded expansion trace.
//!
//! Searches are usually run through the [`Search`](crate::graph::Search)
//! trait on a [`Graph`](crate::graph::Graph). Each run owns its frontier,
//! records and trace, so a single graph may be searched from any number
//! of threads at once.

#[doc(hidden)]
pub mod engine;
#[doc(hidden)]
pub mod heuristic;
#[doc(hidden)]
pub mod interrupt;
#[doc(hidden)]
pub mod options;
#[doc(hidden)]
pub mod report;
#[doc(hidden)]
pub mod result;

mod frontier;
mod record;

#[doc(inline)]
pub use engine::AStar;
#[doc(inline)]
pub use heuristic::{Heuristic, Scaled, Zero};
#[doc(inline)]
pub use interrupt::{Generation, Interrupt, Never, Ticket};
#[doc(inline)]
pub use options::SearchOptions;
#[doc(inline)]
pub use report::path_distance;
#[doc(inline)]
pub use result::{Frame, Outcome, SearchResult};
