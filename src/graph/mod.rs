#[doc(hidden)]
pub mod cost;
#[doc(hidden)]
pub mod impls;
#[doc(hidden)]
pub mod item;
#[doc(hidden)]
pub mod pivots;
#[doc(hidden)]
pub mod traits;

#[doc(inline)]
pub use cost::{Cost, CostFn};
#[doc(inline)]
pub use impls::{
    AdjacencyBuilder, AdjacencyConfig, Builder, GridBuilder, GridConfig, Noise, Obstacles, Open,
    Proximity, RadiusBuilder, RadiusConfig, Reach, Walkable,
};
#[doc(inline)]
pub use item::{Graph, GraphStructure, GridLayout, Layout, Weight};
#[doc(inline)]
pub use pivots::{Pivots, find_pivots};
#[doc(inline)]
pub use traits::{Locate, Search};
