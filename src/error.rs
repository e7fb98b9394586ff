use codec::CodecError;
use pathway_geo::GeoError;
use thiserror::Error;

/// Malformed or degenerate input to graph construction.
///
/// Construction never yields a partial graph: any of these aborts the build.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("at least 2 distinct points are required, {0} given")]
    TooFewPoints(usize),

    #[error("edge {from} -> {to} has invalid cost {cost}, costs must be finite and non-negative")]
    NegativeCost { from: i64, to: i64, cost: f64 },

    #[error("invalid radius: {0}")]
    InvalidRadius(String),

    #[error("grid dimensions {rows}x{cols} are invalid")]
    InvalidDimensions { rows: u32, cols: u32 },

    #[error("identifier {0} appears more than once")]
    DuplicateId(i64),

    #[error(transparent)]
    Geo(#[from] GeoError),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// The name the construction failure is known by to collaborators.
pub type InvalidInputError = BuildError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocateError {
    #[error("nearest node is {distance} away, beyond the snap distance of {max_distance}")]
    NotFound { distance: f64, max_distance: f64 },

    #[error("graph has no nodes to snap onto")]
    EmptyGraph,

    #[error("snap distance must be non-negative, got {0}")]
    InvalidDistance(f64),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("node {0} is not part of the graph")]
    UnknownNode(String),

    #[error("could not resolve endpoint: {0}")]
    Locate(#[from] LocateError),
}
