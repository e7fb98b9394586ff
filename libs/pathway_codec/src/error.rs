use pathway_geo::GeoError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("node identifier {0} appears more than once")]
    DuplicateNode(String),

    #[error(transparent)]
    Geo(#[from] GeoError),
}
