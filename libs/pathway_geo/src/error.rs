use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("region collapses to zero span (width {width}, height {height})")]
    ZeroSpan { width: f64, height: f64 },

    #[error("padding factor must be finite and non-negative, given {0}")]
    InvalidPadding(f64),
}
