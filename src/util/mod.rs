#[cfg(feature = "tracing")]
pub mod trace;
