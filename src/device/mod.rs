//! Devices: rank, stars and type.

pub mod types;

pub use types::*;
