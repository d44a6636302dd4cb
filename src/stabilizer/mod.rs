//! Stabilizers: per-level probability tables keyed by the rank composition
//! of the four combined devices.

pub mod data;
pub mod probability;
pub mod registry;
pub mod types;

pub use probability::*;
pub use registry::*;
pub use types::*;
