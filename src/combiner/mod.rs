//! Combining four devices into one.

pub mod logic;

pub use logic::*;
