//! Platform abstraction layer
//!
//! Translates browser input into simulation events. Rendering and timing live
//! in the binary's driver.

pub mod input;

pub use input::{KeyPhase, map_key};
