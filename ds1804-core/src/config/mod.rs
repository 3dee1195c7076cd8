//! Configuration types
//!
//! Chip variant selection, pulse timing and the controller configuration.
//! With the `serde` feature the controller configuration can be stored as
//! postcard binary data.

pub mod timing;
pub mod types;
pub mod variant;

pub use timing::PulseTiming;
pub use types::*;
pub use variant::{Variant, STEP_COUNT};
