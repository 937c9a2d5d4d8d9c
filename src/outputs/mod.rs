//! Output generation.
//!
//! - [`json`]: Writes per-section and combined article arrays

pub mod json;
