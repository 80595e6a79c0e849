//! Items not substantial enough for a dedicated module.

pub mod log;
