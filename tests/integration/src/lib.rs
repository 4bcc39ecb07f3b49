//! Integration test utilities for the skiff runtime
//!
//! This crate provides raw payload fixtures and a small harness for
//! driving decoded gateway frames through the full decode, dispatch,
//! and command pipeline.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
