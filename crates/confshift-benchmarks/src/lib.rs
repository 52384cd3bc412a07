//! confshift benchmarking suite
//!
//! Benchmarks for parsing and flattening configuration of growing size.

pub mod common;

pub use common::*;
