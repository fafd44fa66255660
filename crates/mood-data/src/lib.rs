//! # mood-data
//!
//! Everything between the raw export and the chart: the pure constraint
//! filter, the fixed color pool, the line-building store and the weighted
//! demo-data generator.

pub mod colors;
pub mod filter;
pub mod generator;
pub mod store;

pub use colors::*;
pub use filter::*;
pub use generator::*;
pub use store::*;
