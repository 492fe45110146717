//! Grid module: cell storage and wall layout generation.

pub mod grid;

pub use grid::*;
