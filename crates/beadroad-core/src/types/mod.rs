//! Board and classification value types.

pub mod code;
pub mod grid;
pub mod outcome;

pub use code::{CompositeCode, GroupTag};
pub use grid::Grid;
pub use outcome::Outcome;
