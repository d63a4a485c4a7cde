//! Board preparation: tie resolution and zone decomposition.

pub mod ties;
pub mod zones;

pub use ties::{majority_vote, resolve_ties};
pub use zones::{decompose, Zone};
