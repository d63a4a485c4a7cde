//! Pattern classification: template enumeration, taxonomy lookup and
//! composite code assembly.

pub mod classifier;
pub mod positions;
pub mod taxonomy;

pub use classifier::{PatternClassifier, TemplateOutcome, ZoneClassification};
pub use positions::{pattern_positions, Half, PatternPosition};
pub use taxonomy::{Sequence, Taxonomy, TaxonomyDocument};
