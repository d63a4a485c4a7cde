//! Seams between the analysis core and its collaborators.

pub mod history_store;

pub use history_store::HistoryStore;
