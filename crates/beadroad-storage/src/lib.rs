//! History log persistence for the bead-road engine.
//!
//! [`SqliteHistoryStore`] is the durable store: a serialized writer, a
//! round-robin read pool, and schema migrations tracked through
//! `PRAGMA user_version`. [`MemoryHistoryStore`] keeps the log in process.

pub mod connection;
pub mod memory;
pub mod migrations;
pub mod queries;
pub mod store;

pub use connection::DatabaseManager;
pub use memory::MemoryHistoryStore;
pub use store::SqliteHistoryStore;
