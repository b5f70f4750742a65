//! # Storage Module
//!
//! Data persistence for the motorcycle inventory tracker.
//!
//! The whole record set lives in a local key-value store: one JSON document
//! per key, with the full motorcycle list under a single fixed key. Reads
//! default to an empty list when the document is missing or unparsable;
//! writes happen after every mutating operation and are atomic (temp file +
//! rename).
//!
//! The domain layer only sees the traits in [`traits`], so the backing store
//! can be swapped without touching business logic.

pub mod kv;
pub mod traits;

pub use kv::{KvConnection, MotorcycleRepository};
pub use traits::{Connection, MotorcycleStorage};
