//! # Domain Module
//!
//! Business logic for the motorcycle inventory tracker.
//!
//! ## Module Organization
//!
//! - **models**: Domain entities (motorcycle, line items)
//! - **finance**: Pure financial calculator over a motorcycle snapshot
//! - **commands**: Command/query/result types used by the services
//! - **motorcycle_service**: The record store — authoritative list of
//!   motorcycles plus derived views
//! - **lifecycle_service**: For Sale ↔ Sold state transitions
//! - **reports_service**: Dashboard and sales report aggregation
//!
//! ## Core Rules
//!
//! - A motorcycle is Sold exactly when it has both a sale date and a selling
//!   price; the two transitions set and clear them together
//! - Derived views (for-sale list, sold list, reports) are recomputed from the
//!   stored list on every read, never cached
//! - Numeric inputs are trusted: negative prices or inverted dates are stored
//!   as given and degrade into degenerate results rather than being rejected

pub mod commands;
pub mod error;
pub mod finance;
pub mod lifecycle_service;
pub mod models;
pub mod motorcycle_service;
pub mod reports_service;

pub use error::*;
pub use lifecycle_service::*;
pub use motorcycle_service::*;
pub use reports_service::*;
