//! Domain entities.

pub mod motorcycle;
