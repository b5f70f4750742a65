//! Typed domain errors.
//!
//! Most services report failures through `anyhow`, but the cases a caller
//! needs to branch on get their own variants here. In particular, updating or
//! transitioning a motorcycle that does not exist surfaces
//! [`DomainError::MotorcycleNotFound`] instead of silently dropping the write.
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("motorcycle not found: {0}")]
    MotorcycleNotFound(String),

    /// Mark-sold requires the record to currently be for sale.
    #[error("motorcycle {0} is not for sale")]
    NotForSale(String),

    /// Mark-unsold requires the record to currently be sold.
    #[error("motorcycle {0} is not sold")]
    NotSold(String),
}
