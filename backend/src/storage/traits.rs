//! # Storage Traits
//!
//! Storage abstraction traits that let different backends be used
//! interchangeably by the domain layer.
//!
//! All operations are synchronous: this is a single-user desktop app and the
//! store is a local file.

use anyhow::Result;

use crate::domain::models::motorcycle::Motorcycle;

/// Trait defining the interface for motorcycle storage operations.
pub trait MotorcycleStorage: Send + Sync {
    /// Load every motorcycle, in recorded order.
    fn load_motorcycles(&self) -> Result<Vec<Motorcycle>>;

    /// Retrieve a specific motorcycle by ID.
    fn get_motorcycle(&self, motorcycle_id: &str) -> Result<Option<Motorcycle>>;

    /// Append a new motorcycle record.
    fn store_motorcycle(&self, motorcycle: &Motorcycle) -> Result<()>;

    /// Replace the stored record with the same id.
    /// Returns false if no record with that id exists.
    fn update_motorcycle(&self, motorcycle: &Motorcycle) -> Result<bool>;
}

/// Trait defining the interface for storage connections.
///
/// Abstracts the concrete connection type and provides factory methods for
/// creating repositories, so services can be generic over the backend.
pub trait Connection: Send + Sync + Clone {
    /// The type of MotorcycleStorage this connection creates
    type MotorcycleRepository: MotorcycleStorage + Clone;

    /// Create a new motorcycle repository for this connection
    fn create_motorcycle_repository(&self) -> Self::MotorcycleRepository;
}
