//! Key-value persistence backend: JSON documents in a local directory.

pub mod connection;
pub mod motorcycle_repository;

pub use connection::KvConnection;
pub use motorcycle_repository::MotorcycleRepository;
