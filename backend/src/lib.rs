//! # Moto Tracker Backend
//!
//! Inventory and sales tracking for a used-motorcycle dealer. Motorcycles are
//! tracked from purchase through resale, with expenses and promotions recorded
//! against each one so profitability can be derived at any time.
//!
//! The backend is UI-agnostic and follows a layered architecture:
//!
//! ```text
//! UI layer (out of scope for this crate)
//!     ↓
//! IO layer (DTO mappers, photo encoding)
//!     ↓
//! Domain layer (services, financial calculator)
//!     ↓
//! Storage layer (key-value persistence)
//! ```
//!
//! All operations are synchronous: the app is single-user and persistence is a
//! local key-value store, so there is no async runtime and no locking beyond
//! what the storage layer needs internally.

pub mod domain;
pub mod io;
pub mod storage;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use log::info;

use crate::domain::{LifecycleService, MotorcycleService, ReportsService};
use crate::storage::kv::KvConnection;

/// Main application state that holds all services.
#[derive(Clone)]
pub struct AppState {
    pub motorcycle_service: MotorcycleService<KvConnection>,
    pub lifecycle_service: LifecycleService<KvConnection>,
    pub reports_service: ReportsService<KvConnection>,
}

/// Initialize the backend against a data directory.
pub fn initialize_backend<P: AsRef<Path>>(data_dir: P) -> Result<AppState> {
    info!("Setting up key-value store");
    let connection = Arc::new(KvConnection::new(data_dir)?);

    info!("Setting up domain services");
    let motorcycle_service = MotorcycleService::new(connection.clone());
    let lifecycle_service = LifecycleService::new(connection.clone());
    let reports_service = ReportsService::new(connection);

    Ok(AppState {
        motorcycle_service,
        lifecycle_service,
        reports_service,
    })
}

/// Initialize the backend in the default data directory
/// (`~/Documents/Moto Tracker`).
pub fn initialize_backend_default() -> Result<AppState> {
    let connection = Arc::new(KvConnection::new_default()?);
    Ok(AppState {
        motorcycle_service: MotorcycleService::new(connection.clone()),
        lifecycle_service: LifecycleService::new(connection.clone()),
        reports_service: ReportsService::new(connection),
    })
}
