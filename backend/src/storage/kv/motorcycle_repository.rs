//! # KV Motorcycle Repository
//!
//! Stores the full motorcycle list as one JSON document under the fixed key
//! `motorcycles`. Every mutation rewrites the whole document; record counts
//! stay in the hundreds, so a full rewrite is cheaper than it sounds and
//! keeps the document in a shape any JSON tool can inspect.

use anyhow::Result;
use log::debug;

use crate::domain::models::motorcycle::Motorcycle;
use crate::storage::kv::connection::KvConnection;
use crate::storage::traits::MotorcycleStorage;

/// The single namespace key the whole inventory lives under.
pub const MOTORCYCLES_KEY: &str = "motorcycles";

#[derive(Clone)]
pub struct MotorcycleRepository {
    connection: KvConnection,
}

impl MotorcycleRepository {
    pub fn new(connection: KvConnection) -> Self {
        Self { connection }
    }

    fn read_all(&self) -> Result<Vec<Motorcycle>> {
        Ok(self
            .connection
            .get(MOTORCYCLES_KEY)?
            .unwrap_or_default())
    }

    fn write_all(&self, motorcycles: &[Motorcycle]) -> Result<()> {
        self.connection.put(MOTORCYCLES_KEY, &motorcycles)
    }
}

impl MotorcycleStorage for MotorcycleRepository {
    fn load_motorcycles(&self) -> Result<Vec<Motorcycle>> {
        self.read_all()
    }

    fn get_motorcycle(&self, motorcycle_id: &str) -> Result<Option<Motorcycle>> {
        let motorcycles = self.read_all()?;
        Ok(motorcycles.into_iter().find(|m| m.id == motorcycle_id))
    }

    fn store_motorcycle(&self, motorcycle: &Motorcycle) -> Result<()> {
        let mut motorcycles = self.read_all()?;
        motorcycles.push(motorcycle.clone());
        self.write_all(&motorcycles)?;
        debug!("Stored motorcycle {}", motorcycle.id);
        Ok(())
    }

    fn update_motorcycle(&self, motorcycle: &Motorcycle) -> Result<bool> {
        let mut motorcycles = self.read_all()?;
        match motorcycles.iter_mut().find(|m| m.id == motorcycle.id) {
            Some(slot) => {
                *slot = motorcycle.clone();
                self.write_all(&motorcycles)?;
                debug!("Updated motorcycle {}", motorcycle.id);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
