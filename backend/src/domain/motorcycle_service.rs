//! Record store service: the authoritative list of motorcycles.
//!
//! Holds create/read/update plus the derived filtered views. Views are
//! recomputed from the persisted list on every read, so a read immediately
//! after a mutation always sees it. Records are never deleted; a sale is a
//! status change, not a removal.
use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use log::{info, warn};

use crate::domain::commands::motorcycles::{
    AddLineItemCommand, AddPhotoCommand, CreateMotorcycleCommand, RemoveLineItemCommand,
    RemovePhotoCommand,
};
use crate::domain::error::DomainError;
use crate::domain::models::motorcycle::{LineItem, Motorcycle, MotorcycleStatus};
use crate::storage::traits::{Connection, MotorcycleStorage};

#[derive(Clone)]
pub struct MotorcycleService<C: Connection> {
    motorcycle_repository: C::MotorcycleRepository,
}

impl<C: Connection> MotorcycleService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        let motorcycle_repository = connection.create_motorcycle_repository();
        Self {
            motorcycle_repository,
        }
    }

    /// Add a motorcycle to inventory. The service assigns identity and the
    /// lifecycle fields: status For Sale, purchase date now, no sale yet.
    pub fn create_motorcycle(&self, command: CreateMotorcycleCommand) -> Result<Motorcycle> {
        let motorcycle = Motorcycle {
            id: Motorcycle::generate_id(),
            model: command.model,
            year: command.year,
            license_no: command.license_no,
            voucher_no: command.voucher_no,
            purchase_price: command.purchase_price,
            asking_price: command.asking_price,
            odometer: command.odometer,
            notes: command.notes,
            photos: command.photos,
            expenses: command.expenses,
            promotions: command.promotions,
            purchase_date: Utc::now(),
            status: MotorcycleStatus::ForSale,
            sale_date: None,
            selling_price: None,
        };

        self.motorcycle_repository.store_motorcycle(&motorcycle)?;
        info!(
            "Added {} {} to inventory ({})",
            motorcycle.year, motorcycle.model, motorcycle.id
        );
        Ok(motorcycle)
    }

    /// Replace the stored record with the same id. The record's internal
    /// consistency is the caller's responsibility; no field validation
    /// happens here. A missing id is surfaced as
    /// [`DomainError::MotorcycleNotFound`] rather than silently dropped.
    pub fn update_motorcycle(&self, motorcycle: Motorcycle) -> Result<Motorcycle> {
        let found = self.motorcycle_repository.update_motorcycle(&motorcycle)?;
        if !found {
            warn!("Update rejected: no motorcycle with id {}", motorcycle.id);
            return Err(DomainError::MotorcycleNotFound(motorcycle.id).into());
        }
        Ok(motorcycle)
    }

    /// Look up a motorcycle by id. A miss is a normal outcome, not an error.
    pub fn get_motorcycle(&self, motorcycle_id: &str) -> Result<Option<Motorcycle>> {
        self.motorcycle_repository.get_motorcycle(motorcycle_id)
    }

    /// Every record, in recorded order.
    pub fn list_all(&self) -> Result<Vec<Motorcycle>> {
        self.motorcycle_repository.load_motorcycles()
    }

    /// For-sale inventory, most recently purchased first.
    pub fn list_for_sale(&self) -> Result<Vec<Motorcycle>> {
        let mut motorcycles: Vec<Motorcycle> = self
            .motorcycle_repository
            .load_motorcycles()?
            .into_iter()
            .filter(|m| m.status == MotorcycleStatus::ForSale)
            .collect();
        motorcycles.sort_by(|a, b| b.purchase_date.cmp(&a.purchase_date));
        Ok(motorcycles)
    }

    /// Sales history, most recently sold first.
    pub fn list_sold(&self) -> Result<Vec<Motorcycle>> {
        let mut motorcycles: Vec<Motorcycle> = self
            .motorcycle_repository
            .load_motorcycles()?
            .into_iter()
            .filter(|m| m.status == MotorcycleStatus::Sold)
            .collect();
        motorcycles.sort_by(|a, b| b.sale_date.cmp(&a.sale_date));
        Ok(motorcycles)
    }

    pub fn add_expense(&self, command: AddLineItemCommand) -> Result<Motorcycle> {
        let mut motorcycle = self.require_motorcycle(&command.motorcycle_id)?;
        motorcycle
            .expenses
            .push(LineItem::new(command.description, command.cost));
        self.update_motorcycle(motorcycle)
    }

    pub fn remove_expense(&self, command: RemoveLineItemCommand) -> Result<Motorcycle> {
        let mut motorcycle = self.require_motorcycle(&command.motorcycle_id)?;
        motorcycle
            .expenses
            .retain(|item| item.id != command.line_item_id);
        self.update_motorcycle(motorcycle)
    }

    pub fn add_promotion(&self, command: AddLineItemCommand) -> Result<Motorcycle> {
        let mut motorcycle = self.require_motorcycle(&command.motorcycle_id)?;
        motorcycle
            .promotions
            .push(LineItem::new(command.description, command.cost));
        self.update_motorcycle(motorcycle)
    }

    pub fn remove_promotion(&self, command: RemoveLineItemCommand) -> Result<Motorcycle> {
        let mut motorcycle = self.require_motorcycle(&command.motorcycle_id)?;
        motorcycle
            .promotions
            .retain(|item| item.id != command.line_item_id);
        self.update_motorcycle(motorcycle)
    }

    pub fn add_photo(&self, command: AddPhotoCommand) -> Result<Motorcycle> {
        let mut motorcycle = self.require_motorcycle(&command.motorcycle_id)?;
        motorcycle.photos.push(command.data_url);
        self.update_motorcycle(motorcycle)
    }

    /// Remove a photo by gallery position. An out-of-range index leaves the
    /// gallery untouched.
    pub fn remove_photo(&self, command: RemovePhotoCommand) -> Result<Motorcycle> {
        let mut motorcycle = self.require_motorcycle(&command.motorcycle_id)?;
        if command.index < motorcycle.photos.len() {
            motorcycle.photos.remove(command.index);
        }
        self.update_motorcycle(motorcycle)
    }

    fn require_motorcycle(&self, motorcycle_id: &str) -> Result<Motorcycle> {
        self.motorcycle_repository
            .get_motorcycle(motorcycle_id)?
            .ok_or_else(|| DomainError::MotorcycleNotFound(motorcycle_id.to_string()).into())
    }
}
