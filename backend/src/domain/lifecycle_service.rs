//! Lifecycle transitions between For Sale and Sold.
//!
//! Both transitions are full-record replacements through the record store:
//! the service reads the stored record fresh, so callers must commit any
//! pending working-copy edits via `update_motorcycle` first or they are not
//! part of the transition. Neither state is terminal — a sale can be undone.
use std::sync::Arc;

use anyhow::Result;
use log::info;

use crate::domain::commands::lifecycle::{MarkSoldCommand, MarkUnsoldCommand};
use crate::domain::error::DomainError;
use crate::domain::finance;
use crate::domain::models::motorcycle::{Motorcycle, MotorcycleStatus};
use crate::storage::traits::{Connection, MotorcycleStorage};

#[derive(Clone)]
pub struct LifecycleService<C: Connection> {
    motorcycle_repository: C::MotorcycleRepository,
}

impl<C: Connection> LifecycleService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        let motorcycle_repository = connection.create_motorcycle_repository();
        Self {
            motorcycle_repository,
        }
    }

    /// Record a completed sale. The motorcycle must exist and currently be
    /// for sale; the transition sets the status, selling price and sale date
    /// together so the sold invariant holds.
    pub fn mark_sold(&self, command: MarkSoldCommand) -> Result<Motorcycle> {
        let mut motorcycle = self.require_motorcycle(&command.motorcycle_id)?;
        if motorcycle.status != MotorcycleStatus::ForSale {
            return Err(DomainError::NotForSale(motorcycle.id).into());
        }

        motorcycle.status = MotorcycleStatus::Sold;
        motorcycle.selling_price = Some(command.selling_price);
        motorcycle.sale_date = Some(command.sale_date);

        self.motorcycle_repository.update_motorcycle(&motorcycle)?;
        info!(
            "Sold {} {} for {} ({})",
            motorcycle.year,
            motorcycle.model,
            finance::format_currency(command.selling_price),
            motorcycle.id
        );
        Ok(motorcycle)
    }

    /// Undo a recorded sale. The motorcycle must exist and currently be
    /// sold; the selling price and sale date are cleared together.
    pub fn mark_unsold(&self, command: MarkUnsoldCommand) -> Result<Motorcycle> {
        let mut motorcycle = self.require_motorcycle(&command.motorcycle_id)?;
        if motorcycle.status != MotorcycleStatus::Sold {
            return Err(DomainError::NotSold(motorcycle.id).into());
        }

        motorcycle.status = MotorcycleStatus::ForSale;
        motorcycle.selling_price = None;
        motorcycle.sale_date = None;

        self.motorcycle_repository.update_motorcycle(&motorcycle)?;
        info!(
            "Returned {} {} to inventory ({})",
            motorcycle.year, motorcycle.model, motorcycle.id
        );
        Ok(motorcycle)
    }

    fn require_motorcycle(&self, motorcycle_id: &str) -> Result<Motorcycle> {
        self.motorcycle_repository
            .get_motorcycle(motorcycle_id)?
            .ok_or_else(|| DomainError::MotorcycleNotFound(motorcycle_id.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::motorcycles::{AddLineItemCommand, CreateMotorcycleCommand};
    use crate::domain::motorcycle_service::MotorcycleService;
    use crate::storage::kv::KvConnection;
    use chrono::{TimeZone, Utc};

    fn create_test_services() -> (
        MotorcycleService<KvConnection>,
        LifecycleService<KvConnection>,
        tempfile::TempDir,
    ) {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let connection = Arc::new(KvConnection::new(temp_dir.path()).unwrap());
        (
            MotorcycleService::new(connection.clone()),
            LifecycleService::new(connection),
            temp_dir,
        )
    }

    fn stocked_motorcycle(service: &MotorcycleService<KvConnection>) -> Motorcycle {
        // Scenario A stock: final cost 1000 + 100 - 50 = 1050
        let m = service
            .create_motorcycle(CreateMotorcycleCommand {
                model: "Honda CB500F".to_string(),
                year: 2020,
                purchase_price: 1000.0,
                asking_price: 1500.0,
                ..Default::default()
            })
            .unwrap();
        service
            .add_expense(AddLineItemCommand {
                motorcycle_id: m.id.clone(),
                description: "New chain".to_string(),
                cost: 100.0,
            })
            .unwrap();
        service
            .add_promotion(AddLineItemCommand {
                motorcycle_id: m.id.clone(),
                description: "Opening discount".to_string(),
                cost: 50.0,
            })
            .unwrap()
    }

    #[test]
    fn test_mark_sold_sets_all_sale_fields() {
        let (motorcycles, lifecycle, _temp_dir) = create_test_services();
        let m = stocked_motorcycle(&motorcycles);
        let sale_date = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();

        let sold = lifecycle
            .mark_sold(MarkSoldCommand {
                motorcycle_id: m.id.clone(),
                selling_price: 1400.0,
                sale_date,
            })
            .unwrap();

        assert_eq!(sold.status, MotorcycleStatus::Sold);
        assert_eq!(sold.selling_price, Some(1400.0));
        assert_eq!(sold.sale_date, Some(sale_date));
        // Scenario B: profit = 1400 - 1050
        assert_eq!(finance::profit(&sold), 350.0);

        let sold_list = motorcycles.list_sold().unwrap();
        assert_eq!(sold_list.len(), 1);
        assert_eq!(sold_list[0].id, m.id);
        assert!(motorcycles.list_for_sale().unwrap().is_empty());
    }

    #[test]
    fn test_mark_unsold_clears_sale_fields() {
        let (motorcycles, lifecycle, _temp_dir) = create_test_services();
        let m = stocked_motorcycle(&motorcycles);
        lifecycle
            .mark_sold(MarkSoldCommand {
                motorcycle_id: m.id.clone(),
                selling_price: 1400.0,
                sale_date: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
            })
            .unwrap();

        // Scenario C: undo the sale
        let unsold = lifecycle
            .mark_unsold(MarkUnsoldCommand {
                motorcycle_id: m.id.clone(),
            })
            .unwrap();

        assert_eq!(unsold.status, MotorcycleStatus::ForSale);
        assert_eq!(unsold.selling_price, None);
        assert_eq!(unsold.sale_date, None);
        assert_eq!(finance::profit(&unsold), 0.0);

        assert_eq!(motorcycles.list_for_sale().unwrap().len(), 1);
        assert!(motorcycles.list_sold().unwrap().is_empty());
    }

    #[test]
    fn test_mark_sold_twice_is_rejected() {
        let (motorcycles, lifecycle, _temp_dir) = create_test_services();
        let m = stocked_motorcycle(&motorcycles);
        let command = MarkSoldCommand {
            motorcycle_id: m.id.clone(),
            selling_price: 1400.0,
            sale_date: Utc::now(),
        };
        lifecycle.mark_sold(command.clone()).unwrap();

        let err = lifecycle.mark_sold(command).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DomainError>(),
            Some(&DomainError::NotForSale(m.id))
        );
    }

    #[test]
    fn test_mark_unsold_requires_sold_status() {
        let (motorcycles, lifecycle, _temp_dir) = create_test_services();
        let m = stocked_motorcycle(&motorcycles);

        let err = lifecycle
            .mark_unsold(MarkUnsoldCommand {
                motorcycle_id: m.id.clone(),
            })
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<DomainError>(),
            Some(&DomainError::NotSold(m.id))
        );
    }

    #[test]
    fn test_transitions_on_missing_record_surface_not_found() {
        let (_, lifecycle, _temp_dir) = create_test_services();

        let err = lifecycle
            .mark_sold(MarkSoldCommand {
                motorcycle_id: "no-such-id".to_string(),
                selling_price: 1.0,
                sale_date: Utc::now(),
            })
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<DomainError>(),
            Some(&DomainError::MotorcycleNotFound("no-such-id".to_string()))
        );
    }

    #[test]
    fn test_transition_consumes_committed_edits() {
        let (motorcycles, lifecycle, _temp_dir) = create_test_services();
        let mut working_copy = stocked_motorcycle(&motorcycles);

        // Edit-then-sell: the working copy is saved back first, so the
        // transition keeps the edit.
        working_copy.odometer = 22_000;
        motorcycles.update_motorcycle(working_copy.clone()).unwrap();

        let sold = lifecycle
            .mark_sold(MarkSoldCommand {
                motorcycle_id: working_copy.id.clone(),
                selling_price: 1400.0,
                sale_date: Utc::now(),
            })
            .unwrap();
        assert_eq!(sold.odometer, 22_000);
    }
}
