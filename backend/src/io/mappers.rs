//! DTO ↔ domain mapping.
//!
//! UI collaborators speak the `shared` crate's DTOs (string dates, camelCase
//! wire names); the domain layer speaks its own types. These mappers are the
//! only place the two meet.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::domain::commands::lifecycle::MarkSoldCommand;
use crate::domain::commands::motorcycles::CreateMotorcycleCommand;
use crate::domain::commands::reports::{
    ActivityEntry, ActivityKind, DashboardSummary, DateRange, SalesReport,
};
use crate::domain::models::motorcycle::{
    LineItem as DomainLineItem, Motorcycle as DomainMotorcycle,
    MotorcycleStatus as DomainStatus,
};

pub struct MotorcycleMapper;

impl MotorcycleMapper {
    pub fn to_dto(domain: DomainMotorcycle) -> shared::Motorcycle {
        shared::Motorcycle {
            id: domain.id,
            model: domain.model,
            year: domain.year,
            license_no: domain.license_no,
            voucher_no: domain.voucher_no,
            purchase_price: domain.purchase_price,
            asking_price: domain.asking_price,
            odometer: domain.odometer,
            notes: domain.notes,
            photos: domain.photos,
            expenses: domain.expenses.into_iter().map(Self::line_item_to_dto).collect(),
            promotions: domain
                .promotions
                .into_iter()
                .map(Self::line_item_to_dto)
                .collect(),
            purchase_date: domain.purchase_date.to_rfc3339(),
            status: Self::status_to_dto(domain.status),
            sale_date: domain.sale_date.map(|d| d.to_rfc3339()),
            selling_price: domain.selling_price,
        }
    }

    pub fn create_request_to_command(request: shared::CreateMotorcycleRequest) -> CreateMotorcycleCommand {
        CreateMotorcycleCommand {
            model: request.model,
            year: request.year,
            license_no: request.license_no,
            voucher_no: request.voucher_no,
            purchase_price: request.purchase_price,
            asking_price: request.asking_price,
            odometer: request.odometer,
            notes: request.notes,
            photos: request.photos,
            expenses: request
                .expenses
                .into_iter()
                .map(Self::line_item_to_domain)
                .collect(),
            promotions: request
                .promotions
                .into_iter()
                .map(Self::line_item_to_domain)
                .collect(),
        }
    }

    pub fn mark_sold_request_to_command(request: shared::MarkSoldRequest) -> Result<MarkSoldCommand> {
        let sale_date = parse_rfc3339(&request.sale_date)
            .with_context(|| format!("invalid sale date '{}'", request.sale_date))?;
        Ok(MarkSoldCommand {
            motorcycle_id: request.motorcycle_id,
            selling_price: request.selling_price,
            sale_date,
        })
    }

    fn line_item_to_dto(domain: DomainLineItem) -> shared::LineItem {
        shared::LineItem {
            id: domain.id,
            description: domain.description,
            cost: domain.cost,
        }
    }

    fn line_item_to_domain(dto: shared::LineItem) -> DomainLineItem {
        DomainLineItem {
            id: dto.id,
            description: dto.description,
            cost: dto.cost,
        }
    }

    fn status_to_dto(status: DomainStatus) -> shared::MotorcycleStatus {
        match status {
            DomainStatus::ForSale => shared::MotorcycleStatus::ForSale,
            DomainStatus::Sold => shared::MotorcycleStatus::Sold,
        }
    }
}

pub struct ReportsMapper;

impl ReportsMapper {
    pub fn dashboard_to_dto(
        summary: DashboardSummary,
        recent_activity: Vec<ActivityEntry>,
    ) -> shared::DashboardResponse {
        shared::DashboardResponse {
            total_inventory_value: summary.total_inventory_value,
            total_investment: summary.total_investment,
            potential_profit: summary.potential_profit,
            recent_activity: recent_activity
                .into_iter()
                .map(Self::activity_to_dto)
                .collect(),
        }
    }

    pub fn report_to_dto(report: SalesReport) -> shared::ReportResponse {
        shared::ReportResponse {
            range: Self::range_to_dto(report.range),
            sale_count: report.sale_count,
            total_revenue: report.total_revenue,
            total_cost_of_goods: report.total_cost_of_goods,
            total_profit: report.total_profit,
            average_profit: report.average_profit,
            average_days_in_inventory: report.average_days_in_inventory,
            top_performers: report
                .top_performers
                .into_iter()
                .map(MotorcycleMapper::to_dto)
                .collect(),
            profit_by_make: report
                .profit_by_make
                .into_iter()
                .map(|g| shared::MakeProfit {
                    make: g.make,
                    profit: g.profit,
                })
                .collect(),
        }
    }

    pub fn range_to_domain(range: shared::ReportRange) -> DateRange {
        match range {
            shared::ReportRange::AllTime => DateRange::AllTime,
            shared::ReportRange::ThisMonth => DateRange::ThisMonth,
            shared::ReportRange::ThisYear => DateRange::ThisYear,
        }
    }

    fn range_to_dto(range: DateRange) -> shared::ReportRange {
        match range {
            DateRange::AllTime => shared::ReportRange::AllTime,
            DateRange::ThisMonth => shared::ReportRange::ThisMonth,
            DateRange::ThisYear => shared::ReportRange::ThisYear,
        }
    }

    fn activity_to_dto(entry: ActivityEntry) -> shared::ActivityEntry {
        shared::ActivityEntry {
            motorcycle_id: entry.motorcycle.id,
            model: entry.motorcycle.model,
            year: entry.motorcycle.year,
            action: match entry.kind {
                ActivityKind::Added => "Added".to_string(),
                ActivityKind::Sold => "Sold".to_string(),
            },
            date: entry.date.to_rfc3339(),
        }
    }
}

fn parse_rfc3339(value: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(value)?;
    Ok(parsed.with_timezone(&Utc))
}
