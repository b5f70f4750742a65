//! Dashboard and sales report aggregation.
//!
//! Read-only: every number is recomputed from the record store's views at
//! call time, so reports can never go stale against the inventory.
use std::cmp::Ordering;
use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Datelike, TimeZone, Utc};
use log::debug;

use crate::domain::commands::reports::{
    ActivityEntry, ActivityKind, DashboardSummary, DateRange, MakeProfit, ReportQuery, SalesReport,
};
use crate::domain::finance;
use crate::domain::models::motorcycle::Motorcycle;
use crate::domain::motorcycle_service::MotorcycleService;
use crate::storage::traits::Connection;

const RECENT_ACTIVITY_LIMIT: usize = 10;
const TOP_PERFORMER_LIMIT: usize = 3;

#[derive(Clone)]
pub struct ReportsService<C: Connection> {
    motorcycle_service: MotorcycleService<C>,
}

impl<C: Connection> ReportsService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            motorcycle_service: MotorcycleService::new(connection),
        }
    }

    /// Headline statistics over the for-sale inventory.
    pub fn dashboard(&self) -> Result<DashboardSummary> {
        let for_sale = self.motorcycle_service.list_for_sale()?;

        let total_inventory_value = for_sale.iter().map(|m| m.purchase_price).sum();
        let total_investment = for_sale.iter().map(finance::total_investment).sum();
        let potential_profit = for_sale.iter().map(finance::potential_profit).sum();

        Ok(DashboardSummary {
            total_inventory_value,
            total_investment,
            potential_profit,
        })
    }

    /// The 10 most recent events across all records. A sold motorcycle
    /// contributes one "Sold" entry dated by its sale date, anything else an
    /// "Added" entry dated by its purchase date.
    pub fn recent_activity(&self) -> Result<Vec<ActivityEntry>> {
        let mut entries: Vec<ActivityEntry> = self
            .motorcycle_service
            .list_all()?
            .into_iter()
            .map(|motorcycle| {
                let (kind, date) = if motorcycle.is_sold() {
                    (
                        ActivityKind::Sold,
                        motorcycle.sale_date.unwrap_or(motorcycle.purchase_date),
                    )
                } else {
                    (ActivityKind::Added, motorcycle.purchase_date)
                };
                ActivityEntry {
                    kind,
                    date,
                    motorcycle,
                }
            })
            .collect();

        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries.truncate(RECENT_ACTIVITY_LIMIT);
        Ok(entries)
    }

    /// Sales report over the sold list filtered by the query's date range.
    pub fn sales_report(&self, query: ReportQuery) -> Result<SalesReport> {
        self.sales_report_at(query, Utc::now())
    }

    /// As [`Self::sales_report`], with an explicit "now" so the calendar
    /// windows and day counts are deterministic under test.
    pub fn sales_report_at(&self, query: ReportQuery, now: DateTime<Utc>) -> Result<SalesReport> {
        let sales: Vec<Motorcycle> = self
            .motorcycle_service
            .list_sold()?
            .into_iter()
            .filter(|m| in_range(m, query.range, now))
            .collect();
        debug!("{} sales in range {:?}", sales.len(), query.range);

        let sale_count = sales.len();
        let total_revenue: f64 = sales.iter().map(|m| m.selling_price.unwrap_or(0.0)).sum();
        let total_cost_of_goods: f64 = sales.iter().map(finance::final_cost).sum();
        let total_profit = total_revenue - total_cost_of_goods;

        let (average_profit, average_days_in_inventory) = if sale_count == 0 {
            (0.0, 0.0)
        } else {
            let total_days: i64 = sales
                .iter()
                .map(|m| finance::days_in_inventory(m, now))
                .sum();
            (
                total_profit / sale_count as f64,
                total_days as f64 / sale_count as f64,
            )
        };

        Ok(SalesReport {
            range: query.range,
            sale_count,
            total_revenue,
            total_cost_of_goods,
            total_profit,
            average_profit,
            average_days_in_inventory,
            top_performers: top_performers(&sales),
            profit_by_make: profit_by_make(&sales),
        })
    }
}

fn in_range(motorcycle: &Motorcycle, range: DateRange, now: DateTime<Utc>) -> bool {
    let Some(sale_date) = motorcycle.sale_date else {
        return false;
    };
    match range {
        DateRange::AllTime => true,
        DateRange::ThisMonth => {
            let start_of_month = Utc
                .with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
                .unwrap();
            sale_date >= start_of_month
        }
        DateRange::ThisYear => {
            let start_of_year = Utc.with_ymd_and_hms(now.year(), 1, 1, 0, 0, 0).unwrap();
            sale_date >= start_of_year
        }
    }
}

/// Top 3 sales by realized profit. The sort is stable, so ties keep their
/// sold-list order.
fn top_performers(sales: &[Motorcycle]) -> Vec<Motorcycle> {
    let mut ranked = sales.to_vec();
    ranked.sort_by(|a, b| {
        finance::profit(b)
            .partial_cmp(&finance::profit(a))
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(TOP_PERFORMER_LIMIT);
    ranked
}

/// Group sales by make and sum realized profit per group, descending.
fn profit_by_make(sales: &[Motorcycle]) -> Vec<MakeProfit> {
    let mut groups: Vec<MakeProfit> = Vec::new();
    for sale in sales {
        let make = sale.make();
        let profit = finance::profit(sale);
        match groups.iter_mut().find(|g| g.make == make) {
            Some(group) => group.profit += profit,
            None => groups.push(MakeProfit {
                make: make.to_string(),
                profit,
            }),
        }
    }
    groups.sort_by(|a, b| b.profit.partial_cmp(&a.profit).unwrap_or(Ordering::Equal));
    groups
}
