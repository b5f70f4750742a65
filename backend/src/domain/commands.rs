//! Domain-level command and query types.
//!
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The IO layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod motorcycles {
    use crate::domain::models::motorcycle::LineItem;

    /// Input for adding a motorcycle to inventory. Identity, status, the
    /// purchase date and the sale fields are assigned by the service.
    #[derive(Debug, Clone, Default)]
    pub struct CreateMotorcycleCommand {
        pub model: String,
        pub year: i32,
        pub license_no: String,
        pub voucher_no: String,
        pub purchase_price: f64,
        pub asking_price: f64,
        pub odometer: u32,
        pub notes: String,
        pub photos: Vec<String>,
        pub expenses: Vec<LineItem>,
        pub promotions: Vec<LineItem>,
    }

    /// Input for attaching an expense or promotion line to a motorcycle.
    #[derive(Debug, Clone)]
    pub struct AddLineItemCommand {
        pub motorcycle_id: String,
        pub description: String,
        pub cost: f64,
    }

    /// Input for detaching an expense or promotion line.
    #[derive(Debug, Clone)]
    pub struct RemoveLineItemCommand {
        pub motorcycle_id: String,
        pub line_item_id: String,
    }

    /// Input for appending an encoded photo to a motorcycle's gallery.
    #[derive(Debug, Clone)]
    pub struct AddPhotoCommand {
        pub motorcycle_id: String,
        /// Inline data-URL string, opaque to the domain layer
        pub data_url: String,
    }

    /// Input for removing a photo by gallery position.
    #[derive(Debug, Clone)]
    pub struct RemovePhotoCommand {
        pub motorcycle_id: String,
        pub index: usize,
    }
}

pub mod lifecycle {
    use chrono::{DateTime, Utc};

    /// Input for recording a completed sale.
    #[derive(Debug, Clone)]
    pub struct MarkSoldCommand {
        pub motorcycle_id: String,
        pub selling_price: f64,
        pub sale_date: DateTime<Utc>,
    }

    /// Input for undoing a recorded sale.
    #[derive(Debug, Clone)]
    pub struct MarkUnsoldCommand {
        pub motorcycle_id: String,
    }
}

pub mod reports {
    use chrono::{DateTime, Utc};

    use crate::domain::models::motorcycle::Motorcycle;

    /// Reporting window, evaluated against the sale date.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum DateRange {
        #[default]
        AllTime,
        /// From the start of the current calendar month
        ThisMonth,
        /// From the start of the current calendar year
        ThisYear,
    }

    /// Query parameters for a sales report.
    #[derive(Debug, Clone, Default)]
    pub struct ReportQuery {
        pub range: DateRange,
    }

    /// Dashboard statistics over the for-sale inventory.
    #[derive(Debug, Clone, PartialEq)]
    pub struct DashboardSummary {
        /// Sum of purchase prices
        pub total_inventory_value: f64,
        /// Sum of purchase price plus expenses
        pub total_investment: f64,
        /// Sum of asking price minus final cost
        pub potential_profit: f64,
    }

    /// What a recent-activity entry represents.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ActivityKind {
        Added,
        Sold,
    }

    /// One row of the recent-activity feed.
    #[derive(Debug, Clone)]
    pub struct ActivityEntry {
        pub kind: ActivityKind,
        /// The sale date for sold entries, the purchase date otherwise
        pub date: DateTime<Utc>,
        pub motorcycle: Motorcycle,
    }

    /// Summed profit for one make.
    #[derive(Debug, Clone, PartialEq)]
    pub struct MakeProfit {
        pub make: String,
        pub profit: f64,
    }

    /// Result of a sales report over the filtered sold list.
    #[derive(Debug, Clone)]
    pub struct SalesReport {
        pub range: DateRange,
        pub sale_count: usize,
        pub total_revenue: f64,
        pub total_cost_of_goods: f64,
        pub total_profit: f64,
        pub average_profit: f64,
        pub average_days_in_inventory: f64,
        /// Top 3 sales by realized profit, ties kept in sold-list order
        pub top_performers: Vec<Motorcycle>,
        /// Descending by summed profit
        pub profit_by_make: Vec<MakeProfit>,
    }
}
