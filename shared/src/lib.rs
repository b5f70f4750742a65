use serde::{Deserialize, Serialize};

/// Sale status of a motorcycle. Serialized with the human-readable labels
/// the persisted data uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotorcycleStatus {
    #[serde(rename = "For Sale")]
    ForSale,
    Sold,
}

/// A single cost line attached to a motorcycle (expense or promotion).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    pub description: String,
    pub cost: f64,
}

/// A motorcycle record as exposed to UI collaborators.
///
/// Field names are camelCase on the wire and dates are RFC 3339 strings,
/// matching the shape of the persisted document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Motorcycle {
    pub id: String,
    pub model: String,
    pub year: i32,
    pub license_no: String,
    pub voucher_no: String,
    pub purchase_price: f64,
    pub asking_price: f64,
    pub odometer: u32,
    pub notes: String,
    /// Inline data-URL encoded images, opaque to the backend
    pub photos: Vec<String>,
    pub expenses: Vec<LineItem>,
    pub promotions: Vec<LineItem>,
    /// Purchase timestamp (RFC 3339)
    pub purchase_date: String,
    pub status: MotorcycleStatus,
    /// Sale timestamp (RFC 3339), present exactly when status is Sold
    pub sale_date: Option<String>,
    /// Final selling price, present exactly when status is Sold
    pub selling_price: Option<f64>,
}

/// Request to add a motorcycle to inventory. Identity, status, purchase
/// date and the sale fields are assigned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMotorcycleRequest {
    pub model: String,
    pub year: i32,
    pub license_no: String,
    pub voucher_no: String,
    pub purchase_price: f64,
    pub asking_price: f64,
    pub odometer: u32,
    pub notes: String,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub expenses: Vec<LineItem>,
    #[serde(default)]
    pub promotions: Vec<LineItem>,
}

/// Request to record a completed sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkSoldRequest {
    pub motorcycle_id: String,
    pub selling_price: f64,
    /// Sale timestamp (RFC 3339)
    pub sale_date: String,
}

/// Request to undo a recorded sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkUnsoldRequest {
    pub motorcycle_id: String,
}

/// Request to attach an expense or promotion line to a motorcycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddLineItemRequest {
    pub motorcycle_id: String,
    pub description: String,
    pub cost: f64,
}

/// Reporting window evaluated against the sale date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReportRange {
    AllTime,
    ThisMonth,
    ThisYear,
}

/// Dashboard statistics over the for-sale inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    /// Sum of purchase prices of everything currently for sale
    pub total_inventory_value: f64,
    /// Sum of purchase price plus expenses of everything for sale
    pub total_investment: f64,
    /// Sum of asking price minus final cost of everything for sale
    pub potential_profit: f64,
    pub recent_activity: Vec<ActivityEntry>,
}

/// One row in the dashboard's recent-activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub motorcycle_id: String,
    pub model: String,
    pub year: i32,
    /// "Added" or "Sold"
    pub action: String,
    /// Display date (RFC 3339): the sale date for sold entries, the
    /// purchase date otherwise
    pub date: String,
}

/// Sales report over the sold list filtered by a [`ReportRange`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub range: ReportRange,
    pub sale_count: usize,
    pub total_revenue: f64,
    pub total_cost_of_goods: f64,
    pub total_profit: f64,
    pub average_profit: f64,
    pub average_days_in_inventory: f64,
    pub top_performers: Vec<Motorcycle>,
    pub profit_by_make: Vec<MakeProfit>,
}

/// Summed profit for one make (the first word of the model string).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MakeProfit {
    pub make: String,
    pub profit: f64,
}
