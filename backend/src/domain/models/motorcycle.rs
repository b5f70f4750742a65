//! Domain model for a motorcycle in the dealer's inventory.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sale status of a motorcycle.
///
/// Serialized as `"For Sale"` / `"Sold"`, the labels the persisted document
/// has always used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotorcycleStatus {
    #[serde(rename = "For Sale")]
    ForSale,
    Sold,
}

/// A single cost line attached to a motorcycle.
///
/// Expenses and promotions are structurally identical; the list a line item
/// lives in decides whether it raises or lowers the cost basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    pub description: String,
    pub cost: f64,
}

impl LineItem {
    /// Create a line item with a freshly generated id.
    pub fn new(description: impl Into<String>, cost: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description: description.into(),
            cost,
        }
    }
}

/// A motorcycle record.
///
/// Persisted field names are camelCase to keep the document shape the
/// original data files used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Motorcycle {
    /// Unique, immutable identifier assigned at creation
    pub id: String,
    pub model: String,
    pub year: i32,
    pub license_no: String,
    pub voucher_no: String,
    pub purchase_price: f64,
    pub asking_price: f64,
    pub odometer: u32,
    pub notes: String,
    /// Inline data-URL encoded images, opaque to the domain layer
    pub photos: Vec<String>,
    pub expenses: Vec<LineItem>,
    pub promotions: Vec<LineItem>,
    pub purchase_date: DateTime<Utc>,
    pub status: MotorcycleStatus,
    /// Present exactly when status is Sold
    pub sale_date: Option<DateTime<Utc>>,
    /// Present exactly when status is Sold
    pub selling_price: Option<f64>,
}

impl Motorcycle {
    /// Generate a unique motorcycle id.
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    pub fn is_sold(&self) -> bool {
        self.status == MotorcycleStatus::Sold
    }

    /// The make used for report grouping: the first whitespace-delimited
    /// token of the model string. Not a stored field.
    pub fn make(&self) -> &str {
        self.model.split_whitespace().next().unwrap_or("")
    }
}
