//! Financial calculator for the inventory tracker.
//!
//! Pure functions over a [`Motorcycle`] snapshot. No side effects and no
//! error conditions: absent numeric fields contribute zero where documented.
//!
//! Terminology:
//! - **total investment** = purchase price + total expenses
//! - **final cost** = total investment − total promotions (the effective cost
//!   basis, may go negative if promotions exceed investment — not clamped)
use chrono::{DateTime, Utc};

use crate::domain::models::motorcycle::{Motorcycle, MotorcycleStatus};

const SECONDS_PER_DAY: i64 = 86_400;

/// Sum of all expense line items. Empty list yields 0.
pub fn total_expenses(motorcycle: &Motorcycle) -> f64 {
    motorcycle.expenses.iter().map(|item| item.cost).sum()
}

/// Sum of all promotion line items. Empty list yields 0.
pub fn total_promotions(motorcycle: &Motorcycle) -> f64 {
    motorcycle.promotions.iter().map(|item| item.cost).sum()
}

pub fn total_investment(motorcycle: &Motorcycle) -> f64 {
    motorcycle.purchase_price + total_expenses(motorcycle)
}

pub fn final_cost(motorcycle: &Motorcycle) -> f64 {
    total_investment(motorcycle) - total_promotions(motorcycle)
}

/// Realized profit. Zero unless the motorcycle is sold with a selling price
/// recorded; use [`potential_profit`] for unsold stock.
pub fn profit(motorcycle: &Motorcycle) -> f64 {
    match (motorcycle.status, motorcycle.selling_price) {
        (MotorcycleStatus::Sold, Some(selling_price)) => selling_price - final_cost(motorcycle),
        _ => 0.0,
    }
}

/// Expected profit if the motorcycle sells at its asking price.
pub fn potential_profit(motorcycle: &Motorcycle) -> f64 {
    motorcycle.asking_price - final_cost(motorcycle)
}

/// Whole days between purchase and sale (or `now` for unsold stock), rounded
/// up. The absolute difference is used, so a record with inverted dates still
/// yields a non-negative count.
pub fn days_in_inventory(motorcycle: &Motorcycle, now: DateTime<Utc>) -> i64 {
    let end = motorcycle.sale_date.unwrap_or(now);
    let elapsed_seconds = (end - motorcycle.purchase_date).num_seconds().abs();
    (elapsed_seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY
}

/// Render an amount as a US-dollar string: two fraction digits, comma
/// thousands separators, leading minus for negative amounts.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let total_cents = (amount.abs() * 100.0).round() as u64;
    let dollars = (total_cents / 100).to_string();
    let cents = total_cents % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::motorcycle::LineItem;
    use chrono::TimeZone;

    fn for_sale_motorcycle() -> Motorcycle {
        Motorcycle {
            id: "m-1".to_string(),
            model: "Yamaha MT-07".to_string(),
            year: 2020,
            license_no: "XYZ-987".to_string(),
            voucher_no: "V-0001".to_string(),
            purchase_price: 1000.0,
            asking_price: 1500.0,
            odometer: 12_000,
            notes: String::new(),
            photos: vec![],
            expenses: vec![],
            promotions: vec![],
            purchase_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            status: MotorcycleStatus::ForSale,
            sale_date: None,
            selling_price: None,
        }
    }

    #[test]
    fn test_totals_on_empty_lists_are_zero() {
        let m = for_sale_motorcycle();
        assert_eq!(total_expenses(&m), 0.0);
        assert_eq!(total_promotions(&m), 0.0);
        assert_eq!(total_investment(&m), 1000.0);
        assert_eq!(final_cost(&m), 1000.0);
    }

    #[test]
    fn test_final_cost_formula() {
        // Scenario A: 1000 purchase + 100 expense - 50 promotion = 1050
        let mut m = for_sale_motorcycle();
        m.expenses.push(LineItem::new("New chain", 100.0));
        m.promotions.push(LineItem::new("Launch discount", 50.0));

        assert_eq!(total_investment(&m), 1100.0);
        assert_eq!(final_cost(&m), 1050.0);
        assert_eq!(potential_profit(&m), 450.0);
    }

    #[test]
    fn test_final_cost_may_go_negative() {
        let mut m = for_sale_motorcycle();
        m.purchase_price = 100.0;
        m.promotions.push(LineItem::new("Manufacturer rebate", 500.0));
        assert_eq!(final_cost(&m), -400.0);
    }

    #[test]
    fn test_profit_is_zero_while_for_sale() {
        let mut m = for_sale_motorcycle();
        m.expenses.push(LineItem::new("Detailing", 75.0));
        assert_eq!(profit(&m), 0.0);
    }

    #[test]
    fn test_profit_when_sold() {
        // Scenario B: final cost 1050, sold for 1400 -> profit 350
        let mut m = for_sale_motorcycle();
        m.expenses.push(LineItem::new("New chain", 100.0));
        m.promotions.push(LineItem::new("Launch discount", 50.0));
        m.status = MotorcycleStatus::Sold;
        m.sale_date = Some(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());
        m.selling_price = Some(1400.0);

        assert_eq!(profit(&m), 350.0);
    }

    #[test]
    fn test_days_in_inventory_uses_sale_date_when_sold() {
        // Scenario E: 2024-01-01 -> 2024-01-11 is 10 days
        let mut m = for_sale_motorcycle();
        m.status = MotorcycleStatus::Sold;
        m.sale_date = Some(Utc.with_ymd_and_hms(2024, 1, 11, 0, 0, 0).unwrap());
        m.selling_price = Some(1200.0);

        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(days_in_inventory(&m, now), 10);
    }

    #[test]
    fn test_days_in_inventory_rounds_partial_days_up() {
        let mut m = for_sale_motorcycle();
        m.status = MotorcycleStatus::Sold;
        m.sale_date = Some(Utc.with_ymd_and_hms(2024, 1, 3, 6, 0, 0).unwrap());
        m.selling_price = Some(1200.0);

        let now = Utc::now();
        assert_eq!(days_in_inventory(&m, now), 3);
    }

    #[test]
    fn test_days_in_inventory_falls_back_to_now_when_unsold() {
        let m = for_sale_motorcycle();
        let now = Utc.with_ymd_and_hms(2024, 1, 8, 0, 0, 0).unwrap();
        assert_eq!(days_in_inventory(&m, now), 7);
    }

    #[test]
    fn test_days_in_inventory_masks_inverted_dates() {
        let mut m = for_sale_motorcycle();
        m.status = MotorcycleStatus::Sold;
        // Sale recorded before the purchase date; the absolute difference
        // still yields a non-negative count.
        m.sale_date = Some(Utc.with_ymd_and_hms(2023, 12, 27, 0, 0, 0).unwrap());
        m.selling_price = Some(1200.0);

        assert_eq!(days_in_inventory(&m, Utc::now()), 5);
    }

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(450.0), "$450.00");
        assert_eq!(format_currency(1050.0), "$1,050.00");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-50.0), "-$50.00");
        assert_eq!(format_currency(-12345.6), "-$12,345.60");
    }
}
