use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::DomainError;

/// Lifecycle marker of an order. Stored as the tokens the stall staff use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Baru")]
    New,
    #[serde(rename = "Selesai")]
    Done,
}

impl OrderStatus {
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::New => "Baru",
            OrderStatus::Done => "Selesai",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "new" | "baru" => Ok(OrderStatus::New),
            "done" | "selesai" => Ok(OrderStatus::Done),
            other => Err(DomainError::InvalidInput(format!(
                "unknown order status '{}'",
                other
            ))),
        }
    }
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub quantity: u32,
    /// Unit price in whole Rupiah.
    #[serde(rename = "price")]
    pub unit_price: u64,
    pub icon: String,
}

impl MenuItem {
    pub fn new(name: &str, quantity: u32, unit_price: u64, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            unit_price,
            icon: icon.to_string(),
        }
    }

    pub fn line_total(&self) -> u64 {
        u64::from(self.quantity) * self.unit_price
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u32,
    pub items: Vec<MenuItem>,
    #[serde(rename = "time")]
    pub time_label: String,
    #[serde(rename = "date")]
    pub date_label: String,
    pub customer_name: String,
    pub status: OrderStatus,
}

impl Order {
    /// Sum of the line totals. No tax, no discount.
    pub fn subtotal(&self) -> u64 {
        self.items.iter().map(MenuItem::line_total).sum()
    }

    /// Text shown in the order column, e.g. `2x Bakso Urat, 1x Es Teh`.
    pub fn item_summary(&self) -> String {
        self.items
            .iter()
            .map(|item| format!("{}x {}", item.quantity, item.name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `None` when a line total or the sum of them does not fit in a `u64`.
    fn checked_subtotal(&self) -> Option<u64> {
        self.items.iter().try_fold(0u64, |acc, item| {
            u64::from(item.quantity)
                .checked_mul(item.unit_price)
                .and_then(|line| acc.checked_add(line))
        })
    }

    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.id == 0 {
            return Err(DomainError::InvalidInput("order id must be positive".into()));
        }
        if self.items.is_empty() {
            return Err(DomainError::InvalidInput(format!(
                "order {} has no items",
                self.id
            )));
        }
        if let Some(item) = self.items.iter().find(|item| item.quantity == 0) {
            return Err(DomainError::InvalidInput(format!(
                "order {} has zero quantity for '{}'",
                self.id, item.name
            )));
        }
        if self.checked_subtotal().is_none() {
            return Err(DomainError::InvalidInput(format!(
                "order {} total is out of range",
                self.id
            )));
        }
        Ok(())
    }
}

/// Checks the invariants a loaded order sequence must satisfy.
///
/// Every total the store derives (line, order, menu and day revenue) fits in
/// a `u64` once this passes.
pub fn validate_orders(orders: &[Order]) -> Result<(), DomainError> {
    let mut seen = HashSet::with_capacity(orders.len());
    let mut revenue = 0u64;
    for order in orders {
        order.validate()?;
        if !seen.insert(order.id) {
            return Err(DomainError::InvalidInput(format!(
                "duplicate order id {}",
                order.id
            )));
        }
        revenue = order
            .checked_subtotal()
            .and_then(|subtotal| revenue.checked_add(subtotal))
            .ok_or_else(|| DomainError::InvalidInput("revenue total is out of range".into()))?;
    }
    Ok(())
}

/// Per-menu aggregate across every order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSummaryItem {
    pub name: String,
    pub icon: String,
    pub total_quantity: u64,
    pub total_revenue: u64,
}

impl MenuSummaryItem {
    /// Revenue per portion, `None` when nothing was sold.
    pub fn average_price(&self) -> Option<u64> {
        self.total_revenue.checked_div(self.total_quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: u32, items: Vec<MenuItem>) -> Order {
        Order {
            id,
            items,
            time_label: "14:30".into(),
            date_label: "13 Des 2025".into(),
            customer_name: "Budi Santoso".into(),
            status: OrderStatus::New,
        }
    }

    #[test]
    fn subtotal_sums_line_totals() {
        let o = order(
            1,
            vec![
                MenuItem::new("Bakso Urat", 2, 18000, "🍜"),
                MenuItem::new("Es Teh", 1, 5000, "🧊"),
            ],
        );
        assert_eq!(o.subtotal(), 41000);
        assert_eq!(o.item_count(), 3);
    }

    #[test]
    fn item_summary_lists_quantities_and_names() {
        let o = order(
            1,
            vec![
                MenuItem::new("Bakso Urat", 2, 18000, "🍜"),
                MenuItem::new("Es Teh", 1, 5000, "🧊"),
            ],
        );
        assert_eq!(o.item_summary(), "2x Bakso Urat, 1x Es Teh");
    }

    #[test]
    fn status_serializes_as_stall_tokens() {
        assert_eq!(serde_json::to_string(&OrderStatus::New).unwrap(), "\"Baru\"");
        assert_eq!(
            serde_json::to_string(&OrderStatus::Done).unwrap(),
            "\"Selesai\""
        );
    }

    #[test]
    fn status_parses_english_and_indonesian() {
        assert_eq!("done".parse::<OrderStatus>().unwrap(), OrderStatus::Done);
        assert_eq!("Selesai".parse::<OrderStatus>().unwrap(), OrderStatus::Done);
        assert_eq!("BARU".parse::<OrderStatus>().unwrap(), OrderStatus::New);
        assert!("cancelled".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn order_uses_stored_field_names() {
        let o = order(7, vec![MenuItem::new("Es Teh", 1, 5000, "🧊")]);
        let value = serde_json::to_value(&o).unwrap();
        assert_eq!(value["customerName"], "Budi Santoso");
        assert_eq!(value["time"], "14:30");
        assert_eq!(value["date"], "13 Des 2025");
        assert_eq!(value["items"][0]["price"], 5000);
        assert_eq!(value["status"], "Baru");
    }

    #[test]
    fn legacy_order_details_field_is_ignored() {
        let json = r#"{"id":1,"orderDetails":"1x Es Teh","items":[{"name":"Es Teh","quantity":1,"price":5000,"icon":"🧊"}],"time":"14:30","date":"13 Des 2025","customerName":"Budi","status":"Selesai"}"#;
        let o: Order = serde_json::from_str(json).unwrap();
        assert_eq!(o.status, OrderStatus::Done);
        assert_eq!(o.item_summary(), "1x Es Teh");
    }

    #[test]
    fn validate_rejects_empty_items_and_duplicates() {
        assert!(validate_orders(&[order(1, vec![])]).is_err());
        assert!(validate_orders(&[order(1, vec![MenuItem::new("Es Teh", 0, 5000, "🧊")])]).is_err());

        let a = order(3, vec![MenuItem::new("Es Teh", 1, 5000, "🧊")]);
        assert!(validate_orders(&[a.clone(), a.clone()]).is_err());
        assert!(validate_orders(&[a]).is_ok());
    }

    #[test]
    fn validate_rejects_totals_that_overflow() {
        let huge = order(1, vec![MenuItem::new("Bakso Emas", 2, u64::MAX, "🍜")]);
        assert!(validate_orders(&[huge]).is_err());

        let wide = order(
            2,
            vec![
                MenuItem::new("Bakso Emas", 1, u64::MAX, "🍜"),
                MenuItem::new("Es Teh", 1, 5000, "🧊"),
            ],
        );
        assert!(validate_orders(&[wide]).is_err());

        let half = u64::MAX / 2 + 1;
        let a = order(3, vec![MenuItem::new("Bakso Emas", 1, half, "🍜")]);
        let b = order(4, vec![MenuItem::new("Bakso Emas", 1, half, "🍜")]);
        assert!(validate_orders(&[a.clone()]).is_ok());
        assert!(validate_orders(&[a, b]).is_err());
    }

    #[test]
    fn average_price_guards_zero_quantity() {
        let empty = MenuSummaryItem {
            name: "Es Teh".into(),
            icon: "🧊".into(),
            total_quantity: 0,
            total_revenue: 0,
        };
        assert_eq!(empty.average_price(), None);

        let sold = MenuSummaryItem {
            total_quantity: 3,
            total_revenue: 15000,
            ..empty
        };
        assert_eq!(sold.average_price(), Some(5000));
    }
}
