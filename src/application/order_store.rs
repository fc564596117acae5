use std::collections::HashMap;

use log::{debug, info, warn};

use crate::domain::errors::DomainError;
use crate::domain::order::{validate_orders, MenuSummaryItem, Order, OrderStatus};
use crate::domain::ports::SlotStorage;
use crate::domain::seed::seed_orders;

/// Default name of the slot the orders are persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "bakso-orders";

/// The day's orders plus the aggregates derived from them.
///
/// Every mutation is written through to the slot before it returns, so the
/// persisted copy always matches what readers see.
pub struct OrderStore<S> {
    storage: S,
    key: String,
    orders: Vec<Order>,
}

impl<S: SlotStorage> OrderStore<S> {
    /// Loads the orders persisted under `key`, seeding the slot when it is
    /// empty or holds something that does not decode into valid orders.
    pub fn open(storage: S, key: &str) -> Result<Self, DomainError> {
        let loaded = match storage.load(key)? {
            Some(raw) => match decode_orders(&raw) {
                Ok(orders) => {
                    info!("Loaded {} orders from slot '{}'", orders.len(), key);
                    Some(orders)
                }
                Err(e) => {
                    warn!("Ignoring malformed order slot '{}': {}", key, e);
                    None
                }
            },
            None => None,
        };

        let store = match loaded {
            Some(orders) => Self {
                storage,
                key: key.to_string(),
                orders,
            },
            None => {
                let store = Self {
                    storage,
                    key: key.to_string(),
                    orders: seed_orders(),
                };
                info!("Seeding slot '{}' with {} sample orders", key, store.orders.len());
                store.persist()?;
                store
            }
        };
        Ok(store)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Orders in insertion order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order(&self, id: u32) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Sets the status of order `id` and persists the whole sequence.
    ///
    /// Unknown ids yield [`DomainError::NotFound`] without touching the slot.
    /// A failed write restores the previous status.
    pub fn update_status(&mut self, id: u32, status: OrderStatus) -> Result<(), DomainError> {
        let idx = self
            .orders
            .iter()
            .position(|o| o.id == id)
            .ok_or(DomainError::NotFound(id))?;

        let previous = std::mem::replace(&mut self.orders[idx].status, status);
        if let Err(e) = self.persist() {
            self.orders[idx].status = previous;
            return Err(e);
        }
        debug!("Order {} status {} -> {}", id, previous, status);
        Ok(())
    }

    pub fn total_orders(&self) -> usize {
        self.orders.len()
    }

    pub fn total_revenue(&self) -> u64 {
        self.orders.iter().map(Order::subtotal).sum()
    }

    /// Portions sold across every order.
    pub fn total_items_sold(&self) -> u64 {
        self.orders.iter().map(Order::item_count).sum()
    }

    /// Line items grouped by exact name, highest revenue first. Ties keep the
    /// order in which names first appear; the first icon seen for a name wins.
    pub fn menu_summary(&self) -> Vec<MenuSummaryItem> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut summary: Vec<MenuSummaryItem> = Vec::new();

        for item in self.orders.iter().flat_map(|o| o.items.iter()) {
            match index.get(item.name.as_str()) {
                Some(&i) => {
                    summary[i].total_quantity += u64::from(item.quantity);
                    summary[i].total_revenue += item.line_total();
                }
                None => {
                    index.insert(item.name.as_str(), summary.len());
                    summary.push(MenuSummaryItem {
                        name: item.name.clone(),
                        icon: item.icon.clone(),
                        total_quantity: u64::from(item.quantity),
                        total_revenue: item.line_total(),
                    });
                }
            }
        }

        summary.sort_by(|a, b| b.total_revenue.cmp(&a.total_revenue));
        summary
    }

    /// Serialized form of the current orders, as written to the slot.
    pub fn to_json(&self) -> Result<String, DomainError> {
        serde_json::to_string(&self.orders).map_err(|e| DomainError::Internal(e.to_string()))
    }

    fn persist(&self) -> Result<(), DomainError> {
        let payload = self.to_json()?;
        self.storage.save(&self.key, &payload)
    }
}

/// Parses and validates a persisted order sequence.
pub fn decode_orders(raw: &str) -> Result<Vec<Order>, DomainError> {
    let orders: Vec<Order> = serde_json::from_str(raw)?;
    validate_orders(&orders)?;
    Ok(orders)
}
