use delivery_types::domain::order::{Order, OrderId, OrderStatus};
use delivery_types::ports::order_store::OrderStore;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OrderSummary {
    pub order_id: OrderId,
    pub short_id: String,
    pub status: OrderStatus,
    pub status_label: &'static str,
    pub created_on: String,
    pub total_amount: Decimal,
    /// One `"{qty}x {name}"` entry per line.
    pub lines: Vec<String>,
}

impl From<&Order> for OrderSummary {
    fn from(o: &Order) -> Self {
        Self {
            order_id: o.id.clone(),
            short_id: o.id.short().to_owned(),
            status: o.status,
            status_label: o.status.label(),
            created_on: o.created_at.format("%Y-%m-%d").to_string(),
            total_amount: o.total_amount,
            lines: o
                .items
                .iter()
                .map(|l| format!("{}x {}", l.quantity, l.food_item.name))
                .collect(),
        }
    }
}

/// Placed orders, most recent first.
pub fn order_history<O: OrderStore>(store: &O) -> Vec<OrderSummary> {
    store.orders().iter().map(OrderSummary::from).collect()
}
