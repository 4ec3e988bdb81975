use chrono::{DateTime, Utc};
use delivery_types::domain::order::{Order, OrderId};
use delivery_types::ports::cart_store::CartStore;
use delivery_types::ports::order_store::OrderStore;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::errors::AppError;

/// Hands out millisecond-timestamp ids, bumped forward when two orders
/// land in the same millisecond so ids stay strictly increasing.
#[derive(Debug, Default)]
pub struct OrderIdGenerator {
    last_ms: AtomicI64,
}

impl OrderIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self, now: DateTime<Utc>) -> OrderId {
        let now_ms = now.timestamp_millis();
        let prev = self
            .last_ms
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now_ms.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        OrderId::new(now_ms.max(prev + 1).to_string())
    }
}

pub struct CheckoutService<C: CartStore, O: OrderStore> {
    cart: C,
    orders: O,
    ids: OrderIdGenerator,
}

impl<C: CartStore, O: OrderStore> CheckoutService<C, O> {
    pub fn new(cart: C, orders: O) -> Self {
        Self {
            cart,
            orders,
            ids: OrderIdGenerator::new(),
        }
    }

    /// Turns the current cart into a pending order, makes it the current
    /// order and empties the cart.
    pub fn place_order(&self) -> Result<Order, AppError> {
        let snapshot = self.cart.snapshot();
        if snapshot.is_empty() {
            return Err(AppError::EmptyCart);
        }
        let now = Utc::now();
        // Only an empty cart fails here, and that was ruled out above.
        let order = Order::from_cart(self.ids.next_id(now), &snapshot, now)?;

        self.orders.place_order(order.clone());
        self.cart.clear();
        tracing::info!(
            order_id = %order.id,
            total = %order.total_amount,
            lines = order.items.len(),
            "order placed"
        );
        Ok(order)
    }
}
