use delivery_types::domain::cart::{Cart, CartLine};
use delivery_types::domain::catalog::FoodItem;
use delivery_types::domain::order::{Order, OrderId, OrderStatus};
use delivery_types::ports::cart_store::CartStore;
use delivery_types::ports::order_store::OrderStore;
use rust_decimal::Decimal;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Clone, Default)]
pub struct InMemoryCartStore {
    cart: Arc<RwLock<Cart>>,
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStore for InMemoryCartStore {
    fn lines(&self) -> Vec<CartLine> {
        read(&self.cart).lines().to_vec()
    }

    fn total(&self) -> Decimal {
        read(&self.cart).total()
    }

    fn snapshot(&self) -> Cart {
        read(&self.cart).clone()
    }

    fn add_item(&self, food_item: FoodItem, quantity: u32) {
        let mut cart = write(&self.cart);
        tracing::debug!(food_item_id = %food_item.id, quantity, "cart add");
        cart.add_item(food_item, quantity);
    }

    fn remove_item(&self, food_item_id: &str) {
        tracing::debug!(food_item_id, "cart remove");
        write(&self.cart).remove_item(food_item_id);
    }

    fn update_quantity(&self, food_item_id: &str, quantity: u32) {
        tracing::debug!(food_item_id, quantity, "cart update quantity");
        write(&self.cart).update_quantity(food_item_id, quantity);
    }

    fn clear(&self) {
        tracing::debug!("cart clear");
        write(&self.cart).clear();
    }
}

#[derive(Default)]
struct OrderBook {
    // Most recent first.
    orders: Vec<Order>,
    current: Option<OrderId>,
}

impl OrderBook {
    fn find(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    book: Arc<RwLock<OrderBook>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderStore for InMemoryOrderStore {
    fn orders(&self) -> Vec<Order> {
        read(&self.book).orders.clone()
    }

    fn current_order(&self) -> Option<Order> {
        let book = read(&self.book);
        book.current.as_ref().and_then(|id| book.find(id)).cloned()
    }

    fn get(&self, id: &OrderId) -> Option<Order> {
        read(&self.book).find(id).cloned()
    }

    fn place_order(&self, order: Order) {
        let mut book = write(&self.book);
        tracing::debug!(order_id = %order.id, total = %order.total_amount, "order placed");
        book.current = Some(order.id.clone());
        book.orders.insert(0, order);
    }

    fn update_order_status(&self, id: &OrderId, status: OrderStatus) -> Option<Order> {
        let mut book = write(&self.book);
        let order = book.orders.iter_mut().find(|o| &o.id == id)?;
        tracing::debug!(order_id = %id, from = %order.status, to = %status, "order status");
        order.advance_to(status);
        Some(order.clone())
    }

    fn advance_order_status(&self, id: &OrderId, status: OrderStatus) -> Option<Order> {
        let mut book = write(&self.book);
        let order = book.orders.iter_mut().find(|o| &o.id == id)?;
        if status > order.status {
            tracing::debug!(order_id = %id, from = %order.status, to = %status, "order advanced");
            order.advance_to(status);
        }
        Some(order.clone())
    }

    fn clear_current_order(&self) {
        tracing::debug!("current order cleared");
        write(&self.book).current = None;
    }
}
