use crate::domain::order::{Order, OrderId, OrderStatus};

/// Order history plus the current-order pointer.
///
/// `current_order` and the matching history entry are the same order:
/// a status update through one is visible through the other.
pub trait OrderStore: Send + Sync + 'static {
    /// All orders, most recently placed first.
    fn orders(&self) -> Vec<Order>;
    fn current_order(&self) -> Option<Order>;
    fn get(&self, id: &OrderId) -> Option<Order>;
    /// Prepends `order` and makes it current. No validation is done.
    fn place_order(&self, order: Order);
    /// Sets the status unconditionally; `None` when `id` is unknown.
    fn update_order_status(&self, id: &OrderId, status: OrderStatus) -> Option<Order>;
    /// Moves the order to `status` only if that is ahead of its current
    /// status, as one atomic step. Returns the order as it stands afterwards.
    fn advance_order_status(&self, id: &OrderId, status: OrderStatus) -> Option<Order>;
    fn clear_current_order(&self);
}
