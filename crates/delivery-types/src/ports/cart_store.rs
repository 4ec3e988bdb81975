use rust_decimal::Decimal;

use crate::domain::cart::{Cart, CartLine};
use crate::domain::catalog::FoodItem;

/// Shared, injectable cart state. Every operation is total.
pub trait CartStore: Send + Sync + 'static {
    fn lines(&self) -> Vec<CartLine>;
    fn total(&self) -> Decimal;
    /// Lines and total read together under one lock.
    fn snapshot(&self) -> Cart;
    fn add_item(&self, food_item: FoodItem, quantity: u32);
    fn remove_item(&self, food_item_id: &str);
    fn update_quantity(&self, food_item_id: &str, quantity: u32);
    fn clear(&self);
}
