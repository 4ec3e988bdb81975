use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::FoodItem;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub food_item: FoodItem,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> Decimal {
        self.food_item.price * Decimal::from(self.quantity)
    }
}

/// Items a user intends to purchase, in the order they were first added.
///
/// Holds at most one line per food item id. `total` is derived and is
/// recomputed after every mutation.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
    total: Decimal,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines, capped at `u32::MAX`.
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |n, l| n.saturating_add(l.quantity))
    }

    /// Restaurant of the first line. Mixed-restaurant carts are not split.
    pub fn restaurant_id(&self) -> Option<&str> {
        self.lines
            .first()
            .map(|l| l.food_item.restaurant_id.as_str())
    }

    /// Adds `quantity` of `food_item`, merging into an existing line for
    /// the same id. A zero quantity is ignored; merged quantities saturate
    /// at `u32::MAX`.
    pub fn add_item(&mut self, food_item: FoodItem, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self
            .lines
            .iter_mut()
            .find(|l| l.food_item.id == food_item.id)
        {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine {
                food_item,
                quantity,
            }),
        }
        self.recompute_total();
    }

    /// Removes the line for `food_item_id`. Absent ids are a no-op.
    pub fn remove_item(&mut self, food_item_id: &str) {
        self.lines.retain(|l| l.food_item.id != food_item_id);
        self.recompute_total();
    }

    /// Sets the quantity of an existing line.
    ///
    /// A quantity of zero leaves the line untouched rather than removing it;
    /// callers that want removal must call [`Cart::remove_item`].
    pub fn update_quantity(&mut self, food_item_id: &str, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.food_item.id == food_item_id)
        {
            line.quantity = quantity;
            self.recompute_total();
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.total = Decimal::ZERO;
    }

    fn recompute_total(&mut self) {
        self.total = self.lines.iter().map(CartLine::subtotal).sum();
    }
}
