use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::cart::{Cart, CartLine};

/// Fulfillment status. Declaration order is the progression order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OnTheWay,
    Delivered,
}

impl OrderStatus {
    pub const ALL: &'static [OrderStatus] = &[
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OnTheWay,
        OrderStatus::Delivered,
    ];

    pub fn index(self) -> usize {
        match self {
            OrderStatus::Pending => 0,
            OrderStatus::Preparing => 1,
            OrderStatus::OnTheWay => 2,
            OrderStatus::Delivered => 3,
        }
    }

    pub fn next(self) -> Option<OrderStatus> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Statuses still ahead of `self`, in progression order.
    pub fn successors(self) -> &'static [OrderStatus] {
        &Self::ALL[self.index() + 1..]
    }

    pub fn is_terminal(self) -> bool {
        self == OrderStatus::Delivered
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::OnTheWay => "OnTheWay",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Millisecond epoch string of `at`.
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        Self(at.timestamp_millis().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last four characters, used as the human-facing order number.
    pub fn short(&self) -> &str {
        let start = self
            .0
            .char_indices()
            .rev()
            .nth(3)
            .map(|(i, _)| i)
            .unwrap_or(0);
        &self.0[start..]
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A committed snapshot of a cart. Only `status` changes after placement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<CartLine>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub restaurant_id: String,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn from_cart(id: OrderId, cart: &Cart, created_at: DateTime<Utc>) -> anyhow::Result<Self> {
        let Some(restaurant_id) = cart.restaurant_id() else {
            anyhow::bail!("cart is empty");
        };
        Ok(Self {
            id,
            restaurant_id: restaurant_id.to_owned(),
            items: cart.lines().to_vec(),
            total_amount: cart.total(),
            status: OrderStatus::Pending,
            created_at,
        })
    }

    pub fn advance_to(&mut self, status: OrderStatus) {
        self.status = status;
    }
}
