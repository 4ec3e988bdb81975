use delivery_types::domain::order::OrderStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Cannot place an order from an empty cart")]
    EmptyCart,

    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Order {id} cannot move back from {from} to {to}")]
    StatusRegression {
        id: String,
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}
