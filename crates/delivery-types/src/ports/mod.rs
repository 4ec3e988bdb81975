pub mod cart_store;
pub mod order_store;
