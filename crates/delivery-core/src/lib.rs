//! delivery-core: checkout, status progression and order tracking over the
//! cart and order stores

pub mod config;
pub mod errors;

pub mod application;
pub mod catalog;

pub use delivery_types::{domain, ports};
