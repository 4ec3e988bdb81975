pub mod checkout_service;
pub mod history;
pub mod progression;
pub mod tracking_service;
