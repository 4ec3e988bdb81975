pub mod memory;

use memory::{InMemoryCartStore, InMemoryOrderStore};

/// The cart and order stores owned by one running application.
#[derive(Clone, Default)]
pub struct Stores {
    pub cart: InMemoryCartStore,
    pub orders: InMemoryOrderStore,
}

/// Builds a fresh, empty pair of stores. Each call is independent.
pub fn build_stores() -> Stores {
    Stores {
        cart: InMemoryCartStore::new(),
        orders: InMemoryOrderStore::new(),
    }
}
