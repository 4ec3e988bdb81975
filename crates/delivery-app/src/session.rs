use anyhow::Context;
use delivery_core::application::checkout_service::CheckoutService;
use delivery_core::application::history::{order_history, OrderSummary};
use delivery_core::application::tracking_service::TrackingService;
use delivery_core::catalog::Catalog;
use delivery_core::config::Config;
use delivery_store::Stores;
use delivery_types::ports::cart_store::CartStore;

const RESTAURANT_ID: &str = "1";

/// Scripted ordering session: browse, fill the cart, check out and track
/// the order until it is delivered. Returns the resulting order history.
pub async fn run(
    stores: &Stores,
    catalog: &Catalog,
    config: &Config,
) -> anyhow::Result<Vec<OrderSummary>> {
    for r in catalog.restaurants() {
        tracing::info!(id = %r.id, name = %r.name, cuisine = %r.cuisine, eta = %r.delivery_time, "restaurant");
    }
    let restaurant = catalog
        .restaurant(RESTAURANT_ID)
        .context("restaurant missing from catalog")?;
    let menu = catalog.menu_for(&restaurant.id);
    tracing::info!(restaurant = %restaurant.name, items = menu.len(), "browsing menu");

    let burger = catalog.food_item("1").context("burger missing from menu")?;
    let fries = catalog.food_item("3").context("fries missing from menu")?;
    stores.cart.add_item(burger.clone(), 2);
    stores.cart.add_item(fries.clone(), 1);
    stores.cart.update_quantity(&burger.id, 1);
    let cart = stores.cart.snapshot();
    tracing::info!(total = %cart.total(), lines = cart.lines().len(), items = cart.item_count(), "cart ready");

    let checkout = CheckoutService::new(stores.cart.clone(), stores.orders.clone());
    let order = checkout.place_order()?;

    let tracking = TrackingService::new(stores.orders.clone(), config);
    let view = tracking.track(&order.id)?;
    tracing::info!(order = %view.short_id, status = %view.status, "tracking order");

    if let Some(outcome) = tracking.wait(&order.id).await? {
        tracing::info!(order = %view.short_id, ?outcome, "tracking finished");
    }
    tracking.stop(&order.id);

    Ok(order_history(&stores.orders))
}
