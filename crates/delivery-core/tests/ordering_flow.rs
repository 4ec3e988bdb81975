use delivery_core::application::checkout_service::CheckoutService;
use delivery_core::application::history::order_history;
use delivery_core::application::progression::ProgressionOutcome;
use delivery_core::application::tracking_service::TrackingService;
use delivery_core::catalog::Catalog;
use delivery_core::config::Config;
use delivery_core::errors::AppError;
use delivery_store::build_stores;
use delivery_types::domain::order::OrderStatus;
use delivery_types::ports::cart_store::CartStore;
use delivery_types::ports::order_store::OrderStore;
use rust_decimal::Decimal;
use std::time::Duration;

// Browse, fill the cart, check out and follow the order to the door.
#[tokio::test(start_paused = true)]
async fn browse_checkout_track_flow() {
    let stores = build_stores();
    let catalog = Catalog::sample();
    let checkout = CheckoutService::new(stores.cart.clone(), stores.orders.clone());
    let tracking = TrackingService::new(stores.orders.clone(), &Config::default());

    let burger = catalog.food_item("1").unwrap().clone();
    let fries = catalog.food_item("3").unwrap().clone();
    stores.cart.add_item(burger.clone(), 2);
    stores.cart.add_item(fries, 1);
    assert_eq!(stores.cart.total(), Decimal::new(3197, 2));

    stores.cart.update_quantity("1", 1);
    assert_eq!(stores.cart.total(), Decimal::new(1898, 2));
    stores.cart.remove_item("3");
    assert_eq!(stores.cart.total(), Decimal::new(1299, 2));

    let order = checkout.place_order().unwrap();
    assert!(stores.cart.lines().is_empty());
    assert_eq!(order.total_amount, Decimal::new(1299, 2));

    // Mutating the cart afterwards must not reach the placed order.
    stores.cart.add_item(burger, 4);
    assert_eq!(
        stores.orders.get(&order.id).unwrap().total_amount,
        Decimal::new(1299, 2)
    );

    let view = tracking.track(&order.id).unwrap();
    assert_eq!(view.status, OrderStatus::Pending);
    assert!(view.updating);

    tokio::time::sleep(Duration::from_millis(5_100)).await;
    assert_eq!(
        stores.orders.current_order().unwrap().status,
        OrderStatus::Preparing
    );

    let outcome = tracking.wait(&order.id).await.unwrap();
    assert_eq!(outcome, Some(ProgressionOutcome::Completed));
    assert_eq!(
        stores.orders.current_order().unwrap().status,
        OrderStatus::Delivered
    );

    let history = order_history(&stores.orders);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status_label, "Delivered");
    assert_eq!(history[0].lines, vec!["1x Classic Burger".to_string()]);

    stores.orders.clear_current_order();
    assert!(stores.orders.current_order().is_none());
    assert_eq!(stores.orders.orders().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn leaving_the_tracking_view_freezes_status() {
    let stores = build_stores();
    let catalog = Catalog::sample();
    let checkout = CheckoutService::new(stores.cart.clone(), stores.orders.clone());
    let tracking = TrackingService::new(stores.orders.clone(), &Config::default());

    stores
        .cart
        .add_item(catalog.food_item("2").unwrap().clone(), 1);
    let order = checkout.place_order().unwrap();

    tracking.track(&order.id).unwrap();
    tokio::time::sleep(Duration::from_secs(11)).await;
    tracking.stop(&order.id);
    tokio::time::sleep(Duration::from_secs(60)).await;

    assert_eq!(
        stores.orders.get(&order.id).unwrap().status,
        OrderStatus::OnTheWay
    );
}

#[tokio::test]
async fn checkout_guards() {
    let stores = build_stores();
    let checkout = CheckoutService::new(stores.cart.clone(), stores.orders.clone());
    let tracking = TrackingService::new(stores.orders.clone(), &Config::default());

    assert!(matches!(checkout.place_order(), Err(AppError::EmptyCart)));
    assert!(matches!(
        tracking.track(&"missing".into()),
        Err(AppError::NotFound(_))
    ));
}
