use shopping_service::gateway::mock::MockGateway;
use shopping_service::model::{Customer, Product};
use shopping_service::service::{Purchase, PurchaseError, ShoppingError, ShoppingService};
use std::sync::Arc;

fn setup(products: impl IntoIterator<Item = Product>) -> (Arc<MockGateway>, ShoppingService<MockGateway>) {
    let gateway = Arc::new(MockGateway::with_products(products));
    let service = ShoppingService::new(gateway.clone());
    (gateway, service)
}

fn customers() -> (Customer, Customer) {
    (Customer::new(1, "11-11-11"), Customer::new(2, "22-22-22"))
}

/// Carts of different customers hold different products, and a cart only
/// holds what was added to it.
#[test]
fn test_carts_are_isolated_per_customer() {
    let (_gateway, mut service) = setup(Vec::<Product>::new());
    let (customer1, customer2) = customers();
    let bread = Product::new("bread", 2);
    let milk = Product::new("milk", 3);

    service.cart(&customer1).add(bread.clone(), 1);
    service.cart(&customer2).add(milk.clone(), 2);

    let products1 = service.cart(&customer1).products();
    let products2 = service.cart(&customer2).products();

    assert_ne!(products1, products2);
    assert!(products1.contains_key(&bread) && !products1.contains_key(&milk));
    assert!(products2.contains_key(&milk) && !products2.contains_key(&bread));
}

/// Repeated requests for one customer's cart reach the same cart.
#[test]
fn test_same_customer_same_cart() {
    let (_gateway, mut service) = setup(Vec::<Product>::new());
    let (customer1, _) = customers();

    service.cart(&customer1).add(Product::new("bread", 2), 1);
    service.cart(&customer1).add(Product::new("milk", 3), 1);

    let cart = service.cart(&customer1);
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.customer(), &customer1);
}

/// Two customers buy different products; stock drops, each product is saved
/// once, and both carts end up empty.
#[test]
fn test_successful_buy() {
    let (gateway, mut service) = setup([Product::new("bread", 2), Product::new("milk", 3)]);
    let (customer1, customer2) = customers();

    service.cart(&customer1).add(Product::new("bread", 2), 1);
    service.cart(&customer2).add(Product::new("milk", 3), 3);

    let result1 = service.buy(&customer1).unwrap();
    let result2 = service.buy(&customer2).unwrap();

    assert!(result1.is_committed() && result2.is_committed());

    assert_eq!(
        gateway.product("bread").unwrap().count(),
        1,
        "Stock should change after a purchase"
    );
    assert_eq!(
        gateway.product("milk").unwrap().count(),
        0,
        "Stock should change after a purchase"
    );

    assert_eq!(gateway.save_count("bread"), 1);
    assert_eq!(gateway.save_count("milk"), 1);
    assert_eq!(gateway.saved("milk")[0].count(), 0);

    assert!(service.cart(&customer1).products().is_empty(), "Cart should be emptied after a purchase");
    assert!(service.cart(&customer2).products().is_empty(), "Cart should be emptied after a purchase");
}

/// Buying every remaining unit is allowed and persists a count of zero.
#[test]
fn test_buy_all_remaining_stock() {
    let (gateway, mut service) = setup([Product::new("bread", 5)]);
    let (customer1, _) = customers();

    service.cart(&customer1).add(Product::new("bread", 5), 5);

    assert_eq!(service.buy(&customer1).unwrap(), Purchase::Committed { saved: 1 });
    assert_eq!(gateway.product("bread").unwrap().count(), 0);
    assert_eq!(gateway.save_count("bread"), 1);
    assert!(service.cart(&customer1).is_empty());
}

/// An empty cart is not an error: nothing happens and storage is untouched.
#[test]
fn test_buy_empty_cart() {
    let (gateway, mut service) = setup([Product::new("bread", 5)]);
    let (customer1, _) = customers();

    let cart = service.cart(&customer1);
    assert!(cart.is_empty());

    assert_eq!(service.buy(&customer1).unwrap(), Purchase::NothingToDo);
    gateway.verify_no_interactions();
}

/// The second customer asks for more than the first one left behind.
#[test]
fn test_insufficient_stock() {
    let (gateway, mut service) = setup([Product::new("bread", 3)]);
    let (customer1, customer2) = customers();
    let bread = Product::new("bread", 3);

    service.cart(&customer1).add(bread.clone(), 2);
    service.cart(&customer2).add(bread.clone(), 2);

    service.buy(&customer1).unwrap();
    let before = service.cart(&customer2).products();

    let err = service.buy(&customer2).unwrap_err();

    assert_eq!(err.to_string(), "В наличии нет необходимого количества товара 'bread'");
    assert_eq!(
        err,
        ShoppingError::Purchase(PurchaseError::InsufficientStock {
            product: "bread".to_string()
        })
    );
    assert_eq!(gateway.product("bread").unwrap().count(), 1);
    assert_eq!(gateway.save_count("bread"), 1);
    assert_eq!(service.cart(&customer2).products(), before);
    assert_eq!(service.cart(&customer2).quantity_of(&bread), Some(2));
}

/// A negative quantity is rejected without saving or touching the cart.
#[test]
fn test_negative_quantity() {
    let (gateway, mut service) = setup([Product::new("bread", 3)]);
    let (customer1, _) = customers();
    let bread = Product::new("bread", 3);

    service.cart(&customer1).add(bread.clone(), -2);

    let err = service.buy(&customer1).unwrap_err();

    assert_eq!(err.to_string(), "Нельзя приобрести отрицательное количество товара 'bread'");
    match err {
        ShoppingError::Purchase(e) => assert_eq!(e.product(), "bread"),
        other => panic!("Expected purchase error, got {:?}", other),
    }
    gateway.verify_no_interactions();
    assert_eq!(gateway.product("bread").unwrap().count(), 3);
    assert_eq!(service.cart(&customer1).quantity_of(&bread), Some(-2));
}

/// After a rejected purchase the customer can fix the cart and retry.
#[test]
fn test_retry_after_rejection() {
    let (gateway, mut service) = setup([Product::new("bread", 3)]);
    let (customer1, _) = customers();
    let bread = Product::new("bread", 3);

    service.cart(&customer1).add(bread.clone(), 4);
    assert!(service.buy(&customer1).is_err());

    service.cart(&customer1).edit(bread.clone(), 3);
    assert!(service.buy(&customer1).unwrap().is_committed());
    assert_eq!(gateway.product("bread").unwrap().count(), 0);
}
