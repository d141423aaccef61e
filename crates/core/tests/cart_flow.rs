//! End-to-end cart flow over the public API: browse a bundled catalog set,
//! build a cart, derive the order figures, and render the receipt.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use rust_decimal::Decimal;
use rusty_money::iso::USD;
use shopcart::{
    cart::{Cart, LineItem},
    fixtures::{Fixture, FixtureError},
    notify::CartNotifier,
    pricing::{self, CartTotals},
    receipt::Receipt,
};
use testresult::TestResult;

fn demo_shelf() -> Result<Fixture, FixtureError> {
    Fixture::from_set_in(concat!(env!("CARGO_MANIFEST_DIR"), "/../../fixtures"), "demo")
}

#[test]
fn bundled_demo_set_loads() -> TestResult {
    let fixture = demo_shelf()?;

    assert_eq!(fixture.name(), "Demo Shelf");
    assert_eq!(fixture.products().len(), 8);

    let fragrance = fixture.product(6)?;

    assert_eq!(fragrance.title, "Calvin Klein CK One");
    assert_eq!(fragrance.price, Decimal::new(49_99, 2));

    Ok(())
}

#[test]
fn order_over_the_threshold_ships_free() -> TestResult {
    let fixture = demo_shelf()?;
    let mut cart = Cart::new();

    cart.add_item(fixture.product(1)?, 2);
    cart.add_item(fixture.product(6)?, 1);

    let totals = CartTotals::of(cart.items());

    // 9.99 × 2 + 49.99 = 69.97, over the 50.00 threshold.
    assert_eq!(totals.subtotal, Decimal::new(69_97, 2));
    assert_eq!(totals.shipping_fee, Decimal::ZERO);

    // 69.97 × 1.1 = 76.967; the payment edge rounds up to 7697 cents.
    assert_eq!(pricing::amount_due_minor(cart.items(), USD)?, 7697);

    Ok(())
}

#[test]
fn order_under_the_threshold_pays_the_flat_fee() -> TestResult {
    let fixture = demo_shelf()?;
    let mut cart = Cart::new();

    cart.add_item(fixture.product(2)?, 1);
    cart.add_item(fixture.product(8)?, 1);

    let totals = CartTotals::of(cart.items());

    // 19.99 + 7.99 = 27.98, under the threshold.
    assert_eq!(totals.subtotal, Decimal::new(27_98, 2));
    assert_eq!(totals.shipping_fee, Decimal::new(5_99, 2));

    // 27.98 + 2.798 + 5.99 = 36.768 → 3677 cents.
    assert_eq!(pricing::amount_due_minor(cart.items(), USD)?, 3677);

    Ok(())
}

#[test]
fn repeated_adds_merge_instead_of_duplicating() -> TestResult {
    let fixture = demo_shelf()?;
    let mut cart = Cart::new();

    cart.add_item(fixture.product(4)?, 1);
    cart.add_item(fixture.product(4)?, 2);

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.total_quantity(), 3);

    Ok(())
}

#[test]
fn views_sharing_a_notifier_see_every_completed_write() -> TestResult {
    let fixture = demo_shelf()?;
    let notifier = CartNotifier::new();

    let seen = Arc::new(AtomicUsize::new(0));
    let badge = Arc::clone(&seen);

    let _subscription = notifier.subscribe(move || {
        badge.fetch_add(1, Ordering::SeqCst);
    });

    let mut cart = Cart::new();

    // A store broadcasts after each write that actually changed the
    // document, and stays silent for rejected writes.
    if cart.add_item(fixture.product(1)?, 1) {
        notifier.notify();
    }

    if cart.set_quantity(1, 3) {
        notifier.notify();
    }

    if cart.set_quantity(99, 1) {
        notifier.notify();
    }

    if cart.clear() {
        notifier.notify();
    }

    assert_eq!(seen.load(Ordering::SeqCst), 3);

    Ok(())
}

#[test]
fn receipt_renders_the_assembled_order() -> TestResult {
    let fixture = demo_shelf()?;
    let mut cart = Cart::new();

    cart.add_item(fixture.product(1)?, 2);
    cart.add_item(fixture.product(6)?, 1);

    let receipt = Receipt::new(cart.items(), USD);

    let mut out = Vec::new();
    receipt.write_to(&mut out)?;

    let output = String::from_utf8(out)?;

    assert!(output.contains("Essence Mascara Lash Princess"));
    assert!(output.contains("Calvin Klein CK One"));
    assert!(output.contains("FREE"));
    assert!(output.contains("Total:"));

    Ok(())
}

#[test]
fn persisted_document_restores_the_same_order() -> TestResult {
    let fixture = demo_shelf()?;
    let mut cart = Cart::new();

    cart.add_item(fixture.product(3)?, 2);
    cart.add_item(fixture.product(7)?, 1);

    let blob = serde_json::to_string(&cart)?;
    let items: Vec<LineItem> = serde_json::from_str(&blob)?;
    let restored = Cart::with_items(items)?;

    assert_eq!(restored, cart);
    assert_eq!(
        CartTotals::of(restored.items()),
        CartTotals::of(cart.items())
    );

    Ok(())
}
