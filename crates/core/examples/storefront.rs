//! Storefront walkthrough: browse a fixture catalog, fill a cart, and print
//! the receipt.
//!
//! Run from the workspace root with
//! `cargo run -p shopcart --example storefront [-- <set>]`, where `<set>`
//! names a file under `fixtures/catalog/` and defaults to `demo`.

use std::{env, io};

use anyhow::Result;
use rusty_money::{Money, iso::USD};
use shopcart::prelude::*;

#[expect(clippy::print_stdout, reason = "Example program output to user")]
fn main() -> Result<()> {
    let set = env::args().nth(1).unwrap_or_else(|| "demo".to_string());
    let fixture = Fixture::from_set(&set)?;

    println!("Browsing the {} catalog:", fixture.name());

    for product in fixture.products() {
        let price = Money::from_decimal(product.price, USD).to_string();

        println!("  #{:<4} {price:>9}  {}", product.id, product.title);
    }

    let notifier = CartNotifier::new();
    let _badge = notifier.subscribe(|| println!("        · cart updated"));

    let mut cart = Cart::new();

    println!();

    for (product, quantity) in fixture.products().iter().take(3).zip([2u32, 1, 1]) {
        println!("Adding {quantity} × {}", product.title);

        if cart.add_item(product, quantity) {
            notifier.notify();
        }
    }

    println!(
        "\nThe cart holds {} units across {} lines.\n",
        cart.total_quantity(),
        cart.len()
    );

    let receipt = Receipt::new(cart.items(), USD);

    receipt.write_to(io::stdout())?;

    Ok(())
}
