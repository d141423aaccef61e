use std::io;

use shopcart::receipt::Receipt;
use shopcart_app::context::AppContext;

pub(crate) async fn run(ctx: &AppContext) -> Result<(), String> {
    let cart = ctx
        .carts
        .get_cart()
        .map_err(|error| format!("failed to read cart: {error}"))?;

    if cart.is_empty() {
        println!("the cart is empty");

        return Ok(());
    }

    Receipt::new(cart.items(), ctx.currency)
        .write_to(io::stdout())
        .map_err(|error| format!("failed to render cart: {error}"))?;

    Ok(())
}
