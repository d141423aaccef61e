use shopcart_app::context::AppContext;

pub(crate) async fn run(ctx: &AppContext) -> Result<(), String> {
    let cleared = ctx
        .carts
        .clear()
        .map_err(|error| format!("failed to clear cart: {error}"))?;

    if cleared {
        println!("cart emptied");
    } else {
        println!("the cart was already empty");
    }

    Ok(())
}
