use clap::Args;
use shopcart_app::context::AppContext;

#[derive(Debug, Args)]
pub(crate) struct AddItemArgs {
    /// Catalog id of the product to add
    id: u64,

    /// Number of units to add
    #[arg(long, short, default_value_t = 1)]
    quantity: u32,
}

pub(crate) async fn run(args: AddItemArgs, ctx: &AppContext) -> Result<(), String> {
    let product = ctx
        .catalog
        .get_product(args.id)
        .await
        .map_err(|error| format!("failed to fetch product {}: {error}", args.id))?;

    // The cart store takes quantities at face value; clamp here.
    let quantity = args.quantity.max(1);

    let cart = ctx
        .carts
        .add_item(&product, quantity)
        .map_err(|error| format!("failed to add {}: {error}", product.title))?;

    if let Some(item) = cart.get_item(args.id) {
        println!("{} × {} in the cart", item.quantity, item.title);
    }

    Ok(())
}
