use clap::Args;
use shopcart_app::context::AppContext;

#[derive(Debug, Args)]
pub(crate) struct SetQuantityArgs {
    /// Catalog id of the line item
    id: u64,

    /// New quantity; must be at least 1
    quantity: u32,
}

pub(crate) async fn run(args: SetQuantityArgs, ctx: &AppContext) -> Result<(), String> {
    let changed = ctx
        .carts
        .set_quantity(args.id, args.quantity)
        .map_err(|error| format!("failed to set quantity: {error}"))?;

    if changed {
        println!("item {} set to {} units", args.id, args.quantity);
    } else {
        println!("nothing changed; check the item is in the cart and the quantity is at least 1");
    }

    Ok(())
}
