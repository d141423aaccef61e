use clap::Args;
use shopcart_app::context::AppContext;

#[derive(Debug, Args)]
pub(crate) struct RemoveItemArgs {
    /// Catalog id of the line item to remove
    id: u64,
}

pub(crate) async fn run(args: RemoveItemArgs, ctx: &AppContext) -> Result<(), String> {
    let removed = ctx
        .carts
        .remove_item(args.id)
        .map_err(|error| format!("failed to remove item {}: {error}", args.id))?;

    if removed {
        println!("removed item {}", args.id);
    } else {
        println!("item {} is not in the cart", args.id);
    }

    Ok(())
}
