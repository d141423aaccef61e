use std::sync::Arc;

use clap::{Args, Subcommand};
use shopcart_app::context::AppContext;

mod add;
mod clear;
mod list;
mod remove;
mod set_quantity;

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Add a product to the cart
    Add(add::AddItemArgs),

    /// Show the cart with its order figures
    List,

    /// Remove a line item
    Remove(remove::RemoveItemArgs),

    /// Replace a line item's quantity
    SetQuantity(set_quantity::SetQuantityArgs),

    /// Empty the cart
    Clear,
}

pub(crate) async fn run(command: CartCommand, ctx: &AppContext) -> Result<(), String> {
    // Mirror of the storefront's header badge: re-read the cart after every
    // completed write and report the unit count.
    let carts = Arc::clone(&ctx.carts);
    let _badge = ctx.notifier.subscribe(move || {
        if let Ok(cart) = carts.get_cart() {
            println!("[cart] {} units", cart.total_quantity());
        }
    });

    match command.command {
        CartSubcommand::Add(args) => add::run(args, ctx).await,
        CartSubcommand::List => list::run(ctx).await,
        CartSubcommand::Remove(args) => remove::run(args, ctx).await,
        CartSubcommand::SetQuantity(args) => set_quantity::run(args, ctx).await,
        CartSubcommand::Clear => clear::run(ctx).await,
    }
}
