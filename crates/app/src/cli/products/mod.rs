use clap::{Args, Subcommand};
use shopcart_app::context::AppContext;

mod list;
mod show;

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List a window of the catalog
    List(list::ListProductsArgs),

    /// Show one product in full
    Show(show::ShowProductArgs),
}

pub(crate) async fn run(command: ProductsCommand, ctx: &AppContext) -> Result<(), String> {
    match command.command {
        ProductsSubcommand::List(args) => list::run(args, ctx).await,
        ProductsSubcommand::Show(args) => show::run(args, ctx).await,
    }
}
