use clap::{Parser, Subcommand};
use shopcart_app::{config::AppConfig, context::AppContext};

mod cart;
mod checkout;
mod contact;
mod products;

#[derive(Debug, Parser)]
#[command(name = "shopcart", about = "Shopcart storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse the product catalog
    Products(products::ProductsCommand),

    /// Inspect and edit the cart
    Cart(cart::CartCommand),

    /// Pay for the cart contents
    Checkout(checkout::CheckoutArgs),

    /// Send the shop a message
    Contact(contact::ContactArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let ctx = AppContext::from_config(&self.config)
            .map_err(|error| format!("failed to initialise services: {error}"))?;

        match self.command {
            Commands::Products(command) => products::run(command, &ctx).await,
            Commands::Cart(command) => cart::run(command, &ctx).await,
            Commands::Checkout(args) => checkout::run(args, &ctx).await,
            Commands::Contact(args) => contact::run(args, &ctx).await,
        }
    }
}
