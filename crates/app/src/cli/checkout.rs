use std::{io, sync::Arc};

use clap::Args;
use rusty_money::Money;
use shopcart::receipt::Receipt;
use shopcart_app::{
    context::AppContext,
    domain::checkout::{
        CheckoutOrchestrator, DemoPaymentGateway,
        models::{CheckoutDetails, CheckoutOutcome},
    },
};

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    /// Full name for the order
    #[arg(long)]
    name: String,

    /// Email address for the order
    #[arg(long)]
    email: String,

    /// Street address
    #[arg(long)]
    address: String,

    /// City
    #[arg(long)]
    city: String,

    /// Postal code
    #[arg(long)]
    postal_code: String,

    /// Walk through the payment flow but abandon it at the end
    #[arg(long)]
    abandon_payment: bool,
}

pub(crate) async fn run(args: CheckoutArgs, ctx: &AppContext) -> Result<(), String> {
    let cart = ctx
        .carts
        .get_cart()
        .map_err(|error| format!("failed to read cart: {error}"))?;

    if !cart.is_empty() {
        Receipt::new(cart.items(), ctx.currency)
            .write_to(io::stdout())
            .map_err(|error| format!("failed to render order summary: {error}"))?;

        println!();
    }

    let gateway = Arc::new(DemoPaymentGateway::new(!args.abandon_payment));
    let orchestrator = CheckoutOrchestrator::new(Arc::clone(&ctx.carts), gateway, ctx.currency);

    let details = CheckoutDetails {
        name: args.name,
        email: args.email,
        address: args.address,
        city: args.city,
        postal_code: args.postal_code,
    };

    let outcome = orchestrator
        .checkout(&details)
        .await
        .map_err(|error| format!("checkout failed: {error}"))?;

    match outcome {
        CheckoutOutcome::Settled {
            reference,
            amount_minor,
            ..
        } => {
            println!("payment successful");
            println!("reference: {reference}");
            println!(
                "charged: {}",
                Money::from_minor(amount_minor, ctx.currency)
            );
        }
        CheckoutOutcome::Cancelled => {
            println!("payment abandoned; the cart is untouched");
        }
    }

    Ok(())
}
