use clap::Args;
use shopcart_app::{context::AppContext, domain::contact::ContactMessage};

#[derive(Debug, Args)]
pub(crate) struct ContactArgs {
    /// Sender name
    #[arg(long)]
    name: String,

    /// Sender email address
    #[arg(long)]
    email: String,

    /// Message body
    #[arg(long)]
    message: String,
}

pub(crate) async fn run(args: ContactArgs, ctx: &AppContext) -> Result<(), String> {
    let message = ContactMessage {
        name: args.name,
        email: args.email,
        message: args.message,
    };

    message
        .validate()
        .map_err(|error| format!("invalid message: {error}"))?;

    ctx.contact
        .deliver(&message)
        .await
        .map_err(|error| format!("failed to send message: {error}"))?;

    println!("message sent; thanks for reaching out");

    Ok(())
}
