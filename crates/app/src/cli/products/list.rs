use clap::Args;
use rusty_money::Money;
use shopcart_app::{context::AppContext, domain::catalog::ProductQuery};

#[derive(Debug, Args)]
pub(crate) struct ListProductsArgs {
    /// Maximum number of products to list
    #[arg(long, default_value_t = 10)]
    limit: u32,

    /// Number of products to skip from the top of the catalog
    #[arg(long, default_value_t = 0)]
    skip: u32,
}

pub(crate) async fn run(args: ListProductsArgs, ctx: &AppContext) -> Result<(), String> {
    let page = ctx
        .catalog
        .list_products(ProductQuery {
            limit: Some(args.limit),
            skip: Some(args.skip),
        })
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    for product in &page.products {
        let price = Money::from_decimal(product.price, ctx.currency).to_string();

        match product.discount_percentage {
            Some(discount) => {
                println!("#{:<4} {price:>10}  {}  (-{discount}%)", product.id, product.title);
            }
            None => println!("#{:<4} {price:>10}  {}", product.id, product.title),
        }
    }

    println!(
        "\nshowing {} of {} products (skipped {})",
        page.products.len(),
        page.total,
        page.skip
    );

    Ok(())
}
