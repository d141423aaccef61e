use clap::Args;
use rusty_money::Money;
use shopcart_app::context::AppContext;

#[derive(Debug, Args)]
pub(crate) struct ShowProductArgs {
    /// Catalog id of the product
    id: u64,
}

pub(crate) async fn run(args: ShowProductArgs, ctx: &AppContext) -> Result<(), String> {
    let product = ctx
        .catalog
        .get_product(args.id)
        .await
        .map_err(|error| format!("failed to fetch product {}: {error}", args.id))?;

    println!("id: {}", product.id);
    println!("title: {}", product.title);
    println!(
        "price: {}",
        Money::from_decimal(product.price, ctx.currency)
    );

    if let Some(discount) = product.discount_percentage {
        println!("discount: {discount}%");
    }

    if let Some(brand) = &product.brand {
        println!("brand: {brand}");
    }

    println!("category: {}", product.category);
    println!("rating: {}", product.rating);
    println!("stock: {}", product.stock);

    if !product.description.is_empty() {
        println!("description: {}", product.description);
    }

    Ok(())
}
