//! App Configuration

use std::path::PathBuf;

use clap::Args;

/// Storefront settings, read from flags or the environment.
#[derive(Debug, Args)]
pub struct AppConfig {
    /// Directory holding the persisted cart document
    #[arg(long, env = "SHOPCART_DATA_DIR", default_value = ".shopcart")]
    pub data_dir: PathBuf,

    /// Base URL of the hosted product catalog
    #[arg(long, env = "SHOPCART_CATALOG_URL", default_value = "https://dummyjson.com")]
    pub catalog_url: String,

    /// Form endpoint that receives contact messages
    #[arg(
        long,
        env = "SHOPCART_CONTACT_URL",
        default_value = "https://formspree.io/f/xanpggke"
    )]
    pub contact_url: String,

    /// ISO 4217 code of the storefront currency
    #[arg(long, env = "SHOPCART_CURRENCY", default_value = "USD")]
    pub currency: String,

    /// Serve the catalog from local fixture sets instead of the network
    #[arg(long, env = "SHOPCART_OFFLINE")]
    pub offline: bool,

    /// Directory holding catalog fixture sets
    #[arg(long, env = "SHOPCART_FIXTURES_DIR", default_value = "./fixtures")]
    pub fixtures_dir: PathBuf,

    /// Catalog fixture set used when offline
    #[arg(long, env = "SHOPCART_FIXTURE_SET", default_value = "demo")]
    pub fixture_set: String,
}
