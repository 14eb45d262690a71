//! # optique-admin
//!
//! One-shot terminal front for the optics-shop backend.
//!
//! This binary:
//! - restores the persisted session (or logs in with `OPTIQUE_EMAIL` /
//!   `OPTIQUE_PASSWORD`)
//! - fetches the dashboard datasets concurrently
//! - prints the stat cards, the latest sales and the low stock alert
//!
//! All mutations (creating products, recording sales, registering sellers)
//! go through the page view-models in the library crate.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use optique_api::ApiClient;
use optique_client::auth::AuthContext;
use optique_client::config::ClientConfig;
use optique_client::pages::dashboard::{self, LOW_STOCK_THRESHOLD};
use optique_client::pages::{products, sales};
use optique_client::ui::render_table;
use optique_shared::helpers::format_price;
use optique_shared::models::Credentials;
use optique_store::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -----------------------------------------------------------------------
    // 1. Initialize tracing (respects RUST_LOG env var)
    // -----------------------------------------------------------------------
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,optique_client=debug")),
        )
        .init();

    info!("Starting optique-admin v{}", env!("CARGO_PKG_VERSION"));

    // -----------------------------------------------------------------------
    // 2. Load configuration and open the local session store
    // -----------------------------------------------------------------------
    let config = ClientConfig::from_env();
    info!(api_url = %config.api_url, "Loaded configuration");

    let api = Arc::new(ApiClient::new(&config.api_url));
    let store = Database::new().context("failed to open the session store")?;

    // -----------------------------------------------------------------------
    // 3. Authenticate: stored session first, configured credentials second
    // -----------------------------------------------------------------------
    let mut auth = AuthContext::hydrate(api.clone(), store)?;
    if !auth.is_authenticated() {
        let (email, password) = config.credentials().context(
            "no stored session; set OPTIQUE_EMAIL and OPTIQUE_PASSWORD to log in",
        )?;
        let user = auth
            .login(&Credentials { email, password })
            .await
            .context("login failed")?;
        info!(user = %user.nom, "logged in");
    }

    // -----------------------------------------------------------------------
    // 4. Fetch and render the dashboard
    // -----------------------------------------------------------------------
    let snapshot = dashboard::fetch_dashboard(&api)
        .await
        .context("Erreur lors du chargement des données")?;

    if let Some(user) = auth.current_user() {
        println!("Bonjour, {} !", user.nom);
    }
    println!("Tableau de bord");
    println!();
    println!("Produits            : {}", snapshot.total_products);
    println!("Ventes              : {}", snapshot.total_sales);
    println!("Vendeurs            : {}", snapshot.total_users);
    println!(
        "Chiffre d'affaires  : {}",
        format_price(snapshot.total_revenue)
    );

    println!();
    println!("Dernières ventes");
    let recent: Vec<_> = snapshot.recent_sales.iter().collect();
    print!(
        "{}",
        render_table(&sales::sale_columns(), &recent, "Aucune vente enregistrée")
    );

    println!();
    println!("Stock faible (moins de {LOW_STOCK_THRESHOLD} unités)");
    let low: Vec<_> = snapshot.low_stock.iter().collect();
    print!(
        "{}",
        render_table(
            &products::product_columns(),
            &low,
            "Aucun produit en stock faible",
        )
    );

    Ok(())
}
