use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::{info, Instrument};

use product_store::actions::ProductAction;
use product_store::app_system::{setup_tracing, StoreSystem};
use product_store::config::StoreConfig;
use product_store::domain::Product;
use product_store::selectors::{select_error, select_products, select_show_product_code, CurrentProductSelector};
use product_store::state::{product_feature, AppState};
use product_store::store::Selection;

/// Drive the product store through a typical catalog editing session.
#[derive(Debug, Parser)]
#[command(name = "product_store", version)]
struct Args {
    /// TOML file with store and backend settings.
    #[arg(long)]
    config: Option<PathBuf>,
}

const WAIT: Duration = Duration::from_secs(5);

/// Wait for the next distinct value of a selection.
async fn next_value<T, F>(selection: &mut Selection<T, F>) -> Result<T, String>
where
    T: Clone + PartialEq,
    F: FnMut(&AppState) -> T,
{
    tokio::time::timeout(WAIT, selection.next())
        .await
        .map_err(|_| "Timed out waiting for the store".to_string())?
        .ok_or_else(|| "Store closed".to_string())
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => StoreConfig::load(path).map_err(|e| e.to_string())?,
        None => StoreConfig::default(),
    };

    setup_tracing(&config.log_filter);
    info!("Starting product store");

    let system = StoreSystem::start_in_memory(&config);
    let store = system.store.clone();

    let mut products = store.select(|s| select_products(product_feature(s)));
    let mut current_product = CurrentProductSelector::new();
    let mut current = store.select(move |s| current_product.select(s));
    let mut error = store.select(|s| select_error(product_feature(s)));
    let mut show_code = store.select(|s| select_show_product_code(product_feature(s)));
    next_value(&mut products).await?;
    next_value(&mut current).await?;
    next_value(&mut error).await?;
    next_value(&mut show_code).await?;

    async {
        store.dispatch(ProductAction::LoadProducts);
        let loaded = next_value(&mut products).await?;
        info!(count = loaded.len(), "Products loaded");
        Ok::<_, String>(())
    }
    .instrument(tracing::info_span!("load"))
    .await?;

    let created = async {
        store.dispatch(ProductAction::InitCurrentProduct);
        let template = next_value(&mut current).await?.ok_or("No new-product template")?;

        let draft = Product {
            product_name: "Hammer".into(),
            product_code: "TBX-0048".into(),
            description: "Curved claw steel hammer".into(),
            star_rating: 5,
            ..template
        };
        store.dispatch(ProductAction::CreateProduct { product: draft });
        let created = next_value(&mut current).await?.ok_or("Created product not selected")?;
        info!(product_id = created.id, "Product created");
        Ok::<_, String>(created)
    }
    .instrument(tracing::info_span!("create"))
    .await?;

    async {
        let edited = Product { star_rating: 4, ..created.clone() };
        store.dispatch(ProductAction::UpdateProduct { product: edited });
        let updated = next_value(&mut current).await?.ok_or("Updated product not selected")?;
        info!(product_id = updated.id, star_rating = updated.star_rating, "Product updated");

        store.dispatch(ProductAction::DeleteProduct { product_id: updated.id });
        next_value(&mut current).await?;
        info!(product_id = updated.id, "Product deleted");

        // Deleting it again fails on the backend; the failure lands in the error slice.
        store.dispatch(ProductAction::DeleteProduct { product_id: updated.id });
        if let Some(message) = next_value(&mut error).await? {
            info!(error = %message, "Backend rejected delete");
        }
        Ok::<_, String>(())
    }
    .instrument(tracing::info_span!("edit"))
    .await?;

    store.dispatch(ProductAction::ToggleProductCode);
    let shown = next_value(&mut show_code).await?;
    info!(show_product_code = shown, "Toggled product code");

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Product store completed successfully");
    Ok(())
}
