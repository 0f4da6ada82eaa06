use anyhow::Context;
use clap::Parser;
use housing_filter::config::load_app_config;
use housing_filter::filters::{filter_listings, form, query};
use housing_filter::report::FilterReport;
use housing_filter::sources::is_favorite;
use housing_filter::{ApiClient, Listing, ListingSource, Session, SourceQuery};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "housing-filter", about = "Search marketplace listings")]
struct Cli {
    /// Listings query string, e.g. "location=Oran&minPrice=5000000&type=villa"
    #[arg(default_value = "")]
    query: String,

    /// Write the JSON report to this file
    #[arg(long)]
    output: Option<PathBuf>,

    /// List the signed-in user's favorites instead of searching
    #[arg(long)]
    favorites: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_app_config().context("Failed to load configuration")?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let client = ApiClient::from_config(&config).context("Failed to create API client")?;
    let session = config
        .auth_token
        .clone()
        .map(Session::with_token)
        .unwrap_or_default();

    if cli.favorites {
        let favorites = client
            .fetch_favorites(&session)
            .await
            .context("Failed to fetch favorites")?;
        info!("{} favorites", favorites.len());
        print_listings(&favorites, &[]);
        return Ok(());
    }

    let criteria = query::decode(&cli.query);
    info!("Searching {}", query::listing_path(&criteria));

    let listings = client
        .fetch(&SourceQuery::from(&criteria))
        .await
        .context("Failed to fetch listings")?;
    let matched = filter_listings(&listings, &criteria);

    info!("✅ {} of {} listings match\n", matched.len(), listings.len());

    let favorites = client.favorites_or_empty(&session).await;
    print_listings(&matched, &favorites);

    if let Some(path) = cli.output {
        let report = FilterReport::new(
            client.source_name(),
            &cli.query,
            criteria,
            listings.len(),
            matched,
        );
        let json = serde_json::to_string_pretty(&report)?;
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("💾 Saved report to {}", path.display());
    }

    Ok(())
}

fn print_listings(listings: &[Listing], favorites: &[Listing]) {
    for (i, listing) in listings.iter().enumerate() {
        let star = match &listing.id {
            Some(id) if is_favorite(favorites, id) => " ★",
            _ => "",
        };
        println!(
            "{}. {} ({} DA){}",
            i + 1,
            listing.title.as_deref().unwrap_or("Sans titre"),
            form::format_grouped_number(listing.price_or_zero().whole()),
            star
        );
        println!(
            "   {} pièces, {} m²",
            listing.rooms_or_zero(),
            listing.surface_or_zero()
        );
        if let Some(location) = &listing.location {
            println!("   Location: {}", location);
        }
        if let (Some(kind), Some(status)) = (&listing.property_type, &listing.status) {
            println!("   {} · {}", kind, status);
        }
        if let Some(id) = &listing.id {
            println!("   ID: {}", id);
        }
        println!();
    }
}
