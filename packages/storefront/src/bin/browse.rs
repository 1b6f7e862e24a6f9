//! Headless storefront smoke CLI.
//!
//! Resolves a storefront slug against the live backend, applies optional
//! filters, and prints the visible catalog - the whole discovery pipeline in
//! one pass. Useful for checking a broker's public data without a browser.

use std::str::FromStr;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use storefront_core::domains::catalog::{
    CatalogSession, PropertyFilters, SessionState, TransactionKind,
};
use storefront_core::kernel::EngineDeps;
use storefront_core::Config;

#[derive(Parser)]
#[command(name = "browse", about = "Browse a storefront from the terminal")]
struct Args {
    /// Storefront slug to resolve
    slug: String,

    /// Free-text search term
    #[arg(long)]
    term: Option<String>,

    /// Transaction kind: sale | rental
    #[arg(long)]
    kind: Option<String>,

    /// Property type, e.g. apartment
    #[arg(long)]
    property_type: Option<String>,

    #[arg(long)]
    min_bedrooms: Option<i32>,

    #[arg(long)]
    max_price: Option<i64>,

    /// Reveal this many extra pages of regular listings
    #[arg(long, default_value_t = 0)]
    expand: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;
    let deps = EngineDeps::from_config(&config)?;

    let mut session = CatalogSession::new();
    session.navigate(&deps, &args.slug).await;

    let mut filters = PropertyFilters {
        property_type: args.property_type.clone(),
        min_bedrooms: args.min_bedrooms,
        max_price: args.max_price,
        ..Default::default()
    };
    if let Some(kind) = &args.kind {
        filters.transaction_kind = Some(TransactionKind::from_str(kind)?);
    }
    session.set_filters(filters);
    if let Some(term) = &args.term {
        session.set_term(term);
    }
    for _ in 0..args.expand {
        session.expand();
    }

    match session.state() {
        SessionState::NotFound => {
            println!("storefront {:?} not found", args.slug);
        }
        SessionState::Failed { notice } => {
            println!("could not load storefront: {notice}");
        }
        SessionState::Ready { branding, catalog } => {
            println!(
                "{} ({} listings, {} after filters)",
                branding.business_name,
                catalog.len(),
                session.filtered().featured.len() + session.filtered().regular.len(),
            );
            for property in &session.filtered().featured {
                println!(
                    "  * [{}] {} - {} ({})",
                    property.code(),
                    property.title,
                    storefront_core::domains::leads::whatsapp::format_price(property.price),
                    property.transaction_kind,
                );
            }
            for property in session.visible_regular() {
                println!(
                    "    [{}] {} - {} ({})",
                    property.code(),
                    property.title,
                    storefront_core::domains::leads::whatsapp::format_price(property.price),
                    property.transaction_kind,
                );
            }
            if session.has_more_regular() {
                let hidden = session.filtered().regular.len() - session.visible_regular().len();
                println!("    ... {hidden} more (pass --expand to reveal)");
            }
        }
        SessionState::Idle | SessionState::Loading => {}
    }

    Ok(())
}
