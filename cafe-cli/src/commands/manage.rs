//! Commands that change the database

use anyhow::{bail, Result};
use cafe_core::{CafeStore, NewCafe, SqliteStore};
use clap::Args;
use std::path::Path;

/// Fields for a new cafe
#[derive(Args)]
pub struct AddArgs {
    /// Cafe name (must be unique)
    #[arg(long)]
    pub name: String,

    /// Google Maps link
    #[arg(long)]
    pub map_url: String,

    /// Photo link
    #[arg(long)]
    pub img_url: String,

    /// Location, matched exactly by search
    #[arg(long)]
    pub location: String,

    /// Seat count, free text such as "20-30"
    #[arg(long)]
    pub seats: String,

    /// Price of a coffee, e.g. "£2.50"
    #[arg(long)]
    pub coffee_price: Option<String>,

    /// Has a toilet
    #[arg(long)]
    pub toilet: bool,

    /// Has wifi
    #[arg(long)]
    pub wifi: bool,

    /// Has power sockets
    #[arg(long)]
    pub sockets: bool,

    /// Phone calls are fine
    #[arg(long)]
    pub calls: bool,
}

impl From<AddArgs> for NewCafe {
    fn from(args: AddArgs) -> Self {
        NewCafe {
            name: args.name,
            map_url: args.map_url,
            img_url: args.img_url,
            location: args.location,
            seats: args.seats,
            has_toilet: args.toilet,
            has_wifi: args.wifi,
            has_sockets: args.sockets,
            can_take_calls: args.calls,
            coffee_price: args.coffee_price,
        }
    }
}

/// Report the ready database; opening it already created the table
pub async fn init(store: &SqliteStore, path: &Path) -> Result<()> {
    let count = store.count().await?;
    println!("Database ready at {} ({} cafes)", path.display(), count);
    Ok(())
}

/// Insert one cafe
pub async fn add(store: &SqliteStore, args: AddArgs) -> Result<()> {
    let cafe = store.insert(args.into()).await?;
    tracing::info!("Inserted cafe {}", cafe.id);
    println!("Added {} with id {}", cafe.name, cafe.id);
    Ok(())
}

/// Change the coffee price of one cafe
pub async fn set_price(store: &SqliteStore, id: i64, price: &str) -> Result<()> {
    if !store.update_price(id, Some(price)).await? {
        bail!("No cafe with id {}", id);
    }
    println!("Updated price of cafe {} to {}", id, price);
    Ok(())
}

/// Delete one cafe
pub async fn remove(store: &SqliteStore, id: i64) -> Result<()> {
    if !store.delete(id).await? {
        bail!("No cafe with id {}", id);
    }
    println!("Removed cafe {}", id);
    Ok(())
}
