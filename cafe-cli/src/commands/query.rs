//! Read-only commands

use anyhow::Result;
use cafe_core::{Cafe, CafeStore, SqliteStore};

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn print_cafes(cafes: &[Cafe], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(cafes)?);
        return Ok(());
    }

    for cafe in cafes {
        println!("[{}] {}", cafe.id, cafe.name);
        println!("    Location:  {}", cafe.location);
        println!("    Seats:     {}", cafe.seats);
        println!(
            "    Price:     {}",
            cafe.coffee_price.as_deref().unwrap_or("-")
        );
        println!(
            "    Toilet: {}  Wifi: {}  Sockets: {}  Calls: {}",
            yes_no(cafe.has_toilet),
            yes_no(cafe.has_wifi),
            yes_no(cafe.has_sockets),
            yes_no(cafe.can_take_calls)
        );
    }
    Ok(())
}

/// List every cafe
pub async fn list(store: &SqliteStore, json: bool) -> Result<()> {
    let cafes = store.list_all().await?;
    if cafes.is_empty() && !json {
        println!("No cafes in the database");
        return Ok(());
    }
    print_cafes(&cafes, json)
}

/// List cafes at a location
pub async fn search(store: &SqliteStore, location: &str, json: bool) -> Result<()> {
    let cafes = store.find_by_location(location).await?;
    if cafes.is_empty() && !json {
        println!("No cafes at {}", location);
        return Ok(());
    }
    print_cafes(&cafes, json)
}
