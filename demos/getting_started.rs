use pmquad::{City, PmError, PmQuadtree, Point};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (set RUST_LOG=debug to watch leaves split)
    env_logger::init();

    println!("=== pmquad - Getting Started ===\n");

    let mut index = PmQuadtree::new();
    index.set_universe(128.0, 128.0)?;
    println!("✓ Created index over a 128x128 universe\n");

    // === MAPPING CITIES ===
    println!("1. Mapping Cities");
    println!("-----------------");

    index.add_city(Arc::new(City::new("Annapolis", 10.0, 10.0, 3.0, "red")))?;
    index.add_city(Arc::new(City::new("Baltimore", 100.0, 100.0, 5.0, "blue")))?;
    index.add_city(Arc::new(City::new("Columbia", 10.0, 100.0, 2.0, "green")))?;
    println!("   Mapped {} cities", index.len());

    match index.add_city(Arc::new(City::at("Baltimore", 50.0, 50.0))) {
        Err(PmError::AlreadyMapped(msg)) => println!("   Rejected duplicate: {}", msg),
        other => println!("   Unexpected: {:?}", other),
    }
    match index.add_city(Arc::new(City::at("Faraway", 500.0, 10.0))) {
        Err(PmError::OutOfBounds(msg)) => println!("   Rejected: {}\n", msg),
        other => println!("   Unexpected: {:?}\n", other),
    }

    // === RANGE QUERIES ===
    println!("2. Range Queries");
    println!("----------------");

    let center = Point::new(10.0, 50.0);
    let found = index.range_cities(center, 45.0);
    println!("   Cities within 45 of ({}, {}):", center.x(), center.y());
    for city in &found {
        println!("     - {} at ({}, {})", city.name(), city.x(), city.y());
    }
    println!();

    // === NEAREST QUERIES ===
    println!("3. Nearest Queries");
    println!("------------------");

    let probe = Point::new(11.0, 11.0);
    if let Some(city) = index.nearest_city(probe) {
        println!("   Nearest city to ({}, {}): {}", probe.x(), probe.y(), city.name());
    }

    index.add_isolated_city(Arc::new(City::at("Outpost", 120.0, 5.0)))?;
    if let Some(city) = index.nearest_isolated_city(probe) {
        println!("   Nearest isolated city: {}", city.name());
    }
    println!();

    // === STRUCTURE ===
    let stats = index.stats();
    println!("4. Tree Structure");
    println!("-----------------");
    println!("   Internal nodes: {}", stats.internal_nodes);
    println!("   Leaves: {}", stats.leaf_nodes);
    println!("   Empty nodes: {}", stats.empty_nodes);
    println!("   Max depth: {}", stats.max_depth);

    println!("\n=== Done ===");
    Ok(())
}
