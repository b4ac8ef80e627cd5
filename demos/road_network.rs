use pmquad::{City, Node, PmQuadtreeBuilder, Point, Quadrant};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== pmquad - Road Network ===\n");

    let mut index = PmQuadtreeBuilder::new().universe(1024.0, 1024.0).build()?;

    let city = |name: &str, x: f64, y: f64| Arc::new(City::at(name, x, y));
    let baltimore = city("Baltimore", 620.0, 300.0);
    let washington = city("Washington", 480.0, 560.0);
    let annapolis = city("Annapolis", 700.0, 520.0);
    let frederick = city("Frederick", 200.0, 260.0);
    let wilmington = city("Wilmington", 1200.0, 100.0);

    // endpoints are mapped along with their roads
    index.add_road(baltimore.clone(), washington.clone())?;
    index.add_road(baltimore.clone(), annapolis.clone())?;
    index.add_road(washington.clone(), annapolis.clone())?;
    index.add_road(frederick.clone(), baltimore.clone())?;
    // Wilmington lies outside the universe; only the road is kept
    index.add_road(baltimore.clone(), wilmington)?;

    println!("Mapped {} cities and {} roads", index.len(), index.road_count());
    println!("Wilmington mapped: {}\n", index.contains("Wilmington"));

    let center = Point::new(600.0, 420.0);
    println!("Roads within 60 of ({}, {}):", center.x(), center.y());
    for road in index.range_roads(center, 60.0) {
        println!("  - {} (length {:.1})", road, road.length());
    }

    let probe = Point::new(300.0, 500.0);
    if let Some(road) = index.nearest_road(probe) {
        println!("\nNearest road to ({}, {}): {}", probe.x(), probe.y(), road);
    }

    println!("\nTree layout:");
    index.root().walk(index.universe(), &mut |node, region, depth| {
        let indent = "  ".repeat(depth + 1);
        match node {
            Node::Empty => {}
            Node::Leaf(leaf) => {
                let city = leaf.city().map(|c| c.name()).unwrap_or("-");
                println!(
                    "{}leaf ({}, {}) {}x{}: city {}, {} road(s)",
                    indent,
                    region.min_x(),
                    region.min_y(),
                    region.width(),
                    region.height(),
                    city,
                    leaf.roads().len()
                );
            }
            Node::Internal(internal) => {
                let occupied = Quadrant::ALL
                    .into_iter()
                    .filter(|q| !internal.child(*q).is_empty())
                    .count();
                println!(
                    "{}internal ({}, {}) {}x{}: {} occupied quadrant(s)",
                    indent,
                    region.min_x(),
                    region.min_y(),
                    region.width(),
                    region.height(),
                    occupied
                );
            }
        }
    });

    Ok(())
}
