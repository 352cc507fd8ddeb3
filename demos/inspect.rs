use std::error::Error;
use std::{env, fs};

use rutas::directions::{decode_alternatives, format_distance, format_duration};
use rutas::route::{pick_minimum, RouteGraph};

const PATH_LIMIT: usize = 1_000;

/// Decodes a directions JSON payload, merges its alternatives and
/// prints the labelled network with every path between the endpoints.
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/fixtures/alternatives.json".to_string());
    let payload = fs::read_to_string(&path)?;

    let alternatives = decode_alternatives(&payload)?;
    let graph = RouteGraph::build(&alternatives);
    let names = graph.labels();

    println!("{graph:?}");
    for (node, label) in &names {
        println!("  {label:>3}  {node:?}");
    }

    let Some((source, target)) = graph.query_endpoints() else {
        println!("No routable alternatives in {path}");
        return Ok(());
    };

    println!("\nSimple paths {source:?} -> {target:?}:");
    let paths = graph.all_paths_bounded(source, target, &names, PATH_LIMIT)?;
    for path in &paths {
        println!("  {}  ({})", path.rendered, format_distance(path.weight));
    }

    if let Some(best) = pick_minimum(&paths) {
        println!(
            "\nMinimum:  {}  ({})",
            best.rendered,
            format_distance(best.weight)
        );
    }

    if let Some(shortest) = graph.shortest_path(source, target, &names) {
        let totals = graph.path_totals(&shortest.nodes);
        println!(
            "Shortest: {}  ({}, {})",
            shortest.rendered,
            format_distance(totals.distance),
            format_duration(totals.duration)
        );
    }

    Ok(())
}
