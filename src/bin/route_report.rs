use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use route_matrix::input::{parse_route, read_triplets_from_file};
use route_matrix::{build_graph, RouteDistance, RouteGraph};
use serde::Serialize;

/// Builds a route graph from an input file and reports route distances
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file containing edge tokens such as `AB5, BC4`
    input: PathBuf,
    /// Route to evaluate, e.g. `A-B-C`; may be repeated
    #[arg(short, long = "route")]
    routes: Vec<String>,
    /// Print results as JSON
    #[arg(long)]
    json: bool,
    /// Skip the raw input and adjacency listing
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum RouteOutcome {
    Distance { total: i64 },
    NoRoute,
    Error { message: String },
}

#[derive(Debug, Serialize, PartialEq)]
struct RouteReport {
    number: usize,
    route: Vec<String>,
    #[serde(flatten)]
    outcome: RouteOutcome,
}

impl RouteReport {
    fn line(&self) -> String {
        match &self.outcome {
            RouteOutcome::Distance { total } => format!("Output #{}: {total}", self.number),
            RouteOutcome::NoRoute => format!("Output #{}: NO SUCH ROUTE", self.number),
            RouteOutcome::Error { message } => format!("Output #{}: {message}", self.number),
        }
    }
}

/// Evaluates each route independently; a failing route does not stop the
/// others.
fn evaluate_routes(graph: &RouteGraph, specs: &[String]) -> Vec<RouteReport> {
    specs
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let route = parse_route(spec);
            let outcome = match graph.route_distance(&route) {
                Ok(RouteDistance::Distance { total }) => RouteOutcome::Distance { total },
                Ok(RouteDistance::NoRoute) => RouteOutcome::NoRoute,
                Err(err) => {
                    warn!("route #{} ({spec}) failed: {err}", i + 1);
                    RouteOutcome::Error {
                        message: err.to_string(),
                    }
                }
            };
            RouteReport {
                number: i + 1,
                route,
                outcome,
            }
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let (raw, triplets) = read_triplets_from_file(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let graph = build_graph(&triplets);
    info!(
        "Loaded {} edge tokens from {}",
        triplets.len(),
        args.input.display()
    );

    if !args.quiet && !args.json {
        println!("Raw input: '{raw}'");
        print!("Adjacency Matrix: {}", graph.render()?);
    }

    let reports = evaluate_routes(&graph, &args.routes);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in &reports {
        println!("{}", report.line());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use route_matrix::input::parse_triplets;

    fn routes(specs: &[&str]) -> Vec<String> {
        specs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn unknown_vertex_fails_only_its_own_route() {
        let graph = build_graph(&parse_triplets("AB5, BC4, AE7"));
        let reports = evaluate_routes(&graph, &routes(&["A-B-C", "A-F", "A-E-B"]));

        let lines: Vec<String> = reports.iter().map(RouteReport::line).collect();
        assert_eq!(
            lines,
            vec![
                "Output #1: 9",
                "Output #2: vertex F does not exist",
                "Output #3: NO SUCH ROUTE",
            ]
        );
    }

    #[test]
    fn json_entries_carry_outcome_kind() {
        let graph = build_graph(&parse_triplets("AB5"));
        let reports = evaluate_routes(&graph, &routes(&["A-B", "B-A", "Q"]));
        let json = serde_json::to_value(&reports).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"number": 1, "route": ["A", "B"], "kind": "distance", "total": 5},
                {"number": 2, "route": ["B", "A"], "kind": "no_route"},
                {"number": 3, "route": ["Q"], "kind": "distance", "total": 0}
            ])
        );
    }
}
