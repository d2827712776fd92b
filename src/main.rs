use std::borrow::Cow;

use lambda_runtime::{service_fn, Error, LambdaEvent};
use log::info;
use once_cell::sync::Lazy;
use route_matrix::input::parse_triplets;
use route_matrix::{build_graph, build_graph_with_capacity, GraphError, RouteDistance, RouteGraph};
use serde::{Deserialize, Serialize};

const SAMPLE_INPUT: &str = "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7";

static SAMPLE_GRAPH: Lazy<RouteGraph> = Lazy::new(|| build_graph(&parse_triplets(SAMPLE_INPUT)));

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum EngineRequest {
    Route {
        #[serde(default)]
        input: Option<String>,
        #[serde(default)]
        capacity: Option<i64>,
        route: Vec<String>,
    },
    Render {
        #[serde(default)]
        input: Option<String>,
        #[serde(default)]
        capacity: Option<i64>,
    },
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum EngineResponse {
    Route {
        distance: i64,
    },
    NoRoute,
    Render {
        vertices: usize,
        edges: usize,
        text: String,
    },
    Error {
        message: String,
    },
}

/// The sample graph unless the request carries its own edges.
fn select_graph(
    input: Option<&str>,
    capacity: Option<i64>,
) -> Result<Cow<'static, RouteGraph>, GraphError> {
    let Some(text) = input else {
        return Ok(Cow::Borrowed(&*SAMPLE_GRAPH));
    };
    let triplets = parse_triplets(text);
    let graph = match capacity {
        Some(declared) => build_graph_with_capacity(&triplets, declared)?,
        None => build_graph(&triplets),
    };
    Ok(Cow::Owned(graph))
}

fn respond(req: EngineRequest) -> Result<EngineResponse, GraphError> {
    match req {
        EngineRequest::Route {
            input,
            capacity,
            route,
        } => {
            let graph = select_graph(input.as_deref(), capacity)?;
            let response = match graph.route_distance(&route)? {
                RouteDistance::Distance { total } => EngineResponse::Route { distance: total },
                RouteDistance::NoRoute => EngineResponse::NoRoute,
            };
            Ok(response)
        }
        EngineRequest::Render { input, capacity } => {
            let graph = select_graph(input.as_deref(), capacity)?;
            Ok(EngineResponse::Render {
                vertices: graph.vertex_count(),
                edges: graph.edge_count(),
                text: graph.render()?,
            })
        }
    }
}

async fn handler(event: LambdaEvent<EngineRequest>) -> Result<EngineResponse, Error> {
    let req = event.payload;
    match respond(req) {
        Ok(response) => Ok(response),
        Err(err) => {
            info!("request rejected: {err}");
            Ok(EngineResponse::Error {
                message: err.to_string(),
            })
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    let func = service_fn(handler);
    lambda_runtime::run(func).await
}
