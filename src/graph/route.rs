use log::debug;
use serde::Serialize;

use crate::error::GraphError;
use crate::graph::graph::{RouteGraph, Weight};

/// Outcome of a route query. `NoRoute` is an answer, not a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteDistance {
    Distance { total: Weight },
    NoRoute,
}

impl RouteDistance {
    pub fn total(&self) -> Option<Weight> {
        match self {
            RouteDistance::Distance { total } => Some(*total),
            RouteDistance::NoRoute => None,
        }
    }

    pub fn is_no_route(&self) -> bool {
        matches!(self, RouteDistance::NoRoute)
    }
}

/// Sums the edge weights along `route`, hop by hop.
///
/// Routes of fewer than two labels have length 0. Every label must be known
/// to the graph, otherwise the lookup error is returned before any hop is
/// inspected. The first missing hop ends the walk with `NoRoute`; a total
/// outside the `i64` range is `DistanceOverflow`.
pub fn route_distance<S: AsRef<str>>(
    graph: &RouteGraph,
    route: &[S],
) -> Result<RouteDistance, GraphError> {
    if route.len() < 2 {
        return Ok(RouteDistance::Distance { total: 0 });
    }

    let ids = route
        .iter()
        .map(|label| graph.index_of(label.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut total: Weight = 0;
    for hop in ids.windows(2) {
        let (from, to) = (hop[0], hop[1]);
        match graph.weight(from, to) {
            Some(weight) => {
                total = total
                    .checked_add(weight)
                    .ok_or(GraphError::DistanceOverflow)?;
            }
            None => {
                debug!("no edge {from} -> {to}, route has no distance");
                return Ok(RouteDistance::NoRoute);
            }
        }
    }

    Ok(RouteDistance::Distance { total })
}

impl RouteGraph {
    pub fn route_distance<S: AsRef<str>>(&self, route: &[S]) -> Result<RouteDistance, GraphError> {
        route_distance(self, route)
    }
}
