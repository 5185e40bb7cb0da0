use crate::graph::model::Graph;
use crate::graph::types::{Label, Weight};

/// Total weight of an explicit route.
///
/// Returns `None` when the route has fewer than two labels, starts at an
/// unknown node, or any consecutive pair has no direct edge.
#[tracing::instrument(skip(graph, labels), fields(len = labels.len()))]
pub fn route_distance(graph: &Graph, labels: &[Label]) -> Option<Weight> {
    let (first, rest) = labels.split_first()?;
    if rest.is_empty() {
        return None;
    }

    let mut current = graph.node(*first)?;
    let mut total: Weight = 0;
    for &label in rest {
        let edge = current.edge_to(label)?;
        total = total.saturating_add(edge.weight);
        current = graph.node(label)?;
    }

    tracing::debug!(total, "route_distance");
    Some(total)
}
