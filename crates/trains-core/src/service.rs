//! Query handle over a shared, read-only graph
//!
//! A `RouteService` is built once and cloned freely; every clone points at
//! the same graph. Each query allocates its own search state.

use std::sync::Arc;

use crate::error::Result;
use crate::graph::{
    enumerate_routes, route_distance, shortest_path, EnumerateOptions, Graph, Label, RouteBound,
    RouteMode, RouteResult, RouteSet, Weight,
};

#[derive(Debug, Clone)]
pub struct RouteService {
    graph: Arc<Graph>,
    options: EnumerateOptions,
}

impl RouteService {
    pub fn new(graph: Graph) -> Self {
        Self::from_shared(Arc::new(graph))
    }

    pub fn from_shared(graph: Arc<Graph>) -> Self {
        Self {
            graph,
            options: EnumerateOptions::default(),
        }
    }

    /// Apply enumeration limits and cancellation to later queries
    pub fn with_options(mut self, options: EnumerateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn route_distance(&self, labels: &[Label]) -> Option<Weight> {
        route_distance(&self.graph, labels)
    }

    pub fn shortest_path(&self, start: Label, end: Label) -> Option<RouteResult> {
        shortest_path(&self.graph, start, end)
    }

    /// Enumerate routes under any bound
    pub fn enumerate_routes(
        &self,
        start: Label,
        end: Label,
        mode: RouteMode,
        limit: u32,
    ) -> Result<RouteSet> {
        let bound = RouteBound { mode, limit };
        enumerate_routes(&self.graph, start, end, bound, &self.options)
    }

    /// Count routes whose total weight stays below `max_distance`
    pub fn count_routes(&self, start: Label, end: Label, max_distance: u32) -> Result<usize> {
        self.enumerate_routes(start, end, RouteMode::MaxDistance, max_distance)
            .map(|set| set.count)
    }
}
