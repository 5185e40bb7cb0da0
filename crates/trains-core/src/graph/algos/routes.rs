//! Bounded enumeration of walks between two nodes
//!
//! A depth-first search extends the current walk one edge at a time, prunes
//! as soon as the bound is exceeded, records walks that end at the
//! destination and satisfy the bound, then backtracks. Nodes may be revisited,
//! so cyclic graphs yield walks of every length up to the bound.

use std::collections::HashSet;
use std::time::Instant;

use crate::error::{Result, TrainsError};
use crate::graph::algos::shared::set_truncation_if_unset;
use crate::graph::model::{reachable_from, zero_weight_cycle_reachable, Graph};
use crate::graph::types::{
    join_labels, EnumerateOptions, Label, RouteBound, RouteMode, RouteResult, RouteSet, Weight,
};

/// Depth cap applied to distance queries that can reach a cycle of
/// zero-weight edges when no explicit `max_depth` is given
pub const ZERO_WEIGHT_DEPTH_CAP: usize = 64;

/// Per-query search state
struct RouteSearch<'a> {
    graph: &'a Graph,
    end: Label,
    bound: RouteBound,
    opts: &'a EnumerateOptions,
    max_depth: Option<usize>,
    path: Vec<Label>,
    seen: HashSet<Vec<Label>>,
    routes: Vec<RouteResult>,
    truncated: bool,
    truncation_reason: Option<String>,
    interrupted: bool,
}

impl<'a> RouteSearch<'a> {
    fn new(
        graph: &'a Graph,
        start: Label,
        end: Label,
        bound: RouteBound,
        opts: &'a EnumerateOptions,
    ) -> Self {
        let max_depth = opts.max_depth.or_else(|| {
            (bound.mode == RouteMode::MaxDistance && zero_weight_cycle_reachable(graph, start))
                .then_some(ZERO_WEIGHT_DEPTH_CAP)
        });

        Self {
            graph,
            end,
            bound,
            opts,
            max_depth,
            path: vec![start],
            seen: HashSet::new(),
            routes: Vec::new(),
            truncated: false,
            truncation_reason: None,
            interrupted: false,
        }
    }

    /// Returns false once the search must stop
    fn check_limits(&mut self) -> bool {
        if self.interrupted {
            return false;
        }
        if self.opts.is_cancelled() {
            self.interrupted = true;
            return false;
        }
        if let Some(max) = self.opts.max_routes {
            if self.routes.len() >= max {
                set_truncation_if_unset(
                    &mut self.truncated,
                    &mut self.truncation_reason,
                    "max_routes",
                );
                return false;
            }
        }
        true
    }

    fn record(&mut self, stops: u32) {
        if self.seen.contains(&self.path) {
            return;
        }
        self.seen.insert(self.path.clone());
        self.routes.push(RouteResult::new(self.path.clone(), stops));
        tracing::trace!(route = %join_labels(&self.path), stops, "record");
    }

    fn explore(&mut self, stops: u32, weight: Weight) {
        let graph = self.graph;
        let Some(node) = self.path.last().and_then(|&label| graph.node(label)) else {
            return;
        };

        for edge in node.edges() {
            if !self.check_limits() {
                return;
            }

            let next_stops = stops.saturating_add(1);
            let next_weight = weight.saturating_add(edge.weight);
            if self.bound.exceeded(next_stops, next_weight) {
                continue;
            }
            if let Some(max) = self.max_depth {
                if next_stops as usize > max {
                    set_truncation_if_unset(
                        &mut self.truncated,
                        &mut self.truncation_reason,
                        "max_depth",
                    );
                    continue;
                }
            }

            self.path.push(edge.target);
            if edge.target == self.end && self.bound.accepts(next_stops, next_weight) {
                self.record(next_stops);
            }
            self.explore(next_stops, next_weight);
            self.path.pop();
        }
    }
}

fn run_search(
    graph: &Graph,
    start: Label,
    end: Label,
    bound: RouteBound,
    opts: &EnumerateOptions,
) -> (RouteSet, bool) {
    let mut search = RouteSearch::new(graph, start, end, bound, opts);

    if graph.contains(end) && reachable_from(graph, start).contains(&end) {
        search.explore(0, 0);
    }

    let interrupted = search.interrupted;
    let set = RouteSet {
        from: start,
        to: end,
        mode: bound.mode,
        limit: bound.limit,
        count: search.routes.len(),
        truncated: search.truncated,
        truncation_reason: search.truncation_reason,
        routes: search.routes,
    };
    (set, interrupted)
}

/// Enumerate every walk from `start` to `end` within `bound`.
///
/// Unknown labels give an empty set. Fails only with
/// [`TrainsError::Interrupted`] when the cancellation flag in `opts` is set.
#[tracing::instrument(skip(graph, opts), fields(start = %start, end = %end, mode = %bound.mode, limit = bound.limit, max_routes = ?opts.max_routes, max_depth = ?opts.max_depth))]
pub fn enumerate_routes(
    graph: &Graph,
    start: Label,
    end: Label,
    bound: RouteBound,
    opts: &EnumerateOptions,
) -> Result<RouteSet> {
    let started = Instant::now();
    let (set, interrupted) = run_search(graph, start, end, bound, opts);
    crate::trace_time!(started, "route_search", routes = set.count);
    if interrupted {
        tracing::info!(found = set.count, "route search interrupted");
        return Err(TrainsError::Interrupted);
    }

    tracing::debug!(
        count = set.count,
        truncated = set.truncated,
        "enumerate_routes"
    );
    Ok(set)
}

/// All routes with at most `max_stops` edges; `value` is the stop count
pub fn all_routes_max_stops(
    graph: &Graph,
    start: Label,
    end: Label,
    max_stops: u32,
) -> Vec<RouteResult> {
    let opts = EnumerateOptions::default();
    run_search(graph, start, end, RouteBound::max_stops(max_stops), &opts)
        .0
        .routes
}

/// All routes with exactly `num_stops` edges; `value` is the stop count
pub fn all_routes_num_stops(
    graph: &Graph,
    start: Label,
    end: Label,
    num_stops: u32,
) -> Vec<RouteResult> {
    let opts = EnumerateOptions::default();
    run_search(graph, start, end, RouteBound::exact_stops(num_stops), &opts)
        .0
        .routes
}

/// Number of routes whose total weight is strictly below `max_distance`
pub fn count_routes_max_distance(
    graph: &Graph,
    start: Label,
    end: Label,
    max_distance: u32,
) -> usize {
    let opts = EnumerateOptions::default();
    run_search(
        graph,
        start,
        end,
        RouteBound::max_distance(max_distance),
        &opts,
    )
    .0
    .count
}
