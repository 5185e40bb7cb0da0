//! Route graph and queries
//!
//! Provides the graph model and the operations callers run against it:
//! - route distance for an explicit label sequence
//! - Dijkstra shortest path (with cycle queries when start equals end)
//! - bounded route enumeration by stop count or total weight
//! - parsing of the `AB5, BC4` edge-list format and `A-B-C` routes

pub mod algos;
pub mod distance;
pub mod model;
pub mod parse;
pub mod types;

pub use algos::{
    all_routes_max_stops, all_routes_num_stops, count_routes_max_distance, enumerate_routes,
    shortest_path, ZERO_WEIGHT_DEPTH_CAP,
};
pub use distance::route_distance;
pub use model::{Edge, Graph, GraphBuilder, Node};
pub use parse::{load_edge_list, parse_edge_list, Route};
pub use types::{
    join_labels, EnumerateOptions, Label, PathResult, RouteBound, RouteMode, RouteResult,
    RouteSet, Weight, ROUTE_SEPARATOR,
};
