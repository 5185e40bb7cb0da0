//! Graph algorithm implementations
//!
//! Contains concrete implementations of the route queries:
//! - `dijkstra`: minimum-weight route, including shortest cycles
//! - `routes`: bounded enumeration of walks between two nodes
//! - `shared`: common utilities used by multiple algorithms

pub mod dijkstra;
pub mod routes;
pub mod shared;

pub use dijkstra::shortest_path;
pub use routes::{
    all_routes_max_stops, all_routes_num_stops, count_routes_max_distance, enumerate_routes,
    ZERO_WEIGHT_DEPTH_CAP,
};
