//! Trains Core Library
//!
//! Graph model and route algorithms for the trains route query tool:
//! route distances, shortest paths and bounded route enumeration over a
//! small weighted directed graph with single-character node labels.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod service;

pub use error::{Result, TrainsError};
pub use graph::{Graph, GraphBuilder, Label, RouteResult};
pub use service::RouteService;
