use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Node identifier: a single character, upper-cased on input
pub type Label = char;

/// Edge weight; sums saturate at `u32::MAX`
pub type Weight = u32;

/// Separator used when rendering a route as text (`A-B-C`)
pub const ROUTE_SEPARATOR: char = '-';

/// Render a label sequence as `A-B-C`
pub fn join_labels(labels: &[Label]) -> String {
    let mut out = String::with_capacity(labels.len() * 2);
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            out.push(ROUTE_SEPARATOR);
        }
        out.push(*label);
    }
    out
}

fn serialize_path<S: Serializer>(path: &[Label], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&join_labels(path))
}

/// A route found by a query.
///
/// `value` is the total weight for distance and shortest-path queries, and
/// the number of stops (edges) for enumeration queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteResult {
    #[serde(serialize_with = "serialize_path")]
    pub path: Vec<Label>,
    pub value: u32,
}

impl RouteResult {
    pub fn new(path: Vec<Label>, value: u32) -> Self {
        Self { path, value }
    }

    /// Number of edges along the route
    pub fn stops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn path_string(&self) -> String {
        join_labels(&self.path)
    }
}

impl fmt::Display for RouteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path_string())
    }
}

/// Which bound an enumeration query applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteMode {
    /// At most N stops
    MaxStops,
    /// Exactly N stops
    ExactStops,
    /// Total weight strictly below N
    MaxDistance,
}

impl RouteMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteMode::MaxStops => "max-stops",
            RouteMode::ExactStops => "exact-stops",
            RouteMode::MaxDistance => "max-distance",
        }
    }
}

impl fmt::Display for RouteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RouteMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "max-stops" => Ok(RouteMode::MaxStops),
            "exact-stops" | "num-stops" => Ok(RouteMode::ExactStops),
            "max-distance" => Ok(RouteMode::MaxDistance),
            other => Err(format!(
                "unknown route mode '{}' (expected: max-stops, exact-stops, max-distance)",
                other
            )),
        }
    }
}

/// A mode together with its limit `N`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteBound {
    pub mode: RouteMode,
    pub limit: u32,
}

impl RouteBound {
    pub fn max_stops(limit: u32) -> Self {
        Self {
            mode: RouteMode::MaxStops,
            limit,
        }
    }

    pub fn exact_stops(limit: u32) -> Self {
        Self {
            mode: RouteMode::ExactStops,
            limit,
        }
    }

    pub fn max_distance(limit: u32) -> Self {
        Self {
            mode: RouteMode::MaxDistance,
            limit,
        }
    }

    /// True when a walk with this many stops and this weight can never be
    /// extended into an acceptable route.
    pub fn exceeded(&self, stops: u32, weight: Weight) -> bool {
        match self.mode {
            RouteMode::MaxStops | RouteMode::ExactStops => stops > self.limit,
            RouteMode::MaxDistance => weight >= self.limit,
        }
    }

    /// Acceptance test for a walk that ends at the destination
    pub fn accepts(&self, stops: u32, weight: Weight) -> bool {
        match self.mode {
            RouteMode::MaxStops => stops <= self.limit,
            RouteMode::ExactStops => stops == self.limit,
            RouteMode::MaxDistance => weight < self.limit,
        }
    }
}

/// Limits for route enumeration
#[derive(Debug, Clone, Default)]
pub struct EnumerateOptions {
    /// Stop after recording this many routes
    pub max_routes: Option<usize>,
    /// Never extend a walk beyond this many stops
    pub max_depth: Option<usize>,
    /// Cooperative cancellation flag, checked between search steps
    pub cancel: Option<Arc<AtomicBool>>,
}

impl EnumerateOptions {
    pub fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }
}

/// Complete enumeration result
#[derive(Debug, Clone, Serialize)]
pub struct RouteSet {
    pub from: Label,
    pub to: Label,
    pub mode: RouteMode,
    pub limit: u32,
    pub count: usize,
    pub truncated: bool,
    pub truncation_reason: Option<String>,
    pub routes: Vec<RouteResult>,
}

/// Outcome of a distance or shortest-path query
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub route: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<Weight>,
}

impl PathResult {
    pub fn found(route: impl Into<String>, path: &[Label], distance: Weight) -> Self {
        Self {
            route: route.into(),
            found: true,
            path: Some(join_labels(path)),
            distance: Some(distance),
        }
    }

    pub fn not_found(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            found: false,
            path: None,
            distance: None,
        }
    }
}
