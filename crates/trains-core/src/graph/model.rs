//! Immutable weighted digraph keyed by single-character labels

use std::collections::{HashMap, HashSet};

use crate::error::{Result, TrainsError};
use crate::graph::types::{Label, Weight};

/// Outgoing connection from a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: Label,
    pub weight: Weight,
}

/// A node and its outgoing edges, in definition order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    label: Label,
    edges: Vec<Edge>,
    by_target: HashMap<Label, usize>,
}

impl Node {
    pub fn new(label: Label) -> Self {
        Self {
            label,
            edges: Vec::new(),
            by_target: HashMap::new(),
        }
    }

    /// Append an edge; a second edge to the same target is rejected
    pub fn add_edge(&mut self, target: Label, weight: Weight) -> Result<()> {
        if self.by_target.contains_key(&target) {
            return Err(TrainsError::DuplicateEdge {
                from: self.label,
                to: target,
            });
        }
        self.by_target.insert(target, self.edges.len());
        self.edges.push(Edge { target, weight });
        Ok(())
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_to(&self, target: Label) -> Option<&Edge> {
        self.by_target.get(&target).map(|&i| &self.edges[i])
    }

    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }
}

/// Read-only graph. Build it with [`GraphBuilder`] or [`Graph::from_nodes`].
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: HashMap<Label, Node>,
    order: Vec<Label>,
}

impl Graph {
    /// Assemble a graph from fully-formed nodes.
    ///
    /// Fails if a label appears twice or an edge targets a label that is not
    /// one of the given nodes.
    pub fn from_nodes(nodes: impl IntoIterator<Item = Node>) -> Result<Self> {
        let mut graph = Graph::default();
        for node in nodes {
            let label = node.label();
            if graph.nodes.contains_key(&label) {
                return Err(TrainsError::DuplicateNode { label });
            }
            graph.order.push(label);
            graph.nodes.insert(label, node);
        }

        for label in &graph.order {
            for edge in graph.nodes[label].edges() {
                if !graph.nodes.contains_key(&edge.target) {
                    return Err(TrainsError::UnresolvedTarget {
                        from: *label,
                        to: edge.target,
                    });
                }
            }
        }

        Ok(graph)
    }

    pub fn node(&self, label: Label) -> Option<&Node> {
        self.nodes.get(&label)
    }

    pub fn contains(&self, label: Label) -> bool {
        self.nodes.contains_key(&label)
    }

    /// Direct edge between two nodes, if any
    pub fn edge(&self, from: Label, to: Label) -> Option<&Edge> {
        self.node(from).and_then(|node| node.edge_to(to))
    }

    /// Nodes in the order they were first defined
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.order.iter().filter_map(|label| self.nodes.get(label))
    }

    /// All labels, sorted
    pub fn labels(&self) -> Vec<Label> {
        let mut labels = self.order.clone();
        labels.sort_unstable();
        labels
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Node::out_degree).sum()
    }
}

/// Incremental graph construction.
///
/// Every edge target is registered as a node, so a built graph never holds
/// an unresolved reference.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: HashMap<Label, Node>,
    order: Vec<Label>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an edge; definitions for the same source merge into one node
    pub fn add_edge(&mut self, from: Label, to: Label, weight: Weight) -> Result<&mut Self> {
        self.entry(from).add_edge(to, weight)?;
        self.entry(to);
        Ok(self)
    }

    pub fn build(self) -> Graph {
        Graph {
            nodes: self.nodes,
            order: self.order,
        }
    }

    fn entry(&mut self, label: Label) -> &mut Node {
        if !self.nodes.contains_key(&label) {
            self.order.push(label);
        }
        self.nodes.entry(label).or_insert_with(|| Node::new(label))
    }
}

/// Labels reachable from `start` by at least one edge
pub fn reachable_from(graph: &Graph, start: Label) -> HashSet<Label> {
    let mut seen = HashSet::new();
    let mut stack = vec![start];
    while let Some(label) = stack.pop() {
        if let Some(node) = graph.node(label) {
            for edge in node.edges() {
                if seen.insert(edge.target) {
                    stack.push(edge.target);
                }
            }
        }
    }
    seen
}

/// Whether a cycle made only of zero-weight edges can be reached from
/// `start`. Walks bounded by total weight are infinite exactly then.
pub fn zero_weight_cycle_reachable(graph: &Graph, start: Label) -> bool {
    let mut scope = reachable_from(graph, start);
    scope.insert(start);

    let mut on_stack = HashSet::new();
    let mut done = HashSet::new();
    scope
        .iter()
        .any(|&label| zero_weight_cycle_from(graph, label, &mut on_stack, &mut done))
}

fn zero_weight_cycle_from(
    graph: &Graph,
    label: Label,
    on_stack: &mut HashSet<Label>,
    done: &mut HashSet<Label>,
) -> bool {
    if done.contains(&label) {
        return false;
    }
    if !on_stack.insert(label) {
        return true;
    }
    let found = graph.node(label).is_some_and(|node| {
        node.edges()
            .iter()
            .filter(|edge| edge.weight == 0)
            .any(|edge| zero_weight_cycle_from(graph, edge.target, on_stack, done))
    });
    on_stack.remove(&label);
    done.insert(label);
    found
}
