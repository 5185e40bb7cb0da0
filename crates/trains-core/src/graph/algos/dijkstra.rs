use crate::graph::model::Graph;
use crate::graph::types::{Label, RouteResult, Weight};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Frontier entry, ordered by distance then label so the heap pops
/// deterministically
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub label: Label,
    pub distance: Weight,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.label.cmp(&other.label))
    }
}

/// State tracked during a single shortest-path query
struct DijkstraState {
    frontier: BinaryHeap<Reverse<HeapEntry>>,
    settled: HashSet<Label>,
    dist: HashMap<Label, Weight>,
    predecessor: HashMap<Label, Label>,
    /// Cycle queries only: best weight found back into the start node and
    /// the node that closes that cycle
    closing: Option<(Weight, Label)>,
}

impl DijkstraState {
    fn new(start: Label) -> Self {
        let mut state = Self {
            frontier: BinaryHeap::new(),
            settled: HashSet::new(),
            dist: HashMap::new(),
            predecessor: HashMap::new(),
            closing: None,
        };
        state.dist.insert(start, 0);
        state.frontier.push(Reverse(HeapEntry {
            label: start,
            distance: 0,
        }));
        state
    }

    /// Record `candidate` for `target` if it beats the best known distance
    fn relax(&mut self, from: Label, target: Label, candidate: Weight) {
        if self.settled.contains(&target) {
            return;
        }
        let improves = self.dist.get(&target).map_or(true, |&d| candidate < d);
        if improves {
            self.dist.insert(target, candidate);
            self.predecessor.insert(target, from);
            self.frontier.push(Reverse(HeapEntry {
                label: target,
                distance: candidate,
            }));
        }
    }

    fn close_cycle(&mut self, from: Label, candidate: Weight) {
        if self.closing.map_or(true, |(best, _)| candidate < best) {
            self.closing = Some((candidate, from));
        }
    }

    /// Walk predecessors back from `last` to `start`, appending to `path`
    fn trace_back(&self, start: Label, last: Label, path: &mut Vec<Label>) -> Option<()> {
        let mut current = last;
        path.push(current);
        while current != start {
            current = *self.predecessor.get(&current)?;
            path.push(current);
            if path.len() > self.settled.len() + 2 {
                return None;
            }
        }
        Some(())
    }
}

/// Minimum-weight route from `start` to `end`.
///
/// When `start == end` the answer is the lightest cycle through `start` with
/// at least one edge; the zero-length path never counts. Unknown labels and
/// unreachable destinations give `None`.
#[tracing::instrument(skip(graph), fields(start = %start, end = %end))]
pub fn shortest_path(graph: &Graph, start: Label, end: Label) -> Option<RouteResult> {
    if !graph.contains(start) || !graph.contains(end) {
        tracing::debug!("unknown label");
        return None;
    }

    let cycle = start == end;
    let mut state = DijkstraState::new(start);

    while let Some(Reverse(HeapEntry { label, distance })) = state.frontier.pop() {
        if !state.settled.insert(label) {
            continue;
        }
        let Some(node) = graph.node(label) else {
            continue;
        };
        tracing::trace!(label = %label, distance, "settle");

        for edge in node.edges() {
            let candidate = distance.saturating_add(edge.weight);
            if cycle && edge.target == start {
                state.close_cycle(label, candidate);
            } else {
                state.relax(label, edge.target, candidate);
            }
        }
    }

    let result = if cycle {
        let (weight, last) = state.closing?;
        let mut path = vec![start];
        state.trace_back(start, last, &mut path)?;
        path.reverse();
        RouteResult::new(path, weight)
    } else {
        let weight = *state.dist.get(&end)?;
        let mut path = Vec::new();
        state.trace_back(start, end, &mut path)?;
        path.reverse();
        RouteResult::new(path, weight)
    };

    tracing::debug!(path = %result, weight = result.value, "shortest_path");
    Some(result)
}
