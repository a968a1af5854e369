use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::{hash_map::Entry, HashMap};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

#[derive(Copy, Clone)]
struct State {
    cost: f64,
    node: NodeIndex,
}

// Min-heap by cost (reversed from standard Rust BinaryHeap). Ties fall
// back to the vertex index so repeated runs over the same graph pop in
// the same order.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.index().cmp(&self.node.index()))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

/// A minimum-cost path as the ordered edges walked from source to
/// target.
#[derive(Debug, Clone, PartialEq)]
pub struct TracedPath {
    pub edges: Vec<EdgeIndex>,
    pub total_cost: f64,
}

/// Dijkstra's algorithm over a directed graph with non-negative edge
/// costs. Returns the cheapest path from `start` to `target`, or `None`
/// when the target is unreachable; `start == target` yields the empty
/// path of cost zero. Read-only: the graph is never mutated, so the
/// search may run any number of times against the same graph.
pub fn dijkstra_path<N, E>(
    graph: &DiGraph<N, E>,
    start: NodeIndex,
    target: NodeIndex,
    mut edge_cost: impl FnMut(&E) -> f64,
) -> Option<TracedPath> {
    let mut distances: HashMap<NodeIndex, f64> = HashMap::new();
    let mut predecessors: HashMap<NodeIndex, (NodeIndex, EdgeIndex)> = HashMap::new();
    let mut heap = BinaryHeap::new();

    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        if node == target {
            break;
        }

        // Skip if we've found a better path
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        for edge in graph.edges(node) {
            let next = edge.target();
            let next_cost = cost + edge_cost(edge.weight());

            match distances.entry(next) {
                Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                    predecessors.insert(next, (node, edge.id()));
                }
                Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                        predecessors.insert(next, (node, edge.id()));
                    }
                }
            }
        }
    }

    let total_cost = *distances.get(&target)?;

    // Follow predecessors backward from target to start.
    let mut edges = Vec::new();
    let mut current = target;
    while current != start {
        let &(previous, edge) = predecessors.get(&current)?;
        edges.push(edge);
        current = previous;
    }
    edges.reverse();

    Some(TracedPath { edges, total_cost })
}
