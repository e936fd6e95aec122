//! Dijkstra's shortest path on top of the queue's key updates
//!
//! A worked consumer of [`PQueue`]: the open set is a min-queue of node
//! indices keyed by tentative cost, and the relaxation step is
//! [`update_key`](PQueue::update_key): when a cheaper route to an
//! already-open node appears, its queue entry is re-keyed in place instead
//! of being re-inserted.
//!
//! Only lightweight indices go into the queue; node states and their
//! bookkeeping (cost, parent link, live handle) live in a side table, with
//! an `FxHashMap` deduplicating states.
//!
//! # Example
//!
//! ```
//! use indexed_pqueue::pathfinding::{dijkstra, SearchNode};
//!
//! // Count up to the goal, one unit of cost per step.
//! #[derive(Clone, PartialEq, Eq, Hash)]
//! struct Counter { value: u32, goal: u32 }
//!
//! impl SearchNode for Counter {
//!     type Cost = u32;
//!
//!     fn successors(&self) -> Vec<(Self, u32)> {
//!         vec![(Counter { value: self.value + 1, goal: self.goal }, 1)]
//!     }
//!
//!     fn is_goal(&self) -> bool {
//!         self.value == self.goal
//!     }
//! }
//!
//! let start = Counter { value: 0, goal: 4 };
//! let (path, cost) = dijkstra(&start).unwrap();
//! assert_eq!(cost, 4);
//! assert_eq!(path.len(), 5);
//! ```

use std::hash::Hash;
use std::ops::Add;

use rustc_hash::FxHashMap;

use crate::pqueue::PQueue;
use crate::store::{EntryId, Mode};

/// A node in a search graph.
///
/// The node carries all context it needs: generating successors with their
/// edge costs, and deciding whether it is a goal state. Edge costs must be
/// non-negative for the search to be correct.
pub trait SearchNode: Clone + Eq + Hash {
    /// Edge-weight type; `Default::default()` is the zero cost.
    type Cost: Ord + Copy + Add<Output = Self::Cost> + Default;

    /// All neighbors reachable from this node, with their edge costs.
    fn successors(&self) -> Vec<(Self, Self::Cost)>;

    /// True if this node terminates the search.
    fn is_goal(&self) -> bool;
}

/// Per-node bookkeeping for the search.
struct Visit<N: SearchNode> {
    node: N,
    cost: N::Cost,
    came_from: Option<usize>,
    /// Live queue handle while the node is open; cleared when settled.
    handle: Option<EntryId>,
}

/// Runs Dijkstra's algorithm from `start` until a goal node is reached.
///
/// Returns the full path (start and goal inclusive) and its total cost, or
/// `None` if no goal is reachable.
pub fn dijkstra<N: SearchNode>(start: &N) -> Option<(Vec<N>, N::Cost)> {
    let mut open: PQueue<usize, N::Cost> = PQueue::new(Mode::Min);
    let mut visits: Vec<Visit<N>> = Vec::new();
    let mut seen: FxHashMap<N, usize> = FxHashMap::default();

    let handle = open.insert(N::Cost::default(), 0).ok()?;
    visits.push(Visit {
        node: start.clone(),
        cost: N::Cost::default(),
        came_from: None,
        handle: Some(handle),
    });
    seen.insert(start.clone(), 0);

    while let Ok((cost, current)) = open.extract_top() {
        visits[current].handle = None;
        let node = visits[current].node.clone();

        if node.is_goal() {
            return Some((reconstruct(&visits, current), cost));
        }

        for (neighbor, edge) in node.successors() {
            let tentative = cost + edge;

            match seen.get(&neighbor) {
                None => {
                    let idx = visits.len();
                    let handle = open.insert(tentative, idx).ok()?;
                    visits.push(Visit {
                        node: neighbor.clone(),
                        cost: tentative,
                        came_from: Some(current),
                        handle: Some(handle),
                    });
                    seen.insert(neighbor, idx);
                }
                Some(&idx) => {
                    if tentative < visits[idx].cost {
                        visits[idx].cost = tentative;
                        visits[idx].came_from = Some(current);
                        if let Some(handle) = visits[idx].handle {
                            // With non-negative edges a settled node never
                            // improves, so the handle is always live here.
                            let _ = open.update_key(handle, tentative);
                        }
                    }
                }
            }
        }
    }

    None
}

fn reconstruct<N: SearchNode>(visits: &[Visit<N>], mut current: usize) -> Vec<N> {
    let mut path = vec![visits[current].node.clone()];
    while let Some(prev) = visits[current].came_from {
        current = prev;
        path.push(visits[current].node.clone());
    }
    path.reverse();
    path
}
