use indexmap::{IndexMap, IndexSet};
use std::collections::VecDeque;

use crate::shared::ZoneId;

/// Ordered set of zones. Iteration follows discovery order.
pub type ZoneSet = IndexSet<ZoneId>;

/// Undirected adjacency between fare zones.
///
/// Distances are hop counts. Adjacency lists keep edge insertion order and
/// every traversal is a FIFO breadth-first search, so ties between equal
/// length paths always resolve the same way for the same edge list.
#[derive(Debug, Clone, Default)]
pub struct ZoneGraph {
    edges: IndexMap<ZoneId, Vec<ZoneId>>,
}

impl ZoneGraph {
    pub fn new() -> Self {
        Default::default()
    }

    /// Connects both zones in both directions.
    /// Repeated calls add duplicate adjacency entries; traversals are not
    /// affected by them but neighbor counts are.
    pub fn add_edge(&mut self, first: impl Into<ZoneId>, second: impl Into<ZoneId>) {
        let first = first.into();
        let second = second.into();
        self.edges
            .entry(first.clone())
            .or_default()
            .push(second.clone());
        self.edges.entry(second).or_default().push(first);
    }

    /// Adjacent zones in insertion order. Unknown zones have none.
    pub fn neighbors(&self, zone: &str) -> &[ZoneId] {
        self.edges.get(zone).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, zone: &str) -> bool {
        self.edges.contains_key(zone)
    }

    /// Every zone that has at least one edge, in insertion order.
    pub fn zones(&self) -> impl Iterator<Item = &ZoneId> {
        self.edges.keys()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of hops on the shortest path, `None` when the zones are not connected.
    pub fn min_hops(&self, start: &ZoneId, finish: &ZoneId) -> Option<usize> {
        let mut visited: IndexSet<&ZoneId> = IndexSet::from([start]);
        let mut queue: VecDeque<(&ZoneId, usize)> = VecDeque::from([(start, 0)]);
        while let Some((zone, distance)) = queue.pop_front() {
            if zone == finish {
                return Some(distance);
            }
            for neighbor in self.neighbors(zone) {
                if visited.insert(neighbor) {
                    queue.push_back((neighbor, distance + 1));
                }
            }
        }
        None
    }

    /// All zones a ticket of `rings` rings bought in `start` reaches:
    /// the start zone plus everything up to `rings - 1` hops away.
    /// The start zone is always part of the result, even when it is not in the graph.
    pub fn zones_within_rings(&self, rings: usize, start: &ZoneId) -> ZoneSet {
        let mut visited = ZoneSet::from([start.clone()]);
        let mut frontier = vec![start];
        for _ in 1..rings {
            let mut next = Vec::new();
            for zone in frontier {
                for neighbor in self.neighbors(zone) {
                    if visited.insert(neighbor.clone()) {
                        next.push(neighbor);
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            frontier = next;
        }
        visited
    }

    /// Zones along one shortest path, both ends included.
    /// Empty when no path exists.
    pub fn path_between(&self, start: &ZoneId, end: &ZoneId) -> Vec<ZoneId> {
        // zone -> the zone it was discovered from
        let mut parents: IndexMap<&ZoneId, Option<&ZoneId>> = IndexMap::from([(start, None)]);
        let mut queue: VecDeque<&ZoneId> = VecDeque::from([start]);
        while let Some(zone) = queue.pop_front() {
            if zone == end {
                let mut path = vec![zone.clone()];
                let mut current = parents.get(zone).copied().flatten();
                while let Some(parent) = current {
                    path.push(parent.clone());
                    current = parents.get(parent).copied().flatten();
                }
                path.reverse();
                return path;
            }
            for neighbor in self.neighbors(zone) {
                if !parents.contains_key(neighbor) {
                    parents.insert(neighbor, Some(zone));
                    queue.push_back(neighbor);
                }
            }
        }
        Vec::new()
    }
}

impl<A, B> FromIterator<(A, B)> for ZoneGraph
where
    A: Into<ZoneId>,
    B: Into<ZoneId>,
{
    fn from_iter<T: IntoIterator<Item = (A, B)>>(iter: T) -> Self {
        let mut graph = Self::new();
        iter.into_iter()
            .for_each(|(first, second)| graph.add_edge(first, second));
        graph
    }
}
