//! Cluster selection: group settled beans into blobs and keep the largest
//!
//! Items are first ordered by distance from the origin (stable for ties).
//! Two items are linked when their planar distance is below the threshold.
//! The greedy rules seed a group with the first item and let each later item
//! join one group it touches, which can split a blob that a later item would
//! have bridged. `UnionFind` follows every link, so a group is a true
//! connected component.

use crate::configuration::config::ClusterRule;
use crate::geometry::vector::{magnitude, planar_distance};
use crate::simulation::states::{NVec3, Positioned};

/// An ordered group of mutually reachable items
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster<T> {
    pub members: Vec<T>,
}

impl<T> Cluster<T> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<T> Default for Cluster<T> {
    fn default() -> Self {
        Self { members: Vec::new() }
    }
}

/// Indices of `items` sorted by distance from the origin, ties kept in input order
fn origin_order<T: Positioned>(items: &[T]) -> Vec<usize> {
    let dist: Vec<f64> = items.iter().map(|it| magnitude(&it.position())).collect();
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| dist[a].total_cmp(&dist[b]));
    order
}

/// Split `items` into proximity groups. Groups and their members come out in
/// origin order.
pub fn group_by_proximity<T: Positioned + Clone>(
    items: &[T],
    threshold: f64,
    rule: ClusterRule,
) -> Vec<Vec<T>> {
    if items.is_empty() {
        return Vec::new();
    }

    let order = origin_order(items);
    let positions: Vec<NVec3> = order.iter().map(|&i| items[i].position()).collect();

    let groups = match rule {
        ClusterRule::LastMatch => greedy_groups(&positions, threshold, true),
        ClusterRule::FirstMatch => greedy_groups(&positions, threshold, false),
        ClusterRule::UnionFind => connected_groups(&positions, threshold),
    };

    groups
        .into_iter()
        .map(|g| g.into_iter().map(|k| items[order[k]].clone()).collect())
        .collect()
}

/// The group with the most members. Ties go to the later group; an empty
/// input gives an empty cluster.
pub fn select_largest<T: Positioned + Clone>(
    items: &[T],
    threshold: f64,
    rule: ClusterRule,
) -> Cluster<T> {
    group_by_proximity(items, threshold, rule)
        .into_iter()
        .max_by_key(|g| g.len())
        .map(|members| Cluster { members })
        .unwrap_or_default()
}

// Works on positions already in origin order, returns indices into them
fn greedy_groups(positions: &[NVec3], threshold: f64, last_wins: bool) -> Vec<Vec<usize>> {
    let mut groups: Vec<Vec<usize>> = vec![vec![0]];

    for k in 1..positions.len() {
        let touches = |g: &Vec<usize>| {
            g.iter()
                .any(|&m| planar_distance(&positions[k], &positions[m]) < threshold)
        };

        let target = if last_wins {
            groups.iter().rposition(touches)
        } else {
            groups.iter().position(touches)
        };

        match target {
            Some(g) => groups[g].push(k),
            None => groups.push(vec![k]),
        }
    }

    groups
}

fn connected_groups(positions: &[NVec3], threshold: f64) -> Vec<Vec<usize>> {
    let n = positions.len();
    let mut sets = DisjointSet::new(n);

    for i in 0..n {
        for j in (i + 1)..n {
            if planar_distance(&positions[i], &positions[j]) < threshold {
                sets.union(i, j);
            }
        }
    }

    // group slot per root, in order of each group's first member
    let mut slot_of_root: Vec<Option<usize>> = vec![None; n];
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for k in 0..n {
        let root = sets.find(k);
        let slot = match slot_of_root[root] {
            Some(s) => s,
            None => {
                groups.push(Vec::new());
                slot_of_root[root] = Some(groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[slot].push(k);
    }

    groups
}

struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
    }
}
