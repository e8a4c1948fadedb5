//! Adjacency and candidate arcs for the outline
//!
//! Two cluster members are adjacent when their outline circles cross. For each
//! adjacent pair, every member gets one candidate arc: the part of its circle
//! outside the neighbor, which for equal radii is always the longer of the two
//! arcs between the crossing points.

use log::debug;

use crate::error::GeometryError;
use crate::geometry::angle::{angle_from_center, angular_span};
use crate::geometry::arc::ArcInterval;
use crate::geometry::circle::circle_intersection_points;
use crate::simulation::states::{NVec3, Positioned};

/// Two members whose outline circles cross, with the crossing points
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacentPair {
    pub a: usize,
    pub b: usize,
    pub points: (NVec3, NVec3),
}

/// Every unordered pair `(a, b)`, `a < b`, whose circles of radius `r` cross.
///
/// Pairs `2 * r` or more apart are not adjacent. Coincident or otherwise
/// degenerate pairs are skipped with a debug log.
pub fn find_adjacent_pairs<T: Positioned>(members: &[T], r: f64) -> Vec<AdjacentPair> {
    let centers: Vec<NVec3> = members.iter().map(|m| m.position()).collect();
    let mut pairs = Vec::new();

    for a in 0..centers.len() {
        for b in (a + 1)..centers.len() {
            match circle_intersection_points(&centers[a], &centers[b], r) {
                Ok(points) => pairs.push(AdjacentPair { a, b, points }),
                Err(GeometryError::NoOverlap { .. }) => {}
                Err(e) => debug!("skipping pair ({a}, {b}): {e}"),
            }
        }
    }

    pairs
}

/// Neighbor lists per member, ascending
pub fn neighbor_lists(count: usize, pairs: &[AdjacentPair]) -> Vec<Vec<usize>> {
    let mut neighbors = vec![Vec::new(); count];
    for p in pairs {
        neighbors[p.a].push(p.b);
        neighbors[p.b].push(p.a);
    }
    for list in neighbors.iter_mut() {
        list.sort_unstable();
    }
    neighbors
}

/// The arc of `owner`'s circle lying outside the neighbor that crosses it at
/// `p` and `q`: the longer way round between the two crossing points
pub fn outside_arc(owner: usize, center: NVec3, p: &NVec3, q: &NVec3) -> ArcInterval {
    let angle_p = angle_from_center(p, &center);
    let angle_q = angle_from_center(q, &center);

    if angular_span(angle_p, angle_q) >= angular_span(angle_q, angle_p) {
        ArcInterval::new(owner, center, angle_p, angle_q)
    } else {
        ArcInterval::new(owner, center, angle_q, angle_p)
    }
}

/// Two candidate arcs per adjacent pair, in pair order: first the arc on
/// `a` outside `b`, then the arc on `b` outside `a`. All start out pending.
pub fn candidate_arcs<T: Positioned>(members: &[T], pairs: &[AdjacentPair]) -> Vec<ArcInterval> {
    let mut arcs = Vec::with_capacity(pairs.len() * 2);
    for pair in pairs {
        let (p, q) = &pair.points;
        arcs.push(outside_arc(pair.a, members[pair.a].position(), p, q));
        arcs.push(outside_arc(pair.b, members[pair.b].position(), p, q));
    }
    arcs
}
