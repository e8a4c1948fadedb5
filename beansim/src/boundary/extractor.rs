//! Boundary extraction for one cluster
//!
//! Adjacency, candidate arcs and trimming in one synchronous call. The result
//! owns every segment it produced; nothing is shared between calls.

use log::debug;

use super::arcs::{candidate_arcs, find_adjacent_pairs, AdjacentPair};
use super::trim::trim_arcs;
use crate::geometry::arc::ArcInterval;
use crate::simulation::states::{NVec3, Positioned};

/// One arc of the finished outline, in the shape a vector renderer wants:
/// "arc of `radius` around `center` from `start_angle` clockwise to
/// `end_angle`, long way round if `is_large_arc`"
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineArc {
    pub center: NVec3,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub span: f64,
    pub is_large_arc: bool,
    pub start_point: NVec3,
    pub end_point: NVec3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryContour {
    pub radius: f64,
    pub adjacency: Vec<AdjacentPair>,
    pub candidates: Vec<ArcInterval>, // outside arcs before trimming
    pub segments: Vec<ArcInterval>, // trimmed segments, enabled and disabled
    pub converged: bool,
    pub iterations: usize,
}

impl BoundaryContour {
    /// Segments that belong to the outline
    pub fn enabled(&self) -> impl Iterator<Item = &ArcInterval> {
        self.segments.iter().filter(|s| s.enabled())
    }

    /// Segments hidden inside a neighbor
    pub fn disabled(&self) -> impl Iterator<Item = &ArcInterval> {
        self.segments.iter().filter(|s| !s.enabled())
    }

    pub fn segments_of(&self, owner: usize) -> impl Iterator<Item = &ArcInterval> {
        self.segments.iter().filter(move |s| s.owner == owner)
    }

    pub fn outline(&self) -> Vec<OutlineArc> {
        self.enabled()
            .map(|arc| OutlineArc {
                center: arc.center,
                radius: self.radius,
                start_angle: arc.start_angle,
                end_angle: arc.end_angle,
                span: arc.span,
                is_large_arc: arc.is_large_arc(),
                start_point: arc.start_point(self.radius),
                end_point: arc.end_point(self.radius),
            })
            .collect()
    }

    /// Total angle swept by the outline
    pub fn enabled_sweep(&self) -> f64 {
        self.enabled().map(|s| s.span).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryExtractor {
    pub radius: f64,
    pub iteration_cap: Option<usize>,
}

impl BoundaryExtractor {
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            iteration_cap: None,
        }
    }

    pub fn with_iteration_cap(mut self, cap: Option<usize>) -> Self {
        self.iteration_cap = cap;
        self
    }

    /// Outline of the disks of `radius` around `members`
    pub fn extract<T: Positioned>(&self, members: &[T]) -> BoundaryContour {
        let centers: Vec<NVec3> = members.iter().map(|m| m.position()).collect();

        let adjacency = find_adjacent_pairs(&centers, self.radius);
        let candidates = candidate_arcs(&centers, &adjacency);
        let trimmed = trim_arcs(&centers, &candidates, self.iteration_cap);

        debug!(
            "{} members, {} adjacent pairs, {} segments after {} trim iterations",
            centers.len(),
            adjacency.len(),
            trimmed.segments.len(),
            trimmed.iterations
        );

        BoundaryContour {
            radius: self.radius,
            adjacency,
            candidates,
            segments: trimmed.segments,
            converged: trimmed.converged,
            iterations: trimmed.iterations,
        }
    }
}
