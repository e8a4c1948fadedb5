//! Directed arcs on an owner circle
//!
//! An `ArcInterval` runs clockwise from `start_angle` to `end_angle` around
//! `center`. The span is stored alongside the endpoints since equal start and
//! end angles are ambiguous between an empty arc and a full circle.

use std::f64::consts::{PI, TAU};

use crate::geometry::angle::{angle_from_center, angular_span, normalize_angle, point_at_angle};
use crate::simulation::states::NVec3;

/// Slack used when comparing angles, in radians
pub const ANGLE_EPS: f64 = 1e-9;

/// Trimming state of an arc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArcState {
    /// Not yet checked against every neighbor
    Pending,
    /// Interior to a neighboring disk, not part of the outline
    Disabled,
    /// Survived every neighbor, part of the outline
    Confirmed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArcInterval {
    pub owner: usize, // index of the owning particle in its cluster
    pub center: NVec3, // owner position
    pub start_angle: f64, // (-π, π]
    pub end_angle: f64, // (-π, π]
    pub span: f64, // clockwise sweep from start to end, (0, 2π]
    pub state: ArcState,
}

impl ArcInterval {
    /// Arc from `start` clockwise to `end`
    pub fn new(owner: usize, center: NVec3, start: f64, end: f64) -> Self {
        let start_angle = normalize_angle(start);
        let end_angle = normalize_angle(end);
        Self {
            owner,
            center,
            start_angle,
            end_angle,
            span: angular_span(start_angle, end_angle),
            state: ArcState::Pending,
        }
    }

    /// Arc from `start` sweeping `span` radians clockwise
    pub fn from_sweep(owner: usize, center: NVec3, start: f64, span: f64) -> Self {
        let start_angle = normalize_angle(start);
        Self {
            owner,
            center,
            start_angle,
            end_angle: normalize_angle(start_angle - span),
            span: span.clamp(0.0, TAU),
            state: ArcState::Pending,
        }
    }

    /// Whole circle, starting and ending at angle π
    pub fn full_circle(owner: usize, center: NVec3) -> Self {
        Self::from_sweep(owner, center, PI, TAU)
    }

    pub fn with_state(mut self, state: ArcState) -> Self {
        self.state = state;
        self
    }

    pub fn enabled(&self) -> bool {
        self.state != ArcState::Disabled
    }

    /// Renderers need to know whether to take the long way round
    pub fn is_large_arc(&self) -> bool {
        self.span > PI
    }

    pub fn is_full_circle(&self) -> bool {
        self.span >= TAU - ANGLE_EPS
    }

    /// Clockwise offset of `angle` from this arc's start, in `[0, 2π)`
    pub fn offset_of(&self, angle: f64) -> f64 {
        angular_span(self.start_angle, angle)
    }

    /// Angle halfway along the arc
    pub fn mid_angle(&self) -> f64 {
        normalize_angle(self.start_angle - self.span / 2.0)
    }

    pub fn start_point(&self, r: f64) -> NVec3 {
        point_at_angle(&self.center, r, self.start_angle)
    }

    pub fn end_point(&self, r: f64) -> NVec3 {
        point_at_angle(&self.center, r, self.end_angle)
    }

    pub fn mid_point(&self, r: f64) -> NVec3 {
        point_at_angle(&self.center, r, self.mid_angle())
    }
}

/// Whether the direction of `point` from the arc's center falls inside the
/// arc, endpoints included. Works across the ±π seam since membership is
/// measured as a clockwise offset from the start.
pub fn point_on_arc(arc: &ArcInterval, point: &NVec3) -> bool {
    if arc.is_full_circle() {
        return true;
    }
    let offset = arc.offset_of(angle_from_center(point, &arc.center));
    offset <= arc.span + ANGLE_EPS || offset >= TAU - ANGLE_EPS
}
