//! Angular arithmetic on the circle
//!
//! Arcs are traversed clockwise, i.e. with decreasing angle, so the span from
//! `start` to `end` is `(start - end)` wrapped into `[0, 2π)`.

use std::f64::consts::{PI, TAU};

use crate::simulation::states::NVec3;

/// Angle of `point` seen from `center`, in `[-π, π]`
pub fn angle_from_center(point: &NVec3, center: &NVec3) -> f64 {
    (point.y - center.y).atan2(point.x - center.x)
}

/// Clockwise distance from `start` to `end`, in `[0, 2π)`
pub fn angular_span(start: f64, end: f64) -> f64 {
    let span = (start - end + TAU).rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if span >= TAU {
        0.0
    } else {
        span
    }
}

/// Wrap any angle into `(-π, π]`
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Point on the circle of radius `r` around `center` at `angle`
pub fn point_at_angle(center: &NVec3, r: f64, angle: f64) -> NVec3 {
    NVec3::new(center.x + r * angle.cos(), center.y + r * angle.sin(), 0.0)
}
