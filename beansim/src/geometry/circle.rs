//! Intersection of two equal circles in the plane
//!
//! Both boundary points lie on the perpendicular bisector of the centers,
//! `half_chord` away from the midpoint. The direction along the bisector is
//! taken from its slope, except when the centers share a y coordinate: the
//! slope is then undefined and the direction comes from rotating the unit
//! separation by a quarter turn.

use crate::error::GeometryError;
use crate::geometry::vector::{flatten, magnitude, normalize, sub};
use crate::simulation::states::NVec3;

/// Two intersection points of the circles of radius `r` around `center_a`
/// and `center_b`. Heights are ignored and the returned points have z = 0.
///
/// Fails for coincident centers and for separations of `2 * r` or more.
pub fn circle_intersection_points(
    center_a: &NVec3,
    center_b: &NVec3,
    r: f64,
) -> Result<(NVec3, NVec3), GeometryError> {
    let a = flatten(center_a);
    let b = flatten(center_b);
    let between = sub(&b, &a);
    let distance = magnitude(&between);

    if !distance.is_finite() {
        return Err(GeometryError::NonFinite("center separation"));
    }
    if distance == 0.0 {
        return Err(GeometryError::CoincidentCenters);
    }
    if distance >= 2.0 * r {
        return Err(GeometryError::NoOverlap { distance, reach: 2.0 * r });
    }

    let half_distance_sq = distance * distance / 4.0;
    let half_chord = (r * r - half_distance_sq).sqrt();
    let mid = (a + b) / 2.0;

    let offset = match bisector_slope(&between) {
        Some(slope) => {
            let x_change = (half_chord * half_chord / (1.0 + slope * slope)).sqrt();
            NVec3::new(x_change, slope * x_change, 0.0)
        }
        None => {
            let unit = normalize(&between).ok_or(GeometryError::NonFinite("separation direction"))?;
            NVec3::new(-unit.y, unit.x, 0.0) * half_chord
        }
    };

    let first = mid + offset;
    let second = mid - offset;
    if !(first.iter().all(|c| c.is_finite()) && second.iter().all(|c| c.is_finite())) {
        return Err(GeometryError::NonFinite("intersection points"));
    }

    Ok((first, second))
}

/// Slope of the line perpendicular to `between`, `None` when it is vertical
/// or too steep to square without overflow
fn bisector_slope(between: &NVec3) -> Option<f64> {
    if between.y == 0.0 {
        return None;
    }
    let slope = -between.x / between.y;
    if slope.is_finite() && (1.0 + slope * slope).is_finite() {
        Some(slope)
    } else {
        None
    }
}

/// True when `point` lies strictly inside the circle, with `tolerance`
/// shrinking the circle so boundary points do not count
pub fn point_in_disk(point: &NVec3, center: &NVec3, r: f64, tolerance: f64) -> bool {
    magnitude(&flatten(&sub(point, center))) < r - tolerance
}
