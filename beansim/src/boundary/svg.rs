//! SVG path data for an outline
//!
//! Each enabled arc becomes a move to its start point followed by an elliptical
//! arc command to its end point. Arcs run clockwise in math angles (decreasing
//! atan2), which is SVG's negative sweep direction, so the sweep flag is 0.
//! A whole circle cannot be written as one arc command and is split in two.

use super::extractor::BoundaryContour;
use crate::geometry::angle::point_at_angle;
use crate::geometry::arc::ArcInterval;

pub fn svg_path_data(contour: &BoundaryContour) -> String {
    let r = contour.radius;
    let mut d = String::new();

    for arc in contour.enabled() {
        if !d.is_empty() {
            d.push(' ');
        }
        push_arc(&mut d, arc, r);
    }

    d
}

fn push_arc(d: &mut String, arc: &ArcInterval, r: f64) {
    let start = arc.start_point(r);
    d.push_str(&format!("M {} {}", start.x, start.y));

    if arc.is_full_circle() {
        let half = point_at_angle(&arc.center, r, arc.start_angle - std::f64::consts::PI);
        d.push_str(&format!(" A {r} {r} 0 1 0 {} {}", half.x, half.y));
        d.push_str(&format!(" A {r} {r} 0 1 0 {} {}", start.x, start.y));
    } else {
        let end = arc.end_point(r);
        let large = u8::from(arc.is_large_arc());
        d.push_str(&format!(" A {r} {r} 0 {large} 0 {} {}", end.x, end.y));
    }
}
