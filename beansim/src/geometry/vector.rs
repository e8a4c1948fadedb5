//! Vector helpers shared by the simulator and the outline code
//!
//! `magnitude` combines the horizontal length first and the height second,
//! so dropping z to 0 for planar work leaves exactly the 2D length.

use crate::simulation::states::NVec3;

pub fn add(a: &NVec3, b: &NVec3) -> NVec3 {
    a + b
}

pub fn sub(a: &NVec3, b: &NVec3) -> NVec3 {
    a - b
}

/// Length of `v`, horizontal part first then combined with z
pub fn magnitude(v: &NVec3) -> f64 {
    let horizontal = (v.x * v.x + v.y * v.y).sqrt();
    (horizontal * horizontal + v.z * v.z).sqrt()
}

pub fn distance(a: &NVec3, b: &NVec3) -> f64 {
    magnitude(&sub(a, b))
}

/// Unit vector along `v`, `None` for zero-length or non-finite input
pub fn normalize(v: &NVec3) -> Option<NVec3> {
    let len = magnitude(v);
    if len == 0.0 || !len.is_finite() {
        return None;
    }
    Some(v / len)
}

/// Projection onto the z = 0 plane
pub fn flatten(v: &NVec3) -> NVec3 {
    NVec3::new(v.x, v.y, 0.0)
}

/// Planar distance, ignoring height
pub fn planar_distance(a: &NVec3, b: &NVec3) -> f64 {
    magnitude(&flatten(&sub(a, b)))
}
