//! Pairwise soft repulsion between overlapping beans
//!
//! Corrections are accumulated into each particle's `displacement` instead of
//! being applied to `pos` straight away, so both members of a pair see the
//! same separation no matter which one is visited first.

use log::debug;

use crate::geometry::vector::{magnitude, normalize, sub};
use crate::simulation::states::{NVec3, Particle};

/// Push particle `i` and every later-indexed particle within `2 * radius`
/// apart.
///
/// Each member of such a pair moves a fixed `radius / 2` along the line
/// joining them, however deep the overlap. Pairs exactly `2 * radius` apart
/// still count as touching and get the full push.
pub fn accumulate_repulsion(particles: &mut [Particle], i: usize, radius: f64) {
    if i >= particles.len() {
        return;
    }
    let contact = 2.0 * radius;

    // pi: particle i, every pj is later in the stable order
    let (head, tail) = particles.split_at_mut(i + 1);
    let pi = &mut head[i];

    for (offset, pj) in tail.iter_mut().enumerate() {
        // r points from j to i, so i is pushed along +r and j along -r
        let r = sub(&pi.pos, &pj.pos);
        let distance = magnitude(&r);

        if !distance.is_finite() || distance > contact {
            continue;
        }

        let direction = match normalize(&r) {
            Some(unit) => unit,
            None => {
                // coincident centers: no line to push along, pick the x axis
                debug!("particles {} and {} coincide, separating along x", i, i + 1 + offset);
                NVec3::x()
            }
        };

        let push = direction * (radius / 2.0);

        pi.displacement += push;
        pj.displacement -= push;
    }
}
