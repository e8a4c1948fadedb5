//! Fixed-step position Verlet integrator for the bean pile
//!
//! One call advances every particle by one tick: implicit velocity with drag,
//! a constant downward delta for gravity, a floor clamp at the particle
//! radius, then the pairwise repulsion collected in `displacement`

use super::params::Parameters;
use super::repulsion::accumulate_repulsion;
use super::states::{NVec3, System};
use crate::geometry::vector::{add, magnitude};

/// Advance the system by one tick and return how many particles still moved.
///
/// Particles are visited in their stored order. Particle `i` is integrated,
/// pushes against every later particle it overlaps, and then takes its full
/// displacement (contributions from earlier particles included) before
/// particle `i + 1` is visited.
pub fn verlet_step(sys: &mut System, params: &Parameters) -> usize {
    let n = sys.particles.len();
    sys.tick += 1;
    if n == 0 { // no particles, nothing moves
        return 0;
    }

    // Corrections from the previous tick are already folded into pos
    for p in sys.particles.iter_mut() {
        p.displacement = NVec3::zeros();
    }

    let mut moving = 0;

    for i in 0..n {
        let old_pos = sys.particles[i].pos;

        {
            let p = &mut sys.particles[i];

            // x_n+1 = x_n + drag * (x_n - x_n-1)
            let carried = p.velocity() * params.drag;
            p.pos = add(&p.pos, &carried);

            // constant fall per tick
            p.pos.z -= params.gravity;

            // floor flattens to the radius, no bounce
            if p.pos.z < params.radius {
                p.pos.z = params.radius;
            }
        }

        accumulate_repulsion(&mut sys.particles, i, params.radius);

        let p = &mut sys.particles[i];
        p.pos = add(&p.pos, &p.displacement);

        if magnitude(&p.displacement) > params.settle_tolerance || p.pos.z != params.radius {
            moving += 1;
        }

        p.last_pos = old_pos;
    }

    moving
}
