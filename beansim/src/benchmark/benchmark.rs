use std::time::Instant;

use crate::boundary::extractor::BoundaryExtractor;
use crate::simulation::integrator::verlet_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, Particle, System};

/// Helper to build a loose pile of `n` beans, deterministic so no rand needed
fn make_system(n: usize) -> System {
    let mut particles = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let pos = NVec3::new(
            400.0 + (i_f * 0.37).sin() * 60.0,
            300.0 + (i_f * 0.13).cos() * 60.0,
            50.0 + (i_f * 0.07).sin() * 40.0,
        );
        particles.push(Particle::at_rest(pos));
    }

    System::new(particles)
}

/// Helper to lay `n` bean centers on a jittered grid, every bean touching its
/// grid neighbors
fn make_blob(n: usize, spacing: f64) -> Vec<NVec3> {
    let side = (n as f64).sqrt().ceil() as usize;
    (0..n)
        .map(|i| {
            let (row, col) = ((i / side) as f64, (i % side) as f64);
            let jitter = (i as f64 * 0.91).sin() * 0.2 * spacing;
            NVec3::new(col * spacing + jitter, row * spacing - jitter, 5.0)
        })
        .collect()
}

pub fn bench_step() {
    // Different pile sizes to test
    let ns = [100, 200, 400, 800, 1600];
    let steps = 20;
    let params = Parameters::default();

    for n in ns {
        let mut sys = make_system(n);

        // Warm up
        verlet_step(&mut sys, &params);

        let t0 = Instant::now();
        let mut moving = 0;
        for _ in 0..steps {
            moving = verlet_step(&mut sys, &params);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, step = {:8.6} s, still moving = {moving}", per_step);
    }
}

pub fn bench_boundary() {
    let ns = [25, 100, 400, 900];
    let extractor = BoundaryExtractor::new(10.0);

    for n in ns {
        let blob = make_blob(n, 14.0);

        // Warm up
        extractor.extract(&blob);

        let t0 = Instant::now();
        let contour = extractor.extract(&blob);
        let elapsed = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, extract = {:8.6} s, pairs = {:6}, outline arcs = {:6}, iterations = {}",
            elapsed,
            contour.adjacency.len(),
            contour.enabled().count(),
            contour.iterations
        );
    }
}

/// Time one `verlet_step` for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() {
    println!("N,step_ms");
    let params = Parameters::default();

    for n in (100..=3200).step_by(100) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 800 { 10 } else { 2 };
        let mut sys = make_system(n);

        let t0 = Instant::now();
        for _ in 0..steps {
            verlet_step(&mut sys, &params);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
