//! Random scene generation
//!
//! Beans are dropped as loose balls ("blobs") of particles, each bean given a
//! random horizontal toss through an offset `last_pos`. An island is one large
//! central blob plus a few smaller satellites scattered around it.

use std::f64::consts::TAU;

use rand::Rng;

use super::states::{NVec3, Particle};

/// Radius of the ball a blob's beans start in
pub const BLOB_RADIUS: f64 = 50.0;
/// Height of a blob's center above the floor
pub const DROP_HEIGHT: f64 = 50.0;

/// `count` beans scattered through a ball of radius [`BLOB_RADIUS`] around
/// `center`, each tossed horizontally by up to `toss_speed / 2` per axis
pub fn generate_bean_blob<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    center: NVec3,
    toss_speed: f64,
) -> Vec<Particle> {
    let mut beans = Vec::with_capacity(count);

    for _ in 0..count {
        let theta = rng.gen::<f64>() * TAU;
        let phi = rng.gen::<f64>() * TAU;
        let distance = rng.gen::<f64>() * BLOB_RADIUS;

        let horizontal = phi.sin() * distance;

        let pos = NVec3::new(
            center.x + theta.cos() * horizontal,
            center.y + theta.sin() * horizontal,
            center.z + phi.cos() * distance,
        );

        let last_pos = NVec3::new(
            pos.x + rng.gen::<f64>() * toss_speed - toss_speed / 2.0,
            pos.y + rng.gen::<f64>() * toss_speed - toss_speed / 2.0,
            pos.z,
        );

        beans.push(Particle::new(pos, last_pos));
    }

    beans
}

/// Central blob of up to 250 beans in the middle of a `width` x `height`
/// area, plus `satellites` blobs of 25 to 75 beans placed 75 to 275 units
/// from the middle
pub fn generate_island<R: Rng + ?Sized>(
    rng: &mut R,
    width: f64,
    height: f64,
    satellites: usize,
    toss_speed: f64,
) -> Vec<Particle> {
    let middle = NVec3::new(width / 2.0, height / 2.0, DROP_HEIGHT);

    let central = rng.gen_range(0..250);
    let mut beans = generate_bean_blob(rng, central, middle, toss_speed);

    for _ in 0..satellites {
        let theta = rng.gen::<f64>() * TAU;
        let distance = rng.gen::<f64>() * 200.0 + 75.0;
        let count = rng.gen_range(25..75);

        let center = NVec3::new(
            middle.x + theta.cos() * distance,
            middle.y + theta.sin() * distance,
            DROP_HEIGHT,
        );

        beans.extend(generate_bean_blob(rng, count, center, toss_speed));
    }

    beans
}
