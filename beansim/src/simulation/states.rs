//! Core state types for the bean simulation.
//!
//! Defines the particle ("bean") and the system holding all of them:
//! - `Particle` carries its current position, the position one tick earlier
//!   (implicit velocity) and the collision displacement accumulated this tick
//! - `System` holds the particle list in its stable index order plus the
//!   number of ticks advanced so far
//!
//! `Positioned` lets the cluster selector and boundary extractor take either
//! particles or raw points without inspecting fields at runtime.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: NVec3, // position, z is height above the floor
    pub last_pos: NVec3, // position one tick earlier
    pub displacement: NVec3, // collision correction accumulated this tick
}

impl Particle {
    /// Particle at `pos` whose previous position is `last_pos`
    /// (so `pos - last_pos` is its initial velocity)
    pub fn new(pos: NVec3, last_pos: NVec3) -> Self {
        Self {
            pos,
            last_pos,
            displacement: NVec3::zeros(),
        }
    }

    /// Particle with no initial velocity
    pub fn at_rest(pos: NVec3) -> Self {
        Self::new(pos, pos)
    }

    /// Implicit velocity from the last two positions
    pub fn velocity(&self) -> NVec3 {
        self.pos - self.last_pos
    }

    /// Grey level used by renderers: higher beans are drawn brighter
    pub fn shade(&self) -> u8 {
        let level = self.pos.z * 3.0;
        if level.is_nan() {
            return 0;
        }
        level.clamp(0.0, 255.0) as u8
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub particles: Vec<Particle>, // stable index order, significant for determinism
    pub tick: u64, // ticks advanced so far
}

impl System {
    pub fn new(particles: Vec<Particle>) -> Self {
        Self { particles, tick: 0 }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Anything with a position in the plane (z is ignored by 2D consumers)
pub trait Positioned {
    fn position(&self) -> NVec3;
}

impl Positioned for Particle {
    fn position(&self) -> NVec3 {
        self.pos
    }
}

impl Positioned for NVec3 {
    fn position(&self) -> NVec3 {
        *self
    }
}

impl<T: Positioned> Positioned for &T {
    fn position(&self) -> NVec3 {
        (**self).position()
    }
}
