//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - particle radius (floor clamp height and collision half-distance),
//! - drag coefficient and per-tick gravity,
//! - toss speed used when seeding random scenes,
//! - outline radius and clustering threshold for boundary extraction,
//! - tick interval for external schedulers and the settle tolerance

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub radius: f64, // particle radius
    pub drag: f64, // fraction of implicit velocity kept each tick
    pub gravity: f64, // downward delta applied to z each tick
    pub toss_speed: f64, // width of the random initial velocity range
    pub arc_radius: f64, // circle radius used for the outline
    pub cluster_threshold: f64, // proximity threshold for grouping
    pub tick_interval_ms: u64, // cadence suggested to external schedulers
    pub settle_tolerance: f64, // displacement at or below this counts as still
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            radius: 5.0,
            drag: 0.7,
            gravity: 0.5,
            toss_speed: 75.0,
            arc_radius: 10.0,
            cluster_threshold: 20.0,
            tick_interval_ms: 1,
            settle_tolerance: 0.0,
        }
    }
}

impl Parameters {
    /// Distance below which two particles push each other apart
    pub fn contact_distance(&self) -> f64 {
        2.0 * self.radius
    }

    /// Distance below which two outline circles intersect
    pub fn adjacency_distance(&self) -> f64 {
        2.0 * self.arc_radius
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("radius", self.radius)?;
        positive("arc_radius", self.arc_radius)?;
        positive("cluster_threshold", self.cluster_threshold)?;
        in_range("drag", self.drag, 0.0, 1.0)?;
        in_range("gravity", self.gravity, 0.0, f64::MAX)?;
        in_range("toss_speed", self.toss_speed, 0.0, f64::MAX)?;
        in_range("settle_tolerance", self.settle_tolerance, 0.0, f64::MAX)?;
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn in_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    // NaN fails both comparisons
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { name, value, min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Parameters::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        let p = Parameters { radius: 0.0, ..Default::default() };
        assert!(matches!(p.validate(), Err(ConfigError::NotPositive { name: "radius", .. })));

        let p = Parameters { drag: 1.5, ..Default::default() };
        assert!(matches!(p.validate(), Err(ConfigError::OutOfRange { name: "drag", .. })));

        let p = Parameters { gravity: f64::NAN, ..Default::default() };
        assert!(p.validate().is_err());
    }
}
