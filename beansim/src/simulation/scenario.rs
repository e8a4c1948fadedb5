//! Build fully-initialized bean scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - physical and geometric parameters (`Parameters`)
//! - system state (`System` with every bean at tick 0)
//!
//! `Scenario::run` then carries the pile from its first tick to the outline
//! of its largest blob.

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::boundary::cluster::{select_largest, Cluster};
use crate::boundary::extractor::{BoundaryContour, BoundaryExtractor};
use crate::configuration::config::{ParticleConfig, ScenarioConfig, SceneConfig};
use crate::error::ConfigError;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::simulator::{RunOutcome, Simulator};
use crate::simulation::spawn::generate_island;
use crate::simulation::states::{NVec3, Particle, System};

/// Runtime bundle constructed from a [`ScenarioConfig`]
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
}

/// Everything a caller needs to draw a finished scene
#[derive(Debug, Clone)]
pub struct SceneReport {
    pub outcome: RunOutcome,
    pub particles: Vec<Particle>, // final state of every bean
    pub cluster: Cluster<Particle>, // largest blob
    pub contour: BoundaryContour, // outline of that blob
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            radius: p_cfg.radius,
            drag: p_cfg.drag,
            gravity: p_cfg.gravity,
            toss_speed: p_cfg.toss_speed,
            arc_radius: p_cfg.arc_radius,
            cluster_threshold: p_cfg.cluster_threshold.unwrap_or(2.0 * p_cfg.arc_radius),
            tick_interval_ms: p_cfg.tick_interval_ms,
            settle_tolerance: p_cfg.settle_tolerance,
        };
        parameters.validate()?;

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            max_ticks: e_cfg.max_ticks,
            cluster_rule: e_cfg.cluster_rule,
            trim_iteration_cap: e_cfg.trim_iteration_cap,
        };

        // Beans: seeded island or explicit list
        let particles = match cfg.scene {
            SceneConfig::Random(r) => {
                let mut rng = ChaCha8Rng::seed_from_u64(r.seed);
                generate_island(&mut rng, r.width, r.height, r.satellites, parameters.toss_speed)
            }
            SceneConfig::Particles(list) => particles_from_config(&list)?,
        };

        info!("built scenario with {} beans", particles.len());

        Ok(Self {
            engine,
            parameters,
            system: System::new(particles),
        })
    }

    pub fn simulator(&self) -> Simulator {
        Simulator::new(self.system.clone(), self.parameters.clone())
    }

    pub fn extractor(&self) -> BoundaryExtractor {
        BoundaryExtractor::new(self.parameters.arc_radius)
            .with_iteration_cap(self.engine.trim_iteration_cap)
    }

    /// Simulate until settled (or out of ticks), pick the largest blob and
    /// extract its outline
    pub fn run(&self) -> SceneReport {
        let mut sim = self.simulator();
        let outcome = sim.run_until_settled(self.engine.max_ticks);
        let particles = sim.into_system().particles;

        let cluster = select_largest(
            &particles,
            self.parameters.cluster_threshold,
            self.engine.cluster_rule,
        );
        let contour = self.extractor().extract(&cluster.members);

        info!(
            "largest blob has {} of {} beans, outline has {} arcs",
            cluster.len(),
            particles.len(),
            contour.enabled().count()
        );

        SceneReport {
            outcome,
            particles,
            cluster,
            contour,
        }
    }
}

fn particles_from_config(list: &[ParticleConfig]) -> Result<Vec<Particle>, ConfigError> {
    list.iter()
        .enumerate()
        .map(|(index, pc)| {
            let pos = NVec3::from(pc.pos);
            let last_pos = pc.last_pos.map(NVec3::from).unwrap_or(pos);
            if pos.iter().chain(last_pos.iter()).all(|c| c.is_finite()) {
                Ok(Particle::new(pos, last_pos))
            } else {
                Err(ConfigError::NonFiniteParticle { index })
            }
        })
        .collect()
}
