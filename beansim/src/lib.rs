pub mod simulation;
pub mod geometry;
pub mod boundary;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Particle, System, NVec3, Positioned};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::integrator::verlet_step;
pub use simulation::simulator::{Simulator, SimState, RunOutcome};
pub use simulation::scenario::{Scenario, SceneReport};
pub use simulation::spawn::{generate_bean_blob, generate_island};

pub use geometry::vector::{add, sub, magnitude, normalize};
pub use geometry::angle::{angle_from_center, angular_span};
pub use geometry::circle::circle_intersection_points;
pub use geometry::arc::{ArcInterval, ArcState, point_on_arc};

pub use boundary::cluster::{Cluster, group_by_proximity, select_largest};
pub use boundary::extractor::{BoundaryContour, BoundaryExtractor, OutlineArc};
pub use boundary::svg::svg_path_data;

pub use configuration::config::{ClusterRule, EngineConfig, ParametersConfig, SceneConfig, ScenarioConfig};

pub use error::{ConfigError, GeometryError};

pub use benchmark::benchmark::{bench_step, bench_boundary, bench_step_curve};
