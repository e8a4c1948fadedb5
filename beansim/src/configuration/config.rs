//! Configuration types for loading bean scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – tick budget, clustering rule, trimming cap
//! - [`ParametersConfig`] – physical constants and outline geometry
//! - [`SceneConfig`]      – either a seeded random island or explicit particles
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every engine and parameter field has a default, so a file may be as short
//! as its `scene` section.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   max_ticks: 20000
//!   cluster_rule: "union_find"   # or "first_match", "last_match"
//!   trim_iteration_cap: 5000     # optional
//!
//! parameters:
//!   radius: 5.0             # bean radius, also the floor height
//!   drag: 0.7               # share of velocity kept per tick
//!   gravity: 0.5            # fall per tick
//!   toss_speed: 75.0        # random initial horizontal speed range
//!   arc_radius: 10.0        # outline circle radius
//!   cluster_threshold: 20.0 # optional, defaults to 2 * arc_radius
//!   tick_interval_ms: 1
//!   settle_tolerance: 0.0
//!
//! scene:
//!   random:
//!     seed: 42
//!     width: 800.0
//!     height: 600.0
//!     satellites: 4
//! ```
//!
//! or, with fixed beans:
//!
//! ```yaml
//! scene:
//!   particles:
//!     - pos: [25.0, 25.0, 5.0]
//!     - pos: [40.0, 35.0, 5.0]
//!       last_pos: [30.0, 35.0, 5.0]
//! ```

use serde::Deserialize;

/// How particles are grouped into blobs after settling
/// `cluster_rule: "union_find"`, `"first_match"` or `"last_match"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClusterRule {
    #[serde(rename = "last_match")] // greedy, a bean joins the last group it is close to
    LastMatch,

    #[serde(rename = "first_match")] // greedy, a bean joins the first group it is close to
    FirstMatch,

    #[default]
    #[serde(rename = "union_find")] // full transitive connectivity, order independent
    UnionFind,
}

/// Engine-level configuration
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub max_ticks: u64, // tick budget before giving up on settling
    pub cluster_rule: ClusterRule, // grouping rule for the cluster selector
    pub trim_iteration_cap: Option<usize>, // worklist cap for arc trimming
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_ticks: 20_000,
            cluster_rule: ClusterRule::default(),
            trim_iteration_cap: None,
        }
    }
}

/// Physical and geometric parameters
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub radius: f64,
    pub drag: f64,
    pub gravity: f64,
    pub toss_speed: f64,
    pub arc_radius: f64,
    pub cluster_threshold: Option<f64>, // None -> 2 * arc_radius
    pub tick_interval_ms: u64,
    pub settle_tolerance: f64,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            radius: 5.0,
            drag: 0.7,
            gravity: 0.5,
            toss_speed: 75.0,
            arc_radius: 10.0,
            cluster_threshold: None,
            tick_interval_ms: 1,
            settle_tolerance: 0.0,
        }
    }
}

/// Initial state of one bean
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ParticleConfig {
    pub pos: [f64; 3], // initial position
    #[serde(default)]
    pub last_pos: Option<[f64; 3]>, // previous position, defaults to `pos` (at rest)
}

/// Seeded random island
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RandomSceneConfig {
    pub seed: u64,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_satellites")]
    pub satellites: usize,
}

fn default_width() -> f64 {
    800.0
}

fn default_height() -> f64 {
    600.0
}

fn default_satellites() -> usize {
    4
}

/// Where the beans come from
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SceneConfig {
    Random(RandomSceneConfig),
    Particles(Vec<ParticleConfig>),
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    // `random: {...}` / `particles: [...]` map form instead of YAML `!tags`
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub scene: SceneConfig,
}
