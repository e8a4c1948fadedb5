//! High-level runtime engine settings
//!
//! Selects the tick budget, the clustering rule and the trimming cap
//! used when running a `Scenario` from settle to outline

use crate::configuration::config::ClusterRule;

#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub max_ticks: u64, // give up waiting for the pile to settle after this many ticks
    pub cluster_rule: ClusterRule, // how particles are grouped into blobs
    pub trim_iteration_cap: Option<usize>, // None = computed bound from the arc count
}
