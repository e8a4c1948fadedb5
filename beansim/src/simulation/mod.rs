pub mod states;
pub mod params;
pub mod engine;
pub mod repulsion;
pub mod integrator;
pub mod simulator;
pub mod spawn;
pub mod scenario;
