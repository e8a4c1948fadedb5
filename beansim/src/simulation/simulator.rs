//! Tick-driven simulator state machine
//!
//! `Active` while any particle still moves, `Settled` once a tick ends with
//! every particle resting on the floor and free of contact corrections.
//! `step` is synchronous and must not be re-entered; callers own the cadence.

use log::{info, warn};

use super::integrator::verlet_step;
use super::params::Parameters;
use super::states::{Particle, System};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    Active,
    Settled,
}

/// Result of driving the simulator with a tick budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub ticks: u64, // ticks advanced by this run
    pub settled: bool,
}

#[derive(Debug, Clone)]
pub struct Simulator {
    system: System,
    parameters: Parameters,
    state: SimState,
    last_moving: usize,
}

impl Simulator {
    pub fn new(system: System, parameters: Parameters) -> Self {
        let last_moving = system.len();
        Self {
            system,
            parameters,
            state: SimState::Active,
            last_moving,
        }
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn is_settled(&self) -> bool {
        self.state == SimState::Settled
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn particles(&self) -> &[Particle] {
        &self.system.particles
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Particles that moved during the last tick
    pub fn moving(&self) -> usize {
        self.last_moving
    }

    pub fn into_system(self) -> System {
        self.system
    }

    /// Advance one tick. A settled simulator stays put.
    pub fn step(&mut self) -> SimState {
        if self.state == SimState::Settled {
            return self.state;
        }

        self.last_moving = verlet_step(&mut self.system, &self.parameters);

        if self.last_moving == 0 {
            info!(
                "settled after {} ticks with {} particles",
                self.system.tick,
                self.system.len()
            );
            self.state = SimState::Settled;
        }

        self.state
    }

    /// Step until settled or `max_ticks` ticks have run
    pub fn run_until_settled(&mut self, max_ticks: u64) -> RunOutcome {
        let mut ticks = 0;
        while self.state == SimState::Active && ticks < max_ticks {
            self.step();
            ticks += 1;
        }

        let settled = self.is_settled();
        if !settled {
            warn!(
                "still {} particles moving after {} ticks",
                self.last_moving, ticks
            );
        }

        RunOutcome { ticks, settled }
    }
}
