//! The call simulation loop.

use std::time::Instant;

use callnet_dsu::DisjointSets;
use callnet_sequence::LaggedFibonacci;
use tracing::{debug, info, warn};

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::report::{Progress, SimulationReport, SimulationStatus};
use crate::reporter::{ProgressReporter, SilentReporter};

/// One run of the call network.
///
/// Owns its generator, forest and counters outright; separate simulations
/// never share state.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    calls: LaggedFibonacci,
    network: DisjointSets,
    attempts: u64,
    successful_calls: u64,
    status: SimulationStatus,
}

impl Simulation {
    /// Validate `config` and set up an isolated population.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        debug!(
            population = config.population,
            target_node = config.target_node,
            target_size = config.target_size,
            checkpoint_interval = config.checkpoint_interval,
            max_attempts = config.max_attempts,
            "simulation configured"
        );

        Ok(Self {
            calls: LaggedFibonacci::with_coefficients(config.seed),
            network: DisjointSets::new(config.population),
            attempts: 0,
            successful_calls: 0,
            status: SimulationStatus::Running,
            config,
        })
    }

    /// Draw one call without observing checkpoints.
    ///
    /// Returns the terminal status once reached, `None` while running.
    pub fn step(&mut self) -> Option<SimulationStatus> {
        self.step_with(&mut SilentReporter)
    }

    /// Draw one call, reporting a checkpoint if one falls on this attempt.
    ///
    /// After a terminal transition this keeps returning the same status and
    /// draws nothing.
    pub fn step_with<R>(&mut self, reporter: &mut R) -> Option<SimulationStatus>
    where
        R: ProgressReporter + ?Sized,
    {
        if self.status.is_terminal() {
            return Some(self.status);
        }

        let population = self.config.population;
        let (caller, called) = self.calls.next_pair();
        let caller = caller as usize % population;
        let called = called as usize % population;
        self.attempts += 1;

        // A call counts as soon as the two parties differ, connected or not
        if caller != called {
            self.network.union(caller, called);
            self.successful_calls += 1;
        }

        let component_size = self.target_component_size();

        let interval = self.config.checkpoint_interval;
        if interval != 0 && self.attempts % interval == 0 {
            reporter.checkpoint(&Progress {
                attempts: self.attempts,
                successful_calls: self.successful_calls,
                component_size,
                percentage: 100.0 * component_size as f64 / self.config.target_size as f64,
            });
        }

        if component_size >= self.config.target_size {
            self.status = SimulationStatus::TargetReached;
        } else if self.attempts > self.config.max_attempts {
            self.status = SimulationStatus::SafetyLimitReached;
        }

        self.status.is_terminal().then_some(self.status)
    }

    /// Run silently to a terminal state.
    pub fn run(&mut self) -> SimulationReport {
        self.run_with(&mut SilentReporter)
    }

    /// Run to a terminal state, feeding `reporter` along the way.
    pub fn run_with<R>(&mut self, reporter: &mut R) -> SimulationReport
    where
        R: ProgressReporter + ?Sized,
    {
        let started = Instant::now();

        let status = loop {
            if let Some(status) = self.step_with(reporter) {
                break status;
            }
        };

        let report = SimulationReport {
            status,
            successful_calls: self.successful_calls,
            final_component_size: self.target_component_size(),
            total_attempts: self.attempts,
            elapsed: started.elapsed(),
        };

        if status == SimulationStatus::TargetReached {
            info!(
                successful_calls = report.successful_calls,
                component_size = report.final_component_size,
                attempts = report.total_attempts,
                "target component size reached"
            );
        } else {
            warn!(
                attempts = report.total_attempts,
                component_size = report.final_component_size,
                target_size = self.config.target_size,
                "safety limit reached before target"
            );
        }

        reporter.finished(&report);
        report
    }

    /// Current size of the target subscriber's component.
    pub fn target_component_size(&mut self) -> usize {
        self.network.component_size(self.config.target_node)
    }

    /// Pairs drawn so far.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Pairs with distinct parties so far.
    pub fn successful_calls(&self) -> u64 {
        self.successful_calls
    }

    pub fn status(&self) -> SimulationStatus {
        self.status
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The connectivity forest, for inspection.
    pub fn network(&self) -> &DisjointSets {
        &self.network
    }
}

/// Validate `config` and run it silently.
pub fn simulate(config: SimulationConfig) -> Result<SimulationReport> {
    Ok(Simulation::new(config)?.run())
}
