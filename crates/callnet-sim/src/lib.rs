//! Callnet Simulation
//!
//! Grows a call network from isolated subscribers until the component of one
//! distinguished subscriber reaches a target size, and counts the calls it
//! took.
//!
//! # The Loop
//!
//! 1. Draw `(caller, called)` from the lagged Fibonacci sequence
//! 2. If they differ, it is a successful call: connect them
//! 3. Every checkpoint interval, hand a [`Progress`] snapshot to the reporter
//! 4. Stop once the target component is big enough, or attempts pass the cap
//!
//! Termination is checked every draw; checkpoints are observation only.
//!
//! # Example
//!
//! ```
//! use callnet_sim::{simulate, SimulationConfig, SimulationStatus};
//!
//! let report = simulate(SimulationConfig::new(1000, 7, 990)).unwrap();
//! assert_eq!(report.status, SimulationStatus::TargetReached);
//! assert_eq!(report.successful_calls, 2066);
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod reporter;
pub mod simulation;

pub use config::SimulationConfig;
pub use error::{ConfigError, Result};
pub use report::{Progress, SimulationReport, SimulationStatus};
pub use reporter::{ProgressReporter, RecordingReporter, SilentReporter, TracingReporter};
pub use simulation::{simulate, Simulation};
