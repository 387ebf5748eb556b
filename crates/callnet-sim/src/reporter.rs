//! Observers for checkpoint progress.
//!
//! The simulation never prints. Whatever wants to watch a run implements
//! [`ProgressReporter`] and is handed in at run time.

use tracing::info;

use crate::report::{Progress, SimulationReport};

/// Receives checkpoint snapshots and the final report.
///
/// Implemented for any `FnMut(&Progress)` closure.
pub trait ProgressReporter {
    /// Called every checkpoint interval.
    fn checkpoint(&mut self, progress: &Progress);

    /// Called once when the run reaches a terminal state.
    fn finished(&mut self, _report: &SimulationReport) {}
}

impl<F> ProgressReporter for F
where
    F: FnMut(&Progress),
{
    fn checkpoint(&mut self, progress: &Progress) {
        self(progress)
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn checkpoint(&mut self, _progress: &Progress) {}
}

/// Logs checkpoints through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ProgressReporter for TracingReporter {
    fn checkpoint(&mut self, progress: &Progress) {
        info!(
            attempts = progress.attempts,
            successful_calls = progress.successful_calls,
            component_size = progress.component_size,
            "checkpoint: {:.2}% of target",
            progress.percentage
        );
    }

    fn finished(&mut self, report: &SimulationReport) {
        info!(
            status = ?report.status,
            successful_calls = report.successful_calls,
            total_attempts = report.total_attempts,
            "finished in {:?}",
            report.elapsed
        );
    }
}

/// Keeps every checkpoint and the final report in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    pub checkpoints: Vec<Progress>,
    pub report: Option<SimulationReport>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for RecordingReporter {
    fn checkpoint(&mut self, progress: &Progress) {
        self.checkpoints.push(*progress);
    }

    fn finished(&mut self, report: &SimulationReport) {
        self.report = Some(report.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(attempts: u64) -> Progress {
        Progress {
            attempts,
            successful_calls: attempts,
            component_size: 2,
            percentage: 0.2,
        }
    }

    #[test]
    fn closures_are_reporters() {
        let mut seen = Vec::new();
        {
            let mut reporter = |p: &Progress| seen.push(p.attempts);
            reporter.checkpoint(&progress(10));
            reporter.checkpoint(&progress(20));
        }
        assert_eq!(seen, vec![10, 20]);
    }

    #[test]
    fn recorder_keeps_order() {
        let mut recorder = RecordingReporter::new();
        recorder.checkpoint(&progress(1));
        recorder.checkpoint(&progress(2));
        assert_eq!(
            recorder.checkpoints.iter().map(|p| p.attempts).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert!(recorder.report.is_none());
    }
}
