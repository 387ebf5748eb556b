//! Records a simulation hands to its observers.

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Where a simulation stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SimulationStatus {
    /// Still drawing calls
    Running,
    /// The target subscriber's component reached the target size
    TargetReached,
    /// Attempts exceeded the safety cap first
    SafetyLimitReached,
}

impl SimulationStatus {
    /// Whether no further calls will be drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SimulationStatus::Running)
    }
}

/// Snapshot emitted every checkpoint interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// Pairs drawn so far
    pub attempts: u64,
    /// Pairs whose caller and called differed
    pub successful_calls: u64,
    /// Current size of the target subscriber's component
    pub component_size: usize,
    /// `100 * component_size / target_size`
    pub percentage: f64,
}

/// Outcome of a finished run.
///
/// `successful_calls` is the answer when `status` is `TargetReached`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub status: SimulationStatus,
    pub successful_calls: u64,
    pub final_component_size: usize,
    pub total_attempts: u64,
    #[serde(
        rename = "elapsed_ms",
        serialize_with = "serialize_millis",
        deserialize_with = "deserialize_millis"
    )]
    pub elapsed: Duration,
}

impl SimulationReport {
    /// The answer, if the target was reached.
    pub fn answer(&self) -> Option<u64> {
        (self.status == SimulationStatus::TargetReached).then_some(self.successful_calls)
    }
}

fn serialize_millis<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(elapsed.as_millis() as u64)
}

fn deserialize_millis<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    u64::deserialize(deserializer).map(Duration::from_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(status: SimulationStatus) -> SimulationReport {
        SimulationReport {
            status,
            successful_calls: 2066,
            final_component_size: 990,
            total_attempts: 2069,
            elapsed: Duration::from_micros(12_345),
        }
    }

    #[test]
    fn running_is_not_terminal() {
        assert!(!SimulationStatus::Running.is_terminal());
        assert!(SimulationStatus::TargetReached.is_terminal());
        assert!(SimulationStatus::SafetyLimitReached.is_terminal());
    }

    #[test]
    fn answer_only_on_success() {
        assert_eq!(report(SimulationStatus::TargetReached).answer(), Some(2066));
        assert_eq!(report(SimulationStatus::SafetyLimitReached).answer(), None);
    }

    #[test]
    fn report_json_shape() {
        let json = serde_json::to_value(report(SimulationStatus::TargetReached)).unwrap();
        assert_eq!(json["status"], "TARGET_REACHED");
        assert_eq!(json["successful_calls"], 2066);
        assert_eq!(json["total_attempts"], 2069);
        assert_eq!(json["elapsed_ms"], 12);
        assert!(json.get("elapsed").is_none());
    }

    #[test]
    fn report_reads_back_from_json() {
        let json = r#"{"status":"SAFETY_LIMIT_REACHED","successful_calls":101,
            "final_component_size":2,"total_attempts":101,"elapsed_ms":3}"#;
        let parsed: SimulationReport = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.status, SimulationStatus::SafetyLimitReached);
        assert_eq!(parsed.elapsed, Duration::from_millis(3));
    }
}
