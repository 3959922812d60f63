//! Narrowing a reconciled pod set to the pods worth surfacing.

use super::reconciler::ReconciledPodSet;
use super::types::{PodRecord, PodStatus};
use serde::Serialize;
use std::fmt;

/// Display condition of a pod, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PodCondition {
    /// Status is `CrashLoopBackOff`
    CrashLooping,
    /// Not crash-looping but restarted at least once
    Restarting,
    /// No restarts and not crash-looping
    Quiet,
}

impl PodCondition {
    pub fn of(pod: &PodRecord) -> Self {
        if pod.status == PodStatus::CrashLoopBackOff {
            Self::CrashLooping
        } else if pod.restarts > 0 {
            Self::Restarting
        } else {
            Self::Quiet
        }
    }

    pub fn is_problematic(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CrashLooping => "crash_looping",
            Self::Restarting => "restarting",
            Self::Quiet => "quiet",
        }
    }
}

impl fmt::Display for PodCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pods with restarts or in `CrashLoopBackOff`, in reconciled order.
pub fn filter_problematic(reconciled: &ReconciledPodSet) -> Vec<PodRecord> {
    reconciled
        .iter()
        .filter(|pod| PodCondition::of(pod).is_problematic())
        .cloned()
        .collect()
}
