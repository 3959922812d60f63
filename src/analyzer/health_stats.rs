//! Aggregate health statistics over a reconciled pod set.

use super::reconciler::ReconciledPodSet;
use super::types::{HealthStats, PodRecord, PodStatus};

/// Compute pod counts and the top restarting pod.
///
/// The top pod is the first one, in set order, to reach the highest restart
/// count; later pods with an equal count never displace it.
pub fn compute_stats(reconciled: &ReconciledPodSet) -> HealthStats {
    let mut restart_pods = 0;
    let mut crash_loop_pods = 0;
    let mut top: Option<&PodRecord> = None;

    for pod in reconciled {
        if pod.restarts > 0 {
            restart_pods += 1;
        }
        if pod.status == PodStatus::CrashLoopBackOff {
            crash_loop_pods += 1;
        }
        if top.is_none_or(|current| pod.restarts > current.restarts) {
            top = Some(pod);
        }
    }

    let stats = HealthStats {
        total_pods: reconciled.len(),
        restart_pods,
        crash_loop_pods,
        top_restarting_pod: top.cloned(),
    };

    log::debug!(
        "Health stats: total={} restarts={} crashloop={} top={:?}",
        stats.total_pods,
        stats.restart_pods,
        stats.crash_loop_pods,
        stats.top_restarting_pod.as_ref().map(PodRecord::key)
    );

    stats
}
