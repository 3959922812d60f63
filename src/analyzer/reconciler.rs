//! Pod snapshot reconciliation.
//!
//! A single `/pods` fetch can contain several snapshots of the same pod from
//! the polling history. Reconciliation keeps exactly one per `namespace/name`:
//! the first one in input order. No timestamp comparison happens here, so
//! callers wanting "most recent wins" must order the input newest-first.

use super::types::PodRecord;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// Pods keyed by `namespace/name`, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciledPodSet {
    pods: Vec<PodRecord>,
    index: HashMap<String, usize>,
}

impl ReconciledPodSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pods.is_empty()
    }

    /// Look up the representative for a `namespace/name` key.
    pub fn get(&self, key: &str) -> Option<&PodRecord> {
        self.index.get(key).map(|&i| &self.pods[i])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Keys in first-appearance order.
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.pods.iter().map(PodRecord::key)
    }

    /// Representatives in first-appearance order.
    pub fn values(&self) -> &[PodRecord] {
        &self.pods
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PodRecord> {
        self.pods.iter()
    }

    /// Record `pod` unless its key already has a representative.
    /// Returns whether the pod was kept.
    fn insert_first(&mut self, pod: PodRecord) -> bool {
        let key = pod.key();
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.pods.len());
        self.pods.push(pod);
        true
    }
}

impl<'a> IntoIterator for &'a ReconciledPodSet {
    type Item = &'a PodRecord;
    type IntoIter = std::slice::Iter<'a, PodRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for ReconciledPodSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.pods.serialize(serializer)
    }
}

/// Deduplicate pod snapshots, keeping the first snapshot of each pod.
pub fn reconcile<I>(pods: I) -> ReconciledPodSet
where
    I: IntoIterator<Item = PodRecord>,
{
    let mut set = ReconciledPodSet::new();
    let mut discarded = 0usize;

    for pod in pods {
        if !set.insert_first(pod) {
            discarded += 1;
        }
    }

    log::debug!(
        "Reconciled {} pods ({} duplicate snapshots discarded)",
        set.len(),
        discarded
    );

    set
}
