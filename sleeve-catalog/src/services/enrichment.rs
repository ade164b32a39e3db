//! Batched label enrichment.
//!
//! The search payload carries no label field; album-level lookup responses
//! carry a copyright string a label can usually be inferred from. Ids are
//! looked up in fixed-size groups, dispatched sequentially with a pacing
//! delay between groups to stay inside the catalog's rate limit.
//!
//! Failure handling is strictly additive: a group whose lookup exhausts
//! its retries contributes nothing, and a scheduler that fails outright
//! hands the caller back the untouched input. The lookup itself is
//! injected as an async closure so the pipeline is exercised in tests
//! without a network.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use sleeve_common::Result;

use crate::models::itunes::ItunesRecord;
use crate::models::release::ReleaseSummary;
use crate::services::label_inference::infer_label_from_copyright;
use crate::utils::pacing::Pacer;
use crate::utils::retry::{retry_with_timeout, RetryPolicy};

/// Outcome of a best-effort enrichment stage: either the enriched value or
/// the untouched input plus the failure that prevented enrichment.
#[derive(Debug, Clone, PartialEq)]
pub enum Enriched<T> {
    Full(T),
    Degraded { value: T, reason: String },
}

impl<T> Enriched<T> {
    /// The carried value, enriched or not.
    pub fn into_value(self) -> T {
        match self {
            Enriched::Full(value) => value,
            Enriched::Degraded { value, .. } => value,
        }
    }
}

/// Partition summary ids into lookup groups of `batch_size`, preserving
/// original order.
pub fn partition_ids(summaries: &[ReleaseSummary], batch_size: usize) -> Vec<Vec<u64>> {
    summaries
        .chunks(batch_size.max(1))
        .map(|chunk| chunk.iter().map(|summary| summary.id).collect())
        .collect()
}

/// Collect an id → label mapping by dispatching one paced, retried lookup
/// per group.
///
/// Groups run sequentially in input order; the first dispatch is
/// immediate and later ones are spaced by `pacing`. A group whose call
/// fails after retries leaves its releases unlabeled without affecting
/// other groups. The final mapping is the union of all group results.
pub async fn collect_labels<F, Fut>(
    groups: Vec<Vec<u64>>,
    pacing: Duration,
    policy: &RetryPolicy,
    lookup: F,
) -> Result<HashMap<u64, String>>
where
    F: Fn(Vec<u64>) -> Fut,
    Fut: Future<Output = Result<Vec<ItunesRecord>>>,
{
    let pacer = Pacer::new(pacing);
    let mut labels = HashMap::new();

    for group in groups {
        pacer.pace().await;

        match retry_with_timeout("batch label lookup", policy, || lookup(group.clone())).await {
            Ok(records) => labels.extend(labels_from_records(&records)),
            Err(err) => {
                tracing::warn!(
                    group_size = group.len(),
                    error = %err,
                    "Label lookup group failed, leaving its releases unlabeled"
                );
            }
        }
    }

    Ok(labels)
}

/// Scan lookup records for albums and infer a label from each copyright.
fn labels_from_records(records: &[ItunesRecord]) -> HashMap<u64, String> {
    let mut labels = HashMap::new();

    for record in records.iter().filter(|record| record.is_collection()) {
        let Some(id) = record.collection_id else {
            continue;
        };
        if let Some(label) = infer_label_from_copyright(record.copyright.as_deref()) {
            labels.insert(id, label);
        }
    }

    labels
}

/// Apply the mapping onto the summaries.
///
/// Labels are only ever upgraded from absent to present; order and length
/// are preserved.
pub fn apply_labels(
    summaries: Vec<ReleaseSummary>,
    labels: &HashMap<u64, String>,
) -> Vec<ReleaseSummary> {
    summaries
        .into_iter()
        .map(|mut summary| {
            if let Some(label) = labels.get(&summary.id) {
                summary.label = Some(label.clone());
            }
            summary
        })
        .collect()
}

/// Merge step: await the scheduler and apply its mapping, degrading to the
/// untouched input if the scheduler fails outright.
pub async fn enrich_labels<S>(
    summaries: Vec<ReleaseSummary>,
    scheduler: S,
) -> Enriched<Vec<ReleaseSummary>>
where
    S: Future<Output = Result<HashMap<u64, String>>>,
{
    match scheduler.await {
        Ok(labels) => Enriched::Full(apply_labels(summaries, &labels)),
        Err(err) => {
            tracing::warn!(
                error = %err,
                "Label enrichment failed, returning unenriched summaries"
            );
            Enriched::Degraded {
                value: summaries,
                reason: err.to_string(),
            }
        }
    }
}
