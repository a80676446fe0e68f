//! Read/refresh merge.
//!
//! Merges the previously recorded desired collection against a fresh read.
//! Matched entries are passed through untouched so an unchanged remote never
//! shows up as a configuration diff; unknown remote entries are materialized
//! and entries the remote no longer has are dropped. There is no error path.

use serde::Serialize;
use tracing::{debug, info};

use crate::matcher::Matcher;
use crate::materialize::materialize;
use crate::model::{ObservedRecipient, RecipientReference};

/// Result of a drift reconciliation with per-path counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileOutcome {
    /// Refreshed collection, in observed order.
    pub recipients: Vec<RecipientReference>,
    /// Observed entries that matched a desired entry.
    pub preserved: usize,
    /// Observed entries nothing referenced.
    pub materialized: usize,
    /// Desired entries no observed entry satisfied.
    pub dropped: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Reconciler {
    matcher: Matcher,
}

impl Reconciler {
    pub fn new(matcher: Matcher) -> Self {
        Self { matcher }
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn reconcile(
        &self,
        observed: &[ObservedRecipient],
        desired: &[RecipientReference],
    ) -> Vec<RecipientReference> {
        self.reconcile_detailed(observed, desired).recipients
    }

    pub fn reconcile_detailed(
        &self,
        observed: &[ObservedRecipient],
        desired: &[RecipientReference],
    ) -> ReconcileOutcome {
        if observed.is_empty() {
            return ReconcileOutcome {
                dropped: desired.len(),
                ..Default::default()
            };
        }

        if desired.is_empty() {
            return ReconcileOutcome {
                recipients: observed.iter().map(materialize).collect(),
                materialized: observed.len(),
                ..Default::default()
            };
        }

        let mut outcome = ReconcileOutcome {
            recipients: Vec::with_capacity(observed.len()),
            ..Default::default()
        };
        let mut used = vec![false; desired.len()];

        for recipient in observed {
            match self.matcher.find(recipient, desired) {
                Some(index) => {
                    used[index] = true;
                    outcome.preserved += 1;
                    outcome.recipients.push(desired[index].clone());
                }
                None => {
                    debug!(recipient.id = %recipient.id, "materializing unreferenced recipient");
                    outcome.materialized += 1;
                    outcome.recipients.push(materialize(recipient));
                }
            }
        }

        outcome.dropped = used.iter().filter(|used| !**used).count();

        info!(
            preserved = outcome.preserved,
            materialized = outcome.materialized,
            dropped = outcome.dropped,
            "recipients reconciled"
        );

        outcome
    }
}

/// [`Reconciler::reconcile`] with exact target comparison.
pub fn reconcile(
    observed: &[ObservedRecipient],
    desired: &[RecipientReference],
) -> Vec<RecipientReference> {
    Reconciler::default().reconcile(observed, desired)
}
