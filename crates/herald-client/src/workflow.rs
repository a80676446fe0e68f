//! Where the reconcilers meet the remote.
//!
//! Create/update submit the desired recipients and pair the response against
//! them. Read fetches the current recipients and drift-reconciles them against
//! the recorded collection.

use herald_core::{Pairer, ReconcileOutcome, Reconciler, RecipientReference};
use serde::Serialize;
use tracing::info;

use crate::alert::{Alert, AlertKind, AlertSpec};
use crate::client::HeraldClient;
use crate::error::ClientError;
use crate::source::RecipientSource;

/// An alert after a successful write, with recipients in the caller's addressing.
#[derive(Debug, Clone, Serialize)]
pub struct RecordedAlert {
    pub alert: Alert,
    pub recipients: Vec<RecipientReference>,
}

pub async fn refresh(
    source: &dyn RecipientSource,
    recorded: &[RecipientReference],
    reconciler: &Reconciler,
) -> Result<ReconcileOutcome, ClientError> {
    let observed = source.fetch_recipients().await?;
    info!(
        source = source.name(),
        observed = observed.len(),
        recorded = recorded.len(),
        "refreshing recipients"
    );
    Ok(reconciler.reconcile_detailed(&observed, recorded))
}

pub async fn create_alert(
    client: &HeraldClient,
    kind: AlertKind,
    dataset: &str,
    spec: &AlertSpec,
    pairer: &Pairer,
) -> Result<RecordedAlert, ClientError> {
    let alert = client.create_alert(kind, dataset, spec).await?;
    record(alert, spec, pairer)
}

pub async fn update_alert(
    client: &HeraldClient,
    kind: AlertKind,
    dataset: &str,
    id: &str,
    spec: &AlertSpec,
    pairer: &Pairer,
) -> Result<RecordedAlert, ClientError> {
    let alert = client.update_alert(kind, dataset, id, spec).await?;
    record(alert, spec, pairer)
}

fn record(alert: Alert, spec: &AlertSpec, pairer: &Pairer) -> Result<RecordedAlert, ClientError> {
    let recipients = pairer.pair(&spec.recipients, &alert.recipients)?;
    info!(alert.id = %alert.id, recipients = recipients.len(), "alert recipients recorded");
    Ok(RecordedAlert { alert, recipients })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;
    use herald_core::{ObservedRecipient, RecipientType};

    #[tokio::test]
    async fn test_refresh_from_static_source() {
        let source = StaticSource::new(vec![
            ObservedRecipient::new("e1", RecipientType::Slack, "#c"),
            ObservedRecipient::new("e2", RecipientType::Slack, "#d"),
        ]);
        let recorded = vec![
            RecipientReference::by_locator(RecipientType::Slack, "#d"),
            RecipientReference::by_id("gone"),
        ];

        let outcome = refresh(&source, &recorded, &Reconciler::default())
            .await
            .unwrap();
        assert_eq!(
            outcome.recipients,
            vec![
                RecipientReference::resolved("e1", RecipientType::Slack, "#c"),
                recorded[0].clone(),
            ]
        );
        assert_eq!(outcome.dropped, 1);
    }
}
