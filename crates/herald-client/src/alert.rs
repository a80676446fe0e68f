//! Alerting resources that embed recipients.

use std::fmt;

use async_trait::async_trait;
use herald_core::{ObservedRecipient, RecipientReference};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::HeraldClient;
use crate::error::ClientError;
use crate::source::RecipientSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Trigger,
    BurnAlert,
}

impl AlertKind {
    /// Collection segment in API paths.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::Trigger => "triggers",
            Self::BurnAlert => "burn_alerts",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trigger => f.write_str("trigger"),
            Self::BurnAlert => f.write_str("burn alert"),
        }
    }
}

/// Request body for creating or updating an alert.
///
/// Only `recipients` is interpreted here; every other field is passed through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertSpec {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub recipients: Vec<RecipientReference>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An alert as the remote returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub recipients: Vec<ObservedRecipient>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The recipients embedded in one remote alert.
pub struct AlertRecipients<'a> {
    client: &'a HeraldClient,
    kind: AlertKind,
    dataset: String,
    id: String,
    name: String,
}

impl<'a> AlertRecipients<'a> {
    pub fn new(
        client: &'a HeraldClient,
        kind: AlertKind,
        dataset: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        let dataset = dataset.into();
        let id = id.into();
        let name = format!("{}/{}/{}", kind.path_segment(), dataset, id);
        Self {
            client,
            kind,
            dataset,
            id,
            name,
        }
    }
}

#[async_trait]
impl RecipientSource for AlertRecipients<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_recipients(&self) -> Result<Vec<ObservedRecipient>, ClientError> {
        let alert = self.client.get_alert(self.kind, &self.dataset, &self.id).await?;
        Ok(alert.recipients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::RecipientType;
    use serde_json::json;

    #[test]
    fn test_spec_passes_extra_fields_through() {
        let body = json!({
            "name": "High latency",
            "frequency": 300,
            "recipients": [{"type": "slack", "target": "#ops"}, {"id": "r1"}]
        });
        let spec: AlertSpec = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(spec.recipients.len(), 2);
        assert_eq!(spec.extra["frequency"], 300);
        assert_eq!(serde_json::to_value(&spec).unwrap(), body);
    }

    #[test]
    fn test_alert_without_recipients() {
        let alert: Alert = serde_json::from_value(json!({"id": "t1"})).unwrap();
        assert!(alert.recipients.is_empty());
    }

    #[test]
    fn test_alert_recipients_decode() {
        let alert: Alert = serde_json::from_value(json!({
            "id": "t1",
            "name": "errors",
            "recipients": [{"id": "r1", "type": "email", "target": "a@b.com"}]
        }))
        .unwrap();
        assert_eq!(
            alert.recipients,
            vec![ObservedRecipient::new("r1", RecipientType::Email, "a@b.com")]
        );
    }

    #[test]
    fn test_path_segments() {
        assert_eq!(AlertKind::Trigger.path_segment(), "triggers");
        assert_eq!(AlertKind::BurnAlert.path_segment(), "burn_alerts");
    }
}
