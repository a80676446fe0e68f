//! Recipient data model.
//!
//! A [`RecipientReference`] is what the user wrote: either an ID issued by the
//! remote, or a `(type, target)` [`Locator`]. An [`ObservedRecipient`] is what
//! the remote returns, always with every key populated.
//!
//! The addressing mode is a sum type rather than a set of optional fields, so a
//! reference can never hold a half-specified locator. The flat JSON shape
//! (`{"id": ..}` / `{"type": .., "target": ..}`) is kept on the wire.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ReferenceShapeError;

/// Recipient channel type.
///
/// Unknown type strings are kept as [`RecipientType::Other`] so that a remote
/// which learned a new channel does not break reads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecipientType {
    Email,
    Slack,
    PagerDuty,
    Webhook,
    MsTeams,
    MsTeamsWorkflow,
    Other(String),
}

impl RecipientType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Email => "email",
            Self::Slack => "slack",
            Self::PagerDuty => "pagerduty",
            Self::Webhook => "webhook",
            Self::MsTeams => "msteams",
            Self::MsTeamsWorkflow => "msteams_workflow",
            Self::Other(other) => other,
        }
    }

    /// Whether the remote fills in server-assigned details for this type
    /// (e.g. a default PagerDuty severity) when the caller leaves them out.
    pub fn is_server_enriched(&self) -> bool {
        matches!(self, Self::PagerDuty)
    }
}

impl From<String> for RecipientType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "email" => Self::Email,
            "slack" => Self::Slack,
            "pagerduty" => Self::PagerDuty,
            "webhook" => Self::Webhook,
            "msteams" => Self::MsTeams,
            "msteams_workflow" => Self::MsTeamsWorkflow,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for RecipientType {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<RecipientType> for String {
    fn from(value: RecipientType) -> Self {
        match value {
            RecipientType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RecipientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// PagerDuty incident severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PagerDutySeverity {
    Info,
    Warning,
    Error,
    Critical,
}

/// Webhook template variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateVariable {
    pub name: String,
    pub value: String,
}

/// Type-specific recipient payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipientDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagerduty_severity: Option<PagerDutySeverity>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<TemplateVariable>,
}

impl RecipientDetails {
    pub fn pagerduty(severity: PagerDutySeverity) -> Self {
        Self {
            pagerduty_severity: Some(severity),
            ..Default::default()
        }
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.push(TemplateVariable {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}

/// `(type, target)` pair identifying a recipient without its ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locator {
    #[serde(rename = "type")]
    pub kind: RecipientType,
    pub target: String,
}

impl Locator {
    pub fn new(kind: impl Into<RecipientType>, target: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.target)
    }
}

/// How a reference identifies its recipient.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Addressing {
    /// Addressed by remote-issued ID only.
    Id(String),
    /// Addressed by `(type, target)` only.
    Locator(Locator),
    /// Fully pinned. Only produced by materializing an observed recipient the
    /// user never referenced.
    Resolved { id: String, locator: Locator },
}

/// Discriminant of [`Addressing`], for logs and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressingMode {
    Id,
    Locator,
    Resolved,
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id => f.write_str("id"),
            Self::Locator => f.write_str("locator"),
            Self::Resolved => f.write_str("resolved"),
        }
    }
}

impl Addressing {
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Id(id) | Self::Resolved { id, .. } => Some(id),
            Self::Locator(_) => None,
        }
    }

    pub fn locator(&self) -> Option<&Locator> {
        match self {
            Self::Locator(locator) | Self::Resolved { locator, .. } => Some(locator),
            Self::Id(_) => None,
        }
    }

    pub fn mode(&self) -> AddressingMode {
        match self {
            Self::Id(_) => AddressingMode::Id,
            Self::Locator(_) => AddressingMode::Locator,
            Self::Resolved { .. } => AddressingMode::Resolved,
        }
    }
}

/// A user-specified pointer to a recipient.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawReference", into = "RawReference")]
pub struct RecipientReference {
    pub addressing: Addressing,
    pub details: Option<RecipientDetails>,
}

impl RecipientReference {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            addressing: Addressing::Id(id.into()),
            details: None,
        }
    }

    pub fn by_locator(kind: impl Into<RecipientType>, target: impl Into<String>) -> Self {
        Self {
            addressing: Addressing::Locator(Locator::new(kind, target)),
            details: None,
        }
    }

    pub fn resolved(
        id: impl Into<String>,
        kind: impl Into<RecipientType>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            addressing: Addressing::Resolved {
                id: id.into(),
                locator: Locator::new(kind, target),
            },
            details: None,
        }
    }

    pub fn with_details(mut self, details: RecipientDetails) -> Self {
        self.details = Some(details);
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.addressing.id()
    }

    pub fn locator(&self) -> Option<&Locator> {
        self.addressing.locator()
    }

    pub fn mode(&self) -> AddressingMode {
        self.addressing.mode()
    }
}

impl fmt::Display for RecipientReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.addressing {
            Addressing::Id(id) => write!(f, "id:{id}"),
            Addressing::Locator(locator) => write!(f, "{locator}"),
            Addressing::Resolved { id, locator } => write!(f, "{id} ({locator})"),
        }
    }
}

/// Flat wire shape of a reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<RecipientType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    target: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<RecipientDetails>,
}

impl TryFrom<RawReference> for RecipientReference {
    type Error = ReferenceShapeError;

    fn try_from(raw: RawReference) -> Result<Self, Self::Error> {
        // A cleared ID is stored as an empty string by some callers.
        let id = raw.id.filter(|id| !id.is_empty());
        let kind = raw.kind.filter(|kind| !kind.as_str().is_empty());

        let locator = match (kind, raw.target) {
            (Some(kind), Some(target)) => Some(Locator { kind, target }),
            (Some(_), None) => return Err(ReferenceShapeError::IncompleteLocator("type")),
            (None, Some(target)) if !target.is_empty() => {
                return Err(ReferenceShapeError::IncompleteLocator("target"));
            }
            (None, _) => None,
        };

        let addressing = match (id, locator) {
            (Some(id), Some(locator)) => Addressing::Resolved { id, locator },
            (Some(id), None) => Addressing::Id(id),
            (None, Some(locator)) => Addressing::Locator(locator),
            (None, None) => return Err(ReferenceShapeError::Unaddressed),
        };

        Ok(Self {
            addressing,
            details: raw.details,
        })
    }
}

impl From<RecipientReference> for RawReference {
    fn from(reference: RecipientReference) -> Self {
        let (id, locator) = match reference.addressing {
            Addressing::Id(id) => (Some(id), None),
            Addressing::Locator(locator) => (None, Some(locator)),
            Addressing::Resolved { id, locator } => (Some(id), Some(locator)),
        };
        let (kind, target) = match locator {
            Some(Locator { kind, target }) => (Some(kind), Some(target)),
            None => (None, None),
        };
        Self {
            id,
            kind,
            target,
            details: reference.details,
        }
    }
}

/// The remote system's fully resolved record for a recipient.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObservedRecipient {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: RecipientType,

    pub target: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<RecipientDetails>,
}

impl ObservedRecipient {
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<RecipientType>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            target: target.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: RecipientDetails) -> Self {
        self.details = Some(details);
        self
    }

    pub fn locator(&self) -> Locator {
        Locator {
            kind: self.kind.clone(),
            target: self.target.clone(),
        }
    }
}

impl fmt::Display for ObservedRecipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:{})", self.id, self.kind, self.target)
    }
}
