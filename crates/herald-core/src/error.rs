use thiserror::Error;

/// Failure to align a write response with the collection that was submitted.
///
/// Always fatal for the enclosing create/update: retrying would resend the
/// same request and get the same inconsistent answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairingError {
    #[error("could not find recipient {id} in the submitted recipients")]
    UnmatchedRecipient { id: String },

    #[error("remote returned {observed} recipients for {submitted} submitted")]
    LengthMismatch { submitted: usize, observed: usize },
}

impl PairingError {
    pub fn unmatched(id: impl Into<String>) -> Self {
        Self::UnmatchedRecipient { id: id.into() }
    }

    /// ID of the observed recipient that could not be traced, if any.
    pub fn recipient_id(&self) -> Option<&str> {
        match self {
            Self::UnmatchedRecipient { id } => Some(id),
            Self::LengthMismatch { .. } => None,
        }
    }
}

/// A serialized reference that carries neither a usable ID nor a complete locator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceShapeError {
    #[error("recipient must set either `id` or both `type` and `target`")]
    Unaddressed,

    #[error("recipient sets `{0}` alone; `type` and `target` must be set together")]
    IncompleteLocator(&'static str),
}
