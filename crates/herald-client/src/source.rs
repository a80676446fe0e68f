use async_trait::async_trait;
use herald_core::ObservedRecipient;

use crate::error::ClientError;

/// Anything that can produce the authoritative remote recipient collection.
///
/// Errors are transport errors; they propagate to the caller unchanged and the
/// reconciler is never run on a failed fetch.
#[async_trait]
pub trait RecipientSource: Send + Sync {
    /// Name of this source (for logging and debugging)
    fn name(&self) -> &str;

    async fn fetch_recipients(&self) -> Result<Vec<ObservedRecipient>, ClientError>;
}

/// Fixed in-memory collection.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    recipients: Vec<ObservedRecipient>,
}

impl StaticSource {
    pub fn new(recipients: Vec<ObservedRecipient>) -> Self {
        Self { recipients }
    }
}

#[async_trait]
impl RecipientSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_recipients(&self) -> Result<Vec<ObservedRecipient>, ClientError> {
        Ok(self.recipients.clone())
    }
}
