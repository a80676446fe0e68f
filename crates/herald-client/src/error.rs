use herald_core::PairingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to connect to server: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Recipient pairing failed: {0}")]
    Pairing(#[from] PairingError),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}
