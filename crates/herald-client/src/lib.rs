pub mod alert;
pub mod client;
pub mod error;
pub mod source;
pub mod workflow;

pub use alert::{Alert, AlertKind, AlertRecipients, AlertSpec};
pub use client::{API_KEY_HEADER, HeraldClient};
pub use error::ClientError;
pub use source::{RecipientSource, StaticSource};
pub use workflow::{RecordedAlert, create_alert, refresh, update_alert};
