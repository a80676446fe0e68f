//! Recipient reconciliation for alerting resources.
//!
//! Alerting resources (triggers, burn alerts) embed a list of notification
//! recipients. Users address a recipient either by the ID the remote system
//! issued or by a `(type, target)` locator, while the remote always answers
//! with fully resolved records. This crate merges the two views:
//!
//! - [`pair`] aligns a freshly written collection against the response to
//!   that exact write and fails loudly on anything it cannot trace back.
//! - [`reconcile`] merges recorded state against a fresh read, keeping each
//!   user's addressing choice and never raising an error.
//!
//! # Example
//!
//! ```
//! use herald_core::{reconcile, ObservedRecipient, RecipientReference, RecipientType};
//!
//! let observed = vec![
//!     ObservedRecipient::new("e1", RecipientType::Slack, "#c"),
//!     ObservedRecipient::new("e2", RecipientType::Slack, "#d"),
//! ];
//! let desired = vec![RecipientReference::by_locator(RecipientType::Slack, "#d")];
//!
//! let refreshed = reconcile(&observed, &desired);
//! assert_eq!(refreshed[0], RecipientReference::resolved("e1", RecipientType::Slack, "#c"));
//! assert_eq!(refreshed[1], desired[0]);
//! ```

pub mod drift;
pub mod error;
pub mod matcher;
pub mod materialize;
pub mod model;
pub mod order;
pub mod pairing;
pub mod summary;
pub mod validate;

pub use drift::{ReconcileOutcome, Reconciler, reconcile};
pub use error::{PairingError, ReferenceShapeError};
pub use matcher::{Matcher, TargetMatch, find_match, satisfies};
pub use materialize::materialize;
pub use model::{
    Addressing, AddressingMode, Locator, ObservedRecipient, PagerDutySeverity, RecipientDetails,
    RecipientReference, RecipientType, TemplateVariable,
};
pub use order::sort_by_declaration;
pub use pairing::{Pairer, pair};
pub use summary::{RecipientDiff, diff};
pub use validate::{Duplicate, DuplicateKey, find_duplicates};
