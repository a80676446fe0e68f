//! Post-write alignment.
//!
//! After a create or update whose request body was exactly `submitted`, the
//! remote echoes back fully resolved recipients. Pairing maps every one of them
//! onto the submitted entry it came from, keeping the user's addressing mode.
//! Every submitted entry is consumed by at most one observed recipient, so the
//! two collections line up one to one. It is all-or-nothing: a single recipient that cannot be traced fails the
//! whole write.

use tracing::{debug, warn};

use crate::error::PairingError;
use crate::matcher::Matcher;
use crate::model::{Addressing, ObservedRecipient, RecipientReference};

#[derive(Debug, Clone, Copy, Default)]
pub struct Pairer {
    matcher: Matcher,
}

impl Pairer {
    pub fn new(matcher: Matcher) -> Self {
        Self { matcher }
    }

    pub fn pair(
        &self,
        submitted: &[RecipientReference],
        observed: &[ObservedRecipient],
    ) -> Result<Vec<RecipientReference>, PairingError> {
        let mut paired = Vec::with_capacity(observed.len());
        // Each submitted entry confirms at most one observed recipient.
        let mut used = vec![false; submitted.len()];

        for recipient in observed {
            let candidate = submitted
                .iter()
                .zip(&used)
                .position(|(reference, used)| {
                    !used && self.matcher.satisfies(recipient, reference)
                });
            let Some(index) = candidate else {
                warn!(
                    recipient.id = %recipient.id,
                    recipient.kind = %recipient.kind,
                    "remote returned a recipient with no unpaired submitted entry"
                );
                return Err(PairingError::unmatched(&recipient.id));
            };
            used[index] = true;
            let source = &submitted[index];
            debug!(
                recipient.id = %recipient.id,
                submitted = index,
                mode = %source.mode(),
                "paired recipient"
            );
            paired.push(pair_one(source, recipient));
        }

        if observed.len() != submitted.len() {
            warn!(
                submitted = submitted.len(),
                observed = observed.len(),
                "recipient count changed across write"
            );
            return Err(PairingError::LengthMismatch {
                submitted: submitted.len(),
                observed: observed.len(),
            });
        }

        Ok(paired)
    }
}

/// [`Pairer::pair`] with exact target comparison.
pub fn pair(
    submitted: &[RecipientReference],
    observed: &[ObservedRecipient],
) -> Result<Vec<RecipientReference>, PairingError> {
    Pairer::default().pair(submitted, observed)
}

fn pair_one(source: &RecipientReference, observed: &ObservedRecipient) -> RecipientReference {
    let addressing = match &source.addressing {
        Addressing::Id(_) => Addressing::Id(observed.id.clone()),
        // The ID stays cleared so the stored form matches what the user wrote.
        Addressing::Locator(locator) => Addressing::Locator(locator.clone()),
        Addressing::Resolved { .. } => Addressing::Resolved {
            id: observed.id.clone(),
            locator: observed.locator(),
        },
    };

    let details = if observed.kind.is_server_enriched() {
        observed.details.clone().or_else(|| source.details.clone())
    } else {
        source.details.clone()
    };

    RecipientReference {
        addressing,
        details,
    }
}
