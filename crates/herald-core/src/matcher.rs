//! The single satisfaction predicate shared by pairing and drift reconciliation.

use serde::{Deserialize, Serialize};

use crate::model::{Addressing, Locator, ObservedRecipient, RecipientReference};

/// How locator targets are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetMatch {
    /// Targets must be equal.
    #[default]
    Exact,
    /// A desired locator with an empty target matches any target of its type.
    EmptyIsWildcard,
}

/// Finds the desired reference an observed recipient satisfies.
///
/// Satisfaction holds when the IDs are equal, or when type and target are
/// equal. A resolved reference is satisfied through either key. Nothing else
/// (details in particular) takes part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Matcher {
    target_match: TargetMatch,
}

impl Matcher {
    pub const fn new() -> Self {
        Self {
            target_match: TargetMatch::Exact,
        }
    }

    pub const fn with_target_match(target_match: TargetMatch) -> Self {
        Self { target_match }
    }

    pub fn target_match(&self) -> TargetMatch {
        self.target_match
    }

    pub fn satisfies(&self, observed: &ObservedRecipient, reference: &RecipientReference) -> bool {
        match &reference.addressing {
            Addressing::Id(id) => *id == observed.id,
            Addressing::Locator(locator) => self.locator_matches(observed, locator),
            Addressing::Resolved { id, locator } => {
                *id == observed.id || self.locator_matches(observed, locator)
            }
        }
    }

    /// Index of the first entry in `desired` that `observed` satisfies.
    ///
    /// Declaration order is the tie-break: with duplicate or ambiguous
    /// entries the earliest one wins and no error is raised.
    pub fn find(&self, observed: &ObservedRecipient, desired: &[RecipientReference]) -> Option<usize> {
        desired
            .iter()
            .position(|reference| self.satisfies(observed, reference))
    }

    fn locator_matches(&self, observed: &ObservedRecipient, locator: &Locator) -> bool {
        if locator.kind != observed.kind {
            return false;
        }
        match self.target_match {
            TargetMatch::Exact => locator.target == observed.target,
            TargetMatch::EmptyIsWildcard => {
                locator.target.is_empty() || locator.target == observed.target
            }
        }
    }
}

/// [`Matcher::find`] with exact target comparison.
pub fn find_match(observed: &ObservedRecipient, desired: &[RecipientReference]) -> Option<usize> {
    Matcher::new().find(observed, desired)
}

/// [`Matcher::satisfies`] with exact target comparison.
pub fn satisfies(observed: &ObservedRecipient, reference: &RecipientReference) -> bool {
    Matcher::new().satisfies(observed, reference)
}
