//! Duplicate detection for desired collections.
//!
//! The matcher resolves ambiguity by declaration order, which silently hides
//! the later entry. Callers run this before reconciling to report such
//! entries to the user.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::model::{Locator, RecipientReference};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "by", rename_all = "lowercase")]
pub enum DuplicateKey {
    Id { id: String },
    Locator { locator: Locator },
}

impl fmt::Display for DuplicateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id { id } => write!(f, "id {id}"),
            Self::Locator { locator } => write!(f, "locator {locator}"),
        }
    }
}

/// Two desired entries that identify the same recipient. `shadowed` can never
/// be matched while `first` exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Duplicate {
    pub first: usize,
    pub shadowed: usize,
    pub key: DuplicateKey,
}

pub fn find_duplicates(desired: &[RecipientReference]) -> Vec<Duplicate> {
    let mut duplicates = Vec::new();

    for (shadowed, later) in desired.iter().enumerate() {
        let Some((first, key)) = desired[..shadowed]
            .iter()
            .enumerate()
            .find_map(|(first, earlier)| shared_key(earlier, later).map(|key| (first, key)))
        else {
            continue;
        };
        warn!(first, shadowed, key = %key, "duplicate recipient reference");
        duplicates.push(Duplicate {
            first,
            shadowed,
            key,
        });
    }

    duplicates
}

fn shared_key(a: &RecipientReference, b: &RecipientReference) -> Option<DuplicateKey> {
    if let (Some(left), Some(right)) = (a.id(), b.id())
        && left == right
    {
        return Some(DuplicateKey::Id {
            id: left.to_string(),
        });
    }
    if let (Some(left), Some(right)) = (a.locator(), b.locator())
        && left == right
    {
        return Some(DuplicateKey::Locator {
            locator: left.clone(),
        });
    }
    None
}
