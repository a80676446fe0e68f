//! Before/after comparison of two reference collections.

use serde::Serialize;

use crate::model::RecipientReference;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecipientDiff {
    pub unchanged: Vec<RecipientReference>,
    pub added: Vec<RecipientReference>,
    pub removed: Vec<RecipientReference>,
}

impl RecipientDiff {
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty()
    }
}

/// Compare `before` and `after` by value, ignoring order.
pub fn diff(before: &[RecipientReference], after: &[RecipientReference]) -> RecipientDiff {
    let mut result = RecipientDiff::default();

    for reference in after {
        if before.contains(reference) {
            result.unchanged.push(reference.clone());
        } else {
            result.added.push(reference.clone());
        }
    }
    result.removed = before
        .iter()
        .filter(|reference| !after.contains(reference))
        .cloned()
        .collect();

    result
}
