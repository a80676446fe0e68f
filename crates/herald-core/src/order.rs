use crate::model::RecipientReference;

/// Re-sort a reconciled collection into the user's declaration order.
///
/// Drift reconciliation emits entries in observed order. Entries that came
/// through unchanged are placed at the position of the desired entry they
/// equal; materialized entries follow, keeping their relative order.
pub fn sort_by_declaration(
    reconciled: Vec<RecipientReference>,
    desired: &[RecipientReference],
) -> Vec<RecipientReference> {
    let mut keyed: Vec<(Option<usize>, RecipientReference)> = reconciled
        .into_iter()
        .map(|reference| {
            let position = desired.iter().position(|d| *d == reference);
            (position, reference)
        })
        .collect();

    // Stable sort: `None` orders after every `Some`.
    keyed.sort_by_key(|(position, _)| position.unwrap_or(usize::MAX));
    keyed.into_iter().map(|(_, reference)| reference).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drift::reconcile;
    use crate::model::{ObservedRecipient, RecipientType};

    #[test]
    fn test_declaration_order_restored() {
        let observed = vec![
            ObservedRecipient::new("x", RecipientType::Webhook, "hook"),
            ObservedRecipient::new("b", RecipientType::Email, "b@b.com"),
            ObservedRecipient::new("a", RecipientType::Email, "a@b.com"),
        ];
        let desired = vec![
            RecipientReference::by_id("a"),
            RecipientReference::by_locator(RecipientType::Email, "b@b.com"),
        ];

        let sorted = sort_by_declaration(reconcile(&observed, &desired), &desired);
        assert_eq!(
            sorted,
            vec![
                RecipientReference::by_id("a"),
                RecipientReference::by_locator(RecipientType::Email, "b@b.com"),
                RecipientReference::resolved("x", RecipientType::Webhook, "hook"),
            ]
        );
    }

    #[test]
    fn test_placement_uses_equality_not_matching() {
        // A resolved entry satisfied by "a" is still a materialized entry.
        let desired = vec![
            RecipientReference::by_id("b"),
            RecipientReference::by_id("a"),
        ];
        let reconciled = vec![
            RecipientReference::resolved("a", RecipientType::Email, "a@b.com"),
            RecipientReference::by_id("b"),
        ];
        assert_eq!(
            sort_by_declaration(reconciled, &desired),
            vec![
                RecipientReference::by_id("b"),
                RecipientReference::resolved("a", RecipientType::Email, "a@b.com"),
            ]
        );
    }

    #[test]
    fn test_materialized_keep_relative_order() {
        let reconciled = vec![
            RecipientReference::resolved("2", RecipientType::Slack, "#2"),
            RecipientReference::resolved("1", RecipientType::Slack, "#1"),
        ];
        assert_eq!(sort_by_declaration(reconciled.clone(), &[]), reconciled);
    }
}
