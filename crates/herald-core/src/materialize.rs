use crate::model::{Addressing, ObservedRecipient, RecipientReference};

/// Pin down an observed recipient nobody referenced.
///
/// We cannot know how the user would have addressed it, so the result carries
/// the ID and the locator, with details copied as-is.
pub fn materialize(observed: &ObservedRecipient) -> RecipientReference {
    RecipientReference {
        addressing: Addressing::Resolved {
            id: observed.id.clone(),
            locator: observed.locator(),
        },
        details: observed.details.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RecipientDetails, RecipientType};

    #[test]
    fn test_materialize_email() {
        let observed = ObservedRecipient::new("abcd", RecipientType::Email, "a@b.com");
        assert_eq!(
            materialize(&observed),
            RecipientReference::resolved("abcd", RecipientType::Email, "a@b.com")
        );
    }

    #[test]
    fn test_materialize_copies_details() {
        let details = RecipientDetails::default().with_variable("env", "prod");
        let observed = ObservedRecipient::new("w1", RecipientType::Webhook, "hook")
            .with_details(details.clone());
        assert_eq!(materialize(&observed).details, Some(details));
    }
}
