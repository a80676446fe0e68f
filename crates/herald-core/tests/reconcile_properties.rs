use assert_json_diff::assert_json_eq;
use herald_core::{
    Addressing, ObservedRecipient, PagerDutySeverity, PairingError, RecipientDetails,
    RecipientReference, RecipientType, find_match, materialize, pair, reconcile,
};
use serde_json::json;

fn observed_fixture() -> Vec<ObservedRecipient> {
    vec![
        ObservedRecipient::new("e1", RecipientType::Slack, "#c"),
        ObservedRecipient::new("e2", RecipientType::Slack, "#d"),
        ObservedRecipient::new("m1", RecipientType::Email, "a@b.com"),
        ObservedRecipient::new("p1", RecipientType::PagerDuty, "svc")
            .with_details(RecipientDetails::pagerduty(PagerDutySeverity::Critical)),
    ]
}

fn desired_fixtures() -> Vec<Vec<RecipientReference>> {
    vec![
        vec![],
        vec![RecipientReference::by_id("x")],
        vec![RecipientReference::by_locator(RecipientType::Slack, "#d")],
        vec![
            RecipientReference::by_id("p1")
                .with_details(RecipientDetails::pagerduty(PagerDutySeverity::Info)),
            RecipientReference::by_locator(RecipientType::Email, "a@b.com"),
            RecipientReference::by_id("stale"),
        ],
        vec![
            RecipientReference::resolved("e1", RecipientType::Slack, "#c"),
            RecipientReference::by_locator(RecipientType::Slack, "#c"),
            RecipientReference::by_id("e2"),
        ],
    ]
}

#[test]
fn scenario_a_empty_observed() {
    assert!(reconcile(&[], &[RecipientReference::by_id("x")]).is_empty());
}

#[test]
fn scenario_b_empty_desired() {
    let observed = vec![ObservedRecipient::new("abcd", RecipientType::Email, "a@b.com")];
    let refreshed = reconcile(&observed, &[]);
    assert_json_eq!(
        serde_json::to_value(&refreshed).unwrap(),
        json!([{"id": "abcd", "type": "email", "target": "a@b.com"}])
    );
}

#[test]
fn scenario_c_mixed() {
    let observed = vec![
        ObservedRecipient::new("e1", RecipientType::Slack, "#c"),
        ObservedRecipient::new("e2", RecipientType::Slack, "#d"),
    ];
    let desired: Vec<RecipientReference> =
        serde_json::from_value(json!([{"type": "slack", "target": "#d"}])).unwrap();

    let refreshed = reconcile(&observed, &desired);
    assert_json_eq!(
        serde_json::to_value(&refreshed).unwrap(),
        json!([
            {"id": "e1", "type": "slack", "target": "#c"},
            {"type": "slack", "target": "#d"}
        ])
    );
}

#[test]
fn scenario_d_pairing_keeps_locator() {
    let submitted = vec![RecipientReference::by_locator(RecipientType::Email, "a@b.com")];
    let observed = vec![ObservedRecipient::new("new1", RecipientType::Email, "a@b.com")];

    let paired = pair(&submitted, &observed).unwrap();
    assert_json_eq!(
        serde_json::to_value(&paired).unwrap(),
        json!([{"type": "email", "target": "a@b.com"}])
    );
}

#[test]
fn scenario_e_pairing_failure() {
    let submitted = vec![RecipientReference::by_id("x")];
    let observed = vec![ObservedRecipient::new("y", RecipientType::Email, "y@b.com")];

    let err = pair(&submitted, &observed).unwrap_err();
    assert!(matches!(err, PairingError::UnmatchedRecipient { ref id } if id == "y"));
}

#[test]
fn reconcile_is_idempotent() {
    let observed = observed_fixture();
    for desired in desired_fixtures() {
        let once = reconcile(&observed, &desired);
        let twice = reconcile(&observed, &once);
        assert_eq!(twice, once, "desired: {desired:?}");
    }
}

#[test]
fn empty_observed_absorbs_everything() {
    for desired in desired_fixtures() {
        assert!(reconcile(&[], &desired).is_empty());
    }
}

#[test]
fn empty_desired_materializes_everything() {
    let observed = observed_fixture();
    let expected: Vec<_> = observed.iter().map(materialize).collect();
    assert_eq!(reconcile(&observed, &[]), expected);
}

#[test]
fn uniquely_matched_entries_are_preserved() {
    let observed = observed_fixture();
    for desired in desired_fixtures() {
        let refreshed = reconcile(&observed, &desired);
        for entry in &desired {
            let satisfying: Vec<_> = observed
                .iter()
                .filter(|o| find_match(o, std::slice::from_ref(entry)).is_some())
                .collect();
            let unique = satisfying.iter().all(|o| {
                desired
                    .iter()
                    .filter(|d| find_match(o, std::slice::from_ref(*d)).is_some())
                    .count()
                    == 1
            });
            if !satisfying.is_empty() && unique {
                assert!(refreshed.contains(entry), "{entry} missing from {refreshed:?}");
            }
        }
    }
}

#[test]
fn stale_entries_never_survive() {
    let observed = observed_fixture();
    for desired in desired_fixtures() {
        let refreshed = reconcile(&observed, &desired);
        for entry in &desired {
            let satisfied = observed
                .iter()
                .any(|o| find_match(o, std::slice::from_ref(entry)).is_some());
            if !satisfied {
                assert!(!refreshed.contains(entry), "{entry} should have been dropped");
            }
        }
    }
}

#[test]
fn addressing_mode_survives_repeated_reads() {
    let observed = observed_fixture();
    let mut state = vec![
        RecipientReference::by_locator(RecipientType::Slack, "#d"),
        RecipientReference::by_id("m1"),
    ];
    for _ in 0..3 {
        state = reconcile(&observed, &state);
    }
    assert!(state.contains(&RecipientReference::by_locator(RecipientType::Slack, "#d")));
    assert!(state.contains(&RecipientReference::by_id("m1")));
    assert!(
        state
            .iter()
            .filter(|r| matches!(r.addressing, Addressing::Resolved { .. }))
            .all(|r| matches!(r.id(), Some("e1") | Some("p1")))
    );
}

#[test]
fn create_then_read_has_no_drift() {
    let submitted = vec![
        RecipientReference::by_locator(RecipientType::Email, "a@b.com"),
        RecipientReference::by_id("e1"),
    ];
    let observed = vec![
        ObservedRecipient::new("m1", RecipientType::Email, "a@b.com"),
        ObservedRecipient::new("e1", RecipientType::Slack, "#c"),
    ];

    let recorded = pair(&submitted, &observed).unwrap();
    assert_eq!(reconcile(&observed, &recorded), submitted);
}
