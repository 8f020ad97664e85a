mod common;

use common::{reserved, reserved_map, ts, FixedClock};
use rdv_core::domain::services::booking_flow::{BookingFlow, FlowState};
use rdv_core::domain::services::validation::SlotRejection;
use std::sync::Arc;

fn flow() -> BookingFlow {
    let reserved = reserved_map(vec![
        ("m1", vec![reserved("2025-06-10T10:00")]),
        ("m2", vec![]),
    ]);
    BookingFlow::new(reserved, Arc::new(FixedClock(ts("2025-06-01T08:00"))))
}

#[test]
fn test_initial_state_has_no_merchant() {
    let flow = flow();
    assert_eq!(flow.state(), FlowState::NoMerchantSelected);
    assert!(flow.availability().is_empty());
    assert!(flow.candidate().is_none());
}

#[test]
fn test_pick_before_merchant_selection_is_ignored() {
    let mut flow = flow();

    assert_eq!(flow.pick_slot(ts("2025-06-10T12:00")), Ok(()));
    assert_eq!(flow.state(), FlowState::NoMerchantSelected);
    assert!(flow.candidate().is_none(), "No candidate without a merchant");
}

#[test]
fn test_accepted_pick_retains_candidate() {
    let mut flow = flow();
    flow.select_merchant("m1");
    assert_eq!(flow.state(), FlowState::MerchantSelected);

    assert_eq!(flow.pick_slot(ts("2025-06-10T12:00")), Ok(()));
    assert_eq!(flow.state(), FlowState::CandidateChosen);

    let candidate = flow.candidate().expect("candidate retained on accept");
    assert_eq!(candidate.merchant_id, "m1");
    assert_eq!(candidate.starts_at, ts("2025-06-10T12:00"));
}

#[test]
fn test_rejected_pick_keeps_merchant_selected() {
    let mut flow = flow();
    flow.select_merchant("m1");

    let verdict = flow.pick_slot(ts("2025-06-10T10:30"));
    assert_eq!(verdict, Err(SlotRejection::SlotTaken));
    assert_eq!(flow.state(), FlowState::MerchantSelected);
    assert!(flow.candidate().is_none(), "Rejected candidate is discarded");
}

#[test]
fn test_new_pick_replaces_previous_candidate() {
    let mut flow = flow();
    flow.select_merchant("m1");

    assert_eq!(flow.pick_slot(ts("2025-06-10T12:00")), Ok(()));
    assert_eq!(flow.pick_slot(ts("2025-06-10T14:00")), Ok(()));

    assert_eq!(flow.candidate().unwrap().starts_at, ts("2025-06-10T14:00"));
}

#[test]
fn test_rejected_pick_discards_previous_candidate() {
    let mut flow = flow();
    flow.select_merchant("m1");

    assert_eq!(flow.pick_slot(ts("2025-06-10T12:00")), Ok(()));
    assert_eq!(
        flow.pick_slot(ts("2025-06-10T10:30")),
        Err(SlotRejection::SlotTaken)
    );

    assert!(
        flow.candidate().is_none(),
        "A rejected pick must not silently keep the earlier candidate"
    );
}

#[test]
fn test_switching_merchant_clears_candidate() {
    let mut flow = flow();
    flow.select_merchant("m1");
    assert_eq!(flow.pick_slot(ts("2025-06-10T12:00")), Ok(()));

    // m2 would have accepted the same timestamp; the candidate is still
    // discarded because it was validated against m1.
    flow.select_merchant("m2");
    assert_eq!(flow.state(), FlowState::MerchantSelected);
    assert_eq!(flow.merchant_id(), Some("m2"));
    assert!(flow.candidate().is_none());
}

#[test]
fn test_availability_follows_selected_merchant() {
    let mut flow = flow();

    flow.select_merchant("m1");
    assert_eq!(
        flow.pick_slot(ts("2025-06-10T10:30")),
        Err(SlotRejection::SlotTaken)
    );

    flow.select_merchant("m2");
    assert_eq!(
        flow.pick_slot(ts("2025-06-10T10:30")),
        Ok(()),
        "The same timestamp is free on the other merchant's calendar"
    );
}

#[test]
fn test_complete_hands_over_candidate() {
    let mut flow = flow();
    flow.select_merchant("m1");
    assert_eq!(flow.pick_slot(ts("2025-06-10T12:00")), Ok(()));

    let committed = flow.complete().expect("candidate handed to submission");
    assert_eq!(committed.merchant_id, "m1");
    assert_eq!(committed.starts_at, ts("2025-06-10T12:00"));
    assert_eq!(flow.state(), FlowState::Completed);

    assert!(flow.complete().is_none(), "Completion is terminal");
    assert_eq!(flow.state(), FlowState::Completed);
}

#[test]
fn test_complete_without_candidate_is_a_noop() {
    let mut flow = flow();
    flow.select_merchant("m1");

    assert!(flow.complete().is_none());
    assert_eq!(flow.state(), FlowState::MerchantSelected);
}

#[test]
fn test_selecting_merchant_after_completion_starts_fresh() {
    let mut flow = flow();
    flow.select_merchant("m1");
    assert_eq!(flow.pick_slot(ts("2025-06-10T12:00")), Ok(()));
    flow.complete();

    flow.select_merchant("m2");
    assert_eq!(flow.state(), FlowState::MerchantSelected);
    assert!(flow.candidate().is_none());
}
