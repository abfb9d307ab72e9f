use promise_view::ui::core::{Outcome, PromiseState, Status};

#[test]
fn test_status_keys() {
    assert_eq!(Status::Pending.key(), "onPending");
    assert_eq!(Status::Fulfilled.key(), "onFulfilled");
    assert_eq!(Status::Rejected.key(), "onRejected");
    assert_eq!(Status::default(), Status::Pending);
}

#[test]
fn test_only_pending_is_unsettled() {
    assert!(!Status::Pending.is_settled());
    assert!(Status::Fulfilled.is_settled());
    assert!(Status::Rejected.is_settled());
}

#[test]
fn test_outcome_from_result() {
    let ok: Outcome<&str, &str> = Ok("ok").into();
    let err: Outcome<&str, &str> = Err("nope").into();

    assert_eq!(ok.status(), Status::Fulfilled);
    assert_eq!(err.status(), Status::Rejected);
}

#[test]
fn test_state_follows_outcome() {
    let state: PromiseState<u8, u8> = PromiseState::from(Outcome::Rejected(3));
    assert!(state.is_rejected());
    assert_eq!(state.status(), Status::Rejected);

    let pending: PromiseState<u8, u8> = PromiseState::default();
    assert!(pending.is_pending());
}
