/*!
 * Resolution State Tests
 */

use cleanup_guard::*;
use pretty_assertions::assert_eq;

#[test]
fn test_state_serialization() {
    let json = serde_json::to_string(&ResolutionState::Canceled).unwrap();
    assert_eq!(json, "\"canceled\"");

    let states = vec![
        ResolutionState::Unresolved,
        ResolutionState::Fired,
        ResolutionState::Canceled,
    ];
    let json = serde_json::to_string(&states).unwrap();
    assert_eq!(json, r#"["unresolved","fired","canceled"]"#);

    let decoded: Vec<ResolutionState> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, states);
}

#[test]
fn test_guard_state_snapshot() {
    let fired = CallbackGuard::empty();
    let canceled = CallbackGuard::empty();
    let pending = CallbackGuard::empty();

    fired.fire().unwrap();
    canceled.cancel().unwrap();

    let snapshot = serde_json::json!({
        "fired": fired.state(),
        "canceled": canceled.state(),
        "pending": pending.state(),
    });

    assert_eq!(
        snapshot,
        serde_json::json!({
            "fired": "fired",
            "canceled": "canceled",
            "pending": "unresolved",
        })
    );
}

#[test]
fn test_error_resolution_matches_state() {
    let guard = CallbackGuard::empty();
    guard.cancel().unwrap();

    let err = guard.fire().unwrap_err();
    assert_eq!(err.resolution(), guard.state().terminal());
    assert_eq!(err.resolution(), Some(Resolution::Canceled));
}
