use super::{bearer_value, next_action, Attempt, RecoveryAction};

#[test]
fn first_401_triggers_refresh_and_retry() {
    assert_eq!(
        next_action(401, Attempt::First),
        RecoveryAction::RefreshAndRetry
    );
}

#[test]
fn second_401_is_terminal() {
    assert_eq!(next_action(401, Attempt::Retried), RecoveryAction::Terminal);
}

#[test]
fn success_passes_through_on_either_attempt() {
    assert_eq!(next_action(200, Attempt::First), RecoveryAction::Pass);
    assert_eq!(next_action(200, Attempt::Retried), RecoveryAction::Pass);
}

#[test]
fn non_401_errors_pass_through_untouched() {
    for status in [400, 403, 404, 409, 500] {
        assert_eq!(next_action(status, Attempt::First), RecoveryAction::Pass);
        assert_eq!(next_action(status, Attempt::Retried), RecoveryAction::Pass);
    }
}

#[test]
fn bearer_value_formats_header() {
    assert_eq!(bearer_value("abc.def.ghi"), "Bearer abc.def.ghi");
}
