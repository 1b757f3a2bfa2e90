use super::{NoticeLevel, NoticeState};

#[test]
fn push_assigns_unique_ids() {
    let mut state = NoticeState::default();
    state.push(NoticeLevel::Error, "one");
    state.push(NoticeLevel::Error, "two");
    assert_eq!(state.notices.len(), 2);
    assert_ne!(state.notices[0].id, state.notices[1].id);
}

#[test]
fn push_unique_skips_duplicate_message() {
    let mut state = NoticeState::default();
    state.push_unique(NoticeLevel::Error, "session expired");
    state.push_unique(NoticeLevel::Error, "session expired");
    assert_eq!(state.notices.len(), 1);
}

#[test]
fn push_unique_allows_distinct_messages() {
    let mut state = NoticeState::default();
    state.push_unique(NoticeLevel::Error, "first");
    state.push_unique(NoticeLevel::Warning, "second");
    assert_eq!(state.notices.len(), 2);
}

#[test]
fn push_unique_allows_repeat_after_dismiss() {
    let mut state = NoticeState::default();
    state.push_unique(NoticeLevel::Error, "again");
    let id = state.notices[0].id.clone();
    state.dismiss(&id);
    state.push_unique(NoticeLevel::Error, "again");
    assert_eq!(state.notices.len(), 1);
}

#[test]
fn dismiss_removes_only_matching_notice() {
    let mut state = NoticeState::default();
    state.push(NoticeLevel::Success, "keep");
    state.push(NoticeLevel::Error, "drop");
    let id = state.notices[1].id.clone();
    state.dismiss(&id);
    assert_eq!(state.notices.len(), 1);
    assert_eq!(state.notices[0].message, "keep");
}
