use community_connect::core::models::{ThreadCategory, ThreadStatus};
use community_connect::core::state::CommunityState;

#[test]
fn test_seeded_state_has_the_mock_collections() {
    let state = CommunityState::seeded();
    assert_eq!(state.threads.len(), 7);
    assert_eq!(state.vendors.len(), 3);
    assert_eq!(state.stores.len(), 2);
}

#[test]
fn test_add_thread_inserts_at_front_with_open_status() {
    let mut state = CommunityState::seeded();
    let before = state.threads.len();

    let id = state.add_thread(
        "Water issue",
        "Low pressure in Block C",
        ThreadCategory::RwaIssue,
        "You",
        "A-101",
    );

    assert_eq!(state.threads.len(), before + 1);
    let newest = &state.threads[0];
    assert_eq!(newest.id, id);
    assert_eq!(newest.title, "Water issue");
    assert_eq!(newest.status, ThreadStatus::Open);
    assert_eq!(newest.timestamp, "Just now");
    assert!(newest.comments.is_empty());
    assert!(newest.poll.is_none());
}

#[test]
fn test_added_thread_ids_are_unique() {
    let mut state = CommunityState::default();
    let a = state.add_thread("One", "...", ThreadCategory::General, "You", "A-101");
    let b = state.add_thread("Two", "...", ThreadCategory::General, "You", "A-101");
    assert_ne!(a, b);
}

#[test]
fn test_add_comment_appends_to_the_thread() {
    let mut state = CommunityState::seeded();
    let before = state.thread("1").unwrap().comments.len();

    let comment = state
        .add_comment("1", "You", "A-101", "Pressure is back to normal.", "")
        .expect("thread 1 exists");
    assert_eq!(comment.content, "Pressure is back to normal.");

    let thread = state.thread("1").unwrap();
    assert_eq!(thread.comments.len(), before + 1);
    assert_eq!(
        thread.comments.last().unwrap().content,
        "Pressure is back to normal."
    );
}

#[test]
fn test_add_comment_to_unknown_thread_is_skipped() {
    let mut state = CommunityState::seeded();
    assert!(state
        .add_comment("no-such-id", "You", "A-101", "hello", "")
        .is_none());
}

#[test]
fn test_record_poll_vote_increments_option_and_total() {
    let mut state = CommunityState::seeded();
    let poll_before = state.thread("1").unwrap().poll.clone().unwrap();

    assert!(state.record_poll_vote("1", 0));

    let poll = state.thread("1").unwrap().poll.as_ref().unwrap();
    assert_eq!(poll.options[0].votes, poll_before.options[0].votes + 1);
    assert_eq!(poll.total_votes, poll_before.total_votes + 1);
}

#[test]
fn test_record_poll_vote_rejects_dangling_references() {
    let mut state = CommunityState::seeded();

    // Unknown thread.
    assert!(!state.record_poll_vote("no-such-id", 0));
    // Thread without a poll.
    assert!(!state.record_poll_vote("2", 0));
    // Out-of-range option.
    assert!(!state.record_poll_vote("1", 99));
}

#[test]
fn test_lookups_are_optimistic() {
    let state = CommunityState::seeded();
    assert!(state.thread("1").is_some());
    assert!(state.thread("missing").is_none());
    assert!(state.vendor("v1").is_some());
    assert!(state.vendor("missing").is_none());
}

#[test]
fn test_resolvers_skip_unknown_ids_and_keep_collection_order() {
    let state = CommunityState::seeded();

    let ids = vec![
        "6".to_string(),
        "ghost".to_string(),
        "1".to_string(),
        "1".to_string(),
    ];
    let resolved = state.resolve_threads(&ids);

    // Collection order, unknown ids dropped, no duplicates from repeated ids.
    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved[0].id, "1");
    assert_eq!(resolved[1].id, "6");

    let vendors = state.resolve_vendors(&["v2".to_string(), "nope".to_string()]);
    assert_eq!(vendors.len(), 1);
    assert_eq!(vendors[0].id, "v2");
}
