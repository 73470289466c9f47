use std::sync::Once;

use capturequeue_core::{
    update, CaptureJob, CurrentJob, Effect, MonitorState, Msg, QueueSnapshot, QueueView,
    StagedJob, SyncState,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn job(voltage: f64, current: f64) -> CaptureJob {
    CaptureJob { voltage, current }
}

fn running_snapshot(queue: Vec<CaptureJob>) -> QueueSnapshot {
    QueueSnapshot {
        xp_id: Some(7),
        current_job: Some(CurrentJob {
            status: "running".to_string(),
            remaining: 3,
            total: 10,
            voltage: 5.0,
            current: 2.0,
            seconds_left: 42,
            xp_id: Some(7),
            cjr_id: Some(99),
        }),
        staged_job: None,
        queue,
    }
}

fn idle_snapshot(queue: Vec<CaptureJob>) -> QueueSnapshot {
    QueueSnapshot {
        xp_id: Some(7),
        current_job: None,
        staged_job: None,
        queue,
    }
}

fn apply(state: SyncState, seq: u64, snapshot: QueueSnapshot) -> (SyncState, Vec<Effect>) {
    update(state, Msg::StatusFetched { seq, snapshot })
}

#[test]
fn running_snapshot_sets_push_policy_and_arms_monitor() {
    init_logging();
    let state = SyncState::new();

    let (state, effects) = apply(state, 1, running_snapshot(vec![job(5.0, 2.0)]));

    assert!(state.push_policy());
    assert_eq!(state.monitor(), MonitorState::Polling);
    assert_eq!(effects, vec![Effect::StartMonitor]);

    let view = state.view();
    let current = view.current_job.expect("current job");
    assert_eq!(current.status, "running");
    assert_eq!(current.progress_label(), "3/10");
    assert!(!view.selector_visible);
}

#[test]
fn idle_snapshot_clears_push_policy_and_disarms_monitor() {
    init_logging();
    let state = SyncState::new();
    let (state, _effects) = apply(state, 1, running_snapshot(vec![job(5.0, 2.0)]));

    let (state, effects) = apply(state, 2, idle_snapshot(Vec::new()));

    assert!(!state.push_policy());
    assert_eq!(state.monitor(), MonitorState::Idle);
    assert_eq!(effects, vec![Effect::StopMonitor]);
    assert!(state.view().selector_visible);
}

#[test]
fn push_policy_tracks_the_latest_snapshot_not_history() {
    init_logging();
    let mut state = SyncState::new();
    let sequence = [
        (1, running_snapshot(Vec::new()), true),
        (2, idle_snapshot(Vec::new()), false),
        (3, running_snapshot(vec![job(1.0, 1.0)]), true),
        (4, running_snapshot(Vec::new()), true),
        (5, idle_snapshot(vec![job(2.0, 2.0)]), false),
    ];

    for (seq, snapshot, expected) in sequence {
        let (next, _effects) = apply(state, seq, snapshot);
        assert_eq!(next.push_policy(), expected, "after seq {}", seq);
        state = next;
    }
}

#[test]
fn staged_only_snapshot_leaves_monitor_running() {
    init_logging();
    let state = SyncState::new();
    let (state, _effects) = apply(state, 1, running_snapshot(Vec::new()));

    let staged_only = QueueSnapshot {
        xp_id: Some(7),
        current_job: None,
        staged_job: Some(StagedJob {
            status: "staged".to_string(),
            voltage: 4.0,
            current: 1.5,
        }),
        queue: Vec::new(),
    };
    let (state, effects) = apply(state, 2, staged_only);

    assert!(effects.is_empty());
    assert_eq!(state.monitor(), MonitorState::Polling);
    assert!(!state.push_policy());
    assert!(state.view().staged_job.is_some());
}

#[test]
fn empty_queue_renders_placeholder_regardless_of_representation() {
    init_logging();
    let state = SyncState::new();

    // Explicit empty array.
    let (state, _effects) = apply(state, 1, idle_snapshot(Vec::new()));
    assert_eq!(state.view().queue, QueueView::EmptyPlaceholder);

    // Entirely absent fields (wire default).
    let (state, _effects) = apply(state, 2, QueueSnapshot::default());
    assert_eq!(state.view().queue, QueueView::EmptyPlaceholder);
}

#[test]
fn poll_ticks_assign_increasing_fetch_sequences() {
    init_logging();
    let state = SyncState::new();

    let (state, effects) = update(state, Msg::PollTick);
    assert_eq!(effects, vec![Effect::FetchStatus { seq: 1 }]);
    let (state, effects) = update(state, Msg::RepollDue);
    assert_eq!(effects, vec![Effect::FetchStatus { seq: 2 }]);
    let (_state, effects) = update(state, Msg::ManualRefresh);
    assert_eq!(effects, vec![Effect::FetchStatus { seq: 3 }]);
}

#[test]
fn stale_snapshot_is_rejected_and_last_applied_wins() {
    init_logging();
    let state = SyncState::new();

    // Two fetches in flight: seq 1 and seq 2.
    let (state, _effects) = update(state, Msg::PollTick);
    let (state, _effects) = update(state, Msg::PollTick);

    let newer = idle_snapshot(vec![job(9.0, 3.0)]);
    let older = idle_snapshot(vec![job(1.0, 1.0)]);

    // The later response lands first.
    let (mut state, _effects) = apply(state, 2, newer.clone());
    assert_eq!(state.snapshot(), &newer);
    state.consume_dirty();

    // The earlier response arrives afterwards and must not clobber it.
    let (mut state, effects) = apply(state, 1, older);
    assert!(effects.is_empty());
    assert_eq!(state.snapshot(), &newer);
    assert!(!state.consume_dirty());
}

#[test]
fn in_order_responses_still_apply_last_snapshot() {
    init_logging();
    let state = SyncState::new();
    let (state, _effects) = update(state, Msg::PollTick);
    let (state, _effects) = update(state, Msg::PollTick);

    let first = idle_snapshot(vec![job(1.0, 1.0)]);
    let second = idle_snapshot(vec![job(9.0, 3.0)]);

    let (state, _effects) = apply(state, 1, first);
    let (state, _effects) = apply(state, 2, second.clone());
    assert_eq!(state.snapshot(), &second);
}

#[test]
fn fetch_failure_changes_nothing() {
    init_logging();
    let state = SyncState::new();
    let (mut state, _effects) = apply(state, 1, running_snapshot(vec![job(5.0, 2.0)]));
    state.consume_dirty();
    let before = state.clone();

    let (mut state, effects) = update(state, Msg::FetchFailed { seq: 2 });

    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state.view(), before.view());
}
