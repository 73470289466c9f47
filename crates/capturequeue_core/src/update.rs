use crate::{queue_ops, CaptureJob, Effect, MonitorState, Msg, SyncState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: SyncState, msg: Msg) -> (SyncState, Vec<Effect>) {
    let effects = match msg {
        Msg::ExperimentSelected { id, species } => {
            if state.snapshot().current_job.is_some() {
                // Switching experiments mid-capture would orphan the running
                // job; reject locally, never reach the network.
                state.set_notice("Cannot change experiment while a capture job is running");
                vec![Effect::ScheduleNoticeExpiry]
            } else {
                state.set_selection(id, species);
                vec![Effect::FetchStatus {
                    seq: state.assign_seq(),
                }]
            }
        }
        Msg::JobAdded { voltage, current } => {
            let mut queue = state.working().to_vec();
            queue.push(CaptureJob { voltage, current });
            state.set_working(queue);
            push_working(&state)
        }
        Msg::JobReordered { from, to } => {
            let queue = queue_ops::reorder(state.working().to_vec(), from, to);
            state.set_working(queue);
            let mut effects = push_working(&state);
            effects.extend(rearm_from_snapshot(&mut state));
            effects
        }
        Msg::JobRemoved { index } => {
            let queue = queue_ops::remove(state.working().to_vec(), index);
            state.set_working(queue);
            let mut effects = push_working(&state);
            effects.extend(rearm_from_snapshot(&mut state));
            effects
        }
        Msg::SubmitClicked => {
            // Submit pushes the working copy regardless of push policy.
            replace_payload(&state).into_iter().collect()
        }
        Msg::ClearClicked => {
            state.set_working(Vec::new());
            if state.push_policy() {
                replace_payload(&state).into_iter().collect()
            } else {
                // Nothing authoritative to clear; local render only.
                Vec::new()
            }
        }
        Msg::AbortClicked => vec![Effect::AbortAll],
        Msg::DragStarted => disarm_monitor(&mut state),
        Msg::DragEnded => rearm_from_snapshot(&mut state),
        Msg::ManualRefresh | Msg::PollTick | Msg::RepollDue => {
            vec![Effect::FetchStatus {
                seq: state.assign_seq(),
            }]
        }
        Msg::StatusFetched { seq, snapshot } => {
            if state.apply_snapshot(seq, snapshot) {
                monitor_effects_after_apply(&mut state)
            } else {
                // Stale response, already superseded.
                Vec::new()
            }
        }
        Msg::MutationSettled { .. } => vec![Effect::ScheduleRepoll],
        Msg::NoticeExpired => {
            state.clear_notice();
            Vec::new()
        }
        Msg::FetchFailed { .. } | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Builds the replace-queue effect for the working copy, when an experiment
/// is known. The local selection wins over the snapshot's experiment.
fn replace_payload(state: &SyncState) -> Option<Effect> {
    let xp_id = state.selected_experiment().or(state.snapshot().xp_id)?;
    Some(Effect::ReplaceQueue {
        xp_id,
        queue: state.working().to_vec(),
        species: state.species().cloned().unwrap_or_default(),
    })
}

/// Push the working copy only while the push policy is on; otherwise the
/// server copy is intentionally left stale until an explicit submit.
fn push_working(state: &SyncState) -> Vec<Effect> {
    if state.push_policy() {
        replace_payload(state).into_iter().collect()
    } else {
        Vec::new()
    }
}

fn arm_monitor(state: &mut SyncState) -> Vec<Effect> {
    if state.monitor() == MonitorState::Polling {
        Vec::new()
    } else {
        state.set_monitor(MonitorState::Polling);
        vec![Effect::StartMonitor]
    }
}

fn disarm_monitor(state: &mut SyncState) -> Vec<Effect> {
    if state.monitor() == MonitorState::Idle {
        Vec::new()
    } else {
        state.set_monitor(MonitorState::Idle);
        vec![Effect::StopMonitor]
    }
}

/// After a drop (or cancelled drag) the monitor resumes only when the last
/// snapshot still shows something worth watching.
fn rearm_from_snapshot(state: &mut SyncState) -> Vec<Effect> {
    if state.snapshot().current_job.is_some() || state.snapshot().staged_job.is_some() {
        arm_monitor(state)
    } else {
        Vec::new()
    }
}

/// Applies the arm/disarm rules of snapshot application: a current job arms
/// the monitor, a fully idle snapshot disarms it, a staged-only snapshot
/// leaves it alone.
fn monitor_effects_after_apply(state: &mut SyncState) -> Vec<Effect> {
    if state.snapshot().current_job.is_some() {
        arm_monitor(state)
    } else if state.snapshot().staged_job.is_none() {
        disarm_monitor(state)
    } else {
        Vec::new()
    }
}
