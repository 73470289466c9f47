use crate::{CaptureJob, ExperimentId, Species};

/// Side effects requested by the core and executed by the client runtime.
///
/// Rendering is not an effect: the shell pulls the view model whenever the
/// state reports itself dirty.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Issue one fetch-status call; `seq` tags the response for the stale
    /// guard on apply.
    FetchStatus { seq: u64 },
    /// Push the entire queue to the controller, replacing the server copy.
    ReplaceQueue {
        xp_id: ExperimentId,
        queue: Vec<CaptureJob>,
        species: Species,
    },
    /// Terminate any executing job server-side.
    AbortAll,
    /// Arm the recurring monitor (idempotent at the scheduler).
    StartMonitor,
    /// Disarm the recurring monitor (idempotent at the scheduler).
    StopMonitor,
    /// Schedule exactly one delayed fetch-status. Fire-and-forget.
    ScheduleRepoll,
    /// Schedule the auto-dismissal of the transient notice.
    ScheduleNoticeExpiry,
}
