use crate::{ExperimentId, QueueSnapshot, Species};

/// Inbound events consumed by [`update`](crate::update): user intents from
/// the presentation layer plus completions from the client runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User picked an experiment; `species` comes from the shell's static lookup.
    ExperimentSelected { id: ExperimentId, species: Species },
    /// User appended a job to the pending queue.
    JobAdded { voltage: f64, current: f64 },
    /// User dropped a queue row at a new position.
    JobReordered { from: usize, to: usize },
    /// User dragged a queue row out of the queue.
    JobRemoved { index: usize },
    /// User clicked "start queue".
    SubmitClicked,
    /// User clicked "clear queue".
    ClearClicked,
    /// User clicked "abort all".
    AbortClicked,
    /// A drag began; the monitor must stop so a re-render cannot clobber it.
    DragStarted,
    /// A drag ended without a drop (cancelled); the monitor may resume.
    DragEnded,
    /// User asked for an immediate status refresh.
    ManualRefresh,
    /// The recurring monitor fired.
    PollTick,
    /// A one-shot re-poll came due.
    RepollDue,
    /// A fetch-status response arrived.
    StatusFetched { seq: u64, snapshot: QueueSnapshot },
    /// A fetch-status call failed; the next poll will re-synchronize.
    FetchFailed { seq: u64 },
    /// A mutating call settled, successfully or not.
    MutationSettled { op: MutationOp },
    /// The transient notice reached its display deadline.
    NoticeExpired,
    /// Fallback for placeholder wiring.
    NoOp,
}

/// Which mutating controller call settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOp {
    ReplaceQueue,
    AbortAll,
}
