//! Capture-queue core: pure synchronization state machine and view-model helpers.
mod effect;
mod msg;
mod queue_ops;
mod snapshot;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{Msg, MutationOp};
pub use queue_ops::{remove, reorder};
pub use snapshot::{
    CaptureJob, CurrentJob, ExperimentId, QueueSnapshot, Species, StagedJob,
};
pub use state::{MonitorState, SyncState};
pub use update::update;
pub use view_model::{
    CurrentJobView, JobRowView, QueueView, QueueViewModel, StagedJobView,
};
