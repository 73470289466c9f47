use serde::{Deserialize, Serialize};

/// Opaque identifier of the experiment selected by the user. "No selection"
/// is `Option::None`, never a zero sentinel.
pub type ExperimentId = u64;

/// Species label derived from the experiment by the shell's static lookup.
/// The core only carries it through to replace-queue payloads.
pub type Species = String;

/// One entry of the capture queue: the power-supply settings for a single
/// capture job. Immutable once submitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureJob {
    pub voltage: f64,
    pub current: f64,
}

/// The job executing server-side right now. Present in a snapshot only while
/// a job runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentJob {
    pub status: String,
    pub remaining: u32,
    pub total: u32,
    pub voltage: f64,
    pub current: f64,
    pub seconds_left: u32,
    #[serde(default)]
    pub xp_id: Option<ExperimentId>,
    #[serde(default)]
    pub cjr_id: Option<u64>,
}

/// The job queued to run next, not yet executing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StagedJob {
    pub status: String,
    pub voltage: f64,
    pub current: f64,
}

/// Complete authoritative description of queue and job state at one instant,
/// as returned by fetch-status and replace-queue.
///
/// Every field is optional on the wire; absence is a valid state, not an
/// error. Queue order is execution order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueSnapshot {
    #[serde(default)]
    pub xp_id: Option<ExperimentId>,
    #[serde(default)]
    pub current_job: Option<CurrentJob>,
    #[serde(default)]
    pub staged_job: Option<StagedJob>,
    #[serde(default)]
    pub queue: Vec<CaptureJob>,
}
