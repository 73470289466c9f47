use crate::{CurrentJob, ExperimentId, StagedJob};

/// What the presentation layer should show after the latest update.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueViewModel {
    /// The experiment selector is hidden while a job executes.
    pub selector_visible: bool,
    pub selected_experiment: Option<ExperimentId>,
    pub current_job: Option<CurrentJobView>,
    pub staged_job: Option<StagedJobView>,
    pub queue: QueueView,
    /// Transient, auto-dismissing warning, if any.
    pub notice: Option<String>,
}

/// The queue table, or the placeholder when there is nothing to show.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueueView {
    #[default]
    EmptyPlaceholder,
    Rows(Vec<JobRowView>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobRowView {
    pub position: usize,
    pub voltage: f64,
    pub current: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentJobView {
    pub status: String,
    pub remaining: u32,
    pub total: u32,
    pub voltage: f64,
    pub current: f64,
    pub seconds_left: u32,
}

impl CurrentJobView {
    /// Progress in the "remaining/total" form shown next to the status.
    pub fn progress_label(&self) -> String {
        format!("{}/{}", self.remaining, self.total)
    }
}

impl From<&CurrentJob> for CurrentJobView {
    fn from(job: &CurrentJob) -> Self {
        Self {
            status: job.status.clone(),
            remaining: job.remaining,
            total: job.total,
            voltage: job.voltage,
            current: job.current,
            seconds_left: job.seconds_left,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StagedJobView {
    pub status: String,
    pub voltage: f64,
    pub current: f64,
}

impl From<&StagedJob> for StagedJobView {
    fn from(job: &StagedJob) -> Self {
        Self {
            status: job.status.clone(),
            voltage: job.voltage,
            current: job.current,
        }
    }
}
