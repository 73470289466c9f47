use crate::view_model::{QueueView, QueueViewModel};
use crate::{CaptureJob, CurrentJobView, ExperimentId, JobRowView, QueueSnapshot, Species, StagedJobView};

/// Whether the recurring status monitor is requested to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonitorState {
    #[default]
    Idle,
    Polling,
}

/// The complete client-side synchronization state.
///
/// The last-applied snapshot is authoritative; `working` is the transient
/// optimistic copy of the queue shown to the user between server round-trips.
/// Push policy and monitor state are owned here and change only through the
/// update function, never from ambient scope.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SyncState {
    selected: Option<ExperimentId>,
    species: Option<Species>,
    snapshot: QueueSnapshot,
    working: Vec<CaptureJob>,
    push_policy: bool,
    monitor: MonitorState,
    notice: Option<String>,
    next_seq: u64,
    applied_seq: u64,
    dirty: bool,
}

impl SyncState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Projects the state into what the presentation layer should show.
    pub fn view(&self) -> QueueViewModel {
        // Empty is decided by length; an empty sequence and an absent one
        // both render the placeholder.
        let queue = if self.working.is_empty() {
            QueueView::EmptyPlaceholder
        } else {
            QueueView::Rows(
                self.working
                    .iter()
                    .enumerate()
                    .map(|(position, job)| JobRowView {
                        position,
                        voltage: job.voltage,
                        current: job.current,
                    })
                    .collect(),
            )
        };

        QueueViewModel {
            selector_visible: self.snapshot.current_job.is_none(),
            selected_experiment: self.selected,
            current_job: self.snapshot.current_job.as_ref().map(CurrentJobView::from),
            staged_job: self.snapshot.staged_job.as_ref().map(StagedJobView::from),
            queue,
            notice: self.notice.clone(),
        }
    }

    /// Reports whether a re-render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn selected_experiment(&self) -> Option<ExperimentId> {
        self.selected
    }

    pub fn push_policy(&self) -> bool {
        self.push_policy
    }

    pub fn monitor(&self) -> MonitorState {
        self.monitor
    }

    pub fn snapshot(&self) -> &QueueSnapshot {
        &self.snapshot
    }

    pub fn working(&self) -> &[CaptureJob] {
        &self.working
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Hands out the next fetch-status sequence number.
    pub(crate) fn assign_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    /// Replaces the authoritative state wholesale from a controller response.
    ///
    /// Returns false when the snapshot is older than one already applied; the
    /// caller must treat that as a no-op. On success push policy is
    /// recomputed and the working copy is overwritten.
    pub(crate) fn apply_snapshot(&mut self, seq: u64, snapshot: QueueSnapshot) -> bool {
        if seq < self.applied_seq {
            return false;
        }
        self.applied_seq = seq;
        self.push_policy = snapshot.current_job.is_some();
        self.working = snapshot.queue.clone();
        self.snapshot = snapshot;
        self.dirty = true;
        true
    }

    pub(crate) fn set_working(&mut self, queue: Vec<CaptureJob>) {
        self.working = queue;
        self.dirty = true;
    }

    pub(crate) fn set_monitor(&mut self, monitor: MonitorState) {
        self.monitor = monitor;
    }

    pub(crate) fn set_selection(&mut self, id: ExperimentId, species: Species) {
        self.selected = Some(id);
        self.species = Some(species);
        self.dirty = true;
    }

    pub(crate) fn species(&self) -> Option<&Species> {
        self.species.as_ref()
    }

    pub(crate) fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
        self.dirty = true;
    }

    pub(crate) fn clear_notice(&mut self) {
        if self.notice.take().is_some() {
            self.dirty = true;
        }
    }
}
