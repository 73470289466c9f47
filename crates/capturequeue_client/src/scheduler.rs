use std::sync::mpsc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::ClientEvent;

/// Cadence of the recurring monitor while a job executes.
pub const MONITOR_INTERVAL: Duration = Duration::from_millis(500);
/// Delay before the one-shot re-poll that follows every mutating call.
pub const REPOLL_DELAY: Duration = Duration::from_millis(1000);
/// How long a transient notice stays on screen before auto-dismissal.
pub const NOTICE_DISMISS_DELAY: Duration = Duration::from_millis(3000);

/// Dual-cadence poll scheduler: one recurring monitor task plus fire-and-forget
/// one-shot timers.
///
/// `start_monitor`/`stop_monitor` are idempotent. Stopping the monitor does
/// not cancel re-polls already scheduled; those cannot be cancelled at all,
/// only observed through [`pending_repolls`](Self::pending_repolls).
///
/// Must be used from within a tokio runtime.
pub struct PollScheduler {
    event_tx: mpsc::Sender<ClientEvent>,
    monitor: Option<JoinHandle<()>>,
    repolls: Vec<JoinHandle<()>>,
    expiries: Vec<JoinHandle<()>>,
}

impl PollScheduler {
    pub fn new(event_tx: mpsc::Sender<ClientEvent>) -> Self {
        Self {
            event_tx,
            monitor: None,
            repolls: Vec::new(),
            expiries: Vec::new(),
        }
    }

    pub fn monitor_active(&self) -> bool {
        self.monitor.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Arms the recurring monitor. No-op when already active.
    pub fn start_monitor(&mut self) {
        if self.monitor_active() {
            return;
        }
        let event_tx = self.event_tx.clone();
        self.monitor = Some(tokio::spawn(async move {
            let mut ticks = tokio::time::interval(MONITOR_INTERVAL);
            // The first interval tick fires immediately; the monitor starts
            // counting from one full interval instead.
            ticks.tick().await;
            loop {
                ticks.tick().await;
                if event_tx.send(ClientEvent::MonitorTick).is_err() {
                    break;
                }
            }
        }));
    }

    /// Disarms the recurring monitor. No-op when idle.
    pub fn stop_monitor(&mut self) {
        if let Some(task) = self.monitor.take() {
            task.abort();
        }
    }

    /// Schedules exactly one delayed [`ClientEvent::RepollDue`].
    pub fn schedule_repoll(&mut self) {
        let event_tx = self.event_tx.clone();
        self.prune();
        self.repolls.push(tokio::spawn(async move {
            tokio::time::sleep(REPOLL_DELAY).await;
            let _ = event_tx.send(ClientEvent::RepollDue);
        }));
    }

    /// Schedules the auto-dismissal of the transient notice.
    pub fn schedule_notice_expiry(&mut self) {
        let event_tx = self.event_tx.clone();
        self.prune();
        self.expiries.push(tokio::spawn(async move {
            tokio::time::sleep(NOTICE_DISMISS_DELAY).await;
            let _ = event_tx.send(ClientEvent::NoticeExpired);
        }));
    }

    /// Number of scheduled re-polls that have not fired yet.
    pub fn pending_repolls(&self) -> usize {
        self.repolls.iter().filter(|task| !task.is_finished()).count()
    }

    fn prune(&mut self) {
        self.repolls.retain(|task| !task.is_finished());
        self.expiries.retain(|task| !task.is_finished());
    }
}

impl Drop for PollScheduler {
    fn drop(&mut self) {
        self.stop_monitor();
    }
}
