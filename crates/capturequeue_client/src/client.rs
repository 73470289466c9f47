use std::sync::{mpsc, Arc};
use std::thread;

use capturequeue_core::{Effect, MutationOp, QueueSnapshot};
use client_logging::client_warn;

use crate::controller::{
    ControllerError, ControllerSettings, HttpJobController, JobController, ReplaceQueueRequest,
};
use crate::scheduler::PollScheduler;

/// Instructions for the runtime thread, translated 1:1 from core effects.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientCommand {
    FetchStatus { seq: u64 },
    ReplaceQueue(ReplaceQueueRequest),
    AbortAll,
    StartMonitor,
    StopMonitor,
    ScheduleRepoll,
    ScheduleNoticeExpiry,
}

impl From<Effect> for ClientCommand {
    fn from(effect: Effect) -> Self {
        match effect {
            Effect::FetchStatus { seq } => ClientCommand::FetchStatus { seq },
            Effect::ReplaceQueue {
                xp_id,
                queue,
                species,
            } => ClientCommand::ReplaceQueue(ReplaceQueueRequest {
                xp_id,
                queue,
                species,
            }),
            Effect::AbortAll => ClientCommand::AbortAll,
            Effect::StartMonitor => ClientCommand::StartMonitor,
            Effect::StopMonitor => ClientCommand::StopMonitor,
            Effect::ScheduleRepoll => ClientCommand::ScheduleRepoll,
            Effect::ScheduleNoticeExpiry => ClientCommand::ScheduleNoticeExpiry,
        }
    }
}

/// Completions and timer fires produced by the runtime, for the shell to pump
/// back into the core as messages.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    StatusFetched { seq: u64, snapshot: QueueSnapshot },
    FetchFailed { seq: u64, error: ControllerError },
    MutationSettled {
        op: MutationOp,
        outcome: Result<(), ControllerError>,
    },
    MonitorTick,
    RepollDue,
    NoticeExpired,
}

/// Owns the runtime thread that talks to the remote job controller and runs
/// the poll scheduler. Commands go in over a channel; events come back out.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    pub fn new(settings: ControllerSettings) -> Result<Self, ControllerError> {
        let controller = Arc::new(HttpJobController::new(settings)?);
        Ok(Self::with_controller(controller))
    }

    /// Runs the client loop against any controller implementation.
    pub fn with_controller(controller: Arc<dyn JobController>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<ClientCommand>();
        let (event_tx, event_rx) = mpsc::channel::<ClientEvent>();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let _guard = runtime.enter();
            let mut scheduler = PollScheduler::new(event_tx.clone());

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    ClientCommand::StartMonitor => scheduler.start_monitor(),
                    ClientCommand::StopMonitor => scheduler.stop_monitor(),
                    ClientCommand::ScheduleRepoll => scheduler.schedule_repoll(),
                    ClientCommand::ScheduleNoticeExpiry => scheduler.schedule_notice_expiry(),
                    ClientCommand::FetchStatus { seq } => {
                        let controller = controller.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let event = match controller.fetch_status().await {
                                Ok(snapshot) => ClientEvent::StatusFetched { seq, snapshot },
                                Err(error) => {
                                    client_warn!("fetch-status seq={} failed: {}", seq, error);
                                    ClientEvent::FetchFailed { seq, error }
                                }
                            };
                            let _ = event_tx.send(event);
                        });
                    }
                    ClientCommand::ReplaceQueue(request) => {
                        let controller = controller.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let outcome = controller.replace_queue(&request).await;
                            if let Err(error) = &outcome {
                                client_warn!(
                                    "replace-queue xp_id={} failed: {}",
                                    request.xp_id,
                                    error
                                );
                            }
                            let _ = event_tx.send(ClientEvent::MutationSettled {
                                op: MutationOp::ReplaceQueue,
                                outcome,
                            });
                        });
                    }
                    ClientCommand::AbortAll => {
                        let controller = controller.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let outcome = controller.abort_all().await;
                            if let Err(error) = &outcome {
                                client_warn!("abort-all failed: {}", error);
                            }
                            let _ = event_tx.send(ClientEvent::MutationSettled {
                                op: MutationOp::AbortAll,
                                outcome,
                            });
                        });
                    }
                }
            }
        });

        Self { cmd_tx, event_rx }
    }

    /// Executes one core effect. Sends never block; a closed runtime is
    /// treated as shutdown.
    pub fn apply(&self, effect: Effect) {
        let _ = self.cmd_tx.send(ClientCommand::from(effect));
    }

    pub fn apply_all(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.apply(effect);
        }
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }
}
