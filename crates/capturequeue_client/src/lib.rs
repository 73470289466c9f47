//! Capture-queue client runtime: HTTP job controller, poll scheduler, and
//! effect execution.
mod client;
mod controller;
mod scheduler;

pub use client::{ClientCommand, ClientEvent, ClientHandle};
pub use controller::{
    ControllerError, ControllerSettings, HttpJobController, JobController, ReplaceQueueRequest,
};
pub use scheduler::{PollScheduler, MONITOR_INTERVAL, NOTICE_DISMISS_DELAY, REPOLL_DELAY};
