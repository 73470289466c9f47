use std::io::{self, BufRead};
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::Duration;

use capturequeue_client::{ClientEvent, ClientHandle, ControllerSettings};
use capturequeue_core::{update, Msg, SyncState};
use client_logging::{client_info, client_warn};

use crate::{render, species};

/// What the intent-reader thread sends to the dispatch loop.
enum ShellMsg {
    Core(Msg),
    Quit,
}

pub fn run() -> anyhow::Result<()> {
    let mut settings = ControllerSettings::default();
    if let Ok(base_url) = std::env::var("CAPTUREQUEUE_URL") {
        settings.base_url = base_url;
    }
    client_info!("connecting to {}", settings.base_url);

    let handle = ClientHandle::new(settings)?;
    let (msg_tx, msg_rx) = mpsc::channel::<ShellMsg>();
    spawn_intent_reader(msg_tx);

    client_info!(
        "commands: select <xp> | add <voltage> <current> | move <from> <to> | \
         del <index> | start | clear | abort | refresh | drag | drop | quit"
    );

    let mut state = SyncState::new();
    let mut poll_cycle = 0u64;

    // Everything is rebuilt from the first fetch-status.
    dispatch(&mut state, &handle, Msg::ManualRefresh);

    loop {
        while let Some(event) = handle.try_recv() {
            if matches!(event, ClientEvent::MonitorTick) {
                poll_cycle += 1;
                client_logging::set_poll_cycle(poll_cycle);
            }
            dispatch(&mut state, &handle, map_event(event));
        }

        match msg_rx.try_recv() {
            Ok(ShellMsg::Core(msg)) => dispatch(&mut state, &handle, msg),
            Ok(ShellMsg::Quit) => break,
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => break,
        }

        thread::sleep(Duration::from_millis(20));
    }

    Ok(())
}

/// Runs one message through the core, executes the resulting effects, and
/// re-renders when the state reports itself dirty.
fn dispatch(state: &mut SyncState, handle: &ClientHandle, msg: Msg) {
    let current = std::mem::take(state);
    let (mut next, effects) = update(current, msg);
    handle.apply_all(effects);
    if next.consume_dirty() {
        render::render(&next.view());
    }
    *state = next;
}

fn map_event(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::StatusFetched { seq, snapshot } => Msg::StatusFetched { seq, snapshot },
        ClientEvent::FetchFailed { seq, .. } => Msg::FetchFailed { seq },
        ClientEvent::MutationSettled { op, .. } => Msg::MutationSettled { op },
        ClientEvent::MonitorTick => Msg::PollTick,
        ClientEvent::RepollDue => Msg::RepollDue,
        ClientEvent::NoticeExpired => Msg::NoticeExpired,
    }
}

fn spawn_intent_reader(msg_tx: mpsc::Sender<ShellMsg>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse_intent(line) {
                Some(msg) => {
                    let quit = matches!(msg, ShellMsg::Quit);
                    if msg_tx.send(msg).is_err() || quit {
                        break;
                    }
                }
                None => client_warn!("unrecognized command: {}", line),
            }
        }
    });
}

fn parse_intent(line: &str) -> Option<ShellMsg> {
    let mut parts = line.split_whitespace();
    let msg = match parts.next()? {
        "select" => {
            let id = parts.next()?.parse().ok()?;
            Msg::ExperimentSelected {
                id,
                species: species::species_for(id),
            }
        }
        "add" => Msg::JobAdded {
            voltage: parts.next()?.parse().ok()?,
            current: parts.next()?.parse().ok()?,
        },
        "move" => Msg::JobReordered {
            from: parts.next()?.parse().ok()?,
            to: parts.next()?.parse().ok()?,
        },
        "del" => Msg::JobRemoved {
            index: parts.next()?.parse().ok()?,
        },
        "start" => Msg::SubmitClicked,
        "clear" => Msg::ClearClicked,
        "abort" => Msg::AbortClicked,
        "refresh" => Msg::ManualRefresh,
        "drag" => Msg::DragStarted,
        "drop" => Msg::DragEnded,
        "quit" => return Some(ShellMsg::Quit),
        _ => return None,
    };
    Some(ShellMsg::Core(msg))
}
