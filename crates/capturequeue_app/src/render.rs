use capturequeue_core::{QueueView, QueueViewModel};
use client_logging::client_info;

/// Writes the view model as log lines. Stands in for the real presentation
/// layer, which is an external collaborator.
pub fn render(view: &QueueViewModel) {
    match &view.current_job {
        Some(job) => client_info!(
            "current: {} {} ({}s left, {:.1}V {:.1}A)",
            job.status,
            job.progress_label(),
            job.seconds_left,
            job.voltage,
            job.current
        ),
        None => client_info!("current: none"),
    }

    match &view.staged_job {
        Some(job) => client_info!(
            "staged: {} ({:.1}V {:.1}A)",
            job.status,
            job.voltage,
            job.current
        ),
        None => client_info!("staged: none"),
    }

    match &view.queue {
        QueueView::EmptyPlaceholder => client_info!("queue: (empty)"),
        QueueView::Rows(rows) => {
            for row in rows {
                client_info!(
                    "queue[{}]: {:.1}V {:.1}A",
                    row.position,
                    row.voltage,
                    row.current
                );
            }
        }
    }

    if view.selector_visible {
        match view.selected_experiment {
            Some(id) => client_info!("experiment: {}", id),
            None => client_info!("experiment: (none selected)"),
        }
    }

    if let Some(notice) = &view.notice {
        client_info!("notice: {}", notice);
    }
}
