use std::sync::Arc;

use tokio::sync::mpsc;

use crate::events::queue::TriggerEvent;
use crate::service::calendar_service::CalendarApi;
use crate::service::update_flow::{handle_calendar_update, UpdateOutcome};

/// Consumes triggers one at a time. A single worker serializes overlapping
/// webhook deliveries, so each invocation owns its event for its lifetime.
pub async fn run_trigger_worker(
    mut rx: mpsc::Receiver<TriggerEvent>,
    api: Arc<dyn CalendarApi>,
) {
    while let Some(trigger) = rx.recv().await {
        match handle_calendar_update(api.as_ref(), &trigger.calendar_id, trigger.fired_at).await {
            Ok(UpdateOutcome::NoEvent) => {}
            Ok(UpdateOutcome::Skipped) => {}
            Ok(UpdateOutcome::Enriched {
                title_changed,
                color,
            }) => {
                log::debug!(
                    "Trigger for {} handled: title_changed={}, color={:?}",
                    trigger.calendar_id,
                    title_changed,
                    color
                );
            }
            Err(err) => {
                // The invocation is aborted; the worker keeps serving.
                log::error!(
                    "Failed to handle trigger for {}: {}",
                    trigger.calendar_id,
                    err
                );
            }
        }
    }
}
