use chrono::{DateTime, Utc};

use crate::clients::calendar_client::CalendarApiError;
use crate::service::calendar_service::CalendarApi;
use crate::service::color_policy::{color_for, EventColor};
use crate::service::enricher::enrich;
use crate::service::resolver::{resolve_last_changed, ResolveError};

/// Literal marker in an event description that disables all processing.
pub const SKIP_MARKER: &str = ":skip:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Nothing resolved inside the window, most likely a deletion.
    NoEvent,
    /// The event opted out via the skip marker.
    Skipped,
    Enriched {
        title_changed: bool,
        color: Option<EventColor>,
    },
}

/// One trigger firing, end to end: resolve the changed event, enrich its
/// title, apply the category color, write back what differs.
pub async fn handle_calendar_update(
    api: &dyn CalendarApi,
    calendar_id: &str,
    now: DateTime<Utc>,
) -> Result<UpdateOutcome, CalendarApiError> {
    let event = match resolve_last_changed(api, calendar_id, now).await {
        Ok(event) => event,
        Err(ResolveError::NoEventFound) => {
            log::info!("No event modified in {}; likely a deletion", calendar_id);
            return Ok(UpdateOutcome::NoEvent);
        }
        Err(ResolveError::Api(err)) => return Err(err),
    };

    if event.description.contains(SKIP_MARKER) {
        log::info!("Event {} carries the skip marker, leaving as-is", event.id);
        return Ok(UpdateOutcome::Skipped);
    }

    let enrichment = enrich(&event.title);
    let title_changed = enrichment.title != event.title;
    if title_changed {
        api.set_title(calendar_id, &event, &enrichment.title).await?;
    }

    let color = color_for(enrichment.category);
    if let Some(color) = color {
        api.set_color(calendar_id, &event, color).await?;
    }

    log::info!(
        "Enriched event {}: title_changed={}, category={:?}",
        event.id,
        title_changed,
        enrichment.category
    );
    Ok(UpdateOutcome::Enriched {
        title_changed,
        color,
    })
}
