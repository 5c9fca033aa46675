use chrono::{DateTime, Duration, Utc};

use crate::clients::calendar_client::CalendarApiError;
use crate::models::event::CalendarEvent;
use crate::service::calendar_service::CalendarApi;

/// How far back to look for the modification that fired the trigger.
pub const LOOKBACK_SECS: i64 = 60;

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Nothing was modified inside the look-back window, or the most recent
    /// change was a deletion. Expected and recoverable.
    #[error("no event modified within the look-back window")]
    NoEventFound,
    #[error(transparent)]
    Api(#[from] CalendarApiError),
}

/// Infers which event a calendar trigger fired for.
///
/// The trigger payload only names the calendar, so the most recently
/// modified event inside the look-back window is taken as the one that
/// changed.
pub async fn resolve_last_changed(
    api: &dyn CalendarApi,
    calendar_id: &str,
    now: DateTime<Utc>,
) -> Result<CalendarEvent, ResolveError> {
    let updated_min = now - Duration::seconds(LOOKBACK_SECS);
    let ids = api.list_updated_event_ids(calendar_id, updated_min).await?;
    let candidate = ids.last().ok_or(ResolveError::NoEventFound)?;
    let event_id = candidate.as_ref().ok_or(ResolveError::NoEventFound)?;
    Ok(api.get_event(calendar_id, event_id).await?)
}
