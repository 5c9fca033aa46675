use std::convert::Infallible;

use chrono::Utc;
use warp::http::StatusCode;
use warp::Filter;

use crate::events::queue::{TriggerBus, TriggerEvent};

/// `POST /notifications` — Google Calendar push channel endpoint.
///
/// The watch registration puts the calendar id in the channel token, so the
/// token header routes the trigger. `sync` resource states are the channel
/// handshake and get acknowledged without work.
pub fn notification_route(
    bus: TriggerBus,
    default_calendar: String,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let bus = warp::any().map(move || bus.clone());
    let default_calendar = warp::any().map(move || default_calendar.clone());
    warp::post()
        .and(warp::path("notifications"))
        .and(warp::path::end())
        .and(warp::header::optional::<String>("x-goog-resource-state"))
        .and(warp::header::optional::<String>("x-goog-channel-token"))
        .and(bus)
        .and(default_calendar)
        .and_then(handle_push)
}

async fn handle_push(
    resource_state: Option<String>,
    channel_token: Option<String>,
    bus: TriggerBus,
    default_calendar: String,
) -> Result<StatusCode, Infallible> {
    if resource_state.as_deref() == Some("sync") {
        log::debug!("Push channel handshake acknowledged");
        return Ok(StatusCode::OK);
    }

    let calendar_id = channel_token.unwrap_or(default_calendar);
    log::info!("Change notification for calendar {}", calendar_id);
    bus.emit(TriggerEvent {
        calendar_id,
        fired_at: Utc::now(),
    })
    .await;
    Ok(StatusCode::OK)
}
