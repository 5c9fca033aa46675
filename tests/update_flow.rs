use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use enricherBot::clients::calendar_client::CalendarApiError;
use enricherBot::models::event::CalendarEvent;
use enricherBot::service::calendar_service::CalendarApi;
use enricherBot::service::color_policy::EventColor;
use enricherBot::service::update_flow::{handle_calendar_update, UpdateOutcome};

struct RecordingCalendar {
    ids: Vec<Option<String>>,
    event: Option<CalendarEvent>,
    titles_written: Mutex<Vec<(String, String)>>,
    colors_written: Mutex<Vec<(String, EventColor)>>,
}

impl RecordingCalendar {
    fn with_event(event: CalendarEvent) -> Self {
        Self {
            ids: vec![Some(event.id.clone())],
            event: Some(event),
            titles_written: Mutex::new(Vec::new()),
            colors_written: Mutex::new(Vec::new()),
        }
    }

    fn with_listing(ids: Vec<Option<String>>) -> Self {
        Self {
            ids,
            event: None,
            titles_written: Mutex::new(Vec::new()),
            colors_written: Mutex::new(Vec::new()),
        }
    }

    fn titles(&self) -> Vec<(String, String)> {
        self.titles_written.lock().unwrap().clone()
    }

    fn colors(&self) -> Vec<(String, EventColor)> {
        self.colors_written.lock().unwrap().clone()
    }
}

#[async_trait]
impl CalendarApi for RecordingCalendar {
    async fn list_updated_event_ids(
        &self,
        _calendar_id: &str,
        _updated_min: DateTime<Utc>,
    ) -> Result<Vec<Option<String>>, CalendarApiError> {
        Ok(self.ids.clone())
    }

    async fn get_event(
        &self,
        _calendar_id: &str,
        event_id: &str,
    ) -> Result<CalendarEvent, CalendarApiError> {
        match &self.event {
            Some(event) if event.id == event_id => Ok(event.clone()),
            _ => Err(CalendarApiError::Api {
                status: 404,
                message: format!("event {} not found", event_id),
            }),
        }
    }

    async fn set_title(
        &self,
        _calendar_id: &str,
        event: &CalendarEvent,
        title: &str,
    ) -> Result<(), CalendarApiError> {
        self.titles_written
            .lock()
            .unwrap()
            .push((event.id.clone(), title.to_string()));
        Ok(())
    }

    async fn set_color(
        &self,
        _calendar_id: &str,
        event: &CalendarEvent,
        color: EventColor,
    ) -> Result<(), CalendarApiError> {
        self.colors_written
            .lock()
            .unwrap()
            .push((event.id.clone(), color));
        Ok(())
    }
}

fn event(id: &str, title: &str, description: &str) -> CalendarEvent {
    CalendarEvent {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        color_id: None,
    }
}

#[tokio::test]
async fn tagged_title_gets_emoji_and_category_color() {
    let calendar = RecordingCalendar::with_event(event("e1", "Morning :run: :check:", ""));

    let outcome = handle_calendar_update(&calendar, "primary", Utc::now())
        .await
        .unwrap();

    assert_eq!(
        outcome,
        UpdateOutcome::Enriched {
            title_changed: true,
            color: Some(EventColor::Graphite),
        }
    );
    assert_eq!(
        calendar.titles(),
        vec![("e1".to_string(), "Morning 🏃‍♂️ ✅".to_string())]
    );
    assert_eq!(calendar.colors(), vec![("e1".to_string(), EventColor::Graphite)]);
}

#[tokio::test]
async fn skip_marker_in_description_disables_processing() {
    let calendar = RecordingCalendar::with_event(event(
        "e2",
        "Team :dinner:",
        "agenda for the offsite :skip:",
    ));

    let outcome = handle_calendar_update(&calendar, "primary", Utc::now())
        .await
        .unwrap();

    assert_eq!(outcome, UpdateOutcome::Skipped);
    assert!(calendar.titles().is_empty());
    assert!(calendar.colors().is_empty());
}

#[tokio::test]
async fn untagged_title_writes_nothing() {
    let calendar = RecordingCalendar::with_event(event("e3", "1:1 with Sam", ""));

    let outcome = handle_calendar_update(&calendar, "primary", Utc::now())
        .await
        .unwrap();

    assert_eq!(
        outcome,
        UpdateOutcome::Enriched {
            title_changed: false,
            color: None,
        }
    );
    assert!(calendar.titles().is_empty());
    assert!(calendar.colors().is_empty());
}

#[tokio::test]
async fn cosmetic_tag_changes_title_but_not_color() {
    let calendar = RecordingCalendar::with_event(event("e4", ":check: pay bills", ""));

    let outcome = handle_calendar_update(&calendar, "primary", Utc::now())
        .await
        .unwrap();

    assert_eq!(
        outcome,
        UpdateOutcome::Enriched {
            title_changed: true,
            color: None,
        }
    );
    assert_eq!(
        calendar.titles(),
        vec![("e4".to_string(), "✅ pay bills".to_string())]
    );
    assert!(calendar.colors().is_empty());
}

#[tokio::test]
async fn deletion_resolves_to_silent_noop() {
    let calendar = RecordingCalendar::with_listing(vec![Some("gone".to_string()), None]);

    let outcome = handle_calendar_update(&calendar, "primary", Utc::now())
        .await
        .unwrap();

    assert_eq!(outcome, UpdateOutcome::NoEvent);
    assert!(calendar.titles().is_empty());
    assert!(calendar.colors().is_empty());
}

#[tokio::test]
async fn empty_window_resolves_to_silent_noop() {
    let calendar = RecordingCalendar::with_listing(vec![]);

    let outcome = handle_calendar_update(&calendar, "primary", Utc::now())
        .await
        .unwrap();

    assert_eq!(outcome, UpdateOutcome::NoEvent);
}
