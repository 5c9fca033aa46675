use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::clients::calendar_client::{CalendarApiError, CalendarClient};
use crate::models::event::CalendarEvent;
use crate::service::color_policy::EventColor;

/// Seam over the external calendar service. Production goes through
/// `CalendarService`; tests substitute scripted fakes.
#[async_trait]
pub trait CalendarApi: Send + Sync {
    /// Ids of events modified since `updated_min`, sorted ascending by
    /// modification time. A `None` slot is a deletion.
    async fn list_updated_event_ids(
        &self,
        calendar_id: &str,
        updated_min: DateTime<Utc>,
    ) -> Result<Vec<Option<String>>, CalendarApiError>;

    async fn get_event(
        &self,
        calendar_id: &str,
        event_id: &str,
    ) -> Result<CalendarEvent, CalendarApiError>;

    async fn set_title(
        &self,
        calendar_id: &str,
        event: &CalendarEvent,
        title: &str,
    ) -> Result<(), CalendarApiError>;

    async fn set_color(
        &self,
        calendar_id: &str,
        event: &CalendarEvent,
        color: EventColor,
    ) -> Result<(), CalendarApiError>;
}

pub struct CalendarService {
    client: CalendarClient,
}

impl CalendarService {
    pub fn new(api_token: String) -> Self {
        Self::with_client(CalendarClient::new(api_token))
    }

    pub fn with_client(client: CalendarClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CalendarApi for CalendarService {
    async fn list_updated_event_ids(
        &self,
        calendar_id: &str,
        updated_min: DateTime<Utc>,
    ) -> Result<Vec<Option<String>>, CalendarApiError> {
        self.client
            .list_updated_event_ids(calendar_id, updated_min)
            .await
    }

    async fn get_event(
        &self,
        calendar_id: &str,
        event_id: &str,
    ) -> Result<CalendarEvent, CalendarApiError> {
        self.client.get_event(calendar_id, event_id).await
    }

    async fn set_title(
        &self,
        calendar_id: &str,
        event: &CalendarEvent,
        title: &str,
    ) -> Result<(), CalendarApiError> {
        // Writing the current value back would re-fire the trigger.
        if event.title == title {
            return Ok(());
        }
        self.client.patch_title(calendar_id, &event.id, title).await
    }

    async fn set_color(
        &self,
        calendar_id: &str,
        event: &CalendarEvent,
        color: EventColor,
    ) -> Result<(), CalendarApiError> {
        if event.color_id.as_deref() == Some(color.color_id()) {
            return Ok(());
        }
        self.client
            .patch_color(calendar_id, &event.id, color.color_id())
            .await
    }
}
