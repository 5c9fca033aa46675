use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::json;

use crate::models::event::CalendarEvent;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/calendar/v3";

#[derive(Debug, thiserror::Error)]
pub enum CalendarApiError {
    #[error("HTTP: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Calendar API error {status}: {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
struct EventListResponse {
    #[serde(default)]
    items: Vec<EventIdSlot>,
}

// With the field mask `items/id`, a freshly deleted event still occupies a
// slot in the listing but carries no id.
#[derive(Debug, Deserialize)]
struct EventIdSlot {
    #[serde(default)]
    id: Option<String>,
}

pub struct CalendarClient {
    http: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl CalendarClient {
    pub fn new(api_token: String) -> Self {
        Self::with_base_url(api_token, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_token: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_token,
        }
    }

    /// Lists the ids of events modified since `updated_min`, oldest first.
    /// Only ids are requested; a `None` slot means the change was a deletion.
    pub async fn list_updated_event_ids(
        &self,
        calendar_id: &str,
        updated_min: DateTime<Utc>,
    ) -> Result<Vec<Option<String>>, CalendarApiError> {
        let url = format!("{}/calendars/{}/events", self.base_url, calendar_id);
        let updated_min = updated_min.to_rfc3339_opts(SecondsFormat::Secs, true);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_token)
            .query(&[
                ("updatedMin", updated_min.as_str()),
                ("maxResults", "50"),
                ("orderBy", "updated"),
                ("singleEvents", "true"),
                ("showDeleted", "false"),
                ("fields", "items/id"),
            ])
            .send()
            .await?;

        let body: EventListResponse = Self::read_json(response).await?;
        Ok(body.items.into_iter().map(|slot| slot.id).collect())
    }

    pub async fn get_event(
        &self,
        calendar_id: &str,
        event_id: &str,
    ) -> Result<CalendarEvent, CalendarApiError> {
        let url = format!(
            "{}/calendars/{}/events/{}",
            self.base_url, calendar_id, event_id
        );
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_token)
            .send()
            .await?;
        Self::read_json(response).await
    }

    pub async fn patch_title(
        &self,
        calendar_id: &str,
        event_id: &str,
        title: &str,
    ) -> Result<(), CalendarApiError> {
        self.patch_event(calendar_id, event_id, json!({ "summary": title }))
            .await
    }

    pub async fn patch_color(
        &self,
        calendar_id: &str,
        event_id: &str,
        color_id: &str,
    ) -> Result<(), CalendarApiError> {
        self.patch_event(calendar_id, event_id, json!({ "colorId": color_id }))
            .await
    }

    async fn patch_event(
        &self,
        calendar_id: &str,
        event_id: &str,
        body: serde_json::Value,
    ) -> Result<(), CalendarApiError> {
        let url = format!(
            "{}/calendars/{}/events/{}",
            self.base_url, calendar_id, event_id
        );
        let response = self
            .http
            .patch(&url)
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CalendarApiError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }

    // Read the body once so a non-2xx response can surface it raw.
    async fn read_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, CalendarApiError> {
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(CalendarApiError::Api {
                status: status.as_u16(),
                message: text,
            });
        }
        serde_json::from_str(&text).map_err(|e| CalendarApiError::Api {
            status: status.as_u16(),
            message: format!("Failed to parse JSON: {}\nRaw body: {}", e, text),
        })
    }
}
