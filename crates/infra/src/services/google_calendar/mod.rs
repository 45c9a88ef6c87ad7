// https://developers.google.com/calendar/v3/reference/events
mod auth_provider;
mod calendar_api;

use super::{CalendarGatewayError, CreatedEvent, ICalendarGateway};
use crate::config::GoogleOAuthSettings;
use crate::repos::ICalendarCredentialRepo;
use calendar_api::{GoogleCalendarEventAttributes, GoogleCalendarRestApi};
use dosecal_domain::{ReminderEvent, ID};
use std::sync::Arc;

const PRIMARY_CALENDAR_ID: &str = "primary";

/// Calendar gateway backed by the Google Calendar REST API.
///
/// The credential repo is an injected capability: token lookup and
/// refresh go through it, never through ambient file or env state.
pub struct GoogleCalendarGateway {
    api: GoogleCalendarRestApi,
    oauth: GoogleOAuthSettings,
    credentials: Arc<dyn ICalendarCredentialRepo>,
}

impl GoogleCalendarGateway {
    pub fn new(oauth: GoogleOAuthSettings, credentials: Arc<dyn ICalendarCredentialRepo>) -> Self {
        Self {
            api: GoogleCalendarRestApi::new(),
            oauth,
            credentials,
        }
    }
}

#[async_trait::async_trait]
impl ICalendarGateway for GoogleCalendarGateway {
    async fn create_recurring_event(
        &self,
        user_id: &ID,
        event: &ReminderEvent,
    ) -> Result<CreatedEvent, CalendarGatewayError> {
        let access_token =
            auth_provider::get_access_token(user_id, &self.oauth, &*self.credentials)
                .await
                .ok_or(CalendarGatewayError::AuthenticationRequired)?;

        let body = GoogleCalendarEventAttributes::from(event);
        let created = self
            .api
            .insert(&access_token, PRIMARY_CALENDAR_ID, &body)
            .await?;

        Ok(CreatedEvent {
            event_id: created.id,
            html_link: created.html_link,
        })
    }
}
