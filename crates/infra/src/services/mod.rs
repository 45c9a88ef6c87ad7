mod google_calendar;
mod inmemory_calendar;

pub use google_calendar::GoogleCalendarGateway;
pub use inmemory_calendar::InMemoryCalendarGateway;

use dosecal_domain::{ReminderEvent, ID};
use thiserror::Error;

/// Failures of a calendar submission, split by granularity: a missing or
/// invalid credential is systemic for the user and makes further
/// submissions pointless, while a gateway error is specific to the one
/// event that was being created.
#[derive(Debug, Error)]
pub enum CalendarGatewayError {
    #[error("Calendar authentication required")]
    AuthenticationRequired,
    #[error("Calendar gateway request failed: {0}")]
    Gateway(String),
}

/// The gateway's reference to an event it created.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedEvent {
    pub event_id: String,
    pub html_link: String,
}

#[async_trait::async_trait]
pub trait ICalendarGateway: Send + Sync {
    async fn create_recurring_event(
        &self,
        user_id: &ID,
        event: &ReminderEvent,
    ) -> Result<CreatedEvent, CalendarGatewayError>;
}
