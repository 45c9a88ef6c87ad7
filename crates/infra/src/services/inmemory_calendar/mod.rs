use super::{CalendarGatewayError, CreatedEvent, ICalendarGateway};
use dosecal_domain::{ReminderEvent, ID};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Calendar gateway that records events instead of calling out.
///
/// Used by tests and credential-less local development. Outcomes can be
/// scripted per call: each queued entry (`None` for success, `Some` for a
/// failure) is consumed by exactly one submission; with an empty queue
/// every submission succeeds.
pub struct InMemoryCalendarGateway {
    events: Mutex<Vec<(ID, ReminderEvent)>>,
    scripted_outcomes: Mutex<VecDeque<Option<CalendarGatewayError>>>,
}

impl InMemoryCalendarGateway {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(vec![]),
            scripted_outcomes: Mutex::new(VecDeque::new()),
        }
    }

    /// Queues an error for the next submission.
    pub fn script_error(&self, error: CalendarGatewayError) {
        self.scripted_outcomes.lock().unwrap().push_back(Some(error));
    }

    /// Queues a success, for interleaving with scripted errors.
    pub fn script_ok(&self) {
        self.scripted_outcomes.lock().unwrap().push_back(None);
    }

    pub fn created_events(&self) -> Vec<(ID, ReminderEvent)> {
        self.events.lock().unwrap().clone()
    }
}

impl Default for InMemoryCalendarGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ICalendarGateway for InMemoryCalendarGateway {
    async fn create_recurring_event(
        &self,
        user_id: &ID,
        event: &ReminderEvent,
    ) -> Result<CreatedEvent, CalendarGatewayError> {
        if let Some(Some(error)) = self.scripted_outcomes.lock().unwrap().pop_front() {
            return Err(error);
        }

        let mut events = self.events.lock().unwrap();
        events.push((user_id.clone(), event.clone()));
        let event_id = format!("inmemory-event-{}", events.len());
        Ok(CreatedEvent {
            html_link: format!("https://calendar.local/event/{}", event_id),
            event_id,
        })
    }
}
