use crate::services::CalendarGatewayError;
use dosecal_domain::{ReminderChannel, ReminderEvent, SCHEDULING_TZ};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;

const GOOGLE_API_BASE_URL: &str = "https://www.googleapis.com/calendar/v3";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleCalendarEventDateTime {
    date_time: String,
    time_zone: String,
}

impl GoogleCalendarEventDateTime {
    fn new(date_time: chrono::DateTime<chrono_tz::Tz>) -> Self {
        Self {
            date_time: date_time.to_rfc3339(),
            time_zone: SCHEDULING_TZ.name().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GoogleEventReminderOverride {
    method: &'static str,
    minutes: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GoogleEventReminders {
    use_default: bool,
    overrides: Vec<GoogleEventReminderOverride>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleCalendarEventAttributes {
    summary: String,
    description: String,
    start: GoogleCalendarEventDateTime,
    end: GoogleCalendarEventDateTime,
    recurrence: Vec<String>,
    reminders: GoogleEventReminders,
}

impl From<&ReminderEvent> for GoogleCalendarEventAttributes {
    fn from(event: &ReminderEvent) -> Self {
        let overrides = event
            .reminders
            .iter()
            .map(|r| GoogleEventReminderOverride {
                method: match r.method {
                    ReminderChannel::Popup => "popup",
                    ReminderChannel::Email => "email",
                },
                minutes: r.minutes,
            })
            .collect();

        Self {
            summary: event.summary.clone(),
            description: event.description.clone(),
            start: GoogleCalendarEventDateTime::new(event.start),
            end: GoogleCalendarEventDateTime::new(event.end()),
            recurrence: vec![event.recurrence.to_string()],
            reminders: GoogleEventReminders {
                use_default: false,
                overrides,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleCalendarEventResponse {
    pub id: String,
    pub html_link: String,
}

pub struct GoogleCalendarRestApi {
    client: Client,
}

impl GoogleCalendarRestApi {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    async fn post<T: for<'de> Deserialize<'de>>(
        &self,
        access_token: &str,
        body: &impl Serialize,
        path: String,
    ) -> Result<T, CalendarGatewayError> {
        let res = self
            .client
            .post(&format!("{}/{}", GOOGLE_API_BASE_URL, path))
            .header("authorization", format!("Bearer {}", access_token))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(
                    "[Network Error] Google Calendar API POST error. Error message: {:?}",
                    e
                );
                CalendarGatewayError::Gateway(e.to_string())
            })?;

        match res.status() {
            status if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN => {
                error!(
                    "Google Calendar API rejected the access token with status: {}",
                    status
                );
                Err(CalendarGatewayError::AuthenticationRequired)
            }
            status if !status.is_success() => {
                error!(
                    "[Unexpected Response] Google Calendar API POST error. Status: {}",
                    status
                );
                Err(CalendarGatewayError::Gateway(format!(
                    "Unexpected status code: {}",
                    status
                )))
            }
            _ => res.json::<T>().await.map_err(|e| {
                error!(
                    "[Unexpected Response] Google Calendar API POST error. Error message: {:?}",
                    e
                );
                CalendarGatewayError::Gateway(e.to_string())
            }),
        }
    }

    pub async fn insert(
        &self,
        access_token: &str,
        calendar_id: &str,
        body: &GoogleCalendarEventAttributes,
    ) -> Result<GoogleCalendarEventResponse, CalendarGatewayError> {
        self.post(access_token, body, format!("calendars/{}/events", calendar_id))
            .await
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;
    use dosecal_domain::{DailyRecurrence, EventReminderOverride, EVENT_DURATION_MINUTES};

    #[test]
    fn event_attributes_serialize_to_google_wire_format() {
        let start = SCHEDULING_TZ
            .with_ymd_and_hms(2026, 8, 7, 8, 30, 0)
            .unwrap();
        let event = ReminderEvent {
            summary: "\u{1F48A} Paracetamol - 1 dose(s)".into(),
            description: "desc".into(),
            start,
            duration_minutes: EVENT_DURATION_MINUTES,
            recurrence: DailyRecurrence::until(start.date_naive() + chrono::Duration::days(5)),
            reminders: vec![
                EventReminderOverride {
                    method: ReminderChannel::Popup,
                    minutes: 5,
                },
                EventReminderOverride {
                    method: ReminderChannel::Email,
                    minutes: 30,
                },
            ],
        };

        let attrs = GoogleCalendarEventAttributes::from(&event);
        let json = serde_json::to_value(&attrs).unwrap();

        assert_eq!(json["start"]["timeZone"], "Asia/Kolkata");
        assert_eq!(json["start"]["dateTime"], "2026-08-07T08:30:00+05:30");
        assert_eq!(json["end"]["dateTime"], "2026-08-07T08:45:00+05:30");
        assert_eq!(
            json["recurrence"][0],
            "RRULE:FREQ=DAILY;UNTIL=20260812T000000Z"
        );
        assert_eq!(json["reminders"]["useDefault"], false);
        assert_eq!(json["reminders"]["overrides"][0]["method"], "popup");
        assert_eq!(json["reminders"]["overrides"][0]["minutes"], 5);
        assert_eq!(json["reminders"]["overrides"][1]["method"], "email");
        assert_eq!(json["reminders"]["overrides"][1]["minutes"], 30);
    }
}
