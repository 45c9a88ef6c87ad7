use crate::medication::Medication;
use crate::reminder_plan::ReminderSlot;
use crate::shared::recurrence::DailyRecurrence;
use crate::time::ClockTime;
use crate::time_policy::SCHEDULING_TZ;
use chrono::{DateTime, Duration, NaiveDate, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Calendar events block a 15 minute window.
pub const EVENT_DURATION_MINUTES: i64 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderChannel {
    Popup,
    Email,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventReminderOverride {
    pub method: ReminderChannel,
    pub minutes: i64,
}

/// A fully specified recurring calendar event, ready for submission to
/// the calendar gateway.
#[derive(Debug, Clone)]
pub struct ReminderEvent {
    pub summary: String,
    pub description: String,
    pub start: DateTime<Tz>,
    pub duration_minutes: i64,
    pub recurrence: DailyRecurrence,
    pub reminders: Vec<EventReminderOverride>,
}

impl ReminderEvent {
    /// Builds the event for one plan slot.
    ///
    /// The first occurrence is today at the slot's wall-clock time, or
    /// tomorrow when that instant is not strictly in the future, so the
    /// gateway is never asked to create an event starting in the past.
    pub fn from_slot(medication: &Medication, slot: &ReminderSlot, now: DateTime<Tz>) -> Self {
        let duration_text = if medication.duration.trim().is_empty() {
            "As prescribed"
        } else {
            medication.duration.as_str()
        };
        let summary = format!(
            "\u{1F48A} {} - {} dose(s)",
            medication.name, slot.dose_count
        );
        let description = format!(
            "Medication reminder\n\nMedicine: {}\nDosage: {} dose(s)\nTiming: {}\nDuration: {}\n\nDon't forget to take your medicine!",
            medication.name, slot.dose_count, slot.label, duration_text
        );

        Self {
            summary,
            description,
            start: first_occurrence(slot.time, now),
            duration_minutes: EVENT_DURATION_MINUTES,
            recurrence: DailyRecurrence::until(slot.recurrence_end_date),
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
        }
    }

    pub fn end(&self) -> DateTime<Tz> {
        self.start + Duration::minutes(self.duration_minutes)
    }
}

/// First instant at `time` that is strictly after `now`: today when the
/// slot time has not passed yet, otherwise tomorrow.
pub fn first_occurrence(time: ClockTime, now: DateTime<Tz>) -> DateTime<Tz> {
    let today = now.date_naive();
    let candidate = at_local(today, time);
    if candidate > now {
        candidate
    } else {
        at_local(today + Duration::days(1), time)
    }
}

fn at_local(date: NaiveDate, time: ClockTime) -> DateTime<Tz> {
    SCHEDULING_TZ
        .from_local_datetime(&date.and_time(time.to_naive_time()))
        .single()
        .expect("The scheduling timezone has no skipped or ambiguous local times")
}
