mod duration;
mod event;
mod meal_profile;
mod medication;
mod reminder_plan;
mod report;
mod shared;
mod time;
mod time_policy;

pub use duration::parse_duration_days;
pub use event::{
    first_occurrence, EventReminderOverride, ReminderChannel, ReminderEvent,
    EVENT_DURATION_MINUTES,
};
pub use meal_profile::MealProfile;
pub use medication::{DosageProfile, Medication, Slot, TimingPreference};
pub use reminder_plan::{ReminderPlan, ReminderSlot};
pub use report::{BatchSummary, CreatedEventRef, MedicationReminderResult};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use shared::recurrence::DailyRecurrence;
pub use time::{ClockTime, InvalidTimeError};
pub use time_policy::{reminder_time, slot_time, NIGHT_OFFSET_MINUTES, SCHEDULING_TZ};
