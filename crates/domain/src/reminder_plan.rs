use crate::duration::parse_duration_days;
use crate::meal_profile::MealProfile;
use crate::medication::{Medication, Slot};
use crate::time::ClockTime;
use crate::time_policy::reminder_time;
use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// One reminder to be materialized as a recurring calendar event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderSlot {
    pub slot: Slot,
    pub time: ClockTime,
    /// Human label shown in the calendar event, e.g. "Morning (After Food)".
    pub label: String,
    pub dose_count: u32,
    pub recurrence_end_date: NaiveDate,
}

/// The ordered reminder slots derived for one medication.
///
/// Slots appear in fixed order (morning, afternoon, evening, night) with
/// zero-dose slots skipped. An empty plan is valid and means there is
/// nothing to schedule. Plans are rebuilt on every invocation and never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReminderPlan {
    slots: Vec<ReminderSlot>,
}

impl ReminderPlan {
    /// Derives the plan for `medication` given the owner's meal profile.
    ///
    /// `today` is the current date in the scheduling timezone; the caller
    /// injects it so the result is deterministic for a fixed clock. The
    /// recurrence end date is `today` plus the parsed medication duration.
    pub fn build(meals: &MealProfile, medication: &Medication, today: NaiveDate) -> Self {
        let duration_days = parse_duration_days(&medication.duration);
        let end_date = today + Duration::days(i64::from(duration_days));

        let mut slots = Vec::new();
        for &slot in Slot::ALL.iter() {
            let dose_count = medication.dosage.dose_count(slot);
            if dose_count == 0 {
                continue;
            }
            slots.push(ReminderSlot {
                slot,
                time: reminder_time(slot, meals, medication.timing),
                label: format!("{} ({})", slot, medication.timing),
                dose_count,
                recurrence_end_date: end_date,
            });
        }

        Self { slots }
    }

    pub fn slots(&self) -> &[ReminderSlot] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::medication::{DosageProfile, TimingPreference};
    use crate::shared::entity::ID;

    fn medication(dosage: DosageProfile, timing: TimingPreference, duration: &str) -> Medication {
        Medication {
            id: Default::default(),
            name: "Amoxicillin".into(),
            dosage,
            timing,
            duration: duration.into(),
            prescription_id: ID::new(),
            user_id: ID::new(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn empty_dosage_yields_empty_plan() {
        let medication = medication(
            DosageProfile::default(),
            TimingPreference::AfterFood,
            "5 days",
        );
        let plan = ReminderPlan::build(&MealProfile::default(), &medication, today());
        assert!(plan.is_empty());
    }

    #[test]
    fn skips_zero_dose_slots_and_keeps_order() {
        let medication = medication(
            DosageProfile {
                morning: 1,
                afternoon: 0,
                evening: 2,
                night: 0,
            },
            TimingPreference::AfterFood,
            "3 days",
        );
        let plan = ReminderPlan::build(&MealProfile::default(), &medication, today());

        assert_eq!(plan.len(), 2);
        let slots = plan.slots();
        assert_eq!(slots[0].slot, Slot::Morning);
        assert_eq!(slots[0].time, ClockTime::hm(8, 30));
        assert_eq!(slots[0].label, "Morning (After Food)");
        assert_eq!(slots[0].dose_count, 1);
        assert_eq!(slots[1].slot, Slot::Evening);
        assert_eq!(slots[1].time, ClockTime::hm(19, 30));
        assert_eq!(slots[1].label, "Evening (After Food)");
        assert_eq!(slots[1].dose_count, 2);
        for slot in slots {
            assert_eq!(
                slot.recurrence_end_date,
                NaiveDate::from_ymd_opt(2026, 8, 10).unwrap()
            );
        }
    }

    #[test]
    fn full_dosage_covers_all_four_slots_in_order() {
        let medication = medication(
            DosageProfile {
                morning: 1,
                afternoon: 1,
                evening: 1,
                night: 1,
            },
            TimingPreference::BeforeFood,
            "1 week",
        );
        let plan = ReminderPlan::build(&MealProfile::default(), &medication, today());

        let slots: Vec<_> = plan.slots().iter().map(|s| s.slot).collect();
        assert_eq!(
            slots,
            vec![Slot::Morning, Slot::Afternoon, Slot::Evening, Slot::Night]
        );
        assert_eq!(plan.slots()[3].time, ClockTime::hm(21, 30));
        assert_eq!(plan.slots()[3].label, "Night (Before Food)");
        assert_eq!(
            plan.slots()[0].recurrence_end_date,
            NaiveDate::from_ymd_opt(2026, 8, 14).unwrap()
        );
    }

    #[test]
    fn unparseable_duration_defaults_to_a_week() {
        let medication = medication(
            DosageProfile {
                morning: 1,
                ..Default::default()
            },
            TimingPreference::AfterFood,
            "as needed",
        );
        let plan = ReminderPlan::build(&MealProfile::default(), &medication, today());
        assert_eq!(
            plan.slots()[0].recurrence_end_date,
            NaiveDate::from_ymd_opt(2026, 8, 14).unwrap()
        );
    }
}
