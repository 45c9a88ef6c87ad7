use crate::meal_profile::MealProfile;
use crate::medication::{Slot, TimingPreference};
use crate::time::ClockTime;
use chrono_tz::Tz;

/// Reference timezone for all reminder scheduling. Matches the timezone
/// the calendar gateway creates events in.
pub const SCHEDULING_TZ: Tz = chrono_tz::Asia::Kolkata;

/// The night dose trails the dinner reminder by three hours.
pub const NIGHT_OFFSET_MINUTES: i32 = 180;

/// Computes the reminder time for a dosage slot from its meal anchor,
/// wrapping at 24h.
pub fn slot_time(anchor: ClockTime, offset_minutes: i32) -> ClockTime {
    anchor.add_minutes(offset_minutes)
}

/// The wall-clock reminder time for one slot of a medication.
///
/// Morning, afternoon and evening anchor to breakfast, lunch and dinner
/// respectively, shifted 30 minutes by the timing preference. The night
/// slot rides on the timing-adjusted dinner time and adds a further three
/// hours, so the before/after-food offset carries into it.
pub fn reminder_time(slot: Slot, meals: &MealProfile, timing: TimingPreference) -> ClockTime {
    let offset = timing.offset_minutes();
    match slot {
        Slot::Morning => slot_time(meals.breakfast_time, offset),
        Slot::Afternoon => slot_time(meals.lunch_time, offset),
        Slot::Evening => slot_time(meals.dinner_time, offset),
        Slot::Night => slot_time(meals.dinner_time, offset).add_minutes(NIGHT_OFFSET_MINUTES),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn meal_slots_shift_by_timing_preference() {
        let meals = MealProfile::default();

        let morning = reminder_time(Slot::Morning, &meals, TimingPreference::AfterFood);
        assert_eq!(morning, ClockTime::hm(8, 30));
        let morning = reminder_time(Slot::Morning, &meals, TimingPreference::BeforeFood);
        assert_eq!(morning, ClockTime::hm(7, 30));

        let afternoon = reminder_time(Slot::Afternoon, &meals, TimingPreference::AfterFood);
        assert_eq!(afternoon, ClockTime::hm(13, 30));

        let evening = reminder_time(Slot::Evening, &meals, TimingPreference::BeforeFood);
        assert_eq!(evening, ClockTime::hm(18, 30));
    }

    #[test]
    fn night_slot_compounds_dinner_offset() {
        for &(timing, dinner, expected) in &[
            (TimingPreference::AfterFood, ClockTime::hm(19, 0), ClockTime::hm(22, 30)),
            (TimingPreference::BeforeFood, ClockTime::hm(19, 0), ClockTime::hm(21, 30)),
            (TimingPreference::AfterFood, ClockTime::hm(21, 0), ClockTime::hm(0, 30)),
        ] {
            let meals = MealProfile {
                dinner_time: dinner,
                ..MealProfile::default()
            };
            let night = reminder_time(Slot::Night, &meals, timing);
            let adjusted_dinner = slot_time(dinner, timing.offset_minutes());
            assert_eq!(night, adjusted_dinner.add_minutes(NIGHT_OFFSET_MINUTES));
            assert_eq!(night, expected);
        }
    }

    #[test]
    fn late_dinner_wraps_past_midnight() {
        let meals = MealProfile {
            dinner_time: ClockTime::hm(23, 45),
            ..MealProfile::default()
        };
        let evening = reminder_time(Slot::Evening, &meals, TimingPreference::AfterFood);
        assert_eq!(evening, ClockTime::hm(0, 15));
    }
}
