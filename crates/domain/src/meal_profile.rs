use crate::time::ClockTime;
use serde::{Deserialize, Serialize};

/// A user's daily meal schedule, the anchors all reminder times are
/// computed from.
///
/// Every user conceptually has a profile: when none has been stored the
/// defaults below are substituted, so the plan builder never sees a
/// missing anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealProfile {
    pub breakfast_time: ClockTime,
    pub lunch_time: ClockTime,
    pub dinner_time: ClockTime,
}

impl Default for MealProfile {
    fn default() -> Self {
        Self {
            breakfast_time: ClockTime::hm(8, 0),
            lunch_time: ClockTime::hm(13, 0),
            dinner_time: ClockTime::hm(19, 0),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_profile_matches_standard_meal_times() {
        let profile = MealProfile::default();
        assert_eq!(profile.breakfast_time.to_string(), "08:00");
        assert_eq!(profile.lunch_time.to_string(), "13:00");
        assert_eq!(profile.dinner_time.to_string(), "19:00");
    }

    #[test]
    fn serializes_times_as_strings() {
        let profile = MealProfile::default();
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["breakfastTime"], "08:00");
        assert_eq!(json["dinnerTime"], "19:00");
    }
}
