use dosecal_domain::{ClockTime, MealProfile};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MealProfileDTO {
    pub breakfast_time: ClockTime,
    pub lunch_time: ClockTime,
    pub dinner_time: ClockTime,
}

impl MealProfileDTO {
    pub fn new(profile: MealProfile) -> Self {
        Self {
            breakfast_time: profile.breakfast_time,
            lunch_time: profile.lunch_time,
            dinner_time: profile.dinner_time,
        }
    }
}
