use serde::{Deserialize, Serialize};

use crate::dtos::MealProfileDTO;
use dosecal_domain::{MealProfile, ID};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealProfileResponse {
    pub meal_profile: MealProfileDTO,
}

impl MealProfileResponse {
    pub fn new(meal_profile: MealProfile) -> Self {
        Self {
            meal_profile: MealProfileDTO::new(meal_profile),
        }
    }
}

pub mod get_meal_profile {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    pub type APIResponse = MealProfileResponse;
}

pub mod set_meal_profile {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    /// Times arrive as raw strings and are validated server side so a
    /// malformed value produces a proper error message.
    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub breakfast_time: String,
        pub lunch_time: String,
        pub dinner_time: String,
    }

    pub type APIResponse = MealProfileResponse;
}
