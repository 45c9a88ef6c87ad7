use serde::{Deserialize, Serialize};

use dosecal_domain::{BatchSummary, MedicationReminderResult, ID};

pub mod schedule_medication_reminders {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
        pub medication_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub result: MedicationReminderResult,
    }

    impl APIResponse {
        pub fn new(result: MedicationReminderResult) -> Self {
            Self { result }
        }
    }
}

pub mod schedule_batch_reminders {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub summary: BatchSummary,
        /// True when any medication failed for lack of a valid calendar
        /// credential; clients show a "reconnect your calendar" prompt.
        pub needs_auth: bool,
    }

    impl APIResponse {
        pub fn new(summary: BatchSummary) -> Self {
            Self {
                needs_auth: summary.needs_auth(),
                summary,
            }
        }
    }
}
