use crate::time::ClockTime;
use serde::{Deserialize, Serialize};

/// Reference to a calendar event the gateway created for one slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedEventRef {
    pub event_id: String,
    pub event_link: String,
    pub time: ClockTime,
    pub label: String,
}

/// Outcome of materializing one medication's reminder plan.
///
/// Slot-level gateway failures are non-fatal: the result can be a success
/// with fewer created events than plan slots. `needs_auth` marks the
/// systemic case where the user's calendar credential was missing or
/// invalid, so the caller can prompt for re-authentication.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationReminderResult {
    pub medication_name: String,
    pub success: bool,
    pub created_events: Vec<CreatedEventRef>,
    pub message: String,
    pub needs_auth: bool,
}

/// Aggregated outcome of a batch run over several medications.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub results: Vec<MedicationReminderResult>,
    pub total_count: usize,
    pub success_count: usize,
    pub failed_count: usize,
}

impl BatchSummary {
    pub fn tally(results: Vec<MedicationReminderResult>) -> Self {
        let total_count = results.len();
        let success_count = results.iter().filter(|r| r.success).count();
        Self {
            total_count,
            success_count,
            failed_count: total_count - success_count,
            results,
        }
    }

    /// True when any medication failed because the calendar credential is
    /// missing or invalid. Callers surface a re-authentication prompt.
    pub fn needs_auth(&self) -> bool {
        self.results.iter().any(|r| r.needs_auth)
    }
}
