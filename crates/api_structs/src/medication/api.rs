use serde::{Deserialize, Serialize};

use crate::dtos::MedicationDTO;
use dosecal_domain::{DosageProfile, Medication, TimingPreference, ID};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationsResponse {
    pub medications: Vec<MedicationDTO>,
}

impl MedicationsResponse {
    pub fn new(medications: Vec<Medication>) -> Self {
        Self {
            medications: medications.into_iter().map(MedicationDTO::new).collect(),
        }
    }
}

pub mod add_medications {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
        pub prescription_id: ID,
    }

    /// One medication as extracted from a prescription or entered by hand.
    #[derive(Debug, Clone, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct MedicationInput {
        pub name: String,
        #[serde(default)]
        pub dosage: DosageProfile,
        #[serde(default)]
        pub timing: TimingPreference,
        #[serde(default)]
        pub duration: String,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub medications: Vec<MedicationInput>,
    }

    pub type APIResponse = MedicationsResponse;
}

pub mod get_medications {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    pub type APIResponse = MedicationsResponse;
}
