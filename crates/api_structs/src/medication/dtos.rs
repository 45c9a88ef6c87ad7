use dosecal_domain::{DosageProfile, Medication, TimingPreference, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MedicationDTO {
    pub id: ID,
    pub name: String,
    pub dosage: DosageProfile,
    pub timing: TimingPreference,
    pub duration: String,
    pub prescription_id: ID,
    pub user_id: ID,
}

impl MedicationDTO {
    pub fn new(medication: Medication) -> Self {
        Self {
            id: medication.id,
            name: medication.name,
            dosage: medication.dosage,
            timing: medication.timing,
            duration: medication.duration,
            prescription_id: medication.prescription_id,
            user_id: medication.user_id,
        }
    }
}
