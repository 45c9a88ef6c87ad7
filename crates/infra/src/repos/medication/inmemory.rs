use super::IMedicationRepo;
use dosecal_domain::{Entity, Medication, ID};
use std::sync::Mutex;

pub struct InMemoryMedicationRepo {
    medications: Mutex<Vec<Medication>>,
}

impl InMemoryMedicationRepo {
    pub fn new() -> Self {
        Self {
            medications: Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IMedicationRepo for InMemoryMedicationRepo {
    async fn insert(&self, medication: &Medication) -> anyhow::Result<()> {
        let mut medications = self.medications.lock().unwrap();
        medications.push(medication.clone());
        Ok(())
    }

    async fn find(&self, medication_id: &ID) -> Option<Medication> {
        let medications = self.medications.lock().unwrap();
        medications
            .iter()
            .find(|m| m.id() == medication_id)
            .cloned()
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<Medication> {
        let medications = self.medications.lock().unwrap();
        medications
            .iter()
            .filter(|m| m.user_id == *user_id)
            .cloned()
            .collect()
    }
}
