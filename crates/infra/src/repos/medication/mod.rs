mod inmemory;

pub use inmemory::InMemoryMedicationRepo;

use dosecal_domain::{Medication, ID};

#[async_trait::async_trait]
pub trait IMedicationRepo: Send + Sync {
    async fn insert(&self, medication: &Medication) -> anyhow::Result<()>;
    async fn find(&self, medication_id: &ID) -> Option<Medication>;
    async fn find_by_user(&self, user_id: &ID) -> Vec<Medication>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use dosecal_domain::{DosageProfile, TimingPreference};

    fn medication(user_id: &ID) -> Medication {
        Medication {
            id: Default::default(),
            name: "Metformin".into(),
            dosage: DosageProfile {
                morning: 1,
                ..Default::default()
            },
            timing: TimingPreference::AfterFood,
            duration: "2 weeks".into(),
            prescription_id: ID::new(),
            user_id: user_id.clone(),
        }
    }

    #[tokio::test]
    async fn finds_medications_by_id_and_user() {
        let repo = InMemoryMedicationRepo::new();
        let user_id = ID::new();
        let other_user = ID::new();

        let m1 = medication(&user_id);
        let m2 = medication(&user_id);
        let m3 = medication(&other_user);
        for m in vec![&m1, &m2, &m3] {
            repo.insert(m).await.unwrap();
        }

        assert_eq!(repo.find(&m1.id).await.map(|m| m.id), Some(m1.id.clone()));
        assert!(repo.find(&ID::new()).await.is_none());

        let for_user = repo.find_by_user(&user_id).await;
        assert_eq!(for_user.len(), 2);
        assert!(for_user.iter().all(|m| m.user_id == user_id));
    }
}
