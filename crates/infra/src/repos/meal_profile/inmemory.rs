use super::IMealProfileRepo;
use dosecal_domain::{MealProfile, ID};
use std::sync::Mutex;

pub struct InMemoryMealProfileRepo {
    profiles: Mutex<Vec<(ID, MealProfile)>>,
}

impl InMemoryMealProfileRepo {
    pub fn new() -> Self {
        Self {
            profiles: Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IMealProfileRepo for InMemoryMealProfileRepo {
    async fn save(&self, user_id: &ID, profile: &MealProfile) -> anyhow::Result<()> {
        let mut profiles = self.profiles.lock().unwrap();
        match profiles.iter_mut().find(|(id, _)| id == user_id) {
            Some(entry) => entry.1 = profile.clone(),
            None => profiles.push((user_id.clone(), profile.clone())),
        }
        Ok(())
    }

    async fn find(&self, user_id: &ID) -> Option<MealProfile> {
        let profiles = self.profiles.lock().unwrap();
        profiles
            .iter()
            .find(|(id, _)| id == user_id)
            .map(|(_, profile)| profile.clone())
    }
}
