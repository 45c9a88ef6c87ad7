mod inmemory;

pub use inmemory::InMemoryMealProfileRepo;

use dosecal_domain::{MealProfile, ID};

#[async_trait::async_trait]
pub trait IMealProfileRepo: Send + Sync {
    async fn save(&self, user_id: &ID, profile: &MealProfile) -> anyhow::Result<()>;
    async fn find(&self, user_id: &ID) -> Option<MealProfile>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use dosecal_domain::ClockTime;

    #[tokio::test]
    async fn saves_and_finds_profile_by_user() {
        let repo = InMemoryMealProfileRepo::new();
        let user_id = ID::new();

        assert!(repo.find(&user_id).await.is_none());

        let profile = MealProfile {
            breakfast_time: ClockTime::hm(7, 0),
            ..MealProfile::default()
        };
        repo.save(&user_id, &profile).await.unwrap();
        assert_eq!(repo.find(&user_id).await, Some(profile.clone()));

        // Saving again replaces the stored profile
        let updated = MealProfile {
            dinner_time: ClockTime::hm(20, 0),
            ..profile
        };
        repo.save(&user_id, &updated).await.unwrap();
        assert_eq!(repo.find(&user_id).await, Some(updated));
    }
}
