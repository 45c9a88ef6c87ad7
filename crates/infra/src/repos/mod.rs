mod calendar_credential;
mod meal_profile;
mod medication;

pub use calendar_credential::{CalendarCredential, ICalendarCredentialRepo};
pub use meal_profile::IMealProfileRepo;
pub use medication::IMedicationRepo;

use calendar_credential::InMemoryCalendarCredentialRepo;
use meal_profile::InMemoryMealProfileRepo;
use medication::InMemoryMedicationRepo;
use std::sync::Arc;

#[derive(Clone)]
pub struct Repos {
    pub meal_profiles: Arc<dyn IMealProfileRepo>,
    pub medications: Arc<dyn IMedicationRepo>,
    pub calendar_credentials: Arc<dyn ICalendarCredentialRepo>,
}

impl Repos {
    pub fn create_inmemory() -> Self {
        Self {
            meal_profiles: Arc::new(InMemoryMealProfileRepo::new()),
            medications: Arc::new(InMemoryMedicationRepo::new()),
            calendar_credentials: Arc::new(InMemoryCalendarCredentialRepo::new()),
        }
    }
}
