use super::{CalendarCredential, ICalendarCredentialRepo};
use dosecal_domain::ID;
use std::sync::Mutex;

pub struct InMemoryCalendarCredentialRepo {
    credentials: Mutex<Vec<CalendarCredential>>,
}

impl InMemoryCalendarCredentialRepo {
    pub fn new() -> Self {
        Self {
            credentials: Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl ICalendarCredentialRepo for InMemoryCalendarCredentialRepo {
    async fn save(&self, credential: &CalendarCredential) -> anyhow::Result<()> {
        let mut credentials = self.credentials.lock().unwrap();
        match credentials
            .iter_mut()
            .find(|c| c.user_id == credential.user_id)
        {
            Some(entry) => *entry = credential.clone(),
            None => credentials.push(credential.clone()),
        }
        Ok(())
    }

    async fn find(&self, user_id: &ID) -> Option<CalendarCredential> {
        let credentials = self.credentials.lock().unwrap();
        credentials.iter().find(|c| c.user_id == *user_id).cloned()
    }

    async fn delete(&self, user_id: &ID) -> Option<CalendarCredential> {
        let mut credentials = self.credentials.lock().unwrap();
        let index = credentials.iter().position(|c| c.user_id == *user_id)?;
        Some(credentials.remove(index))
    }
}
