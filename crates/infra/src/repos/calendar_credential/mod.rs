mod inmemory;

pub use inmemory::InMemoryCalendarCredentialRepo;

use dosecal_domain::ID;

/// OAuth tokens granting access to one user's calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarCredential {
    pub user_id: ID,
    pub access_token: String,
    /// Timestamp in millis at which `access_token` expires
    pub access_token_expires_ts: i64,
    pub refresh_token: String,
}

#[async_trait::async_trait]
pub trait ICalendarCredentialRepo: Send + Sync {
    async fn save(&self, credential: &CalendarCredential) -> anyhow::Result<()>;
    async fn find(&self, user_id: &ID) -> Option<CalendarCredential>;
    async fn delete(&self, user_id: &ID) -> Option<CalendarCredential>;
}
