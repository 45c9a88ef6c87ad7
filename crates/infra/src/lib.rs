mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, GoogleOAuthSettings};
pub use repos::{
    CalendarCredential, ICalendarCredentialRepo, IMealProfileRepo, IMedicationRepo, Repos,
};
pub use services::{
    CalendarGatewayError, CreatedEvent, GoogleCalendarGateway, ICalendarGateway,
    InMemoryCalendarGateway,
};
pub use system::{FixedSys, ISys, RealSys};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub calendar: Arc<dyn ICalendarGateway>,
}

/// Will setup the infrastructure context given the environment.
///
/// Panics when the Google OAuth client settings are absent: without a
/// calendar gateway capability nothing in the service can run, so this is
/// a startup failure rather than a per-request one.
pub fn setup_context() -> AppContext {
    let config = Config::new();
    let repos = Repos::create_inmemory();
    let google = config
        .google
        .clone()
        .expect("GOOGLE_CLIENT_ID and GOOGLE_CLIENT_SECRET env vars to be present");
    let calendar = Arc::new(GoogleCalendarGateway::new(
        google,
        repos.calendar_credentials.clone(),
    ));
    AppContext {
        repos,
        config,
        sys: Arc::new(RealSys {}),
        calendar,
    }
}

/// Context wired entirely against in-memory services. Used by tests and
/// local development without Google credentials.
pub fn setup_context_inmemory() -> AppContext {
    AppContext {
        repos: Repos::create_inmemory(),
        config: Config::new(),
        sys: Arc::new(RealSys {}),
        calendar: Arc::new(InMemoryCalendarGateway::new()),
    }
}
