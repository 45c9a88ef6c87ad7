use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct GoogleOAuthSettings {
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// OAuth client used to refresh calendar access tokens. `None` means
    /// the real calendar gateway cannot be constructed.
    pub google: Option<GoogleOAuthSettings>,
}

impl Config {
    pub fn new() -> Self {
        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or_else(|_| default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };

        let google = match (
            std::env::var("GOOGLE_CLIENT_ID"),
            std::env::var("GOOGLE_CLIENT_SECRET"),
        ) {
            (Ok(client_id), Ok(client_secret)) => Some(GoogleOAuthSettings {
                client_id,
                client_secret,
            }),
            _ => {
                info!("GOOGLE_CLIENT_ID / GOOGLE_CLIENT_SECRET not set. The Google Calendar gateway will be unavailable.");
                None
            }
        };

        Self { port, google }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
