use crate::config::GoogleOAuthSettings;
use crate::repos::ICalendarCredentialRepo;
use chrono::Utc;
use dosecal_domain::ID;
use serde::Deserialize;
use tracing::warn;

// https://developers.google.com/identity/protocols/oauth2/web-server#httprest_3
const TOKEN_REFETCH_ENDPOINT: &str = "https://www.googleapis.com/oauth2/v4/token";

struct RefreshTokenRequest {
    client_id: String,
    client_secret: String,
    refresh_token: String,
}

#[derive(Debug, Deserialize)]
struct RefreshTokenResponse {
    access_token: String,
    // Access token expiry specified in seconds
    expires_in: i64,
}

async fn refresh_access_token(req: RefreshTokenRequest) -> Result<RefreshTokenResponse, ()> {
    let params = [
        ("client_id", req.client_id.as_str()),
        ("client_secret", req.client_secret.as_str()),
        ("refresh_token", req.refresh_token.as_str()),
        ("grant_type", "refresh_token"),
    ];
    let client = reqwest::Client::new();
    let res = client
        .post(TOKEN_REFETCH_ENDPOINT)
        .form(&params)
        .send()
        .await
        .map_err(|_| ())?;

    res.json::<RefreshTokenResponse>().await.map_err(|_| ())
}

/// A valid access token for the user's calendar, refreshed through the
/// OAuth endpoint when the stored one expires within a minute. `None`
/// means the user has to re-authenticate.
pub async fn get_access_token(
    user_id: &ID,
    oauth: &GoogleOAuthSettings,
    credentials: &dyn ICalendarCredentialRepo,
) -> Option<String> {
    let mut credential = credentials.find(user_id).await?;

    let now = Utc::now().timestamp_millis();
    let one_minute_in_millis = 1000 * 60;
    if now + one_minute_in_millis <= credential.access_token_expires_ts {
        // Current access token is still valid for at least one minute so return it
        return Some(credential.access_token);
    }
    // Access token has or will expire soon, now renew it

    let refresh_token_req = RefreshTokenRequest {
        client_id: oauth.client_id.clone(),
        client_secret: oauth.client_secret.clone(),
        refresh_token: credential.refresh_token.clone(),
    };
    match refresh_access_token(refresh_token_req).await {
        Ok(tokens) => {
            credential.access_token = tokens.access_token;
            let now = Utc::now().timestamp_millis();
            credential.access_token_expires_ts = now + tokens.expires_in * 1000;
            let access_token = credential.access_token.clone();

            if let Err(e) = credentials.save(&credential).await {
                warn!(
                    "Unable to save refreshed calendar credential for user. Error: {:?}",
                    e
                );
            }

            Some(access_token)
        }
        Err(_) => {
            warn!("Unable to refresh calendar access token for user: {}", user_id);
            None
        }
    }
}
