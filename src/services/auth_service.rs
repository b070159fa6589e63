use std::collections::HashMap;

use url::Url;

use crate::models::auth::providers_from_map;
use crate::models::{AuthProvider, SessionResponse, SessionStatus};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;

pub const SESSION_PATH: &str = "/api/auth/session";
pub const PROVIDERS_PATH: &str = "/api/auth/providers";
pub const SIGN_OUT_PATH: &str = "/api/auth/signout";

/// Resolves the current session with the identity provider
pub async fn fetch_session(client: &ApiClient) -> Result<SessionStatus, ApiError> {
    log::info!("🔐 Resolving session...");
    let response = client.get_json::<SessionResponse>(SESSION_PATH).await?;
    let status = response.into_status();
    match &status {
        SessionStatus::Authenticated(session) => {
            log::info!("✅ Signed in as {}", session.user.id);
        }
        _ => log::info!("👤 No active session"),
    }
    Ok(status)
}

/// OAuth providers available on the sign-in page
pub async fn load_providers(client: &ApiClient) -> Result<Vec<AuthProvider>, ApiError> {
    let map = client
        .get_json::<HashMap<String, AuthProvider>>(PROVIDERS_PATH)
        .await?;
    let providers = providers_from_map(map);
    log::info!("📋 Sign-in providers loaded: {}", providers.len());
    Ok(providers)
}

/// URL that starts the provider's sign-in flow and returns to `callback_url`
pub fn sign_in_url(
    client: &ApiClient,
    provider: &AuthProvider,
    callback_url: &str,
) -> Result<String, ApiError> {
    let path = provider
        .signin_url
        .clone()
        .unwrap_or_else(|| format!("/api/auth/signin/{}", provider.id));
    let mut url = Url::parse(&client.url(&path)).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
    url.query_pairs_mut().append_pair("callbackUrl", callback_url);
    Ok(url.into())
}

pub fn sign_out_url(client: &ApiClient) -> String {
    client.url(SIGN_OUT_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(signin_url: Option<&str>) -> AuthProvider {
        AuthProvider {
            id: "github".to_string(),
            name: "GitHub".to_string(),
            signin_url: signin_url.map(str::to_string),
        }
    }

    #[test]
    fn sign_in_url_defaults_to_provider_path() {
        let client = ApiClient::with_base_url("https://chitram.app");
        let url = sign_in_url(&client, &provider(None), "https://chitram.app/videos").unwrap();
        assert_eq!(
            url,
            "https://chitram.app/api/auth/signin/github?callbackUrl=https%3A%2F%2Fchitram.app%2Fvideos"
        );
    }

    #[test]
    fn sign_in_url_uses_absolute_provider_url() {
        let client = ApiClient::with_base_url("https://chitram.app");
        let url = sign_in_url(
            &client,
            &provider(Some("https://auth.chitram.app/signin/github")),
            "/videos",
        )
        .unwrap();
        assert!(url.starts_with("https://auth.chitram.app/signin/github?callbackUrl="));
    }
}
