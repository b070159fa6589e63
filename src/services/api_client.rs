// ============================================================================
// API CLIENT - HTTP ONLY (stateless)
// ============================================================================
// No business logic here: builds requests, applies the timeout, maps errors
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{AbortController, RequestCredentials};

use crate::config::CONFIG;
use crate::services::error::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    timeout_ms: u32,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url.clone(),
            timeout_ms: CONFIG.network_timeout_seconds.saturating_mul(1000),
        }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_ms: CONFIG.network_timeout_seconds.saturating_mul(1000),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    /// GET against the backend with cookies attached
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = Request::get(&self.url(path)).credentials(RequestCredentials::Include);
        let response = self.send(request, None::<&()>).await?;
        parse_json(response).await
    }

    /// POST a JSON body to an absolute URL (third-party endpoints, no cookies)
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(Request::post(url), Some(body)).await?;
        parse_json(response).await
    }

    /// POST and ignore the response body
    pub async fn post_and_forget<B: Serialize>(&self, url: &str, body: &B) -> Result<(), ApiError> {
        self.send(Request::post(url), Some(body)).await.map(|_| ())
    }

    async fn send<B: Serialize>(
        &self,
        builder: RequestBuilder,
        body: Option<&B>,
    ) -> Result<Response, ApiError> {
        // Abort the fetch once the configured timeout elapses
        let controller = AbortController::new().ok();
        let builder = builder.abort_signal(controller.as_ref().map(|c| c.signal()).as_ref());
        let _deadline = controller.map(|controller| {
            Timeout::new(self.timeout_ms, move || controller.abort())
        });

        let request = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Serialize(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| ApiError::Serialize(e.to_string()))?,
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| response.status_text());
            return Err(ApiError::Http { status, body });
        }

        Ok(response)
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_are_joined_to_base() {
        let client = ApiClient::with_base_url("https://chitram.app/");
        assert_eq!(client.base_url(), "https://chitram.app");
        assert_eq!(client.url("/api/videos"), "https://chitram.app/api/videos");
    }

    #[test]
    fn absolute_urls_pass_through() {
        let client = ApiClient::with_base_url("https://chitram.app");
        assert_eq!(
            client.url("https://app.posthog.com/capture/"),
            "https://app.posthog.com/capture/"
        );
    }
}
