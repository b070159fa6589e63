use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// OAuth provider as listed by the identity provider
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthProvider {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub signin_url: Option<String>,
}

/// Provider map keyed by id, ordered by name for stable rendering
pub fn providers_from_map(map: HashMap<String, AuthProvider>) -> Vec<AuthProvider> {
    let mut providers: Vec<AuthProvider> = map.into_values().collect();
    providers.sort_by(|a, b| a.name.cmp(&b.name));
    providers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_map_is_sorted_by_name() {
        let body = r#"{
            "google": {"id": "google", "name": "Google", "signinUrl": "/api/auth/signin/google", "callbackUrl": "/api/auth/callback/google"},
            "github": {"id": "github", "name": "GitHub"}
        }"#;
        let map: HashMap<String, AuthProvider> = serde_json::from_str(body).unwrap();
        let providers = providers_from_map(map);
        assert_eq!(providers[0].id, "github");
        assert_eq!(providers[1].signin_url.as_deref(), Some("/api/auth/signin/google"));
    }
}
