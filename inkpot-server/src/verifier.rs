use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use inkpot_api::{AuthToken, UserIdentity, VerifyIdentity};

const LOOKUP_URL: &str = "https://identitytoolkit.googleapis.com/v1/accounts:lookup";

#[derive(serde::Deserialize)]
struct Credentials {
    #[serde(rename = "apiKey")]
    api_key: String,
}

#[derive(serde::Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(serde::Deserialize)]
struct LookupUser {
    #[serde(rename = "localId")]
    local_id: String,
    #[serde(default)]
    email: String,
}

/// Token validation through the Google Identity Toolkit endpoint backing
/// Firebase Authentication.
pub struct GoogleVerifier {
    client: reqwest::Client,
    api_key: String,
}

impl GoogleVerifier {
    pub fn from_credentials_file(path: &Path) -> anyhow::Result<GoogleVerifier> {
        let creds = std::fs::read(path)
            .with_context(|| format!("reading credentials file {path:?}"))?;
        let creds: Credentials =
            serde_json::from_slice(&creds).context("parsing credentials file")?;
        Ok(GoogleVerifier {
            client: reqwest::Client::new(),
            api_key: creds.api_key,
        })
    }
}

#[async_trait]
impl VerifyIdentity for GoogleVerifier {
    async fn verify(&self, token: &AuthToken) -> anyhow::Result<Option<UserIdentity>> {
        let resp = self
            .client
            .post(LOOKUP_URL)
            .query(&[("key", &self.api_key)])
            .json(&serde_json::json!({ "idToken": token.0 }))
            .send()
            .await
            .context("reaching identity provider")?;
        if !resp.status().is_success() {
            // expired, malformed and revoked tokens all end up here; the
            // caller does not distinguish them
            return Ok(None);
        }
        let resp: LookupResponse = resp
            .json()
            .await
            .context("parsing identity provider response")?;
        Ok(resp.users.into_iter().next().map(|u| UserIdentity {
            uid: u.local_id,
            email: u.email,
        }))
    }
}
