use async_trait::async_trait;

/// Opaque bearer token, taken verbatim from the `authtoken` header. Only
/// the identity provider can interpret it.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct AuthToken(pub String);

/// Claims returned by the identity provider for a valid token. Request
/// scoped, never persisted.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UserIdentity {
    pub uid: String,
    pub email: String,
}

/// Token validation, delegated to an external identity provider.
///
/// `Ok(None)` means the provider rejected the token; `Err` means the
/// provider could not be consulted at all.
#[async_trait]
pub trait VerifyIdentity {
    async fn verify(&self, token: &AuthToken) -> anyhow::Result<Option<UserIdentity>>;
}
