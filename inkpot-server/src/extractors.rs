use std::{ops::Deref, sync::Arc};

use anyhow::Context;
use axum::{async_trait, extract::FromRequestParts, http::request};
use inkpot_api::{ArticleStore, AuthToken, UserIdentity, VerifyIdentity};

use crate::Error;

#[derive(Clone, axum::extract::FromRef)]
pub struct AppState {
    pub store: Store,
    pub verifier: Verifier,
}

/// Handle on the shared document store. Opened once at startup and cloned
/// into every request; the driver owns pooling.
#[derive(Clone)]
pub struct Store(pub Arc<dyn ArticleStore + Send + Sync>);

impl Deref for Store {
    type Target = dyn ArticleStore + Send + Sync;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

#[derive(Clone)]
pub struct Verifier(pub Arc<dyn VerifyIdentity + Send + Sync>);

impl Deref for Verifier {
    type Target = dyn VerifyIdentity + Send + Sync;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

/// The raw `authtoken` header, if one was sent.
pub struct MaybeToken(pub Option<AuthToken>);

#[async_trait]
impl<S: Sync> FromRequestParts<S> for MaybeToken {
    type Rejection = Error;

    async fn from_request_parts(req: &mut request::Parts, _state: &S) -> Result<MaybeToken, Error> {
        match req.headers.get("authtoken") {
            None => Ok(MaybeToken(None)),
            Some(token) => {
                let token = token.to_str().map_err(|_| Error::invalid_token())?;
                Ok(MaybeToken(Some(AuthToken(String::from(token)))))
            }
        }
    }
}

/// Identity attached to the request: `None` for anonymous callers. A token
/// that the provider rejects fails the whole request with 400, without
/// distinguishing why it was rejected.
pub struct Identity(pub Option<UserIdentity>);

#[async_trait]
impl FromRequestParts<AppState> for Identity {
    type Rejection = Error;

    async fn from_request_parts(
        req: &mut request::Parts,
        state: &AppState,
    ) -> Result<Identity, Error> {
        let MaybeToken(token) = MaybeToken::from_request_parts(req, state).await?;
        let Some(token) = token else {
            return Ok(Identity(None));
        };
        match state
            .verifier
            .verify(&token)
            .await
            .context("verifying auth token")?
        {
            Some(user) => Ok(Identity(Some(user))),
            None => Err(Error::invalid_token()),
        }
    }
}

/// Gate for the mutating routes: requires a verified identity, else 401.
pub struct Auth(pub UserIdentity);

#[async_trait]
impl FromRequestParts<AppState> for Auth {
    type Rejection = Error;

    async fn from_request_parts(req: &mut request::Parts, state: &AppState) -> Result<Auth, Error> {
        match Identity::from_request_parts(req, state).await?.0 {
            Some(user) => Ok(Auth(user)),
            None => Err(Error::login_required()),
        }
    }
}
