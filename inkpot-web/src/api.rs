use anyhow::Context;
use inkpot_api::{Article, ArticleView, NewComment};

use crate::LoginInfo;

/// Public web API key of the identity provider project, baked in at build
/// time like the rest of the bundle configuration.
const PROVIDER_API_KEY: Option<&str> = option_env!("INKPOT_WEB_API_KEY");

const SIGN_IN_URL: &str =
    "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword";

// the app is served by the API server itself, so the API lives on our own
// origin
fn api_base() -> String {
    web_sys::window()
        .expect("no window")
        .location()
        .origin()
        .expect("no origin")
}

pub async fn fetch_article(name: &str, token: Option<&str>) -> ArticleView {
    let mut req = crate::CLIENT.get(format!("{}/api/articles/{name}", api_base()));
    if let Some(token) = token {
        req = req.header("authtoken", token);
    }
    // TODO: surface fetch failures as an error banner instead of panicking
    req.send()
        .await
        .expect("failed to fetch article")
        .json()
        .await
        .expect("failed to parse article")
}

pub async fn upvote_article(name: &str, token: &str) -> Article {
    crate::CLIENT
        .put(format!("{}/api/articles/{name}/upvote", api_base()))
        .header("authtoken", token)
        .send()
        .await
        .expect("failed to upvote")
        .json()
        .await
        .expect("failed to parse upvoted article")
}

pub async fn post_comment(name: &str, token: &str, comment: &NewComment) -> Article {
    crate::CLIENT
        .post(format!("{}/api/articles/{name}/comments", api_base()))
        .header("authtoken", token)
        .json(comment)
        .send()
        .await
        .expect("failed to post comment")
        .json()
        .await
        .expect("failed to parse commented article")
}

#[derive(serde::Deserialize)]
struct SignInResponse {
    #[serde(rename = "idToken")]
    id_token: String,
    email: String,
}

/// Exchange email and password for a provider-issued token.
pub async fn sign_in(email: &str, password: &str) -> anyhow::Result<LoginInfo> {
    let key = PROVIDER_API_KEY
        .context("INKPOT_WEB_API_KEY was not set when this bundle was built")?;
    let resp = crate::CLIENT
        .post(format!("{SIGN_IN_URL}?key={key}"))
        .json(&serde_json::json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        }))
        .send()
        .await
        .context("reaching identity provider")?;
    if !resp.status().is_success() {
        anyhow::bail!("the identity provider rejected this email and password");
    }
    let resp: SignInResponse = resp.json().await.context("parsing sign-in response")?;
    Ok(LoginInfo {
        token: resp.id_token,
        email: resp.email,
    })
}
