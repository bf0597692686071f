use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::Context;
use axum::{
    routing::{get, post, put},
    Router,
};
use structopt::StructOpt;
use tower_http::services::{ServeDir, ServeFile};

use inkpot_api::{ArticleStore, VerifyIdentity};

mod db;
mod error;
mod extractors;
mod handlers;
mod verifier;

#[cfg(test)]
mod tests;

pub use error::Error;
use extractors::{AppState, Store, Verifier};

#[derive(StructOpt)]
#[structopt(name = "inkpot-server", about = "API server for the inkpot blog")]
struct Opt {
    /// Port to listen on
    #[structopt(long, env = "PORT", default_value = "8080")]
    port: u16,

    /// Connection string for the document store
    #[structopt(
        long,
        env = "MONGODB_URI",
        default_value = "mongodb://localhost:27017"
    )]
    mongodb_uri: String,

    /// Database holding the articles collection
    #[structopt(long, env = "MONGODB_DATABASE", default_value = "inkpot")]
    database: String,

    /// Identity provider credentials file
    #[structopt(long, default_value = "firebase-secrets.json")]
    credentials: PathBuf,

    /// Directory with the built frontend, served on all non-API paths
    #[structopt(long, default_value = "build")]
    serve_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let opt = Opt::from_args();

    let verifier = verifier::GoogleVerifier::from_credentials_file(&opt.credentials)
        .context("loading identity provider credentials")?;

    let client = mongodb::Client::with_uri_str(&opt.mongodb_uri)
        .await
        .with_context(|| format!("opening document store at {:?}", opt.mongodb_uri))?;
    let store = db::MongoStore::new(client.database(&opt.database));
    tracing::info!("database connection is established");

    let app = app(Arc::new(store), Arc::new(verifier), Some(opt.serve_dir));

    let addr = SocketAddr::from(([0, 0, 0, 0], opt.port));
    tracing::info!("server is running on port {}", opt.port);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .context("serving api")
}

/// Build the router. `serve_dir` is the built frontend; tests pass `None`
/// since they only exercise the API surface.
pub fn app(
    store: Arc<dyn ArticleStore + Send + Sync>,
    verifier: Arc<dyn VerifyIdentity + Send + Sync>,
    serve_dir: Option<PathBuf>,
) -> Router {
    let state = AppState {
        store: Store(store),
        verifier: Verifier(verifier),
    };
    let api = Router::new()
        .route("/articles/:name", get(handlers::get_article))
        .route("/articles/:name/upvote", put(handlers::upvote_article))
        .route("/articles/:name/comments", post(handlers::post_comment));
    let mut app = Router::new().nest("/api", api).with_state(state);
    if let Some(dir) = serve_dir {
        // anything outside /api falls back to the app shell, so the
        // frontend can do client-side routing
        let index = dir.join("index.html");
        app = app.fallback_service(ServeDir::new(&dir).fallback(ServeFile::new(index)));
    }
    app.layer(tower_http::trace::TraceLayer::new_for_http())
}
