#![cfg(test)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{self, request, StatusCode},
    Router,
};
use inkpot_api::{Article, ArticleView, Comment};
use inkpot_mock_server::{MockStore, MockVerifier};
use tower::{Service, ServiceExt};

use crate::app;

const U1_TOKEN: &str = "token-u1";
const U2_TOKEN: &str = "token-u2";

fn seeded_article() -> Article {
    Article {
        name: String::from("learn-react"),
        upvotes: 5,
        upvoted_ids: vec![String::from("u1")],
        comments: vec![Comment {
            username: String::from("seed@example.com"),
            comment: String::from("first!"),
        }],
    }
}

async fn test_app() -> (Router, Arc<MockStore>) {
    let store = Arc::new(MockStore::new());
    store.insert(seeded_article()).await;
    let verifier = MockVerifier::new()
        .with_user(U1_TOKEN, "u1", "u1@example.com")
        .with_user(U2_TOKEN, "u2", "u2@example.com");
    let app = app(store.clone(), Arc::new(verifier), None);
    (app, store)
}

async fn run_on_app(
    app: &mut Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, Vec<u8>) {
    let req = request::Builder::new().method(method).uri(uri);
    let req = match token {
        Some(token) => req.header("authtoken", token),
        None => req,
    };
    let req = match body {
        Some(body) => req
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::to_vec(&body).expect("serializing request body"),
            )),
        None => req.body(Body::empty()),
    }
    .expect("building request");

    app.ready().await.expect("waiting for app to be ready");
    let resp = app.call(req).await.expect("running request");
    let status = resp.status();
    let body = hyper::body::to_bytes(resp.into_body())
        .await
        .expect("recovering resp bytes");
    (status, body.to_vec())
}

fn parse<T: for<'de> serde::Deserialize<'de>>(body: &[u8]) -> T {
    serde_json::from_slice(body).expect("parsing response body")
}

#[tokio::test]
async fn fetching_never_mutates() {
    let (mut app, store) = test_app().await;

    let (status, first) = run_on_app(&mut app, "GET", "/api/articles/learn-react", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, second) =
        run_on_app(&mut app, "GET", "/api/articles/learn-react", None, None).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(first, second);
    assert_eq!(
        store.test_article("learn-react").await,
        Some(seeded_article())
    );
}

#[tokio::test]
async fn can_upvote_tracks_the_requesting_identity() {
    let (mut app, _store) = test_app().await;

    // anonymous callers can never upvote
    let (_, body) = run_on_app(&mut app, "GET", "/api/articles/learn-react", None, None).await;
    assert!(!parse::<ArticleView>(&body).can_upvote);

    // u1 already upvoted
    let (_, body) = run_on_app(
        &mut app,
        "GET",
        "/api/articles/learn-react",
        Some(U1_TOKEN),
        None,
    )
    .await;
    assert!(!parse::<ArticleView>(&body).can_upvote);

    // u2 has not
    let (_, body) = run_on_app(
        &mut app,
        "GET",
        "/api/articles/learn-react",
        Some(U2_TOKEN),
        None,
    )
    .await;
    assert!(parse::<ArticleView>(&body).can_upvote);
}

#[tokio::test]
async fn upvoting_counts_once_per_user() {
    let (mut app, store) = test_app().await;

    let (status, body) = run_on_app(
        &mut app,
        "PUT",
        "/api/articles/learn-react/upvote",
        Some(U2_TOKEN),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let article: Article = parse(&body);
    assert_eq!(article.upvotes, 6);
    assert_eq!(
        article.upvoted_ids,
        vec![String::from("u1"), String::from("u2")]
    );

    // the same user upvoting again is a silent no-op
    let (status, body) = run_on_app(
        &mut app,
        "PUT",
        "/api/articles/learn-react/upvote",
        Some(U2_TOKEN),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse::<Article>(&body).upvotes, 6);

    // and the fetched view now reports the vote as spent
    let (_, body) = run_on_app(
        &mut app,
        "GET",
        "/api/articles/learn-react",
        Some(U2_TOKEN),
        None,
    )
    .await;
    assert!(!parse::<ArticleView>(&body).can_upvote);

    assert_eq!(
        store.test_article("learn-react").await.map(|a| a.upvotes),
        Some(6)
    );
}

#[tokio::test]
async fn upvoting_twice_from_the_start_changes_nothing() {
    let (mut app, _store) = test_app().await;

    let (status, body) = run_on_app(
        &mut app,
        "PUT",
        "/api/articles/learn-react/upvote",
        Some(U1_TOKEN),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let article: Article = parse(&body);
    assert_eq!(article.upvotes, 5);
    assert_eq!(article.upvoted_ids, vec![String::from("u1")]);
}

#[tokio::test]
async fn comments_append_at_the_end() {
    let (mut app, store) = test_app().await;

    let (status, body) = run_on_app(
        &mut app,
        "POST",
        "/api/articles/learn-react/comments",
        Some(U2_TOKEN),
        Some(serde_json::json!({ "email": "a@b.com", "comment": "nice" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let article: Article = parse(&body);
    assert_eq!(article.comments.len(), 2);
    assert_eq!(
        article.comments[0],
        Comment {
            username: String::from("seed@example.com"),
            comment: String::from("first!"),
        }
    );
    assert_eq!(
        article.comments[1],
        Comment {
            username: String::from("a@b.com"),
            comment: String::from("nice"),
        }
    );

    // a second comment lands after the first
    let (_, body) = run_on_app(
        &mut app,
        "POST",
        "/api/articles/learn-react/comments",
        Some(U2_TOKEN),
        Some(serde_json::json!({ "email": "a@b.com", "comment": "still nice" })),
    )
    .await;
    let article: Article = parse(&body);
    assert_eq!(article.comments.len(), 3);
    assert_eq!(article.comments[2].comment, "still nice");

    assert_eq!(store.test_article("learn-react").await, Some(article));
}

#[tokio::test]
async fn missing_articles_are_404_and_leave_the_store_alone() {
    let (mut app, store) = test_app().await;

    let (status, body) =
        run_on_app(&mut app, "GET", "/api/articles/does-not-exist", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, b"No matching article found!");

    let (status, _) = run_on_app(
        &mut app,
        "PUT",
        "/api/articles/does-not-exist/upvote",
        Some(U1_TOKEN),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = run_on_app(
        &mut app,
        "POST",
        "/api/articles/does-not-exist/comments",
        Some(U1_TOKEN),
        Some(serde_json::json!({ "email": "a@b.com", "comment": "hello?" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(store.test_num_articles().await, 1);
    assert_eq!(
        store.test_article("learn-react").await,
        Some(seeded_article())
    );
}

#[tokio::test]
async fn anonymous_mutations_are_rejected() {
    let (mut app, store) = test_app().await;

    let (status, body) = run_on_app(
        &mut app,
        "PUT",
        "/api/articles/learn-react/upvote",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.is_empty());

    let (status, _) = run_on_app(
        &mut app,
        "POST",
        "/api/articles/learn-react/comments",
        None,
        Some(serde_json::json!({ "email": "a@b.com", "comment": "nope" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    assert_eq!(
        store.test_article("learn-react").await,
        Some(seeded_article())
    );
}

#[tokio::test]
async fn unverifiable_tokens_fail_even_readonly_requests() {
    let (mut app, _store) = test_app().await;

    let (status, body) = run_on_app(
        &mut app,
        "GET",
        "/api/articles/learn-react",
        Some("garbage"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.is_empty());

    let (status, _) = run_on_app(
        &mut app,
        "PUT",
        "/api/articles/learn-react/upvote",
        Some("garbage"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
