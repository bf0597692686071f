use anyhow::Context;
use axum::{
    extract::{Path, State},
    Json,
};
use inkpot_api::{Article, ArticleView, Comment, NewComment};

use crate::{extractors::*, Error};

pub async fn get_article(
    State(store): State<Store>,
    Identity(user): Identity,
    Path(name): Path<String>,
) -> Result<Json<ArticleView>, Error> {
    let article = store
        .find(&name)
        .await
        .with_context(|| format!("fetching article {name:?}"))?
        .ok_or_else(|| Error::article_not_found(&name))?;
    let can_upvote = article.can_upvote(user.as_ref());
    Ok(Json(ArticleView { article, can_upvote }))
}

pub async fn upvote_article(
    Auth(user): Auth,
    State(store): State<Store>,
    Path(name): Path<String>,
) -> Result<Json<Article>, Error> {
    // one conditional update: a second upvote from the same user matches
    // nothing, even when racing the first
    let article = store
        .record_upvote(&name, &user.uid)
        .await
        .with_context(|| format!("recording upvote on {name:?} by {:?}", user.uid))?
        .ok_or_else(|| Error::article_not_found(&name))?;
    Ok(Json(article))
}

pub async fn post_comment(
    Auth(_user): Auth,
    State(store): State<Store>,
    Path(name): Path<String>,
    Json(data): Json<NewComment>,
) -> Result<Json<Article>, Error> {
    // the recorded username is whatever email the body claims; the
    // authenticated identity is only used as a gate
    let comment = Comment {
        username: data.email,
        comment: data.comment,
    };
    let article = store
        .add_comment(&name, comment)
        .await
        .with_context(|| format!("adding comment to {name:?}"))?
        .ok_or_else(|| Error::article_not_found(&name))?;
    Ok(Json(article))
}
