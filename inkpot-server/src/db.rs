use anyhow::Context;
use async_trait::async_trait;
use inkpot_api::{Article, ArticleStore, Comment};
use mongodb::bson::doc;

/// The `articles` collection of the backing MongoDB database.
#[derive(Clone)]
pub struct MongoStore {
    articles: mongodb::Collection<Article>,
}

impl MongoStore {
    pub fn new(db: mongodb::Database) -> MongoStore {
        MongoStore {
            articles: db.collection("articles"),
        }
    }

    async fn find_current(&self, name: &str) -> anyhow::Result<Option<Article>> {
        self.articles
            .find_one(doc! { "name": name }, None)
            .await
            .with_context(|| format!("querying articles collection for {name:?}"))
    }
}

#[async_trait]
impl ArticleStore for MongoStore {
    async fn find(&self, name: &str) -> anyhow::Result<Option<Article>> {
        self.find_current(name).await
    }

    async fn record_upvote(&self, name: &str, uid: &str) -> anyhow::Result<Option<Article>> {
        // the filter only matches while `uid` is absent from upvotedIds, so
        // increment-and-append is atomic per user
        self.articles
            .update_one(
                doc! { "name": name, "upvotedIds": { "$ne": uid } },
                doc! { "$inc": { "upvotes": 1 }, "$push": { "upvotedIds": uid } },
                None,
            )
            .await
            .with_context(|| format!("recording upvote on {name:?}"))?;
        self.find_current(name).await
    }

    async fn add_comment(&self, name: &str, comment: Comment) -> anyhow::Result<Option<Article>> {
        self.articles
            .update_one(
                doc! { "name": name },
                doc! { "$push": { "comments": {
                    "username": &comment.username,
                    "comment": &comment.comment,
                } } },
                None,
            )
            .await
            .with_context(|| format!("appending comment to {name:?}"))?;
        self.find_current(name).await
    }
}
