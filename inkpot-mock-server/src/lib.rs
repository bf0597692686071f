use std::collections::BTreeMap;

use async_trait::async_trait;
use inkpot_api::{Article, ArticleStore, AuthToken, Comment, UserIdentity, VerifyIdentity};
use tokio::sync::RwLock;

/// In-memory stand-in for the articles collection, with the same
/// per-article atomicity as the real store: the upvote check-and-mutate
/// happens under a single write lock.
pub struct MockStore(RwLock<BTreeMap<String, Article>>);

impl MockStore {
    pub fn new() -> MockStore {
        MockStore(RwLock::new(BTreeMap::new()))
    }

    pub async fn insert(&self, article: Article) {
        self.0.write().await.insert(article.name.clone(), article);
    }

    /// Return a snapshot of article `name`, for test assertions.
    pub async fn test_article(&self, name: &str) -> Option<Article> {
        self.0.read().await.get(name).cloned()
    }

    /// Return the current number of articles.
    pub async fn test_num_articles(&self) -> usize {
        self.0.read().await.len()
    }
}

#[async_trait]
impl ArticleStore for MockStore {
    async fn find(&self, name: &str) -> anyhow::Result<Option<Article>> {
        Ok(self.0.read().await.get(name).cloned())
    }

    async fn record_upvote(&self, name: &str, uid: &str) -> anyhow::Result<Option<Article>> {
        let mut articles = self.0.write().await;
        let Some(article) = articles.get_mut(name) else {
            return Ok(None);
        };
        if !article.upvoted_ids.iter().any(|id| id == uid) {
            article.upvotes += 1;
            article.upvoted_ids.push(String::from(uid));
        }
        Ok(Some(article.clone()))
    }

    async fn add_comment(&self, name: &str, comment: Comment) -> anyhow::Result<Option<Article>> {
        let mut articles = self.0.write().await;
        let Some(article) = articles.get_mut(name) else {
            return Ok(None);
        };
        article.comments.push(comment);
        Ok(Some(article.clone()))
    }
}

/// Identity verifier backed by a fixed token table.
pub struct MockVerifier(BTreeMap<String, UserIdentity>);

impl MockVerifier {
    pub fn new() -> MockVerifier {
        MockVerifier(BTreeMap::new())
    }

    pub fn with_user(mut self, token: &str, uid: &str, email: &str) -> MockVerifier {
        self.0.insert(
            String::from(token),
            UserIdentity {
                uid: String::from(uid),
                email: String::from(email),
            },
        );
        self
    }
}

#[async_trait]
impl VerifyIdentity for MockVerifier {
    async fn verify(&self, token: &AuthToken) -> anyhow::Result<Option<UserIdentity>> {
        Ok(self.0.get(&token.0).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn repeated_upvotes_only_count_once() {
        let store = MockStore::new();
        store.insert(Article::new(String::from("learn-react"))).await;

        let first = store
            .record_upvote("learn-react", "u1")
            .await
            .expect("recording first upvote")
            .expect("article exists");
        assert_eq!(first.upvotes, 1);
        assert_eq!(first.upvoted_ids, vec![String::from("u1")]);

        let second = store
            .record_upvote("learn-react", "u1")
            .await
            .expect("recording second upvote")
            .expect("article exists");
        assert_eq!(second.upvotes, 1);
        assert_eq!(second.upvoted_ids, vec![String::from("u1")]);
    }

    #[tokio::test]
    async fn comments_append_in_order() {
        let store = MockStore::new();
        store.insert(Article::new(String::from("learn-node"))).await;

        for text in ["first", "second"] {
            store
                .add_comment(
                    "learn-node",
                    Comment {
                        username: String::from("a@b.com"),
                        comment: String::from(text),
                    },
                )
                .await
                .expect("adding comment")
                .expect("article exists");
        }

        let article = store.test_article("learn-node").await.expect("article exists");
        let texts = article
            .comments
            .iter()
            .map(|c| &c.comment as &str)
            .collect::<Vec<_>>();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn mutations_on_missing_articles_change_nothing() {
        let store = MockStore::new();
        assert!(matches!(store.record_upvote("nope", "u1").await, Ok(None)));
        assert_eq!(store.test_num_articles().await, 0);
    }
}
