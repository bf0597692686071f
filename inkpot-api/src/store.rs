use async_trait::async_trait;

use crate::{Article, Comment};

/// Collection-level operations on the articles document store.
///
/// All operations return `Ok(None)` when no article has the given name.
/// Mutations return the post-update document.
#[async_trait]
pub trait ArticleStore {
    async fn find(&self, name: &str) -> anyhow::Result<Option<Article>>;

    /// Increment the upvote count and append `uid` to the upvoter list,
    /// as one conditional update that only matches while `uid` is absent
    /// from the list. An already-recorded upvote is a silent no-op.
    async fn record_upvote(&self, name: &str, uid: &str) -> anyhow::Result<Option<Article>>;

    /// Append a comment, unconditionally.
    async fn add_comment(&self, name: &str, comment: Comment) -> anyhow::Result<Option<Article>>;
}
