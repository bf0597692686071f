use crate::UserIdentity;

/// An article document as stored in the `articles` collection, keyed by
/// `name`. Documents are created out of band with only `name` set, so all
/// mutable fields default when absent.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub name: String,

    #[serde(default)]
    pub upvotes: i64,

    /// Ids of the users who already upvoted; append-only, and a given id
    /// appears at most once (the store appends only under that condition).
    #[serde(default)]
    pub upvoted_ids: Vec<String>,

    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Article {
    pub fn new(name: String) -> Article {
        Article {
            name,
            upvotes: 0,
            upvoted_ids: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// True iff an identity is present and has not upvoted this article yet.
    pub fn can_upvote(&self, user: Option<&UserIdentity>) -> bool {
        match user {
            None => false,
            Some(user) => !self.upvoted_ids.iter().any(|id| *id == user.uid),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub username: String,
    pub comment: String,
}

/// Body of `POST /api/articles/:name/comments`. The email is recorded
/// verbatim as the comment's username.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewComment {
    pub email: String,
    pub comment: String,
}

/// What `GET /api/articles/:name` returns: the article itself plus the
/// `canUpvote` flag derived from the requesting identity.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleView {
    #[serde(flatten)]
    pub article: Article,
    pub can_upvote: bool,
}
