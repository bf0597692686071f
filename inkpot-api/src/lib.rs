mod article;
mod auth;
mod error;
mod store;

pub use article::{Article, ArticleView, Comment, NewComment};
pub use auth::{AuthToken, UserIdentity, VerifyIdentity};
pub use error::Error;
pub use store::ArticleStore;
