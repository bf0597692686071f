#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Unknown error: {0}")]
    Unknown(String),

    #[error("No matching article {0:?}")]
    ArticleNotFound(String),

    #[error("Invalid auth token")]
    InvalidToken,

    #[error("Login required")]
    LoginRequired,
}

impl Error {
    pub fn status_code(&self) -> http::StatusCode {
        use http::StatusCode;
        match self {
            Error::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::ArticleNotFound(_) => StatusCode::NOT_FOUND,
            Error::InvalidToken => StatusCode::BAD_REQUEST,
            Error::LoginRequired => StatusCode::UNAUTHORIZED,
        }
    }

    /// Plain-text response body. Terse on purpose: only not-found carries a
    /// message, the auth failures are bare status codes.
    pub fn contents(&self) -> String {
        match self {
            Error::Unknown(_) => String::from("internal server error"),
            Error::ArticleNotFound(_) => String::from("No matching article found!"),
            Error::InvalidToken | Error::LoginRequired => String::new(),
        }
    }
}
