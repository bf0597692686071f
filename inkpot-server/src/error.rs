use inkpot_api::Error as ApiError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    pub fn article_not_found(name: &str) -> Error {
        Error::Api(ApiError::ArticleNotFound(String::from(name)))
    }

    pub fn invalid_token() -> Error {
        Error::Api(ApiError::InvalidToken)
    }

    pub fn login_required() -> Error {
        Error::Api(ApiError::LoginRequired)
    }
}

impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let err = match self {
            Error::Anyhow(err) => {
                tracing::error!(?err, "internal server error");
                ApiError::Unknown(String::from("internal server error"))
            }
            Error::Api(err) => {
                tracing::info!("returning error to client: {err}");
                err
            }
        };
        (err.status_code(), err.contents()).into_response()
    }
}
