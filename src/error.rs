use hyper::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    HyperHttp(#[from] hyper::http::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Prometheus(#[from] prometheus::Error),

    #[error("Form relay request failed: {0}")]
    Relay(#[from] reqwest::Error),

    #[error("Form relay answered with status {0}")]
    RelayStatus(StatusCode),

    #[error("Invalid relay url {0}")]
    RelayUrl(String),

    #[error("Missing required field `{0}`")]
    MissingField(&'static str),

    #[error("Invalid value {1:?} for query parameter `{0}`")]
    InvalidQuery(&'static str, String),

    #[error("Cannot read request body: {0}")]
    Body(String),

    #[error("Request body is larger than {0} bytes")]
    PayloadTooLarge(usize),

    #[error("Bad request")]
    BadRequest,

    #[error("Page not found")]
    NotFound,

    #[error("Content type {0:?} is not supported")]
    ContentTypeUnsupported(String),
}

impl From<Error> for StatusCode {
    fn from(e: Error) -> Self {
        match e {
            Error::BadRequest
            | Error::MissingField(_)
            | Error::InvalidQuery(..)
            | Error::Body(_) => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Error::ContentTypeUnsupported(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Error::Relay(_) | Error::RelayStatus(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            StatusCode::from(Error::MissingField("name")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(StatusCode::from(Error::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            StatusCode::from(Error::PayloadTooLarge(16)),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            StatusCode::from(Error::RelayStatus(StatusCode::INTERNAL_SERVER_ERROR)),
            StatusCode::BAD_GATEWAY
        );
    }
}
