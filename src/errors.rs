use crate::dataset::LoadError;
use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or the dataset layer.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Data Error: {0}")]
    Data(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl From<LoadError> for ServerError {
    fn from(err: LoadError) -> Self {
        ServerError::Data(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_errors_become_data_errors() {
        let err: ServerError = LoadError::Io(std::io::Error::other("bad")).into();
        assert!(matches!(err, ServerError::Data(msg) if msg.contains("bad")));
    }
}
