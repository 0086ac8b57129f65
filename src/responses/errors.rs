use crate::errors::ServerError;
use crate::responses::html::html_with_status;
use crate::templates::pages::error_page;
use astra::{Body, Response};

/// Convert a ServerError into a proper HTML response
pub fn html_error_response(err: ServerError) -> Response {
    let status = match &err {
        ServerError::NotFound => 404,
        ServerError::BadRequest(_) => 400,
        ServerError::Data(_) | ServerError::InternalError => 500,
    };

    if status >= 500 {
        tracing::error!("request failed: {err}");
    }

    html_with_status(status, error_page(status, &err.to_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
