// responses/redirect.rs
use astra::{Body, ResponseBuilder};

use crate::errors::ServerError;
use crate::responses::ResultResp;

/// 303 See Other to `location`: the outbound navigation of a form post or click.
pub fn see_other(location: &str) -> ResultResp {
    tracing::info!("↪️ redirect to {location}");

    ResponseBuilder::new()
        .status(303)
        .header("Location", location)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
