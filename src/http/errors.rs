//! Error responses of the HTTP shell.
//!
//! A bad turn body must never cost us the match: it is answered with an
//! empty action list and a 400 so the engine simply sees "do nothing". An
//! empty body is not an error and gets the same list with a 200.

use crate::protocol::ErrorBody;
use actix_web::{
    body::MessageBody,
    dev::ServiceResponse,
    error::{InternalError, JsonPayloadError},
    middleware::ErrorHandlerResponse,
    web, HttpRequest, HttpResponse,
};

/// JSON extractor settings for turn bodies.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .content_type_required(false)
        .error_handler(reject_body)
}

fn reject_body(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    // a zero-length body reads as `{}`: no tower, so nothing to do this turn
    if is_empty_body(&err) {
        log::debug!("empty body on {}", req.path());
        return InternalError::from_response(err, HttpResponse::Ok().json(serde_json::json!([])))
            .into();
    }
    log::warn!("rejected body on {}: {err}", req.path());
    InternalError::from_response(err, HttpResponse::BadRequest().json(serde_json::json!([]))).into()
}

/// serde_json reports end of input at 1:0 only when there was no input at all.
fn is_empty_body(err: &JsonPayloadError) -> bool {
    match err {
        JsonPayloadError::Deserialize(e) => e.is_eof() && e.line() == 1 && e.column() == 0,
        _ => false,
    }
}

/// Fallback for every unknown route.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new("Not found"))
}

/// Replaces whatever body a 500 carried with a generic JSON error.
pub fn internal_error<B: MessageBody>(
    res: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    tracing::error!(path = %res.request().path(), "request failed");
    let (req, _) = res.into_parts();
    let res = HttpResponse::InternalServerError().json(ErrorBody::new("Internal server error"));
    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, res).map_into_right_body(),
    ))
}
