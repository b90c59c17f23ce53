//! Failure envelope for responses produced outside the handlers

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Rewrite bodiless framework failures into the JSON failure envelope.
///
/// Covers 405 from routes that exist under another method and 400/404/422
/// rejections from axum extractors. Responses that already carry JSON are
/// left untouched.
pub async fn error_envelope_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status();
    if !matches!(
        status,
        StatusCode::BAD_REQUEST
            | StatusCode::NOT_FOUND
            | StatusCode::METHOD_NOT_ALLOWED
            | StatusCode::UNPROCESSABLE_ENTITY
    ) || is_json(&response)
    {
        return response;
    }

    let error = match status {
        StatusCode::METHOD_NOT_ALLOWED => crate::Error::MethodNotAllowed(format!("{method} {path}")),
        StatusCode::NOT_FOUND => crate::Error::NotFound(format!("{method} {path}")),
        StatusCode::UNPROCESSABLE_ENTITY => {
            crate::Error::Catalog(trivia_core::Error::Unprocessable(format!("{method} {path}")))
        }
        _ => crate::Error::BadRequest(format!("{method} {path}")),
    };
    error.into_response()
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.starts_with("application/json"))
        .unwrap_or(false)
}
