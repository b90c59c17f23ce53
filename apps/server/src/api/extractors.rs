//! Request body and path helpers

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde_json::Value as JsonValue;
use std::convert::Infallible;
use trivia_core::PageQuery;

/// Requested page number from `?page=`.
///
/// Never rejects: a missing, empty or non-numeric value is page 1, and only
/// the first of repeated `page` parameters counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();

        let query = PageQuery::from_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        Ok(Page(query.number()))
    }
}

/// JSON request body, accepted regardless of the declared content type.
///
/// Bodies that are not valid JSON are rejected with the 400 envelope.
pub struct JsonBody(pub JsonValue);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = crate::Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| crate::Error::BadRequest(format!("Failed to read request body: {e}")))?;

        parse_json_body(&bytes).map(JsonBody)
    }
}

/// Parse a JSON body from raw bytes.
///
/// Use this in handlers that need to map a malformed body to something other
/// than 400.
pub fn parse_json_body(bytes: &[u8]) -> crate::Result<JsonValue> {
    serde_json::from_slice(bytes)
        .map_err(|e| crate::Error::BadRequest(format!("Invalid JSON in request body: {e}")))
}

/// Parse a numeric path id. Anything but a non-negative integer matches no resource.
pub fn parse_path_id(raw: &str) -> crate::Result<i64> {
    raw.parse::<u64>()
        .ok()
        .and_then(|id| i64::try_from(id).ok())
        .ok_or_else(|| crate::Error::NotFound(format!("no resource at id '{raw}'")))
}
