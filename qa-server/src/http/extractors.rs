//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Numeric entity id taken from the `{id}` path segment.
///
/// Segments that aren't all ASCII digits are treated as an unmatched
/// route (404). Digit strings too large for an i64 are a bad request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub i64);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Unrouted)?;

        parse_id(&raw).map(Self)
    }
}

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::Unrouted);
    }

    raw.parse::<i64>().map_err(|_| ApiError::InvalidId {
        value: raw.to_owned(),
    })
}

/// JSON request body decoded regardless of `Content-Type`.
///
/// Any read or decode failure becomes `ApiError::Decode` (400).
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Decode {
                message: e.body_text(),
            })?;

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|e| ApiError::Decode {
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_parse() {
        assert!(matches!(parse_id("0"), Ok(0)));
        assert!(matches!(parse_id("0042"), Ok(42)));
    }

    #[test]
    fn non_digits_are_unrouted() {
        for raw in ["", "-1", "abc", "1a", "+3", " 1"] {
            assert!(matches!(parse_id(raw), Err(ApiError::Unrouted)), "{raw:?}");
        }
    }

    #[test]
    fn overflow_is_invalid_id() {
        assert!(matches!(
            parse_id("99999999999999999999"),
            Err(ApiError::InvalidId { .. })
        ));
    }
}
