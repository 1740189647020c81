use anyhow::anyhow;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header, request::Parts, HeaderMap},
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

// ── Path id ───────────────────────────────────────────────────────────────────

/// Item id taken from the `:id` path segment.
///
/// Holds `None` when the segment has no usable integer prefix; such an id
/// can never match an item, so handlers answer it with a plain not-found.
#[derive(Debug, Clone, Copy)]
pub struct ItemId(pub Option<u64>);

#[async_trait]
impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| anyhow!("invalid path: {}", rejection.body_text()))?;
        Ok(Self(parse_id(&raw)))
    }
}

/// Reads the leading integer of `raw`: whitespace is skipped, one sign is
/// allowed, a `0x`/`0X` prefix switches to hexadecimal, and trailing garbage
/// is ignored (`"12abc"` is 12). Negative values and overflow yield `None`
/// since item ids are always positive.
pub fn parse_id(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let digits = rest.chars().take_while(|c| c.is_digit(radix)).count();
    if digits == 0 || negative {
        return None;
    }
    u64::from_str_radix(&rest[..digits], radix).ok()
}

// ── Request body ──────────────────────────────────────────────────────────────

/// JSON or urlencoded request body.
///
/// A missing or empty body, or one with an unrecognised content type, decodes
/// as `T::default()`. A body that is present but undecodable is an internal
/// fault, not a client error.
#[derive(Debug)]
pub struct Payload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match BodyKind::of(req.headers()) {
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|rejection| anyhow!("unreadable body: {}", rejection.body_text()))?;
                if bytes.iter().all(u8::is_ascii_whitespace) {
                    return Ok(Self(T::default()));
                }
                let Json(value) = Json::<T>::from_bytes(&bytes).map_err(|rejection| {
                    anyhow!("malformed JSON body: {}", rejection.body_text())
                })?;
                Ok(Self(value))
            }
            BodyKind::Form => {
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|rejection| {
                        anyhow!("malformed form body: {}", rejection.body_text())
                    })?;
                Ok(Self(value))
            }
            BodyKind::Other => Ok(Self(T::default())),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

impl BodyKind {
    fn of(headers: &HeaderMap) -> Self {
        let Some(content_type) = headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
        else {
            return Self::Other;
        };
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if essence == "application/json" || essence.ends_with("+json") {
            Self::Json
        } else if essence == "application/x-www-form-urlencoded" {
            Self::Form
        } else {
            Self::Other
        }
    }
}
