//! Error types for the CBOR adapter.
//!
//! Decode-path failures are rejections: each maps to an HTTP status so axum
//! can render them directly. Encode-path failures are returned to the handler
//! and never produce a response on their own.

use axum::extract::rejection::{BytesRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// CBOR serialization failed; no response was built.
///
/// Returned from [`Cbor::response`](crate::Cbor::response) when the value
/// contains a shape the codec cannot encode. The handler decides how to
/// surface it, typically through the application's own error layer.
#[derive(Error, Debug)]
#[error("CBOR serialization failed: {0}")]
pub struct EncodeError(#[from] pub ciborium::ser::Error<std::io::Error>);

/// Rejection for the strict CBOR body extractor.
#[derive(Error, Debug)]
pub enum CborRejection {
    /// The request did not declare `application/cbor` (exact match).
    #[error("unsupported media type: expected `application/cbor`")]
    UnsupportedMediaType,

    /// The body was declared as CBOR but the codec rejected it. Covers
    /// truncated and empty bodies as well as invalid bytes.
    #[error("malformed CBOR body: {0}")]
    MalformedBody(#[from] ciborium::de::Error<std::io::Error>),

    /// Reading the body failed before decoding started (e.g. a body limit
    /// installed earlier in the stack fired).
    #[error(transparent)]
    BodyRead(#[from] BytesRejection),
}

impl CborRejection {
    /// Status the rejection renders as. Content-type mismatch is 415;
    /// a body the codec rejects is 400, deliberately kept distinct.
    pub fn status(&self) -> StatusCode {
        match self {
            CborRejection::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            CborRejection::MalformedBody(_) => StatusCode::BAD_REQUEST,
            CborRejection::BodyRead(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for CborRejection {
    fn into_response(self) -> Response {
        match self {
            CborRejection::BodyRead(rejection) => rejection.into_response(),
            other => (other.status(), other.to_string()).into_response(),
        }
    }
}

/// Rejection for the content-negotiating binder: either the default JSON
/// decoder's own rejection, passed through verbatim, or a CBOR rejection
/// from the fallback path.
#[derive(Error, Debug)]
pub enum NegotiatedRejection {
    #[error(transparent)]
    Json(#[from] JsonRejection),
    #[error(transparent)]
    Cbor(#[from] CborRejection),
}

impl IntoResponse for NegotiatedRejection {
    fn into_response(self) -> Response {
        match self {
            NegotiatedRejection::Json(rejection) => rejection.into_response(),
            NegotiatedRejection::Cbor(rejection) => rejection.into_response(),
        }
    }
}
