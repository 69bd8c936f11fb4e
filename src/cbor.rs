//! `Cbor<T>`: CBOR response encoder and strict CBOR body extractor.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{CborRejection, EncodeError};
use crate::media::{is_cbor_content_type, APPLICATION_CBOR};

/// CBOR payload wrapper, the counterpart of [`axum::Json`] for
/// `application/cbor`.
///
/// As a response, serializes the inner value with the CBOR codec and tags the
/// response `Content-Type: application/cbor`. As an extractor, accepts only
/// requests that declare `application/cbor` exactly (415 otherwise) and
/// decodes the body into `T` (400 on malformed or empty bodies). For JSON
/// with CBOR fallback, use [`Negotiated`](crate::Negotiated) instead.
#[derive(Debug, Clone, Copy, Default)]
#[must_use]
pub struct Cbor<T>(pub T);

impl<T> Cbor<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Cbor<T> {
    fn from(value: T) -> Self {
        Cbor(value)
    }
}

impl<T: Serialize> Cbor<T> {
    /// Builds a CBOR response with an explicit status code.
    ///
    /// Serializes first: on failure the error is returned unchanged and no
    /// response is built. On success the response carries the given status,
    /// the `application/cbor` content type, and the encoded bytes. As with
    /// any response value, producing more than one per request is the
    /// caller's responsibility to avoid.
    pub fn response(status: StatusCode, value: &T) -> Result<Response, EncodeError> {
        let body = encode(value)?;
        Ok((status, [(header::CONTENT_TYPE, media_type())], body).into_response())
    }
}

impl<T> IntoResponse for Cbor<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        match encode(&self.0) {
            Ok(body) => ([(header::CONTENT_TYPE, media_type())], body).into_response(),
            Err(err) => {
                tracing::warn!(error = %err, "CBOR response encoding failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
        }
    }
}

impl<T, S> FromRequest<S> for Cbor<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = CborRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_cbor_content_type(req.headers()) {
            return Err(CborRejection::UnsupportedMediaType);
        }
        let bytes = Bytes::from_request(req, state).await?;
        let value = ciborium::de::from_reader(bytes.as_ref())?;
        Ok(Cbor(value))
    }
}

fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::with_capacity(128);
    ciborium::ser::into_writer(value, &mut buf)?;
    Ok(buf)
}

fn media_type() -> HeaderValue {
    HeaderValue::from_static(APPLICATION_CBOR)
}
