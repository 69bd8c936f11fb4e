//! `Negotiated<T>`: content-negotiating body binder (JSON default, CBOR
//! fallback).

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::cbor::Cbor;
use crate::error::{CborRejection, NegotiatedRejection};
use crate::media::is_cbor_content_type;

/// Body extractor that accepts the framework's default format and falls back
/// to CBOR.
///
/// Requests declaring exactly `application/cbor` are decoded with the CBOR
/// codec; everything else goes through [`axum::Json`], whose rejections are
/// passed through verbatim. A request the JSON decoder rejects for its
/// content type (rather than its content) surfaces as 415; a declared-CBOR
/// body the codec rejects surfaces as 400. Neither path is ever attempted
/// for a request the other one owns.
#[derive(Debug, Clone, Copy, Default)]
#[must_use]
pub struct Negotiated<T>(pub T);

impl<T> Negotiated<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequest<S> for Negotiated<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = NegotiatedRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_cbor_content_type(req.headers()) {
            tracing::debug!("binding request body as CBOR");
            let Cbor(value) = Cbor::from_request(req, state).await?;
            return Ok(Negotiated(value));
        }
        match Json::from_request(req, state).await {
            Ok(Json(value)) => Ok(Negotiated(value)),
            Err(JsonRejection::MissingJsonContentType(_)) => {
                Err(NegotiatedRejection::Cbor(CborRejection::UnsupportedMediaType))
            }
            Err(other) => Err(NegotiatedRejection::Json(other)),
        }
    }
}
