//! Media type constant and recognizer for the CBOR wire format.

use axum::http::{header, HeaderMap};

/// Content type tag for CBOR payloads (RFC 8949).
///
/// The same literal is used for tagging outgoing responses and recognizing
/// incoming request bodies; the two must never diverge or round-trip
/// interoperability breaks.
pub const APPLICATION_CBOR: &str = "application/cbor";

/// Exact match against the request's declared content type.
///
/// Case-sensitive, no media type parameter handling: `application/cbor; q=1`
/// does not match.
pub(crate) fn is_cbor_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        == Some(APPLICATION_CBOR)
}
