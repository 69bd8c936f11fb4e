//! CBOR adapter for axum: respond with `application/cbor` payloads and bind
//! request bodies by content negotiation (JSON first, CBOR fallback).
//!
//! ```no_run
//! use axum::http::StatusCode;
//! use axum::routing::get;
//! use axum::Router;
//! use axum_cbor::{Cbor, Negotiated};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Item {
//!     name: String,
//!     value: i64,
//! }
//!
//! async fn read_item() -> (StatusCode, Cbor<Item>) {
//!     (StatusCode::OK, Cbor(Item { name: "test".into(), value: 42 }))
//! }
//!
//! async fn create_item(Negotiated(item): Negotiated<Item>) -> Cbor<Item> {
//!     Cbor(item)
//! }
//!
//! let app: Router = Router::new().route("/item", get(read_item).post(create_item));
//! ```

pub mod cbor;
pub mod error;
pub mod media;
pub mod negotiate;

pub use cbor::Cbor;
pub use error::{CborRejection, EncodeError, NegotiatedRejection};
pub use media::APPLICATION_CBOR;
pub use negotiate::Negotiated;
