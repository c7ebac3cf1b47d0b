//! # JSON-RPC 2.0 Message Codec
//!
//! A pure, transport-agnostic JSON-RPC 2.0 message codec. This crate converts
//! in-memory request/response/notification/error objects to wire text and
//! parses wire text back into typed messages, enforcing the structural rules
//! of the JSON-RPC 2.0 specification. It contains no transport and no method
//! dispatch; those layers call into this codec with raw text and handle the
//! typed result.
//!
//! ## Features
//! - Typed message model for all four message kinds
//! - Single-message and batch parsing with atomic failure
//! - Closed error taxonomy matching the specification's five error kinds
//! - Deterministic, byte-faithful re-encoding of parsed messages
//!
//! ```rust
//! use jsonrpc_codec::{parse, Encode, JsonRpcMessage, JsonRpcPayload};
//!
//! let payload = parse(Some(r#"{"jsonrpc":"2.0","id":1,"result":"OK"}"#)).unwrap();
//! let JsonRpcPayload::Single(JsonRpcMessage::Response(response)) = payload else {
//!     unreachable!()
//! };
//! assert_eq!(response.encode(), r#"{"jsonrpc":"2.0","id":1,"result":"OK"}"#);
//! ```

pub mod error;
pub mod message;
pub mod notification;
pub mod parse;
pub mod prelude;
pub mod request;
pub mod response;
pub mod types;

mod validate;

// Re-export main types
pub use error::{JsonRpcError, JsonRpcErrorCode, JsonRpcErrorObject};
pub use message::{Encode, JsonRpcMessage, JsonRpcPayload};
pub use notification::JsonRpcNotification;
pub use parse::parse;
pub use request::{JsonRpcRequest, RequestParams};
pub use response::JsonRpcResponse;
pub use types::{JsonRpcVersion, RequestId};

/// JSON-RPC 2.0 version constant
pub const JSONRPC_VERSION: &str = "2.0";

/// Standard JSON-RPC 2.0 error codes
pub mod error_codes {
    pub const PARSE_ERROR: i64 = -32700;
    pub const INVALID_REQUEST: i64 = -32600;
    pub const METHOD_NOT_FOUND: i64 = -32601;
    pub const INVALID_PARAMS: i64 = -32602;
    pub const INTERNAL_ERROR: i64 = -32603;
}
