//! # Codec Prelude
//!
//! Convenient re-exports of the most commonly used types from the codec.
//!
//! ```rust
//! use jsonrpc_codec::prelude::*;
//! ```

// Core JSON-RPC types
pub use crate::error::{JsonRpcError, JsonRpcErrorCode, JsonRpcErrorObject};
pub use crate::message::{Encode, JsonRpcMessage, JsonRpcPayload};
pub use crate::notification::JsonRpcNotification;
pub use crate::parse::parse;
pub use crate::request::{JsonRpcRequest, RequestParams};
pub use crate::response::JsonRpcResponse;
pub use crate::types::{JsonRpcVersion, RequestId};

// Standard error codes
pub use crate::error_codes::*;

// Protocol version constant
pub use crate::JSONRPC_VERSION;
