use serde::Serialize;

use crate::error::{JsonRpcError, JsonRpcErrorObject};
use crate::notification::JsonRpcNotification;
use crate::request::JsonRpcRequest;
use crate::response::JsonRpcResponse;
use crate::types::RequestId;

/// Wire encoding for JSON-RPC message types.
///
/// Encoding is purely field-driven, so every implementor gets it for free
/// from its serde derive. Key order on the wire follows struct field order:
/// `jsonrpc` first, then `id` if present, then the kind member, then
/// `params` if present.
pub trait Encode: Serialize {
    /// Serialize to JSON-RPC wire text. Cannot fail for codec-owned types:
    /// every reachable field is a plain JSON-compatible value.
    fn encode(&self) -> String {
        serde_json::to_string(self).expect("jsonrpc message serialization")
    }
}

impl Encode for JsonRpcRequest {}
impl Encode for JsonRpcNotification {}
impl Encode for JsonRpcResponse {}
impl Encode for JsonRpcError {}
impl Encode for JsonRpcErrorObject {}

/// Union over the four JSON-RPC 2.0 message kinds.
///
/// This is what [`parse`](crate::parse) produces; it is never constructed
/// from unvalidated input by any other path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsonRpcMessage {
    /// A call expecting a reply
    Request(JsonRpcRequest),
    /// A call expecting no reply
    Notification(JsonRpcNotification),
    /// A successful reply
    Response(JsonRpcResponse),
    /// A failed reply
    Error(JsonRpcError),
}

impl JsonRpcMessage {
    /// The correlation id, absent only for notifications.
    pub fn id(&self) -> Option<&RequestId> {
        match self {
            JsonRpcMessage::Request(req) => Some(&req.id),
            JsonRpcMessage::Notification(_) => None,
            JsonRpcMessage::Response(resp) => Some(&resp.id),
            JsonRpcMessage::Error(err) => Some(&err.id),
        }
    }

    /// The method name, present on requests and notifications.
    pub fn method(&self) -> Option<&str> {
        match self {
            JsonRpcMessage::Request(req) => Some(&req.method),
            JsonRpcMessage::Notification(notif) => Some(&notif.method),
            _ => None,
        }
    }

    pub fn is_notification(&self) -> bool {
        matches!(self, JsonRpcMessage::Notification(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, JsonRpcMessage::Error(_))
    }
}

impl Encode for JsonRpcMessage {}

impl From<JsonRpcRequest> for JsonRpcMessage {
    fn from(request: JsonRpcRequest) -> Self {
        JsonRpcMessage::Request(request)
    }
}

impl From<JsonRpcNotification> for JsonRpcMessage {
    fn from(notification: JsonRpcNotification) -> Self {
        JsonRpcMessage::Notification(notification)
    }
}

impl From<JsonRpcResponse> for JsonRpcMessage {
    fn from(response: JsonRpcResponse) -> Self {
        JsonRpcMessage::Response(response)
    }
}

impl From<JsonRpcError> for JsonRpcMessage {
    fn from(error: JsonRpcError) -> Self {
        JsonRpcMessage::Error(error)
    }
}

/// Result of a parse: either a single message or a batch.
///
/// A batch encodes as a JSON array and may be empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsonRpcPayload {
    Single(JsonRpcMessage),
    Batch(Vec<JsonRpcMessage>),
}

impl JsonRpcPayload {
    pub fn is_batch(&self) -> bool {
        matches!(self, JsonRpcPayload::Batch(_))
    }

    /// View the contained messages uniformly, single or batch.
    pub fn messages(&self) -> &[JsonRpcMessage] {
        match self {
            JsonRpcPayload::Single(message) => std::slice::from_ref(message),
            JsonRpcPayload::Batch(messages) => messages,
        }
    }
}

impl Encode for JsonRpcPayload {}

impl From<JsonRpcMessage> for JsonRpcPayload {
    fn from(message: JsonRpcMessage) -> Self {
        JsonRpcPayload::Single(message)
    }
}

impl From<Vec<JsonRpcMessage>> for JsonRpcPayload {
    fn from(messages: Vec<JsonRpcMessage>) -> Self {
        JsonRpcPayload::Batch(messages)
    }
}
