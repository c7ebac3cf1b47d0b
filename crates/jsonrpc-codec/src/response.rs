use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{JsonRpcVersion, RequestId};

/// A successful JSON-RPC response. The `result` member may be any JSON
/// value, including null, as determined by the method invoked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(rename = "jsonrpc")]
    pub version: JsonRpcVersion,
    pub id: RequestId,
    pub result: Value,
}

impl JsonRpcResponse {
    pub fn new(id: impl Into<RequestId>, result: Value) -> Self {
        Self {
            version: JsonRpcVersion::V2_0,
            id: id.into(),
            result,
        }
    }

    /// Create a success response carrying `result`.
    pub fn success(id: impl Into<RequestId>, result: Value) -> Self {
        Self::new(id, result)
    }

    /// Create a success response for a void method.
    pub fn null(id: impl Into<RequestId>) -> Self {
        Self::new(id, Value::Null)
    }
}

impl<I, T> From<(I, T)> for JsonRpcResponse
where
    I: Into<RequestId>,
    T: Into<Value>,
{
    fn from((id, result): (I, T)) -> Self {
        Self::new(id, result.into())
    }
}
