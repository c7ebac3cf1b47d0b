use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{JsonRpcVersion, RequestId};

/// Parameters for a JSON-RPC request or notification.
///
/// The protocol allows exactly two shapes: positional parameters as an array,
/// or named parameters as an object. Object parameters keep their wire key
/// order so re-encoding a parsed message is byte-faithful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestParams {
    /// Positional parameters as an array
    Array(Vec<Value>),
    /// Named parameters as an object
    Object(Map<String, Value>),
}

impl RequestParams {
    /// Classify a decoded JSON value as parameters. Returns `None` for any
    /// value that is neither an object nor an array.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(RequestParams::Object(map.clone())),
            Value::Array(items) => Some(RequestParams::Array(items.clone())),
            _ => None,
        }
    }

    /// Get a parameter by name (object params only).
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            RequestParams::Object(map) => map.get(key),
            RequestParams::Array(_) => None,
        }
    }

    /// Get a parameter by position (array params only).
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            RequestParams::Array(items) => items.get(index),
            RequestParams::Object(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            RequestParams::Object(map) => map.is_empty(),
            RequestParams::Array(items) => items.is_empty(),
        }
    }

    /// Convert back to a `serde_json::Value`.
    pub fn to_value(&self) -> Value {
        match self {
            RequestParams::Object(map) => Value::Object(map.clone()),
            RequestParams::Array(items) => Value::Array(items.clone()),
        }
    }
}

impl From<Map<String, Value>> for RequestParams {
    fn from(map: Map<String, Value>) -> Self {
        RequestParams::Object(map)
    }
}

impl From<Vec<Value>> for RequestParams {
    fn from(items: Vec<Value>) -> Self {
        RequestParams::Array(items)
    }
}

/// A JSON-RPC request: a call that expects a reply correlated by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(rename = "jsonrpc")]
    pub version: JsonRpcVersion,
    pub id: RequestId,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<RequestParams>,
}

impl JsonRpcRequest {
    /// Construction performs no validation; outbound messages are trusted.
    /// Structural rules are enforced only on the parse path.
    pub fn new(
        id: impl Into<RequestId>,
        method: impl Into<String>,
        params: Option<RequestParams>,
    ) -> Self {
        Self {
            version: JsonRpcVersion::V2_0,
            id: id.into(),
            method: method.into(),
            params,
        }
    }

    /// Create a new request with no parameters
    pub fn new_no_params(id: impl Into<RequestId>, method: impl Into<String>) -> Self {
        Self::new(id, method, None)
    }

    /// Create a new request with object parameters
    pub fn new_with_object_params(
        id: impl Into<RequestId>,
        method: impl Into<String>,
        params: Map<String, Value>,
    ) -> Self {
        Self::new(id, method, Some(RequestParams::Object(params)))
    }

    /// Create a new request with array parameters
    pub fn new_with_array_params(
        id: impl Into<RequestId>,
        method: impl Into<String>,
        params: Vec<Value>,
    ) -> Self {
        Self::new(id, method, Some(RequestParams::Array(params)))
    }

    /// Get a parameter by name (if params are an object)
    pub fn get_param(&self, name: &str) -> Option<&Value> {
        self.params.as_ref()?.get(name)
    }

    /// Get a parameter by position (if params are an array)
    pub fn get_param_index(&self, index: usize) -> Option<&Value> {
        self.params.as_ref()?.get_index(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serialization() {
        let request = JsonRpcRequest::new_no_params(1, "ping");

        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#);

        let parsed: JsonRpcRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, request);
    }

    #[test]
    fn test_request_with_object_params() {
        let mut params = Map::new();
        params.insert("amount".to_string(), json!(10));
        params.insert("to".to_string(), json!("alice"));

        let request = JsonRpcRequest::new_with_object_params("req-1", "send", params);

        assert_eq!(request.get_param("amount"), Some(&json!(10)));
        assert_eq!(request.get_param("to"), Some(&json!("alice")));
        assert_eq!(request.get_param("missing"), None);
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"jsonrpc":"2.0","id":"req-1","method":"send","params":{"amount":10,"to":"alice"}}"#
        );
    }

    #[test]
    fn test_request_with_array_params() {
        let request =
            JsonRpcRequest::new_with_array_params(2, "sum", vec![json!(3), json!(4), json!(5)]);

        assert_eq!(request.get_param_index(0), Some(&json!(3)));
        assert_eq!(request.get_param_index(2), Some(&json!(5)));
        assert_eq!(request.get_param_index(3), None);
    }

    #[test]
    fn test_params_from_value() {
        assert_eq!(
            RequestParams::from_value(&json!({"a": 1})),
            Some(RequestParams::Object(
                json!({"a": 1}).as_object().unwrap().clone()
            ))
        );
        assert_eq!(
            RequestParams::from_value(&json!([1, 2])),
            Some(RequestParams::Array(vec![json!(1), json!(2)]))
        );
        assert_eq!(RequestParams::from_value(&json!("positional")), None);
        assert_eq!(RequestParams::from_value(&json!(3)), None);
    }
}
