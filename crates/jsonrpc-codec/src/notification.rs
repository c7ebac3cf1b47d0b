use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::request::RequestParams;
use crate::types::JsonRpcVersion;

/// A JSON-RPC notification: a call with no id, signaling the sender expects
/// no reply. The absence of the `id` key is what makes a message a
/// notification; an explicit null id is not valid on any message kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcNotification {
    #[serde(rename = "jsonrpc")]
    pub version: JsonRpcVersion,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<RequestParams>,
}

impl JsonRpcNotification {
    pub fn new(method: impl Into<String>, params: Option<RequestParams>) -> Self {
        Self {
            version: JsonRpcVersion::V2_0,
            method: method.into(),
            params,
        }
    }

    /// Create a new notification with no parameters
    pub fn new_no_params(method: impl Into<String>) -> Self {
        Self::new(method, None)
    }

    /// Create a new notification with object parameters
    pub fn new_with_object_params(method: impl Into<String>, params: Map<String, Value>) -> Self {
        Self::new(method, Some(RequestParams::Object(params)))
    }

    /// Create a new notification with array parameters
    pub fn new_with_array_params(method: impl Into<String>, params: Vec<Value>) -> Self {
        Self::new(method, Some(RequestParams::Array(params)))
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
    fn test_notification_serialization() {
        let notification = JsonRpcNotification::new_no_params("heartbeat");

        let json = serde_json::to_string(&notification).unwrap();
        let parsed: JsonRpcNotification = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.method, "heartbeat");
        assert!(parsed.params.is_none());
    }

    #[test]
    fn test_notification_with_params() {
        let mut params = Map::new();
        params.insert("level".to_string(), json!("info"));
        params.insert("text".to_string(), json!("started"));

        let notification = JsonRpcNotification::new_with_object_params("log", params);

        assert_eq!(notification.get_param("level"), Some(&json!("info")));
        assert_eq!(notification.get_param("text"), Some(&json!("started")));
    }

    #[test]
    fn test_notification_json_has_no_id() {
        let notification = JsonRpcNotification::new_no_params("ping");
        let json = serde_json::to_string(&notification).unwrap();

        assert!(!json.contains("\"id\""));
        assert_eq!(json, r#"{"jsonrpc":"2.0","method":"ping"}"#);
    }
}
