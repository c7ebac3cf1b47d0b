//! The parse-and-validate pipeline: raw text in, typed messages out.
//!
//! Classification is by field presence, in a fixed priority order. A message
//! with no `id` key is a notification; with `id` and `method` it is a
//! request; with `id` and `result` a success response; with `id` and `error`
//! an error response. Anything else is rejected. Validation failures carry
//! the offending fragment as the error's `data` member.

use serde_json::{json, Map, Value};
use tracing::trace;

use crate::error::{JsonRpcError, JsonRpcErrorObject};
use crate::message::{JsonRpcMessage, JsonRpcPayload};
use crate::notification::JsonRpcNotification;
use crate::request::JsonRpcRequest;
use crate::response::JsonRpcResponse;
use crate::validate::{check_error, check_id, check_method, check_params};
use crate::JSONRPC_VERSION;

/// Parse raw wire text into a typed message or batch.
///
/// `None` stands for an absent payload and fails with `invalid_request`,
/// matching the protocol rule that a message must be present and textual.
/// Syntactically broken JSON fails with `parse_error`; everything after a
/// successful decode fails with the error kind of the violated field rule.
///
/// Batch input is atomic: the first failing element aborts the whole call
/// and no partial batch is ever returned. An empty array parses to an
/// empty batch.
pub fn parse(raw: Option<&str>) -> Result<JsonRpcPayload, JsonRpcErrorObject> {
    let Some(raw) = raw else {
        return Err(JsonRpcErrorObject::invalid_request(Some(json!(
            "Message MUST be not null and in string format!"
        ))));
    };

    let decoded: Value = serde_json::from_str(raw).map_err(|err| {
        JsonRpcErrorObject::parse_error(Some(json!(format!("Invalid JSON format: {err}"))))
    })?;

    match decoded {
        Value::Object(fields) => parse_object(&fields).map(JsonRpcPayload::Single),
        Value::Array(items) => {
            let messages = items
                .iter()
                .map(parse_value)
                .collect::<Result<Vec<_>, _>>()?;
            trace!("parsed batch of {} messages", messages.len());
            Ok(JsonRpcPayload::Batch(messages))
        }
        _ => Err(JsonRpcErrorObject::invalid_request(Some(json!(
            "Message MUST be an object or an array of objects!"
        )))),
    }
}

/// One element of a batch: must itself be an object-shaped message.
fn parse_value(value: &Value) -> Result<JsonRpcMessage, JsonRpcErrorObject> {
    match value {
        Value::Object(fields) => parse_object(fields),
        other => Err(JsonRpcErrorObject::invalid_request(Some(other.clone()))),
    }
}

/// Classify and validate a single decoded message object.
fn parse_object(fields: &Map<String, Value>) -> Result<JsonRpcMessage, JsonRpcErrorObject> {
    match fields.get("jsonrpc") {
        Some(Value::String(version)) if version == JSONRPC_VERSION => {}
        found => {
            let found = match found {
                Some(Value::String(version)) => version.clone(),
                Some(other) => other.to_string(),
                None => "missing".to_string(),
            };
            return Err(JsonRpcErrorObject::invalid_request(Some(json!(format!(
                "Version {found} not supported! Please use {JSONRPC_VERSION} instead."
            )))));
        }
    }

    let message = if !fields.contains_key("id") {
        // the only message kind with no id member is the notification
        let method = check_method(fields.get("method"))?;
        let params = check_params(fields.get("params"))?;
        JsonRpcMessage::Notification(JsonRpcNotification::new(method, params))
    } else if fields.contains_key("method") {
        let id = check_id(fields.get("id"))?;
        let method = check_method(fields.get("method"))?;
        let params = check_params(fields.get("params"))?;
        JsonRpcMessage::Request(JsonRpcRequest::new(id, method, params))
    } else if fields.contains_key("result") {
        let id = check_id(fields.get("id"))?;
        let result = fields.get("result").cloned().unwrap_or(Value::Null);
        JsonRpcMessage::Response(JsonRpcResponse::new(id, result))
    } else if let Some(error) = fields.get("error") {
        if error.is_null() {
            return Err(JsonRpcErrorObject::internal_error(Some(json!(
                "Error object MUST be not null!"
            ))));
        }
        let id = check_id(fields.get("id"))?;
        let error = check_error(error)?;
        JsonRpcMessage::Error(JsonRpcError::new(id, error))
    } else {
        // structurally none of the four kinds; hand the object back as data
        return Err(JsonRpcErrorObject::invalid_request(Some(Value::Object(
            fields.clone(),
        ))));
    };

    trace!(
        "classified {} message",
        match &message {
            JsonRpcMessage::Request(_) => "request",
            JsonRpcMessage::Notification(_) => "notification",
            JsonRpcMessage::Response(_) => "success",
            JsonRpcMessage::Error(_) => "error",
        }
    );
    Ok(message)
}
