//! Per-field structural validators shared by all message kinds.
//!
//! Each validator rejects with the JSON-RPC error kind mandated for that
//! field and, on success, hands back the typed field for the parser to
//! assemble. Input is never mutated and nothing partially validated
//! escapes.

use serde_json::{json, Value};

use crate::error::JsonRpcErrorObject;
use crate::request::RequestParams;
use crate::types::RequestId;

/// An identifier must be a string or an integer. Floats, booleans, null
/// and structured values are all rejected, whether or not the `id` key
/// was present.
pub(crate) fn check_id(id: Option<&Value>) -> Result<RequestId, JsonRpcErrorObject> {
    id.and_then(RequestId::from_value).ok_or_else(|| {
        JsonRpcErrorObject::parse_error(Some(json!(
            "The identifier MUST be a string or an integer!"
        )))
    })
}

/// A method name must be a string.
pub(crate) fn check_method(method: Option<&Value>) -> Result<String, JsonRpcErrorObject> {
    match method {
        Some(Value::String(name)) => Ok(name.clone()),
        _ => Err(JsonRpcErrorObject::parse_error(Some(json!(
            "The method MUST be a string"
        )))),
    }
}

/// Params are optional; when present they must be an object or an array.
/// Values decoded from text are always JSON-representable, so no
/// re-serialization guard is needed once decoding has succeeded.
pub(crate) fn check_params(
    params: Option<&Value>,
) -> Result<Option<RequestParams>, JsonRpcErrorObject> {
    match params {
        None => Ok(None),
        Some(value) => RequestParams::from_value(value).map(Some).ok_or_else(|| {
            JsonRpcErrorObject::invalid_params(Some(json!(
                "Params MUST be an object or an ordered array of values"
            )))
        }),
    }
}

/// An embedded error member must be object-shaped with an integer `code`
/// and a string `message`; `data` is free-form and carried through.
pub(crate) fn check_error(error: &Value) -> Result<JsonRpcErrorObject, JsonRpcErrorObject> {
    let Some(fields) = error.as_object() else {
        return Err(JsonRpcErrorObject::internal_error(Some(json!(
            "This error is not compatible with JSON-RPC 2.0 spec!"
        ))));
    };

    let code = fields.get("code").and_then(Value::as_i64).ok_or_else(|| {
        JsonRpcErrorObject::internal_error(Some(json!("The error code MUST be an integer!")))
    })?;
    let message = fields
        .get("message")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            JsonRpcErrorObject::internal_error(Some(json!("The error message MUST be a string!")))
        })?;

    Ok(JsonRpcErrorObject {
        code,
        message: message.to_string(),
        data: fields.get("data").cloned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_codes;
    use serde_json::json;

    #[test]
    fn test_check_id_accepts_strings_and_integers() {
        assert_eq!(
            check_id(Some(&json!("abc"))).unwrap(),
            RequestId::String("abc".to_string())
        );
        assert_eq!(check_id(Some(&json!(12))).unwrap(), RequestId::Number(12));
        assert_eq!(check_id(Some(&json!(-3))).unwrap(), RequestId::Number(-3));
    }

    #[test]
    fn test_check_id_rejects_everything_else() {
        for bad in [
            json!(1.5),
            json!(true),
            json!(null),
            json!({"nested": 1}),
            json!([1, 2]),
        ] {
            let err = check_id(Some(&bad)).unwrap_err();
            assert_eq!(err.code, error_codes::PARSE_ERROR, "value: {bad}");
        }
        assert_eq!(check_id(None).unwrap_err().code, error_codes::PARSE_ERROR);
    }

    #[test]
    fn test_check_method() {
        assert_eq!(check_method(Some(&json!("invoke"))).unwrap(), "invoke");
        assert_eq!(
            check_method(Some(&json!(3))).unwrap_err().code,
            error_codes::PARSE_ERROR
        );
        assert_eq!(
            check_method(None).unwrap_err().code,
            error_codes::PARSE_ERROR
        );
    }

    #[test]
    fn test_check_params_absent_is_fine() {
        assert_eq!(check_params(None).unwrap(), None);
    }

    #[test]
    fn test_check_params_shapes() {
        assert!(matches!(
            check_params(Some(&json!({"a": 1}))).unwrap(),
            Some(RequestParams::Object(_))
        ));
        assert!(matches!(
            check_params(Some(&json!([1, 2]))).unwrap(),
            Some(RequestParams::Array(_))
        ));
        for bad in [json!("str"), json!(3), json!(true), json!(null)] {
            let err = check_params(Some(&bad)).unwrap_err();
            assert_eq!(err.code, error_codes::INVALID_PARAMS, "value: {bad}");
        }
    }

    #[test]
    fn test_check_error_well_formed() {
        let parsed = check_error(&json!({
            "code": -32700,
            "message": "Parse error",
            "data": {"info": "bad input"}
        }))
        .unwrap();
        assert_eq!(parsed.code, -32700);
        assert_eq!(parsed.message, "Parse error");
        assert_eq!(parsed.data, Some(json!({"info": "bad input"})));
    }

    #[test]
    fn test_check_error_malformed() {
        for bad in [
            json!("not an object"),
            json!({"code": "NaN", "message": "x"}),
            json!({"code": 1.5, "message": "x"}),
            json!({"message": "missing code"}),
            json!({"code": -32000}),
            json!({"code": -32000, "message": 7}),
        ] {
            let err = check_error(&bad).unwrap_err();
            assert_eq!(err.code, error_codes::INTERNAL_ERROR, "value: {bad}");
        }
    }
}
