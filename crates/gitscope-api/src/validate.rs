//! Response validation: transport status, JSON body, embedded status field

use crate::error::ClientError;
use crate::lenient::coerce_string;
use reqwest::StatusCode;
use serde_json::Value;

/// Fails unless the transport status is exactly 200
pub fn check_transport_status(status: StatusCode, body: &str) -> Result<(), ClientError> {
    if status != StatusCode::OK {
        log::warn!("Request failed with HTTP {}", status);
        return Err(ClientError::Status {
            status: status.as_u16(),
            message: body.to_string(),
        });
    }
    Ok(())
}

/// Parses the body; an empty body is `null`
pub fn parse_document(body: &str) -> Result<Value, ClientError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(ClientError::Decode)
}

/// Inspects the embedded status field of a parsed document
///
/// A string other than `"200"` or a number other than `200` fails with the
/// document's message field as the error text. Absent fields and any other
/// JSON type pass.
pub fn check_embedded_status(
    root: &Value,
    status_field: &str,
    message_field: &str,
) -> Result<(), ClientError> {
    let Some(code) = root.get(status_field) else {
        return Ok(());
    };

    let failed = match code {
        Value::String(s) => s != "200",
        Value::Number(n) => n.as_f64() != Some(200.0),
        _ => false,
    };

    if failed {
        let message = root.get(message_field).map(coerce_string).unwrap_or_default();
        log::warn!("Embedded status {} in response: {}", code, message);
        return Err(ClientError::Api {
            code: coerce_string(code),
            message,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transport_status_ok() {
        assert!(check_transport_status(StatusCode::OK, "").is_ok());
    }

    #[test]
    fn test_transport_status_failure_carries_body() {
        let err = check_transport_status(StatusCode::FORBIDDEN, "rate limited").unwrap_err();
        assert!(matches!(err, ClientError::Status { status: 403, .. }));
        assert_eq!(err.to_string(), "rate limited");
    }

    #[test]
    fn test_other_success_codes_still_fail() {
        assert!(check_transport_status(StatusCode::NO_CONTENT, "").is_err());
    }

    #[test]
    fn test_parse_document() {
        assert_eq!(parse_document("  ").unwrap(), Value::Null);
        assert_eq!(parse_document("{\"a\":1}").unwrap(), json!({"a": 1}));
        assert!(matches!(parse_document("{oops"), Err(ClientError::Decode(_))));
    }

    #[test]
    fn test_embedded_string_status_fails() {
        let root = json!({"cod": "404", "message": "city not found"});
        let err = check_embedded_status(&root, "cod", "message").unwrap_err();
        assert_eq!(err.to_string(), "city not found");
        assert!(matches!(err, ClientError::Api { ref code, .. } if code == "404"));
    }

    #[test]
    fn test_embedded_numeric_status_fails() {
        let root = json!({"cod": 404, "message": "city not found"});
        let err = check_embedded_status(&root, "cod", "message").unwrap_err();
        assert_eq!(err.to_string(), "city not found");
    }

    #[test]
    fn test_embedded_success_passes() {
        assert!(check_embedded_status(&json!({"cod": "200"}), "cod", "message").is_ok());
        assert!(check_embedded_status(&json!({"cod": 200}), "cod", "message").is_ok());
        assert!(check_embedded_status(&json!({"total_count": 0}), "cod", "message").is_ok());
        assert!(check_embedded_status(&json!({"cod": null}), "cod", "message").is_ok());
        assert!(check_embedded_status(&Value::Null, "cod", "message").is_ok());
    }

    #[test]
    fn test_embedded_failure_without_message() {
        let err = check_embedded_status(&json!({"cod": 500}), "cod", "message").unwrap_err();
        assert_eq!(err.to_string(), "");
    }

    #[test]
    fn test_custom_field_names() {
        let root = json!({"status": "error", "error": "bad query"});
        let err = check_embedded_status(&root, "status", "error").unwrap_err();
        assert_eq!(err.to_string(), "bad query");
    }
}
