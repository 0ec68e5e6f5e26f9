use serde_json::{Map, Value};

use super::{HttpRequest, HttpResponse, empty_object};
use crate::catalog::Operation;
use crate::error::OperationError;

pub fn encode(
    operation: &Operation,
    version: &str,
    target_prefix: &str,
    params: &Map<String, Value>,
) -> Result<HttpRequest, OperationError> {
    let body = serde_json::to_vec(params)
        .map_err(|e| OperationError::local(operation.id(), format!("failed to encode input: {e}")))?;

    Ok(HttpRequest {
        method: operation.http.method,
        path: operation.http.uri.to_string(),
        headers: vec![
            (
                "Content-Type".to_string(),
                format!("application/x-amz-json-{version}"),
            ),
            (
                "X-Amz-Target".to_string(),
                format!("{target_prefix}.{}", operation.name),
            ),
        ],
        body,
    })
}

/// Decode a JSON (or REST-JSON) response body
pub fn decode(operation: &Operation, response: &HttpResponse) -> Result<Value, OperationError> {
    if !response.is_success() {
        return Err(decode_error(operation, response));
    }

    if response.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(empty_object());
    }

    let value: Value = serde_json::from_slice(&response.body).map_err(|e| OperationError {
        status: Some(response.status),
        ..OperationError::local(operation.id(), format!("invalid JSON response: {e}"))
    })?;

    Ok(match value {
        Value::Null => empty_object(),
        other => other,
    })
}

fn decode_error(operation: &Operation, response: &HttpResponse) -> OperationError {
    let body: Option<Value> = serde_json::from_slice(&response.body).ok();
    let field = |names: &[&str]| {
        let body = body.as_ref()?;
        names
            .iter()
            .find_map(|name| body.get(*name).and_then(Value::as_str))
            .filter(|s| !s.is_empty())
            .map(String::from)
    };

    let code = response
        .header("x-amzn-ErrorType")
        .map(String::from)
        .or_else(|| field(&["__type", "code", "Code"]))
        .map(|raw| sanitize_error_code(&raw));

    let message = field(&["message", "Message", "errorMessage"]).unwrap_or_else(|| {
        let body = String::from_utf8_lossy(&response.body).trim().to_string();
        if body.is_empty() {
            format!("HTTP {}", response.status)
        } else {
            body
        }
    });

    OperationError {
        operation: operation.id(),
        status: Some(response.status),
        code,
        message,
    }
}

/// `aws.protocoltests#FooError:http://internal.amazon.com/` → `FooError`
fn sanitize_error_code(raw: &str) -> String {
    let without_uri = raw.split(':').next().unwrap_or(raw);
    without_uri
        .rsplit('#')
        .next()
        .unwrap_or(without_uri)
        .to_string()
}
