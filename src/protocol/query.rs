use serde_json::{Map, Value};

use super::{HttpRequest, HttpResponse, empty_object, xml};
use crate::catalog::{FieldType, Operation};
use crate::error::OperationError;

const CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

pub fn encode(operation: &Operation, version: &str, params: &Map<String, Value>) -> HttpRequest {
    let mut pairs = vec![
        ("Action".to_string(), operation.name.to_string()),
        ("Version".to_string(), version.to_string()),
    ];
    for (name, value) in params {
        flatten(name, value, &mut pairs);
    }

    let body = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    HttpRequest {
        method: operation.http.method,
        path: operation.http.uri.to_string(),
        headers: vec![("Content-Type".to_string(), CONTENT_TYPE.to_string())],
        body: body.into_bytes(),
    }
}

/// Flatten a JSON value into Query protocol key/value pairs.
///
/// Lists become `Name.member.N` (1-based), structures `Name.Field`.
fn flatten(prefix: &str, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((prefix.to_string(), b.to_string())),
        Value::Number(n) => pairs.push((prefix.to_string(), n.to_string())),
        Value::String(s) => pairs.push((prefix.to_string(), s.clone())),
        // An empty list is sent as a bare key so the service sees it as present
        Value::Array(items) if items.is_empty() => pairs.push((prefix.to_string(), String::new())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten(&format!("{prefix}.member.{}", index + 1), item, pairs);
            }
        }
        Value::Object(fields) => {
            for (name, field) in fields {
                flatten(&format!("{prefix}.{name}"), field, pairs);
            }
        }
    }
}

pub fn decode(operation: &Operation, response: &HttpResponse) -> Result<Value, OperationError> {
    if !response.is_success() {
        return Err(decode_error(operation, response));
    }

    if response.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(empty_object());
    }

    let (root, value) = xml::parse(&response.body).map_err(|e| OperationError {
        status: Some(response.status),
        ..OperationError::local(operation.id(), format!("{e:#}"))
    })?;

    if root != format!("{}Response", operation.name) {
        return Err(OperationError {
            status: Some(response.status),
            ..OperationError::local(
                operation.id(),
                format!("unexpected response element <{root}>"),
            )
        });
    }

    let result_name = format!("{}Result", operation.name);
    match value.get(&result_name) {
        Some(Value::Object(result)) => Ok(Value::Object(coerce_empty_fields(operation, result))),
        _ => Ok(empty_object()),
    }
}

/// XML has no empty-list literal: `<Stacks/>` reads as `""`. Restore the
/// declared shape of top-level output fields.
fn coerce_empty_fields(operation: &Operation, result: &Map<String, Value>) -> Map<String, Value> {
    result
        .iter()
        .map(|(name, value)| {
            let declared = operation.output.iter().find(|field| field.name == name);
            let value = match (declared.map(|field| field.field_type), value) {
                (Some(FieldType::Array), Value::String(s)) if s.trim().is_empty() => {
                    Value::Array(Vec::new())
                }
                (Some(FieldType::Object), Value::String(s)) if s.trim().is_empty() => {
                    empty_object()
                }
                _ => value.clone(),
            };
            (name.clone(), value)
        })
        .collect()
}

fn decode_error(operation: &Operation, response: &HttpResponse) -> OperationError {
    let parsed = xml::parse(&response.body).ok().map(|(_, value)| value);
    let error = parsed.as_ref().map(|value| value.get("Error").unwrap_or(value));

    let field = |name: &str| {
        error
            .and_then(|e| e.get(name))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(String::from)
    };

    let message = field("Message").unwrap_or_else(|| {
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
        code: field("Code"),
        message,
    }
}
