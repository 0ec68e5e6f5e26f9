//! Request encoding and response decoding for the AWS wire protocols.

use serde_json::{Map, Value};

use crate::catalog::{Operation, Protocol};
use crate::error::OperationError;

mod json;
mod query;
mod rest_json;
pub mod xml;

/// Unsigned request, relative to the service endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: &'static str,
    /// Path plus query string, always starting with `/`
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

pub fn encode_request(
    operation: &Operation,
    params: &Map<String, Value>,
) -> Result<HttpRequest, OperationError> {
    match operation.service.protocol {
        Protocol::Query { version } => Ok(query::encode(operation, version, params)),
        Protocol::Json {
            version,
            target_prefix,
        } => json::encode(operation, version, target_prefix, params),
        Protocol::RestJson => rest_json::encode(operation, params),
    }
}

/// Decode a response into the operation's output object; empty bodies become `{}`
pub fn decode_response(
    operation: &Operation,
    response: &HttpResponse,
) -> Result<Value, OperationError> {
    match operation.service.protocol {
        Protocol::Query { .. } => query::decode(operation, response),
        Protocol::Json { .. } | Protocol::RestJson => json::decode(operation, response),
    }
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}
