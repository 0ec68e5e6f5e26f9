use serde_json::{Map, Value};

use super::HttpRequest;
use crate::catalog::{Location, Operation};
use crate::error::OperationError;

pub fn encode(
    operation: &Operation,
    params: &Map<String, Value>,
) -> Result<HttpRequest, OperationError> {
    let mut path = operation.http.uri.to_string();
    let mut query = Vec::new();
    let mut headers = Vec::new();
    let mut body = Map::new();

    for (name, value) in params {
        let location = operation
            .input_field(name)
            .map_or(Location::Body, |field| field.location);

        match location {
            Location::Path => {
                let segment = urlencoding::encode(&scalar(value)).into_owned();
                path = path.replace(&format!("{{{name}}}"), &segment);
            }
            Location::Query(key) => query.push((key, scalar(value))),
            Location::Header(header) => headers.push((header.to_string(), scalar(value))),
            Location::Body => {
                body.insert(name.clone(), value.clone());
            }
        }
    }

    if let Some(start) = path.find('{') {
        let end = path[start..].find('}').map_or(path.len(), |i| start + i + 1);
        return Err(OperationError::local(
            operation.id(),
            format!("missing path parameter {}", &path[start..end]),
        ));
    }

    if !query.is_empty() {
        let query_string = query
            .iter()
            .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        path = format!("{path}?{query_string}");
    }

    let body = if body.is_empty() {
        Vec::new()
    } else {
        headers.push(("Content-Type".to_string(), "application/json".to_string()));
        serde_json::to_vec(&body).map_err(|e| {
            OperationError::local(operation.id(), format!("failed to encode input: {e}"))
        })?
    };

    Ok(HttpRequest {
        method: operation.http.method,
        path,
        headers,
        body,
    })
}

/// Textual form of a value bound outside the body
fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use serde_json::json;

    fn encode_json(id: &str, params: Value) -> Result<HttpRequest, OperationError> {
        encode(catalog::find(id).unwrap(), params.as_object().unwrap())
    }

    #[test]
    fn test_path_parameter_is_substituted_and_encoded() {
        let request = encode_json(
            "lambda.GetFunction",
            json!({"FunctionName": "arn:aws:lambda:us-east-1:111122223333:function:f"}),
        )
        .unwrap();

        assert_eq!(
            request.path,
            "/2015-03-31/functions/arn%3Aaws%3Alambda%3Aus-east-1%3A111122223333%3Afunction%3Af"
        );
        assert!(request.body.is_empty());
        assert!(request.headers.is_empty());
    }

    #[test]
    fn test_query_parameters() {
        let request = encode_json(
            "lambda.ListFunctions",
            json!({"MaxItems": 10, "Marker": "next page"}),
        )
        .unwrap();

        assert_eq!(request.method, "GET");
        assert_eq!(
            request.path,
            "/2015-03-31/functions/?Marker=next%20page&MaxItems=10"
        );
    }

    #[test]
    fn test_body_fields_become_json() {
        let request = encode_json(
            "lambda.UpdateFunctionConfiguration",
            json!({"FunctionName": "f", "Timeout": 30, "Environment": {"Variables": {"A": "1"}}}),
        )
        .unwrap();

        assert_eq!(request.method, "PUT");
        assert_eq!(request.path, "/2015-03-31/functions/f/configuration");
        assert!(request.headers.contains(&(
            "Content-Type".to_string(),
            "application/json".to_string()
        )));

        let body: Value = serde_json::from_slice(&request.body).unwrap();
        assert_eq!(
            body,
            json!({"Timeout": 30, "Environment": {"Variables": {"A": "1"}}})
        );
    }

    #[test]
    fn test_missing_path_parameter() {
        let err = encode_json("lambda.GetFunction", json!({})).unwrap_err();
        assert_eq!(err.message, "missing path parameter {FunctionName}");
    }

    #[test]
    fn test_scalar_rendering() {
        assert_eq!(scalar(&json!("f")), "f");
        assert_eq!(scalar(&json!(10)), "10");
        assert_eq!(scalar(&json!(true)), "true");
    }
}
