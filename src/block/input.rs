use serde_json::{Map, Value};

use crate::aws::endpoint::{validate_endpoint, validate_region};
use crate::catalog::Operation;
use crate::constants::{ASSUME_ROLE_ARN_KEY, ENDPOINT_KEY, REGION_KEY};
use crate::error::{Error, Result};

/// Validated configuration of one block invocation
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationConfig {
    pub region: String,
    pub assume_role_arn: Option<String>,
    pub endpoint: Option<String>,
    /// Operation parameters, exactly the recognized input fields
    pub params: Map<String, Value>,
}

impl InvocationConfig {
    pub fn parse(operation: &Operation, config: &Value) -> Result<Self> {
        let Value::Object(fields) = config else {
            return Err(Error::configuration(format!(
                "configuration for {} must be a JSON object",
                operation.id()
            )));
        };

        let region = match fields.get(REGION_KEY) {
            Some(Value::String(region)) if !region.is_empty() => region.clone(),
            Some(Value::String(_)) | None | Some(Value::Null) => {
                return Err(Error::configuration("region is required"));
            }
            Some(_) => return Err(Error::configuration("region must be a string")),
        };
        validate_region(&region)?;

        let assume_role_arn = match fields.get(ASSUME_ROLE_ARN_KEY) {
            None | Some(Value::Null) => None,
            Some(Value::String(arn)) if arn.is_empty() => None,
            Some(Value::String(arn)) if arn.starts_with("arn:") => Some(arn.clone()),
            Some(Value::String(arn)) => {
                return Err(Error::configuration(format!(
                    "assumeRoleArn '{arn}' is not an ARN"
                )));
            }
            Some(_) => return Err(Error::configuration("assumeRoleArn must be a string")),
        };

        let endpoint = match fields.get(ENDPOINT_KEY) {
            None | Some(Value::Null) => None,
            Some(Value::String(endpoint)) => Some(validate_endpoint(endpoint)?),
            Some(_) => return Err(Error::configuration("endpoint must be a string")),
        };

        let params = operation_params(operation, fields)?;

        Ok(Self {
            region,
            assume_role_arn,
            endpoint,
            params,
        })
    }
}

fn operation_params(operation: &Operation, fields: &Map<String, Value>) -> Result<Map<String, Value>> {
    let mut params = Map::new();

    for (name, value) in fields {
        if [REGION_KEY, ASSUME_ROLE_ARN_KEY, ENDPOINT_KEY].contains(&name.as_str()) {
            continue;
        }

        let Some(field) = operation.input_field(name) else {
            return Err(Error::configuration(format!(
                "unknown parameter '{name}' for {}",
                operation.id()
            )));
        };

        if value.is_null() {
            continue;
        }

        if !field.field_type.matches(value) {
            return Err(Error::configuration(format!(
                "parameter '{name}' must be of type {}",
                field.field_type.as_str()
            )));
        }

        params.insert(name.clone(), value.clone());
    }

    if let Some(missing) = operation
        .input
        .iter()
        .find(|field| field.required && !params.contains_key(field.name))
    {
        return Err(Error::configuration(format!(
            "missing required parameter '{}' for {}",
            missing.name,
            operation.id()
        )));
    }

    Ok(params)
}
