//! Table of every operation a block can invoke.
//!
//! Each service module declares its [`Service`] and a slice of [`Operation`]s.
//! An operation is addressed by `<service id>.<OperationName>`, for example
//! `cloudformation.DescribeAccountLimits`.

use serde_json::{Value, json};

pub mod schema;

mod cloudformation;
mod dynamodb;
mod iam;
mod kms;
mod lambda;
mod logs;
mod secretsmanager;
mod sns;
mod ssm;
mod sts;

pub use schema::{Field, FieldType, Location};

/// Wire protocol spoken by a service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// Form-encoded request, XML response
    Query { version: &'static str },
    /// JSON request and response, operation named by `X-Amz-Target`
    Json {
        version: &'static str,
        target_prefix: &'static str,
    },
    /// HTTP-bound request with a JSON body
    RestJson,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub endpoint_prefix: &'static str,
    pub signing_name: &'static str,
    pub protocol: Protocol,
    /// Served from one endpoint per partition instead of one per region
    pub global: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpBinding {
    pub method: &'static str,
    pub uri: &'static str,
}

impl HttpBinding {
    /// Binding shared by every Query and JSON protocol operation
    pub const POST_ROOT: Self = Self {
        method: "POST",
        uri: "/",
    };
}

#[derive(Debug, PartialEq, Eq)]
pub struct Operation {
    pub service: &'static Service,
    pub name: &'static str,
    pub description: &'static str,
    pub http: HttpBinding,
    pub input: &'static [Field],
    pub output: &'static [Field],
}

impl Operation {
    pub fn id(&self) -> String {
        format!("{}.{}", self.service.id, self.name)
    }

    pub fn input_field(&self, name: &str) -> Option<&'static Field> {
        self.input.iter().find(|field| field.name == name)
    }

    /// Declared input/output schema as JSON
    pub fn schema(&self) -> Value {
        json!({
            "id": self.id(),
            "service": self.service.name,
            "operation": self.name,
            "description": self.description,
            "input": self.input,
            "output": self.output,
        })
    }
}

const SERVICES: &[&Service] = &[
    &cloudformation::SERVICE,
    &dynamodb::SERVICE,
    &iam::SERVICE,
    &kms::SERVICE,
    &lambda::SERVICE,
    &logs::SERVICE,
    &secretsmanager::SERVICE,
    &sns::SERVICE,
    &ssm::SERVICE,
    &sts::SERVICE,
];

const OPERATIONS: &[&[Operation]] = &[
    cloudformation::OPERATIONS,
    dynamodb::OPERATIONS,
    iam::OPERATIONS,
    kms::OPERATIONS,
    lambda::OPERATIONS,
    logs::OPERATIONS,
    secretsmanager::OPERATIONS,
    sns::OPERATIONS,
    ssm::OPERATIONS,
    sts::OPERATIONS,
];

pub fn services() -> impl Iterator<Item = &'static Service> {
    SERVICES.iter().copied()
}

pub fn operations() -> impl Iterator<Item = &'static Operation> {
    OPERATIONS.iter().flat_map(|ops| ops.iter())
}

/// Look up an operation by `<service id>.<OperationName>`
pub fn find(id: &str) -> Option<&'static Operation> {
    let (service, name) = id.split_once('.')?;
    operations().find(|op| op.service.id == service && op.name == name)
}
