use super::{Field, FieldType, HttpBinding, Operation, Protocol, Service};

pub const SERVICE: Service = Service {
    id: "iam",
    name: "AWS Identity and Access Management",
    endpoint_prefix: "iam",
    signing_name: "iam",
    protocol: Protocol::Query {
        version: "2010-05-08",
    },
    global: true,
};

pub const OPERATIONS: &[Operation] = &[
    Operation {
        service: &SERVICE,
        name: "CreateAccessKey",
        description: "Creates a secret access key and access key id for a user",
        http: HttpBinding::POST_ROOT,
        input: &[Field::optional("UserName", FieldType::String)],
        output: &[Field::required("AccessKey", FieldType::Object)],
    },
    Operation {
        service: &SERVICE,
        name: "DeleteAccessKey",
        description: "Deletes an access key pair of a user",
        http: HttpBinding::POST_ROOT,
        input: &[
            Field::optional("UserName", FieldType::String),
            Field::required("AccessKeyId", FieldType::String),
        ],
        output: &[],
    },
    Operation {
        service: &SERVICE,
        name: "GetUser",
        description: "Retrieves information about a user, or the caller when no name is given",
        http: HttpBinding::POST_ROOT,
        input: &[Field::optional("UserName", FieldType::String)],
        output: &[Field::required("User", FieldType::Object)],
    },
    Operation {
        service: &SERVICE,
        name: "ListUsers",
        description: "Lists the IAM users that have the given path prefix",
        http: HttpBinding::POST_ROOT,
        input: &[
            Field::optional("PathPrefix", FieldType::String),
            Field::optional("Marker", FieldType::String),
            Field::optional("MaxItems", FieldType::Number),
        ],
        output: &[
            Field::required("Users", FieldType::Array),
            Field::optional("IsTruncated", FieldType::Boolean),
            Field::optional("Marker", FieldType::String),
        ],
    },
    Operation {
        service: &SERVICE,
        name: "ListRoles",
        description: "Lists the IAM roles that have the given path prefix",
        http: HttpBinding::POST_ROOT,
        input: &[
            Field::optional("PathPrefix", FieldType::String),
            Field::optional("Marker", FieldType::String),
            Field::optional("MaxItems", FieldType::Number),
        ],
        output: &[
            Field::required("Roles", FieldType::Array),
            Field::optional("IsTruncated", FieldType::Boolean),
            Field::optional("Marker", FieldType::String),
        ],
    },
];
