use super::{Field, FieldType, HttpBinding, Operation, Protocol, Service};

pub const SERVICE: Service = Service {
    id: "secretsmanager",
    name: "AWS Secrets Manager",
    endpoint_prefix: "secretsmanager",
    signing_name: "secretsmanager",
    protocol: Protocol::Json {
        version: "1.1",
        target_prefix: "secretsmanager",
    },
    global: false,
};

pub const OPERATIONS: &[Operation] = &[
    Operation {
        service: &SERVICE,
        name: "GetSecretValue",
        description: "Retrieves the contents of a secret version",
        http: HttpBinding::POST_ROOT,
        input: &[
            Field::required("SecretId", FieldType::String),
            Field::optional("VersionId", FieldType::String),
            Field::optional("VersionStage", FieldType::String),
        ],
        output: &[
            Field::optional("ARN", FieldType::String),
            Field::optional("Name", FieldType::String),
            Field::optional("VersionId", FieldType::String),
            Field::optional("SecretString", FieldType::String),
            Field::optional("SecretBinary", FieldType::String),
            Field::optional("VersionStages", FieldType::Array),
            Field::optional("CreatedDate", FieldType::Number),
        ],
    },
    Operation {
        service: &SERVICE,
        name: "ListSecrets",
        description: "Lists the secrets stored in the account and region",
        http: HttpBinding::POST_ROOT,
        input: &[
            Field::optional("MaxResults", FieldType::Number),
            Field::optional("NextToken", FieldType::String),
            Field::optional("Filters", FieldType::Array),
        ],
        output: &[
            Field::optional("SecretList", FieldType::Array),
            Field::optional("NextToken", FieldType::String),
        ],
    },
];
