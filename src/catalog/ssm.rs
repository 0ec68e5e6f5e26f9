use super::{Field, FieldType, HttpBinding, Operation, Protocol, Service};

pub const SERVICE: Service = Service {
    id: "ssm",
    name: "AWS Systems Manager",
    endpoint_prefix: "ssm",
    signing_name: "ssm",
    protocol: Protocol::Json {
        version: "1.1",
        target_prefix: "AmazonSSM",
    },
    global: false,
};

pub const OPERATIONS: &[Operation] = &[
    Operation {
        service: &SERVICE,
        name: "GetParameter",
        description: "Returns one parameter from Parameter Store",
        http: HttpBinding::POST_ROOT,
        input: &[
            Field::required("Name", FieldType::String),
            Field::optional("WithDecryption", FieldType::Boolean),
        ],
        output: &[Field::optional("Parameter", FieldType::Object)],
    },
    Operation {
        service: &SERVICE,
        name: "PutParameter",
        description: "Adds a parameter to Parameter Store or overwrites one",
        http: HttpBinding::POST_ROOT,
        input: &[
            Field::required("Name", FieldType::String),
            Field::required("Value", FieldType::String),
            Field::optional("Type", FieldType::String),
            Field::optional("Description", FieldType::String),
            Field::optional("Overwrite", FieldType::Boolean),
            Field::optional("Tier", FieldType::String),
        ],
        output: &[
            Field::optional("Version", FieldType::Number),
            Field::optional("Tier", FieldType::String),
        ],
    },
];
