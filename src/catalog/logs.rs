use super::{Field, FieldType, HttpBinding, Operation, Protocol, Service};

pub const SERVICE: Service = Service {
    id: "logs",
    name: "Amazon CloudWatch Logs",
    endpoint_prefix: "logs",
    signing_name: "logs",
    protocol: Protocol::Json {
        version: "1.1",
        target_prefix: "Logs_20140328",
    },
    global: false,
};

pub const OPERATIONS: &[Operation] = &[
    Operation {
        service: &SERVICE,
        name: "DescribeLogGroups",
        description: "Lists log groups, optionally filtered by name prefix",
        http: HttpBinding::POST_ROOT,
        input: &[
            Field::optional("logGroupNamePrefix", FieldType::String),
            Field::optional("nextToken", FieldType::String),
            Field::optional("limit", FieldType::Number),
        ],
        output: &[
            Field::optional("logGroups", FieldType::Array),
            Field::optional("nextToken", FieldType::String),
        ],
    },
    Operation {
        service: &SERVICE,
        name: "PutLogEvents",
        description: "Uploads a batch of log events to a log stream",
        http: HttpBinding::POST_ROOT,
        input: &[
            Field::required("logGroupName", FieldType::String),
            Field::required("logStreamName", FieldType::String),
            Field::required("logEvents", FieldType::Array),
        ],
        output: &[
            Field::optional("nextSequenceToken", FieldType::String),
            Field::optional("rejectedLogEventsInfo", FieldType::Object),
        ],
    },
];
