use super::{Field, FieldType, HttpBinding, Operation, Protocol, Service};

pub const SERVICE: Service = Service {
    id: "sns",
    name: "Amazon Simple Notification Service",
    endpoint_prefix: "sns",
    signing_name: "sns",
    protocol: Protocol::Query {
        version: "2010-03-31",
    },
    global: false,
};

pub const OPERATIONS: &[Operation] = &[
    Operation {
        service: &SERVICE,
        name: "ListTopics",
        description: "Returns the caller's topics",
        http: HttpBinding::POST_ROOT,
        input: &[Field::optional("NextToken", FieldType::String)],
        output: &[
            Field::optional("Topics", FieldType::Array),
            Field::optional("NextToken", FieldType::String),
        ],
    },
    Operation {
        service: &SERVICE,
        name: "Publish",
        description: "Sends a message to a topic, a phone number or an endpoint",
        http: HttpBinding::POST_ROOT,
        input: &[
            Field::optional("TopicArn", FieldType::String),
            Field::optional("TargetArn", FieldType::String),
            Field::optional("PhoneNumber", FieldType::String),
            Field::required("Message", FieldType::String),
            Field::optional("Subject", FieldType::String),
            Field::optional("MessageStructure", FieldType::String),
        ],
        output: &[Field::optional("MessageId", FieldType::String)],
    },
];
