use super::{Field, FieldType, HttpBinding, Operation, Protocol, Service};

pub const SERVICE: Service = Service {
    id: "sts",
    name: "AWS Security Token Service",
    endpoint_prefix: "sts",
    signing_name: "sts",
    protocol: Protocol::Query {
        version: "2011-06-15",
    },
    global: false,
};

pub const OPERATIONS: &[Operation] = &[Operation {
    service: &SERVICE,
    name: "GetCallerIdentity",
    description: "Returns the account, user id and ARN of the calling identity",
    http: HttpBinding::POST_ROOT,
    input: &[],
    output: &[
        Field::optional("UserId", FieldType::String),
        Field::optional("Account", FieldType::String),
        Field::optional("Arn", FieldType::String),
    ],
}];
