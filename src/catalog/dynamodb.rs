use super::{Field, FieldType, HttpBinding, Operation, Protocol, Service};

pub const SERVICE: Service = Service {
    id: "dynamodb",
    name: "Amazon DynamoDB",
    endpoint_prefix: "dynamodb",
    signing_name: "dynamodb",
    protocol: Protocol::Json {
        version: "1.0",
        target_prefix: "DynamoDB_20120810",
    },
    global: false,
};

pub const OPERATIONS: &[Operation] = &[
    Operation {
        service: &SERVICE,
        name: "ListTables",
        description: "Returns the table names of the account in the region",
        http: HttpBinding::POST_ROOT,
        input: &[
            Field::optional("ExclusiveStartTableName", FieldType::String),
            Field::optional("Limit", FieldType::Number),
        ],
        output: &[
            Field::optional("TableNames", FieldType::Array),
            Field::optional("LastEvaluatedTableName", FieldType::String),
        ],
    },
    Operation {
        service: &SERVICE,
        name: "DescribeTable",
        description: "Returns the status, key schema and indexes of a table",
        http: HttpBinding::POST_ROOT,
        input: &[Field::required("TableName", FieldType::String)],
        output: &[Field::optional("Table", FieldType::Object)],
    },
    Operation {
        service: &SERVICE,
        name: "GetItem",
        description: "Returns the attributes of the item with the given primary key",
        http: HttpBinding::POST_ROOT,
        input: &[
            Field::required("TableName", FieldType::String),
            Field::required("Key", FieldType::Object),
            Field::optional("ConsistentRead", FieldType::Boolean),
            Field::optional("ProjectionExpression", FieldType::String),
            Field::optional("ExpressionAttributeNames", FieldType::Object),
        ],
        output: &[Field::optional("Item", FieldType::Object)],
    },
    Operation {
        service: &SERVICE,
        name: "PutItem",
        description: "Creates an item or replaces an existing one",
        http: HttpBinding::POST_ROOT,
        input: &[
            Field::required("TableName", FieldType::String),
            Field::required("Item", FieldType::Object),
            Field::optional("ConditionExpression", FieldType::String),
            Field::optional("ExpressionAttributeNames", FieldType::Object),
            Field::optional("ExpressionAttributeValues", FieldType::Object),
            Field::optional("ReturnValues", FieldType::String),
        ],
        output: &[Field::optional("Attributes", FieldType::Object)],
    },
];
