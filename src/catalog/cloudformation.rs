use super::{Field, FieldType, HttpBinding, Operation, Protocol, Service};

pub const SERVICE: Service = Service {
    id: "cloudformation",
    name: "AWS CloudFormation",
    endpoint_prefix: "cloudformation",
    signing_name: "cloudformation",
    protocol: Protocol::Query {
        version: "2010-05-15",
    },
    global: false,
};

pub const OPERATIONS: &[Operation] = &[
    Operation {
        service: &SERVICE,
        name: "DescribeAccountLimits",
        description: "Retrieves the CloudFormation limits for the account",
        http: HttpBinding::POST_ROOT,
        input: &[Field::optional("NextToken", FieldType::String)],
        output: &[
            Field::optional("AccountLimits", FieldType::Array),
            Field::optional("NextToken", FieldType::String),
        ],
    },
    Operation {
        service: &SERVICE,
        name: "DescribeStacks",
        description: "Returns the description of one stack, or of every stack",
        http: HttpBinding::POST_ROOT,
        input: &[
            Field::optional("StackName", FieldType::String),
            Field::optional("NextToken", FieldType::String),
        ],
        output: &[
            Field::optional("Stacks", FieldType::Array),
            Field::optional("NextToken", FieldType::String),
        ],
    },
    Operation {
        service: &SERVICE,
        name: "ListStacks",
        description: "Returns summaries of stacks, optionally filtered by status",
        http: HttpBinding::POST_ROOT,
        input: &[
            Field::optional("NextToken", FieldType::String),
            Field::optional("StackStatusFilter", FieldType::Array),
        ],
        output: &[
            Field::optional("StackSummaries", FieldType::Array),
            Field::optional("NextToken", FieldType::String),
        ],
    },
    Operation {
        service: &SERVICE,
        name: "DescribeStackResources",
        description: "Returns the resources of a stack",
        http: HttpBinding::POST_ROOT,
        input: &[
            Field::optional("StackName", FieldType::String),
            Field::optional("LogicalResourceId", FieldType::String),
            Field::optional("PhysicalResourceId", FieldType::String),
        ],
        output: &[Field::optional("StackResources", FieldType::Array)],
    },
    Operation {
        service: &SERVICE,
        name: "ListExports",
        description: "Lists exported output values in the region",
        http: HttpBinding::POST_ROOT,
        input: &[Field::optional("NextToken", FieldType::String)],
        output: &[
            Field::optional("Exports", FieldType::Array),
            Field::optional("NextToken", FieldType::String),
        ],
    },
];
