use super::{Field, FieldType, HttpBinding, Operation, Protocol, Service};

pub const SERVICE: Service = Service {
    id: "lambda",
    name: "AWS Lambda",
    endpoint_prefix: "lambda",
    signing_name: "lambda",
    protocol: Protocol::RestJson,
    global: false,
};

pub const OPERATIONS: &[Operation] = &[
    Operation {
        service: &SERVICE,
        name: "GetFunction",
        description: "Returns a function's configuration and a link to its deployment package",
        http: HttpBinding {
            method: "GET",
            uri: "/2015-03-31/functions/{FunctionName}",
        },
        input: &[
            Field::required("FunctionName", FieldType::String).in_path(),
            Field::optional("Qualifier", FieldType::String).in_query("Qualifier"),
        ],
        output: &[
            Field::optional("Configuration", FieldType::Object),
            Field::optional("Code", FieldType::Object),
            Field::optional("Tags", FieldType::Object),
        ],
    },
    Operation {
        service: &SERVICE,
        name: "ListFunctions",
        description: "Returns a page of functions with their version-specific configuration",
        http: HttpBinding {
            method: "GET",
            uri: "/2015-03-31/functions/",
        },
        input: &[
            Field::optional("MasterRegion", FieldType::String).in_query("MasterRegion"),
            Field::optional("FunctionVersion", FieldType::String).in_query("FunctionVersion"),
            Field::optional("Marker", FieldType::String).in_query("Marker"),
            Field::optional("MaxItems", FieldType::Number).in_query("MaxItems"),
        ],
        output: &[
            Field::optional("Functions", FieldType::Array),
            Field::optional("NextMarker", FieldType::String),
        ],
    },
    Operation {
        service: &SERVICE,
        name: "GetAccountSettings",
        description: "Returns Lambda limits and usage for the account in the region",
        http: HttpBinding {
            method: "GET",
            uri: "/2016-08-19/account-settings/",
        },
        input: &[],
        output: &[
            Field::optional("AccountLimit", FieldType::Object),
            Field::optional("AccountUsage", FieldType::Object),
        ],
    },
    Operation {
        service: &SERVICE,
        name: "UpdateFunctionConfiguration",
        description: "Modifies the version-specific settings of a function",
        http: HttpBinding {
            method: "PUT",
            uri: "/2015-03-31/functions/{FunctionName}/configuration",
        },
        input: &[
            Field::required("FunctionName", FieldType::String).in_path(),
            Field::optional("Description", FieldType::String),
            Field::optional("Handler", FieldType::String),
            Field::optional("MemorySize", FieldType::Number),
            Field::optional("Timeout", FieldType::Number),
            Field::optional("Role", FieldType::String),
            Field::optional("Runtime", FieldType::String),
            Field::optional("Environment", FieldType::Object),
            Field::optional("RevisionId", FieldType::String),
        ],
        output: &[
            Field::optional("FunctionName", FieldType::String),
            Field::optional("FunctionArn", FieldType::String),
            Field::optional("LastUpdateStatus", FieldType::String),
            Field::optional("RevisionId", FieldType::String),
        ],
    },
    Operation {
        service: &SERVICE,
        name: "DeleteFunction",
        description: "Deletes a function, or one version of it when a qualifier is given",
        http: HttpBinding {
            method: "DELETE",
            uri: "/2015-03-31/functions/{FunctionName}",
        },
        input: &[
            Field::required("FunctionName", FieldType::String).in_path(),
            Field::optional("Qualifier", FieldType::String).in_query("Qualifier"),
        ],
        output: &[],
    },
];
