use super::{Field, FieldType, HttpBinding, Operation, Protocol, Service};

pub const SERVICE: Service = Service {
    id: "kms",
    name: "AWS Key Management Service",
    endpoint_prefix: "kms",
    signing_name: "kms",
    protocol: Protocol::Json {
        version: "1.1",
        target_prefix: "TrentService",
    },
    global: false,
};

pub const OPERATIONS: &[Operation] = &[
    Operation {
        service: &SERVICE,
        name: "ListKeys",
        description: "Lists the KMS keys of the account in the region",
        http: HttpBinding::POST_ROOT,
        input: &[
            Field::optional("Limit", FieldType::Number),
            Field::optional("Marker", FieldType::String),
        ],
        output: &[
            Field::optional("Keys", FieldType::Array),
            Field::optional("NextMarker", FieldType::String),
            Field::optional("Truncated", FieldType::Boolean),
        ],
    },
    Operation {
        service: &SERVICE,
        name: "Encrypt",
        description: "Encrypts base64-encoded plaintext with a KMS key",
        http: HttpBinding::POST_ROOT,
        input: &[
            Field::required("KeyId", FieldType::String),
            Field::required("Plaintext", FieldType::String),
            Field::optional("EncryptionContext", FieldType::Object),
            Field::optional("EncryptionAlgorithm", FieldType::String),
        ],
        output: &[
            Field::optional("CiphertextBlob", FieldType::String),
            Field::optional("KeyId", FieldType::String),
            Field::optional("EncryptionAlgorithm", FieldType::String),
        ],
    },
];
