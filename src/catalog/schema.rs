use serde::Serialize;
use serde_json::Value;

/// JSON type a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Array,
    Object,
}

impl FieldType {
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
            Self::Array => value.is_array(),
            Self::Object => value.is_object(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

/// Where a REST-JSON input field travels on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Body,
    /// Substituted into `{Name}` of the URI template
    Path,
    Query(&'static str),
    Header(&'static str),
}

/// One declared input or output field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    #[serde(skip)]
    pub location: Location,
}

impl Field {
    pub const fn required(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            required: true,
            location: Location::Body,
        }
    }

    pub const fn optional(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            required: false,
            location: Location::Body,
        }
    }

    pub const fn in_path(self) -> Self {
        Self {
            location: Location::Path,
            ..self
        }
    }

    pub const fn in_query(self, key: &'static str) -> Self {
        Self {
            location: Location::Query(key),
            ..self
        }
    }

    pub const fn in_header(self, name: &'static str) -> Self {
        Self {
            location: Location::Header(name),
            ..self
        }
    }
}
