use serde::Serialize;
use serde_json::{json, Map, Value};

/// Structured-output schema in the Gemini `responseSchema` dialect
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResponseSchema(Value);

/// Primitive field types understood by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
}

impl FieldType {
    fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "STRING",
            FieldType::Integer => "INTEGER",
        }
    }
}

/// A single object property
#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub field_type: FieldType,
    pub description: Option<&'static str>,
}

impl Field {
    pub const fn string(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::String,
            description: None,
        }
    }

    pub const fn integer(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::Integer,
            description: None,
        }
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

impl ResponseSchema {
    /// Array of objects whose fields are all required
    pub fn array_of_objects(fields: &[Field]) -> Self {
        let mut properties = Map::new();
        for field in fields {
            let mut property = Map::new();
            property.insert("type".to_string(), json!(field.field_type.as_str()));
            if let Some(description) = field.description {
                property.insert("description".to_string(), json!(description));
            }
            properties.insert(field.name.to_string(), Value::Object(property));
        }

        let required: Vec<&str> = fields.iter().map(|f| f.name).collect();

        Self(json!({
            "type": "ARRAY",
            "items": {
                "type": "OBJECT",
                "properties": properties,
                "required": required,
            }
        }))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}
