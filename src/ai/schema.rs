//! Explicit response-shape contracts for schema-constrained generation.
//!
//! A [`ResponseSchema`] is sent alongside a prompt so the remote model
//! constrains its output, and the same object validates the parsed reply
//! before it is accepted. Validation failure is handled exactly like a
//! transport failure.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
enum SchemaType {
    String,
    Array,
    Object,
}

/// The subset of the Gemini response-schema language the assist operations
/// declare: strings, arrays of a single element type, and objects whose
/// properties are all required.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseSchema {
    #[serde(rename = "type")]
    kind: SchemaType,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    properties: BTreeMap<String, ResponseSchema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    required: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<Box<ResponseSchema>>,
}

impl ResponseSchema {
    #[must_use]
    pub fn string() -> Self {
        Self {
            kind: SchemaType::String,
            properties: BTreeMap::new(),
            required: Vec::new(),
            items: None,
        }
    }

    #[must_use]
    pub fn array_of(items: ResponseSchema) -> Self {
        Self {
            kind: SchemaType::Array,
            properties: BTreeMap::new(),
            required: Vec::new(),
            items: Some(Box::new(items)),
        }
    }

    /// An object schema; every listed property is required.
    #[must_use]
    pub fn object<I>(properties: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, ResponseSchema)>,
    {
        let properties: BTreeMap<String, ResponseSchema> = properties
            .into_iter()
            .map(|(name, schema)| (name.to_string(), schema))
            .collect();
        let required = properties.keys().cloned().collect();
        Self {
            kind: SchemaType::Object,
            properties,
            required,
            items: None,
        }
    }

    /// Check a parsed response value against this schema. Unknown extra
    /// fields are tolerated; missing required fields and type mismatches are
    /// not.
    pub fn validate(&self, value: &Value) -> Result<(), String> {
        match self.kind {
            SchemaType::String => {
                if value.is_string() {
                    Ok(())
                } else {
                    Err(format!("expected a string, got {value}"))
                }
            }
            SchemaType::Array => {
                let Some(elements) = value.as_array() else {
                    return Err(format!("expected an array, got {value}"));
                };
                if let Some(items) = &self.items {
                    for element in elements {
                        items.validate(element)?;
                    }
                }
                Ok(())
            }
            SchemaType::Object => {
                let Some(object) = value.as_object() else {
                    return Err(format!("expected an object, got {value}"));
                };
                for name in &self.required {
                    if !object.contains_key(name) {
                        return Err(format!("missing required field \"{name}\""));
                    }
                }
                for (name, schema) in &self.properties {
                    if let Some(field) = object.get(name) {
                        schema
                            .validate(field)
                            .map_err(|e| format!("field \"{name}\": {e}"))?;
                    }
                }
                Ok(())
            }
        }
    }
}
