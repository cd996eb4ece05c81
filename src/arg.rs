//! One request parameter with its recovered metadata.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde_json::Value;

use crate::extract::ExtractedFields;

/// Semantic type recovered from a parameter's `Type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArgType {
    String,
    Integer,
    Boolean,
    Float,
    List,
    Array,
    Dictionary,
    None,
    #[default]
    Unknown,
}

impl ArgType {
    /// Parse the raw `Type` text. Anything unrecognised is `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "String" => Self::String,
            "Integer" => Self::Integer,
            "Boolean" => Self::Boolean,
            "Float" => Self::Float,
            "List" => Self::List,
            "Array" => Self::Array,
            "Dictionary" => Self::Dictionary,
            "None" => Self::None,
            _ => Self::Unknown,
        }
    }

    /// Type annotation used by the generated SDK.
    pub fn annotation(self) -> &'static str {
        match self {
            Self::String => "str",
            Self::Integer => "int",
            Self::Boolean => "bool",
            Self::Float => "float",
            Self::List | Self::Array => "List[Any]",
            Self::Dictionary => "Dict[str, Any]",
            Self::None => "None",
            Self::Unknown => "Any",
        }
    }

    /// Names the annotation needs imported.
    pub fn imports(self) -> &'static [&'static str] {
        match self {
            Self::List | Self::Array => &["List", "Any"],
            Self::Dictionary => &["Dict", "Any"],
            Self::Unknown => &["Any"],
            _ => &[],
        }
    }
}

/// A single parameter of one request.
///
/// Identity is the raw `key`: two descriptors with the same key compare
/// equal and hash alike regardless of value or metadata.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ArgumentDescriptor {
    /// Raw parameter name, may carry list notation (e.g. "filter[0]")
    pub key: String,
    pub value: String,
    pub raw_description: String,
    pub arg_type: ArgType,
    pub required: bool,
    pub description: String,
    pub example: String,
    pub default_value: String,
}

impl ArgumentDescriptor {
    /// Build a descriptor from a key, value and free-text description.
    pub fn new(key: impl Into<String>, value: impl Into<String>, raw_description: &str) -> Self {
        let key = key.into();
        let fields = ExtractedFields::from_text(raw_description);
        let required = fields.required.eq_ignore_ascii_case("yes") && !is_indexed_key(&key);

        Self {
            key,
            value: value.into(),
            raw_description: raw_description.to_string(),
            arg_type: ArgType::parse(&fields.type_name),
            required,
            description: fields.description,
            example: fields.example,
            default_value: fields.default_value,
        }
    }

    /// Parse a Postman parameter object (`{ key, value, description? }`).
    ///
    /// Returns `None` when the key is missing or empty.
    pub fn from_param(param: &Value) -> Option<Self> {
        let key = param.get("key").and_then(|v| v.as_str())?;
        if key.is_empty() {
            return None;
        }
        let value = param.get("value").map(value_text).unwrap_or_default();
        let description = param
            .get("description")
            .map(description_text)
            .unwrap_or_default();

        Some(Self::new(key, value, &description))
    }

    /// Key turned into a plain identifier: `filter[0]` → `filter_0`.
    pub fn identifier(&self, connector: char) -> String {
        clean_arg_name(&self.key, connector)
    }

    /// Same descriptor with required-ness replaced.
    pub(crate) fn with_required(&self, required: bool) -> Self {
        Self {
            required,
            ..self.clone()
        }
    }
}

impl PartialEq for ArgumentDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for ArgumentDescriptor {}

impl Hash for ArgumentDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for ArgumentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}. Description: {}",
            self.key, self.value, self.description
        )
    }
}

/// Keys with bracket notation are list members and never required.
pub fn is_indexed_key(key: &str) -> bool {
    key.contains('[')
}

pub fn clean_arg_name(name: &str, connector: char) -> String {
    let mut result = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '[' | ' ' => result.push(connector),
            ']' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Postman descriptions are either plain strings or `{ "content": ... }`.
pub(crate) fn description_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(obj) => obj
            .get("content")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string(),
        _ => String::new(),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
