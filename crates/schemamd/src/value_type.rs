//! value type descriptors
//!
//! Attributes carry a value type which is either
//! - a primitive (`string`, `number`, `bool`)
//! - the `dynamic` pseudo type
//! - a collection (`list`, `set` or `map`) of another value type
//! - a structural type (`object` or `tuple`)
//!
//! Provider schema documents use a compact JSON encoding for these:
//!
//! | **JSON**                                 | **[Type]**                     |
//! |------------------------------------------|--------------------------------|
//! | `"string"`                               | `Type::String`                 |
//! | `"dynamic"`                              | `Type::Dynamic`                |
//! | `["list", "bool"]`                       | `Type::List(Type::Bool)`       |
//! | `["map", ["set", "number"]]`             | `Type::Map(Type::Set(Number))` |
//! | `["object", {"a": "string"}]`            | `Type::Object({a: String})`    |
//! | `["tuple", ["string", "bool"]]`          | `Type::Tuple([String, Bool])`  |
//!
//! Anything else is kept as [Type::Unrecognized] so decoding a whole provider document does not fail
//! because of a single odd attribute. Rendering such a type fails instead.
use serde::Deserialize;

/// All value types an attribute can have
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Bool,
    Number,
    String,
    Dynamic,
    List(Box<Type>),
    Set(Box<Type>),
    Map(Box<Type>),
    Object(indexmap::IndexMap<String, Type>),
    Tuple(Vec<Type>),
    /// Raw JSON of a type encoding we do not know about
    Unrecognized(String),
}

impl Type {
    pub fn list(element: Type) -> Self {
        Type::List(Box::new(element))
    }

    pub fn set(element: Type) -> Self {
        Type::Set(Box::new(element))
    }

    pub fn map(element: Type) -> Self {
        Type::Map(Box::new(element))
    }

    /// Element type of `list`, `set` and `map`
    pub fn element_type(&self) -> Option<&Type> {
        match self {
            Type::List(element) | Type::Set(element) | Type::Map(element) => Some(element),
            _ => None,
        }
    }

    pub fn is_collection(&self) -> bool {
        self.element_type().is_some()
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Type::Object(_))
    }

    /// Lower case name as used in function signatures, e.g. `list of string`
    pub fn friendly_name(&self) -> String {
        match self {
            Type::Bool => "bool".to_string(),
            Type::Number => "number".to_string(),
            Type::String => "string".to_string(),
            Type::Dynamic => "dynamic".to_string(),
            Type::List(element) => format!("list of {}", element.friendly_name()),
            Type::Set(element) => format!("set of {}", element.friendly_name()),
            Type::Map(element) => format!("map of {}", element.friendly_name()),
            Type::Object(_) => "object".to_string(),
            Type::Tuple(_) => "tuple".to_string(),
            Type::Unrecognized(raw) => raw.clone(),
        }
    }
}

impl From<serde_json::Value> for Type {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::String(name) => match name.as_str() {
                "bool" => Type::Bool,
                "number" => Type::Number,
                "string" => Type::String,
                "dynamic" => Type::Dynamic,
                _ => Type::Unrecognized(Value::String(name).to_string()),
            },
            Value::Array(mut parts) if parts.len() >= 2 => {
                let kind = parts[0].as_str().map(str::to_owned);
                let inner = parts.remove(1);

                match (kind.as_deref(), inner) {
                    (Some("list"), element) => Type::list(element.into()),
                    (Some("set"), element) => Type::set(element.into()),
                    (Some("map"), element) => Type::map(element.into()),
                    (Some("object"), Value::Object(attributes)) => Type::Object(
                        attributes
                            .into_iter()
                            .map(|(name, ty)| (name, ty.into()))
                            .collect(),
                    ),
                    (Some("tuple"), Value::Array(elements)) => {
                        Type::Tuple(elements.into_iter().map(Into::into).collect())
                    }
                    (_, inner) => {
                        // put it back together for the error message
                        parts.insert(1, inner);
                        Type::Unrecognized(Value::Array(parts).to_string())
                    }
                }
            }
            other => Type::Unrecognized(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Type {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Into::into)
    }
}
