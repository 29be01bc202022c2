//! Execution events recorded by the sandbox.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// An argument or value descriptor: either a value the engine could resolve,
/// or an opaque runtime value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Literal {
    Resolved(Value),
    #[default]
    Unresolved,
}

impl Literal {
    pub fn string(s: impl Into<String>) -> Self {
        Self::Resolved(Value::String(s.into()))
    }

    /// The literal as a string, if it resolved to one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Resolved(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Textual form of the value, following script string conversion:
    /// strings verbatim, `undefined` when unresolved.
    pub fn text_form(&self) -> String {
        match self {
            Self::Unresolved => "undefined".to_string(),
            Self::Resolved(value) => value_text(value),
        }
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => value_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

impl<'de> Deserialize<'de> for Literal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(match raw {
            Some(Value::Object(mut map)) => match map.remove("literal") {
                Some(value) => Self::Resolved(value),
                None => Self::Unresolved,
            },
            _ => Self::Unresolved,
        })
    }
}

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let descriptor = match self {
            Self::Resolved(value) => serde_json::json!({ "literal": value }),
            Self::Unresolved => serde_json::json!({ "unresolved": true }),
        };
        descriptor.serialize(serializer)
    }
}

/// `null` reads as the field's default, like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One intercepted operation. Closed set: adding a kind is a compile-checked change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExecutionEvent {
    #[serde(rename = "Call", alias = "CallEvent")]
    Call {
        #[serde(default, deserialize_with = "null_as_default")]
        path: String,
        #[serde(default, deserialize_with = "null_as_default")]
        arguments: Vec<Literal>,
    },
    #[serde(rename = "Get", alias = "GetEvent")]
    Get {
        #[serde(default, deserialize_with = "null_as_default")]
        path: String,
    },
    #[serde(rename = "Set", alias = "SetEvent")]
    Set {
        #[serde(default, deserialize_with = "null_as_default")]
        path: String,
        #[serde(default)]
        value: Literal,
    },
    #[serde(rename = "New", alias = "NewEvent")]
    New {
        #[serde(default, deserialize_with = "null_as_default")]
        path: String,
        #[serde(default, deserialize_with = "null_as_default")]
        arguments: Vec<Literal>,
    },
}

/// Discriminant of an [`ExecutionEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Call,
    Get,
    Set,
    New,
}

impl ExecutionEvent {
    pub fn call(path: impl Into<String>, arguments: Vec<Literal>) -> Self {
        Self::Call {
            path: path.into(),
            arguments,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::Get { path: path.into() }
    }

    pub fn set(path: impl Into<String>, value: Literal) -> Self {
        Self::Set {
            path: path.into(),
            value,
        }
    }

    pub fn new_instance(path: impl Into<String>, arguments: Vec<Literal>) -> Self {
        Self::New {
            path: path.into(),
            arguments,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Call { path, .. }
            | Self::Get { path }
            | Self::Set { path, .. }
            | Self::New { path, .. } => path,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::Call { .. } => EventKind::Call,
            Self::Get { .. } => EventKind::Get,
            Self::Set { .. } => EventKind::Set,
            Self::New { .. } => EventKind::New,
        }
    }
}
