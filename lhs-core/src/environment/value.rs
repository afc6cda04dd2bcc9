use std::fmt::Display;

pub const TRUE: Value = Value::Boolean { value: true };
pub const FALSE: Value = Value::Boolean { value: false };
pub const NULL: Value = Value::Null;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Number {
        value: f64,
    },
    Boolean {
        value: bool
    },
    String {
        value: String,
    },
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Number { value } => write!(f, "{value}"),
            Value::Boolean { value } => write!(f, "{value}"),
            Value::String { value } => write!(f, "{value}")
        }
    }
}

impl Value {
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Null => DataType::Nil,
            Self::Number { .. } => DataType::Number,
            Self::Boolean { .. } => DataType::Bool,
            Self::String { .. } => DataType::String
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number { value }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean { value }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String { value: value.to_string() }
    }
}

/// Type tag a variable is pinned to when it is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Number,
    String,
    Bool,
    Nil
}

impl DataType {
    /// Maps a type annotation (`let x: number`) to its tag.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "number" => Self::Number,
            "string" => Self::String,
            "bool" => Self::Bool,
            "nil" => Self::Nil,
            _ => return None
        })
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Nil => "nil"
        };

        write!(f, "{name}")
    }
}
