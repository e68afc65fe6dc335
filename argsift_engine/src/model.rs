use std::str::FromStr;

use crate::api::ConfigError;

/// The value policy applied to an option.
///
/// Every option which isn't declared is treated as [`OptionType::Auto`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OptionType {
    /// `string`: The explicit value, or else the next token (whatever its shape).
    String,
    /// `number`: The explicit value, or else the next token, which must be a numeric literal.
    Number,
    /// `bool`: The explicit value only, which must be `true` or `false`.
    Bool,
    /// Infer the value from its literal form, falling back to `true` for a bare flag.
    #[default]
    Auto,
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OptionType::String => "string",
            OptionType::Number => "number",
            OptionType::Bool => "bool",
            OptionType::Auto => "auto",
        };
        write!(f, "{name}")
    }
}

impl FromStr for OptionType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(OptionType::String),
            "number" => Ok(OptionType::Number),
            "bool" => Ok(OptionType::Bool),
            "auto" => Ok(OptionType::Auto),
            _ => Err(ConfigError::UnknownOptionType(s.to_string())),
        }
    }
}

/// A numeric option value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// An integer-looking literal which fits in an `i64`.
    Integer(i64),
    /// Any other numeric literal.
    Float(f64),
}

impl Number {
    /// The value as an `f64`, regardless of variant.
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{i}"),
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}

/// A resolved option value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A flag, or a `true`/`false` (`1`/`0` under auto detection) literal.
    Bool(bool),
    /// A numeric literal.
    Number(Number),
    /// Anything else.
    String(String),
}

impl Value {
    /// Get the boolean, if this is a `Value::Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the number, if this is a `Value::Number`.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the string, if this is a `Value::String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Integer(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}
