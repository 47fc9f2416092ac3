use serde::{Deserialize, Serialize};
use std::fmt;

/// A decoded trait value produced by a property mapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TraitValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl TraitValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            TraitValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            TraitValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

/// Expected value kind for a registered property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraitType {
    Integer,
    Float,
    Text,
    Bool,
}

impl TraitType {
    /// Check that a decoded value matches the declared type
    pub fn matches(&self, value: &TraitValue) -> bool {
        matches!(
            (self, value),
            (TraitType::Integer, TraitValue::Integer(_))
                | (TraitType::Float, TraitValue::Float(_))
                | (TraitType::Text, TraitValue::Text(_))
                | (TraitType::Bool, TraitValue::Bool(_))
        )
    }
}

impl fmt::Display for TraitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TraitType::Integer => "integer",
            TraitType::Float => "float",
            TraitType::Text => "text",
            TraitType::Bool => "bool",
        };
        write!(f, "{}", name)
    }
}
