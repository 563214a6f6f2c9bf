//! Expected result shapes
//!
//! Results stay a generic [`Value`] until checked against a [`Shape`] (or any
//! other [`Validate`] implementation) by the client.

use serde_json::Value;

/// Predicate over a raw result
pub trait Validate: Send + Sync {
    fn validate(&self, result: &Value) -> bool;
}

impl<F> Validate for F
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn validate(&self, result: &Value) -> bool {
        self(result)
    }
}

/// Tagged shape check against a JSON value
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Accepts anything
    Any,
    Null,
    Bool,
    /// An integral number
    Int,
    /// An integral number or a string holding one
    Numeric,
    String,
    Array,
    ArrayOf(Box<Shape>),
    Object,
    /// An object whose values all match
    ObjectOf(Box<Shape>),
    /// An object with `key` present and matching
    ObjectWith(&'static str, Box<Shape>),
    /// Exactly this value
    Literal(Value),
    AnyOf(Vec<Shape>),
}

impl Shape {
    pub fn array_of(shape: Shape) -> Self {
        Self::ArrayOf(Box::new(shape))
    }

    pub fn object_of(shape: Shape) -> Self {
        Self::ObjectOf(Box::new(shape))
    }

    pub fn object_with(key: &'static str, shape: Shape) -> Self {
        Self::ObjectWith(key, Box::new(shape))
    }

    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Shape::Any => true,
            Shape::Null => value.is_null(),
            Shape::Bool => value.is_boolean(),
            Shape::Int => value.is_i64() || value.is_u64(),
            Shape::Numeric => numeric_id(value).is_some(),
            Shape::String => value.is_string(),
            Shape::Array => value.is_array(),
            Shape::ArrayOf(item) => value
                .as_array()
                .is_some_and(|items| items.iter().all(|v| item.matches(v))),
            Shape::Object => value.is_object(),
            Shape::ObjectOf(item) => value
                .as_object()
                .is_some_and(|map| map.values().all(|v| item.matches(v))),
            Shape::ObjectWith(key, shape) => value
                .get(*key)
                .is_some_and(|v| value.is_object() && shape.matches(v)),
            Shape::Literal(expected) => value == expected,
            Shape::AnyOf(shapes) => shapes.iter().any(|shape| shape.matches(value)),
        }
    }
}

impl Validate for Shape {
    fn validate(&self, result: &Value) -> bool {
        self.matches(result)
    }
}

/// Read an integer that may arrive as a number or a numeric string
pub fn numeric_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
