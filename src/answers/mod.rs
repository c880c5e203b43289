//! Answer Record: the raw questionnaire answers of one evaluation session.
//!
//! Keys follow the form convention `a<group><question>[_<sub>]` plus a few
//! top-level keys (`program_id`, `A0_1`, `A0_3`). Values arrive as JSON
//! scalars. Accessors never fail: a missing key, a value of the wrong type,
//! or a value outside the question's domain all read as `None`, which the
//! scoring engine keeps distinct from zero.

pub mod gates;

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use serde_json::Value;
use tracing::warn;

use crate::error::{Error, Result};

/// A single raw answer value.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Number(f64),
    Flag(bool),
    Text(String),
    Null,
}

impl From<i32> for RawValue {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for RawValue {
    fn from(v: bool) -> Self {
        Self::Flag(v)
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for RawValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Immutable-by-convention mapping from question key to raw value.
///
/// The scoring engine only ever borrows a record; building one is the
/// caller's job (JSON file, form, tests).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerRecord {
    values: BTreeMap<String, RawValue>,
}

impl AnswerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for literal records.
    #[cfg(test)]
    pub fn with(mut self, key: &str, value: impl Into<RawValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<RawValue>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Build a record from a JSON object. Nested arrays/objects are not
    /// answers; they are kept as `Null` so the key still reads as absent.
    pub fn from_json_value(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(Error::InvalidAnswers(format!(
                "expected a JSON object of answers, found {}",
                json_kind(value)
            )));
        };

        let mut record = Self::new();
        for (key, v) in map {
            let raw = match v {
                Value::Null => RawValue::Null,
                Value::Bool(b) => RawValue::Flag(*b),
                Value::Number(n) => n.as_f64().map_or(RawValue::Null, RawValue::Number),
                Value::String(s) => RawValue::Text(s.clone()),
                other => {
                    warn!(key = %key, kind = json_kind(other), "ignoring non-scalar answer");
                    RawValue::Null
                }
            };
            record.insert(key, raw);
        }
        Ok(record)
    }

    /// Parse a JSON document holding either one answer object or an array
    /// of them.
    pub fn from_json_str(input: &str) -> Result<Vec<Self>> {
        let value: Value = serde_json::from_str(input)?;
        match &value {
            Value::Array(items) => items.iter().map(Self::from_json_value).collect(),
            _ => Ok(vec![Self::from_json_value(&value)?]),
        }
    }

    /// Ordinal code: an integer, an integral float, or an integer string.
    pub fn code(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            RawValue::Number(n) => integral(*n),
            RawValue::Text(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(integral))
            }
            RawValue::Flag(_) | RawValue::Null => None,
        }
    }

    /// Any finite number (numeric strings included).
    pub fn number(&self, key: &str) -> Option<f64> {
        let n = match self.get(key)? {
            RawValue::Number(n) => *n,
            RawValue::Text(s) => s.trim().parse::<f64>().ok()?,
            RawValue::Flag(_) | RawValue::Null => return None,
        };
        n.is_finite().then_some(n)
    }

    /// A number inside `domain`; anything outside reads as absent.
    pub fn bounded(&self, key: &str, domain: RangeInclusive<f64>) -> Option<f64> {
        self.number(key).filter(|n| domain.contains(n))
    }

    /// A bounded measurement that may be flagged "not applicable" through
    /// its `<key>_na` companion.
    pub fn measurement(&self, key: &str, domain: RangeInclusive<f64>) -> Option<f64> {
        if self.flag(&format!("{key}_na")) {
            return None;
        }
        self.bounded(key, domain)
    }

    /// Truthiness of a checkbox-style answer. Missing means unchecked.
    pub fn flag(&self, key: &str) -> bool {
        match self.get(key) {
            Some(RawValue::Flag(b)) => *b,
            Some(RawValue::Number(n)) => *n != 0.0,
            Some(RawValue::Text(s)) => {
                matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")
            }
            Some(RawValue::Null) | None => false,
        }
    }

    /// Name of the evaluated place; records started from a project keep it
    /// in `project_nombre`.
    pub fn place_name(&self) -> Option<&str> {
        self.text("nombre_lugar").or_else(|| self.text("project_nombre"))
    }

    /// Free text (place name, evaluator name). Blank text reads as absent.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            RawValue::Text(s) => Some(s.trim()).filter(|s| !s.is_empty()),
            _ => None,
        }
    }
}

fn integral(n: f64) -> Option<i64> {
    (n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64).then_some(n as i64)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
