//! Token values and alias reference rewriting
//!
//! A token record's value field is one of three shapes:
//!
//! - a literal (`"#fff"`, `4`, `true`), emitted unchanged
//! - an alias reference (`"{color.brand.primary}"`), naming another token by its dotted path
//! - a dimension (`{ "magnitude": "8", "unit": "px" }`), composed into `8px`
//!
//! References are rewritten according to a [`ReferenceMode`]. The bare and wrapped rewrites only
//! need the reference itself; the value rewrite needs the whole dictionary and lives in
//! [`crate::dictionary::Dictionary::resolve`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

static REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{([^{}]+)\}$").expect("reference pattern is valid"));

/// Separator used between the segments of a generated variable name.
pub const NAME_SEPARATOR: char = '-';

/// The raw value of a token record, as authored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    Literal(String),
    /// Dotted path of the referenced token, delimiters stripped.
    Reference(String),
    Dimension {
        magnitude: Option<String>,
        unit: Option<String>,
    },
}

impl TokenValue {
    /// Interpret a record's value field.
    ///
    /// Returns `None` for values that cannot describe a token (null, arrays, objects carrying
    /// neither a magnitude nor a unit). Callers skip those records.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::from_str_value(s)),
            Value::Number(n) => Some(TokenValue::Literal(n.to_string())),
            Value::Bool(b) => Some(TokenValue::Literal(b.to_string())),
            Value::Object(fields) => {
                let magnitude = fields
                    .get("magnitude")
                    .or_else(|| fields.get("value"))
                    .and_then(scalar_to_string);
                let unit = fields.get("unit").and_then(scalar_to_string);
                if magnitude.is_none() && unit.is_none() {
                    None
                } else {
                    Some(TokenValue::Dimension { magnitude, unit })
                }
            }
            Value::Null | Value::Array(_) => None,
        }
    }

    fn from_str_value(s: &str) -> Self {
        match REFERENCE.captures(s) {
            Some(caps) => TokenValue::Reference(caps[1].trim().to_string()),
            None => TokenValue::Literal(s.to_string()),
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, TokenValue::Reference(_))
    }

    /// The referenced path, if this value is an alias.
    pub fn reference(&self) -> Option<&str> {
        match self {
            TokenValue::Reference(path) => Some(path),
            _ => None,
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// How alias references are written into generated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceMode {
    /// `{color.brand.primary}` → `color-brand-primary`
    Bare,
    /// `{color.brand.primary}` → `var(--color-brand-primary)`
    Wrapped,
    /// `{color.brand.primary}` → the referenced token's resolved value
    Value,
}

impl ReferenceMode {
    pub const ALL: [ReferenceMode; 3] = [
        ReferenceMode::Bare,
        ReferenceMode::Wrapped,
        ReferenceMode::Value,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceMode::Bare => "bare",
            ReferenceMode::Wrapped => "wrapped",
            ReferenceMode::Value => "value",
        }
    }
}

impl fmt::Display for ReferenceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReferenceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReferenceMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| {
                format!("unknown reference mode '{s}' (expected bare, wrapped or value)")
            })
    }
}

/// Normalize a dotted token path into a variable name: `.` and `_` become `-`.
pub fn normalize_name(path: &str) -> String {
    path.replace(['.', '_'], "-")
}

/// Join path segments into a variable name, normalizing each segment.
pub fn join_name<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|segment| normalize_name(segment.as_ref()))
        .collect::<Vec<_>>()
        .join(&NAME_SEPARATOR.to_string())
}

/// Wrap a variable name as a CSS custom property reference.
pub fn css_var(name: &str) -> String {
    format!("var(--{name})")
}

/// Compose a dimension. Missing parts contribute nothing.
pub fn compose_dimension(magnitude: Option<&str>, unit: Option<&str>) -> String {
    format!("{}{}", magnitude.unwrap_or(""), unit.unwrap_or(""))
}

/// Rewrite a raw value without consulting other tokens.
///
/// `ReferenceMode::Value` cannot be honoured here and falls back to the wrapped rewrite; use
/// [`crate::dictionary::Dictionary::resolve`] when references should resolve to values.
pub fn resolve_reference(value: &TokenValue, mode: ReferenceMode) -> String {
    match value {
        TokenValue::Literal(s) => s.clone(),
        TokenValue::Dimension { magnitude, unit } => {
            compose_dimension(magnitude.as_deref(), unit.as_deref())
        }
        TokenValue::Reference(path) => {
            let name = normalize_name(path);
            match mode {
                ReferenceMode::Bare => name,
                ReferenceMode::Wrapped | ReferenceMode::Value => css_var(&name),
            }
        }
    }
}
