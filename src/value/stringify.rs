//! JSON-style rendering of values for error descriptions.
//!
//! [`Value`] serializes the way `JSON.stringify` would see it: members with no
//! JSON form are dropped from records and become `null` inside arrays. The
//! output goes through `serde_json` with a formatter that writes numbers in
//! shortest round-trip form.

use std::io;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::ser::Formatter;

use super::{Function, Record, Value};

/// Renders a value the way error descriptions show it.
///
/// Plain data is rendered as compact JSON, top-level `Undefined` as
/// `undefined` and callables by their name (see [`get_function_name`]).
///
/// # Example
///
/// ```rust
/// use shapeguard::{stringify, Value};
/// use serde_json::json;
///
/// assert_eq!(stringify(&Value::from(json!({"a": [1, "x"]}))), r#"{"a":[1,"x"]}"#);
/// assert_eq!(stringify(&Value::Undefined), "undefined");
/// assert_eq!(stringify(&Value::from(1.5)), "1.5");
/// ```
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Function(f) => get_function_name(f),
        other => to_json(other).unwrap_or_else(|_| "null".to_string()),
    }
}

/// Returns the display name, then the name, then `<function{arity}>`.
pub fn get_function_name(f: &Function) -> String {
    match f.display_name() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ if !f.name().is_empty() => f.name().to_string(),
        _ => format!("<function{}>", f.arity()),
    }
}

fn to_json(value: &Value) -> serde_json::Result<String> {
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, NumberFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(out).map_err(serde::ser::Error::custom)
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Undefined | Value::Null | Value::Function(_) => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            Value::Number(_) => serializer.serialize_unit(),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(fields) => serialize_record(fields, serializer),
            Value::Instance(instance) => serialize_record(instance.fields(), serializer),
        }
    }
}

fn serialize_record<S>(fields: &Record, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    // members without a JSON form are left out entirely
    let present: Vec<_> = fields
        .iter()
        .filter(|(_, value)| !matches!(value, Value::Undefined | Value::Function(_)))
        .collect();
    let mut map = serializer.serialize_map(Some(present.len()))?;
    for (key, value) in present {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

/// Compact JSON, except that numbers go through [`format_number`].
struct NumberFormatter;

impl Formatter for NumberFormatter {
    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(format_number(value).as_bytes())
    }

    fn write_f32<W>(&mut self, writer: &mut W, value: f32) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.write_f64(writer, f64::from(value))
    }
}

/// Formats a number in shortest round-trip form, exponent notation outside
/// `[1e-6, 1e21)`.
pub(crate) fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return "null".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return n.to_string();
    }
    let formatted = format!("{:e}", n);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}
