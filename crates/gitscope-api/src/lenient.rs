//! Forgiving field coercion for search responses
//!
//! Every mapped field takes whatever JSON value sits under its key and
//! coerces it to the field type, falling back to the type's zero value.
//! A response never fails to map because one field has an unexpected shape.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerces a JSON value to a string
///
/// Strings pass through, numbers and booleans use their JSON text,
/// everything else becomes empty.
pub fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Coerces a JSON value to an unsigned integer of type `T`
///
/// Negative, fractional, out-of-range and non-numeric values become zero.
pub fn coerce_uint<T>(value: &Value) -> T
where
    T: TryFrom<u64> + Default,
{
    let raw = match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        Value::Bool(b) => Some(u64::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    };

    raw.and_then(|v| T::try_from(v).ok()).unwrap_or_default()
}

/// Coerces a JSON value to a boolean
///
/// Strings are false only when empty, `"0"` or `"false"` (any case).
pub fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => {
            let s = s.trim();
            !(s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false"))
        }
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

/// Maps a JSON object onto `T`, or returns `T::default()` for anything else
pub fn coerce_object<T>(value: Value) -> T
where
    T: DeserializeOwned + Default,
{
    match value {
        Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
        _ => T::default(),
    }
}

/// Maps a whole response document onto an envelope type
pub fn from_document<T>(root: &Value) -> T
where
    T: DeserializeOwned + Default,
{
    match root {
        Value::Object(_) => T::deserialize(root).unwrap_or_default(),
        _ => T::default(),
    }
}

/// `deserialize_with` adapter for [`coerce_string`]
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| coerce_string(&v))
}

/// `deserialize_with` adapter for [`coerce_uint`]
pub fn uint<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64> + Default,
{
    Value::deserialize(deserializer).map(|v| coerce_uint(&v))
}

/// `deserialize_with` adapter for [`coerce_bool`]
pub fn boolean<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| coerce_bool(&v))
}

/// `deserialize_with` adapter for nested objects
pub fn object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Value::deserialize(deserializer).map(coerce_object)
}

/// `deserialize_with` adapter for result arrays
///
/// Keeps array order and length; elements that are not objects map to
/// defaulted entities. A non-array value yields no elements.
pub fn items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(elements) => elements.into_iter().map(coerce_object).collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_string() {
        assert_eq!(coerce_string(&json!("octocat")), "octocat");
        assert_eq!(coerce_string(&json!(42)), "42");
        assert_eq!(coerce_string(&json!(1.5)), "1.5");
        assert_eq!(coerce_string(&json!(true)), "true");
        assert_eq!(coerce_string(&json!(null)), "");
        assert_eq!(coerce_string(&json!(["a"])), "");
        assert_eq!(coerce_string(&json!({"a": 1})), "");
    }

    #[test]
    fn test_coerce_uint() {
        assert_eq!(coerce_uint::<u32>(&json!(80)), 80);
        assert_eq!(coerce_uint::<u32>(&json!("17")), 17);
        assert_eq!(coerce_uint::<u32>(&json!(" 17 ")), 17);
        assert_eq!(coerce_uint::<u32>(&json!(3.0)), 3);
        assert_eq!(coerce_uint::<u32>(&json!(true)), 1);
        assert_eq!(coerce_uint::<u32>(&json!(-5)), 0);
        assert_eq!(coerce_uint::<u32>(&json!(2.5)), 0);
        assert_eq!(coerce_uint::<u32>(&json!("many")), 0);
        assert_eq!(coerce_uint::<u32>(&json!(null)), 0);
        assert_eq!(coerce_uint::<u32>(&json!(u64::from(u32::MAX) + 1)), 0);
        assert_eq!(coerce_uint::<u64>(&json!(u64::from(u32::MAX) + 1)), 4_294_967_296);
    }

    #[test]
    fn test_coerce_bool() {
        assert!(coerce_bool(&json!(true)));
        assert!(!coerce_bool(&json!(false)));
        assert!(coerce_bool(&json!(1)));
        assert!(!coerce_bool(&json!(0)));
        assert!(coerce_bool(&json!("yes")));
        assert!(!coerce_bool(&json!("FALSE")));
        assert!(!coerce_bool(&json!("0")));
        assert!(!coerce_bool(&json!("")));
        assert!(!coerce_bool(&json!(null)));
    }

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(default)]
    struct Sample {
        #[serde(deserialize_with = "string")]
        name: String,
        #[serde(deserialize_with = "uint")]
        count: u32,
        #[serde(deserialize_with = "boolean")]
        flag: bool,
    }

    #[test]
    fn test_missing_and_null_fields_default() {
        let sample: Sample = from_document(&json!({"name": null}));
        assert_eq!(sample, Sample::default());
    }

    #[test]
    fn test_mismatched_fields_coerce() {
        let sample: Sample = from_document(&json!({"name": 7, "count": "12", "flag": 1}));
        assert_eq!(
            sample,
            Sample {
                name: "7".to_string(),
                count: 12,
                flag: true
            }
        );
    }

    #[test]
    fn test_non_object_document_defaults() {
        let sample: Sample = from_document(&json!([1, 2, 3]));
        assert_eq!(sample, Sample::default());
        let sample: Sample = from_document(&Value::Null);
        assert_eq!(sample, Sample::default());
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct SampleList {
        #[serde(deserialize_with = "items")]
        items: Vec<Sample>,
    }

    #[test]
    fn test_items_keep_order_and_default_bad_elements() {
        let list: SampleList = from_document(&json!({
            "items": [{"name": "first"}, "garbage", {"name": "third"}]
        }));
        let names: Vec<&str> = list.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["first", "", "third"]);
    }

    #[test]
    fn test_items_non_array_is_empty() {
        let list: SampleList = from_document(&json!({"items": {"name": "x"}}));
        assert!(list.items.is_empty());
    }
}
