//! Header normalization: collapse loosely-shaped header representations into
//! a flat name → string-value map.
//!
//! # Design
//! Callers historically handed headers over in three shapes: a plain map, an
//! object that knows how to serialize itself, or (rarely) a bare string. The
//! shapes are kept as an explicit `HeaderSpec` variant and resolved with an
//! exhaustive match instead of runtime type inspection. Normalization never
//! fails: unsupported values are dropped and broken serializers degrade to an
//! empty map.
//!
//! Known quirk: a bare string normalizes to the single entry
//! `{"header": <value>}`. The shape discards the real header name, but it is
//! what existing callers rely on, so it is preserved rather than corrected.
//! Prefer `HeaderSpec::Map` in new code.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Flat header mapping with every value stringified.
pub type HeaderMap = BTreeMap<String, String>;

/// Capability for header containers that render themselves to JSON.
///
/// Implementations may fail; `normalize` treats a failed or non-object
/// rendering as an empty header set.
pub trait HeaderSource {
    fn to_header_json(&self) -> Result<Value, serde_json::Error>;
}

/// Adapter exposing any `Serialize` type as a `HeaderSource`.
pub struct SerdeHeaders<T>(pub T);

impl<T: Serialize> HeaderSource for SerdeHeaders<T> {
    fn to_header_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(&self.0)
    }
}

/// The header field of an outgoing request before normalization.
pub enum HeaderSpec {
    /// A bare string. Normalizes to the single `{"header": value}` entry.
    Raw(String),
    /// A plain name → value map; values may be any JSON value.
    Map(BTreeMap<String, Value>),
    /// A container that renders itself to a JSON structure on demand.
    Serializable(Box<dyn HeaderSource + Send + Sync>),
}

impl HeaderSpec {
    /// Wrap an already-normalized map back into a `HeaderSpec`.
    pub fn from_strings(map: HeaderMap) -> Self {
        HeaderSpec::Map(map.into_iter().map(|(name, value)| (name, Value::String(value))).collect())
    }
}

impl fmt::Debug for HeaderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderSpec::Raw(value) => f.debug_tuple("Raw").field(value).finish(),
            HeaderSpec::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            HeaderSpec::Serializable(_) => f.write_str("Serializable(..)"),
        }
    }
}

/// Normalize any header representation into a flat `HeaderMap`.
///
/// String, number, and boolean values are stringified; everything else is
/// omitted. This function never fails.
pub fn normalize(spec: Option<&HeaderSpec>) -> HeaderMap {
    match spec {
        None => HeaderMap::new(),
        Some(HeaderSpec::Raw(value)) => {
            let mut map = HeaderMap::new();
            map.insert("header".to_string(), value.clone());
            map
        }
        Some(HeaderSpec::Map(entries)) => collect_primitives(entries.iter()),
        Some(HeaderSpec::Serializable(source)) => match source.to_header_json() {
            Ok(Value::Object(entries)) => collect_primitives(entries.iter()),
            // A failed or non-object rendering has no keys to enumerate.
            Ok(_) | Err(_) => HeaderMap::new(),
        },
    }
}

fn collect_primitives<'a, I>(entries: I) -> HeaderMap
where
    I: Iterator<Item = (&'a String, &'a Value)>,
{
    entries
        .filter_map(|(name, value)| primitive_string(value).map(|v| (name.clone(), v)))
        .collect()
}

/// Stringify a JSON value if it is a string, number, or boolean.
fn primitive_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map_spec(value: Value) -> HeaderSpec {
        match value {
            Value::Object(entries) => HeaderSpec::Map(entries.into_iter().collect()),
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn absent_headers_normalize_to_empty_map() {
        assert!(normalize(None).is_empty());
    }

    #[test]
    fn bare_string_collapses_to_header_entry() {
        let spec = HeaderSpec::Raw("application/json".to_string());
        let map = normalize(Some(&spec));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("header").map(String::as_str), Some("application/json"));
    }

    #[test]
    fn primitive_values_are_stringified() {
        let spec = map_spec(json!({
            "Accept": "application/json",
            "X-Retry-Count": 3,
            "X-Debug": true,
        }));
        let map = normalize(Some(&spec));
        assert_eq!(map.get("Accept").map(String::as_str), Some("application/json"));
        assert_eq!(map.get("X-Retry-Count").map(String::as_str), Some("3"));
        assert_eq!(map.get("X-Debug").map(String::as_str), Some("true"));
    }

    #[test]
    fn unsupported_values_are_omitted() {
        let spec = map_spec(json!({
            "Accept": "*/*",
            "X-Meta": {"nested": true},
            "X-List": [1, 2],
            "X-Null": null,
        }));
        let map = normalize(Some(&spec));
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("Accept"));
    }

    #[test]
    fn serializable_object_is_flattened() {
        #[derive(serde::Serialize)]
        struct Custom {
            #[serde(rename = "X-Client")]
            client: String,
            #[serde(rename = "X-Version")]
            version: u32,
        }
        let spec = HeaderSpec::Serializable(Box::new(SerdeHeaders(Custom {
            client: "lms-web".to_string(),
            version: 2,
        })));
        let map = normalize(Some(&spec));
        assert_eq!(map.get("X-Client").map(String::as_str), Some("lms-web"));
        assert_eq!(map.get("X-Version").map(String::as_str), Some("2"));
    }

    #[test]
    fn serializable_non_object_yields_empty_map() {
        let spec = HeaderSpec::Serializable(Box::new(SerdeHeaders(vec![1, 2, 3])));
        assert!(normalize(Some(&spec)).is_empty());
    }

    #[test]
    fn failing_serializer_yields_empty_map() {
        struct Broken;
        impl HeaderSource for Broken {
            fn to_header_json(&self) -> Result<Value, serde_json::Error> {
                use serde::ser::Error;
                Err(serde_json::Error::custom("cannot serialize"))
            }
        }
        let spec = HeaderSpec::Serializable(Box::new(Broken));
        assert!(normalize(Some(&spec)).is_empty());
    }

    #[test]
    fn from_strings_round_trips_through_normalize() {
        let mut map = HeaderMap::new();
        map.insert("Authorization".to_string(), "Bearer abc".to_string());
        map.insert("Accept".to_string(), "*/*".to_string());
        let spec = HeaderSpec::from_strings(map.clone());
        assert_eq!(normalize(Some(&spec)), map);
    }
}
