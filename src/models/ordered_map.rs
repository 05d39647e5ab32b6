//! Serde helper: JSON objects as `Vec<(String, V)>` in file order.
//!
//! Catalog names and lab panels are shown in the order they were written,
//! which a `HashMap` would lose.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};

pub fn deserialize<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct OrderedVisitor<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedVisitor<V> {
        type Value = Vec<(String, V)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a JSON object")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, value)) = map.next_entry::<String, V>()? {
                entries.push((key, value));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(OrderedVisitor(PhantomData))
}

pub fn serialize<S, V>(entries: &[(String, V)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    V: serde::Serialize,
{
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (key, value) in entries {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Panel {
        #[serde(with = "crate::models::ordered_map")]
        values: Vec<(String, String)>,
    }

    #[test]
    fn keeps_file_order() {
        let panel: Panel =
            serde_json::from_str(r#"{"values": {"WBC": "12", "Lactate": "4", "BUN": "30"}}"#)
                .unwrap();
        let keys: Vec<&str> = panel.values.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["WBC", "Lactate", "BUN"]);
    }

    #[test]
    fn rejects_non_object() {
        let result: Result<Panel, _> = serde_json::from_str(r#"{"values": ["WBC"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serializes_as_object() {
        let panel = Panel {
            values: vec![("Na".into(), "140".into())],
        };
        assert_eq!(serde_json::to_string(&panel).unwrap(), r#"{"values":{"Na":"140"}}"#);
    }
}
