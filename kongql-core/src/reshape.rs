//! Map→list reshaping for the two irregular Admin API response shapes.
//!
//! The node and status descriptors embed JSON objects keyed by name
//! (`plugins.available_on_server`, `memory.lua_shared_dicts`) where the
//! exposed schema wants ordered lists of named records. The transform runs
//! at decode time, entry by entry, so the order of the received JSON object
//! is the order of the resulting list.

use std::fmt;
use std::marker::PhantomData;

use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};

/// A record built from one `name → value` entry of a JSON object.
pub trait FromNamed: Sized {
    type Entry;

    fn from_named(name: String, entry: Self::Entry) -> Self;
}

/// Deserialize a JSON object into one record per key, preserving key order.
///
/// There is deliberately no fallback for a missing or non-object field: an
/// upstream body without the expected map is a protocol violation and fails
/// the whole decode.
pub fn named_record_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromNamed,
    T::Entry: Deserialize<'de>,
{
    struct RecordListVisitor<T>(PhantomData<T>);

    impl<'de, T> Visitor<'de> for RecordListVisitor<T>
    where
        T: FromNamed,
        T::Entry: Deserialize<'de>,
    {
        type Value = Vec<T>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of named records")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut records = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, entry)) = map.next_entry::<String, T::Entry>()? {
                records.push(T::from_named(name, entry));
            }
            Ok(records)
        }
    }

    deserializer.deserialize_map(RecordListVisitor(PhantomData))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Flag {
        name: String,
        on: bool,
    }

    impl FromNamed for Flag {
        type Entry = bool;

        fn from_named(name: String, on: bool) -> Self {
            Self { name, on }
        }
    }

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "named_record_list")]
        flags: Vec<Flag>,
    }

    #[test]
    fn one_record_per_key_in_document_order() {
        // Keys deliberately not in sorted order.
        let json = r#"{"flags":{"zeta":true,"alpha":false,"mid":true}}"#;
        let holder: Holder = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = holder.flags.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert!(holder.flags[0].on);
        assert!(!holder.flags[1].on);
        assert!(holder.flags[2].on);
    }

    #[test]
    fn empty_map_yields_empty_list() {
        let holder: Holder = serde_json::from_str(r#"{"flags":{}}"#).unwrap();
        assert!(holder.flags.is_empty());
    }

    #[test]
    fn missing_field_fails_decoding() {
        let result: Result<Holder, _> = serde_json::from_str(r#"{}"#);
        assert!(result.is_err());
    }

    #[test]
    fn non_object_field_fails_decoding() {
        let result: Result<Holder, _> = serde_json::from_str(r#"{"flags":[true]}"#);
        assert!(result.is_err());
    }
}
