// Selective decoding helpers over serde_json.
// Records are decoded into structs whose optional fields are `Option`s; every
// member the structs do not name is skipped by serde without being built.
use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::error::{ExtractionError, Result};
use crate::section::SectionKind;

/// Members of a JSON object, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Entries<T>(pub Vec<(String, T)>);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Entries<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
            type Value = Entries<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
                let mut out = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, T>()? {
                    out.push((key, value));
                }
                Ok(Entries(out))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

pub fn decode_section<'a, T: Deserialize<'a>>(text: &'a str, section: SectionKind) -> Result<Entries<T>> {
    serde_json::from_str(text).map_err(|source| ExtractionError::Json { section, source })
}

pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T, section: SectionKind) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|source| ExtractionError::Json { section, source })
}
