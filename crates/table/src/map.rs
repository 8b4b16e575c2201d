use std::fmt;

use hashbrown::HashMap;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};

use crate::table::DepartmentEntry;

/// Display name -> code, iterated in first-insertion order.
///
/// Re-inserting an existing name replaces its code but keeps its position,
/// the same way a JSON object key behaves when it is assigned twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl DepartmentMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            entries: Vec::with_capacity(n),
            index: HashMap::with_capacity(n),
        }
    }

    pub fn from_entries(entries: &[DepartmentEntry<'_>]) -> Self {
        let mut map = Self::with_capacity(entries.len());
        for e in entries {
            map.insert(e.name, e.code);
        }
        map
    }

    /// Returns the code previously stored under `name`, if any.
    pub fn insert(&mut self, name: impl Into<String>, code: impl Into<String>) -> Option<String> {
        let name = name.into();
        let code = code.into();
        match self.index.get(&name) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, code)),
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, code));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&i| self.entries[i].1.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for DepartmentMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut m = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            m.serialize_entry(k, v)?;
        }
        m.end()
    }
}

struct DepartmentMapVisitor;

impl<'de> Visitor<'de> for DepartmentMapVisitor {
    type Value = DepartmentMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object of department name -> code strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = DepartmentMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((k, v)) = access.next_entry::<String, String>()? {
            map.insert(k, v);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for DepartmentMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DepartmentMapVisitor)
    }
}
