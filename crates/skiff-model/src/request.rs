//! Partial-update (PATCH) request bodies
//!
//! Outbound modify requests only carry the fields the caller actually set.
//! `Possible` keeps "leave alone" (`Undefined`) apart from "clear on the
//! server" (`Null`); `remove_undefined` strips the former before the body
//! object is built so an omitted field never shows up on the wire.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::possible::Possible;

/// Strip `Undefined` entries from a field list, keeping `Null` entries
/// (the server still receives an explicit clear for those).
pub fn remove_undefined(
    fields: Vec<(String, Possible<Value>)>,
) -> Vec<(String, Possible<Value>)> {
    fields
        .into_iter()
        .filter(|(_, value)| !value.is_undefined())
        .collect()
}

/// Dynamically assembled PATCH body
///
/// Fields are kept in insertion order; `build` drops omitted fields and
/// turns explicit nulls into literal JSON nulls.
#[derive(Debug, Default)]
pub struct PatchBody {
    fields: Vec<(String, Possible<Value>)>,
}

impl PatchBody {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field to the body
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: Possible<Value>) -> Self {
        self.fields.push((name.into(), value));
        self
    }

    /// Build the JSON object, omitting `Undefined` fields entirely
    #[must_use]
    pub fn build(self) -> Map<String, Value> {
        let mut map = Map::new();
        for (name, value) in remove_undefined(self.fields) {
            let json = match value {
                Possible::Present(v) => v,
                Possible::Null => Value::Null,
                // remove_undefined already filtered these out
                Possible::Undefined => continue,
            };
            map.insert(name, json);
        }
        map
    }
}

/// Typed guild modify request
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModifyGuild {
    #[serde(default, skip_serializing_if = "Possible::is_undefined")]
    pub name: Possible<String>,
    #[serde(default, skip_serializing_if = "Possible::is_undefined")]
    pub icon: Possible<String>,
    #[serde(default, skip_serializing_if = "Possible::is_undefined")]
    pub description: Possible<String>,
}

/// Typed channel modify request
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModifyChannel {
    #[serde(default, skip_serializing_if = "Possible::is_undefined")]
    pub name: Possible<String>,
    #[serde(default, skip_serializing_if = "Possible::is_undefined")]
    pub topic: Possible<String>,
    #[serde(default, skip_serializing_if = "Possible::is_undefined")]
    pub position: Possible<i32>,
    #[serde(default, skip_serializing_if = "Possible::is_undefined")]
    pub parent_id: Possible<crate::Snowflake>,
}
