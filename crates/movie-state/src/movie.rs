//! Explicit movie schema.
//!
//! The upstream state manager walked arbitrary object fields with a
//! reflective serializer; here the field set is a fixed record and the
//! encode/decode mapping is derived at compile time. Optional fields use
//! `skip_serializing_if` so absent values are omitted from the wire text
//! rather than emitted as explicit nulls, and `default` so omitted keys
//! decode back to `None`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cast: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<Release>,
}

/// Nested release record; serialized inline with no type discriminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub region: String,
    pub date: String,
}
