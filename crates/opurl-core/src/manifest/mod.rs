//! Update manifest: version info plus an ordered list of named download sources.
//!
//! Only `version` and `sources[].{name,url}` are read; unknown fields are ignored.
//! Those three fields decode leniently: a value of the wrong JSON type is
//! treated as absent instead of failing the whole manifest.

mod parse;

pub use parse::parse_manifest;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decoded update-check response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    /// Informational; absence is not an error. Numbers keep their JSON text.
    #[serde(default, deserialize_with = "version_text")]
    pub version: Option<String>,
    /// Download sources in server order (order matters for selection).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sources: Vec<Source>,
}

/// One named download location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Source {
    /// Entries without a string name never match a request.
    #[serde(default, deserialize_with = "string_or_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub url: Option<String>,
}

impl Source {
    /// The download URL if present and non-empty.
    pub fn usable_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }
}

impl Manifest {
    /// First source whose name equals `name` exactly (case-sensitive).
    pub fn find_source(&self, name: &str) -> Option<&Source> {
        self.sources
            .iter()
            .find(|s| s.name.as_deref() == Some(name))
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Source>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Source>>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

fn version_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        _ => Ok(None),
    }
}
