//! Wire DTOs for the family-registry REST API.
//!
//! DESIGN
//! ======
//! Every member attribute is optional on the wire. Fields keep their French
//! wire names through serde renames so the Rust side can use plain English
//! names while decoding stays lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A family member as returned by the list and detail endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Opaque record identifier. A plain `id` sent alongside is ignored.
    #[serde(rename = "_id", default, deserialize_with = "deserialize_scalar_string")]
    pub id: String,
    /// Family name.
    #[serde(rename = "nom", default)]
    pub family_name: Option<String>,
    /// Given name.
    #[serde(rename = "prenom", default)]
    pub given_name: Option<String>,
    /// Birth date as sent by the API (`YYYY-MM-DD` or an ISO 8601 timestamp).
    #[serde(rename = "date_de_naissance", default)]
    pub birth_date: Option<String>,
    /// Sex label (`Masculin`, `Féminin`, or anything else the API sends).
    #[serde(rename = "sexe", default)]
    pub sex: Option<String>,
    #[serde(rename = "statut_matrimonial", default)]
    pub marital_status: Option<String>,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub religion: Option<String>,
    #[serde(rename = "conjoint", default)]
    pub spouse: Option<String>,
    /// Foreign key into the link-type set.
    #[serde(rename = "type_de_lien", default)]
    pub link_type: Option<LinkTypeCode>,
    #[serde(rename = "id_pere", default, deserialize_with = "deserialize_opt_scalar_string")]
    pub father_id: Option<String>,
    /// Denormalized father names, populated by the API alongside `id_pere`.
    #[serde(rename = "pere", default)]
    pub father: Option<ParentRef>,
    #[serde(rename = "id_mere", default, deserialize_with = "deserialize_opt_scalar_string")]
    pub mother_id: Option<String>,
    /// Denormalized mother names, populated by the API alongside `id_mere`.
    #[serde(rename = "mere", default)]
    pub mother: Option<ParentRef>,
}

/// Denormalized parent names embedded in a member record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRef {
    #[serde(rename = "prenom", default)]
    pub given_name: Option<String>,
    #[serde(rename = "nom", default)]
    pub family_name: Option<String>,
}

/// One entry of the link-type lookup set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkType {
    pub id: LinkTypeCode,
    #[serde(default)]
    pub description: String,
}

/// Link-type identifier. The API sends either numbers or strings, so the code
/// is kept in canonical string form and compared as such.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LinkTypeCode(String);

impl LinkTypeCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LinkTypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for LinkTypeCode {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for LinkTypeCode {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl<'de> Deserialize<'de> for LinkTypeCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        scalar_to_string(value)
            .map(Self)
            .ok_or_else(|| D::Error::custom("expected string or number link type code"))
    }
}

/// Detail response body: `{ "data": <member or null> }`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub data: Option<T>,
}

/// Collection response body that is either wrapped as `{ "data": [...] }` or
/// sent bare.
///
/// The member list is sent bare. Accepting both keeps the link-type source
/// agnostic to whichever shape the backend picks.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Payload<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Payload<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

fn scalar_to_string(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) => Some(text),
        serde_json::Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn deserialize_scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_opt_scalar_string(deserializer)?.unwrap_or_default())
}

fn deserialize_opt_scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    scalar_to_string(value)
        .map(Some)
        .ok_or_else(|| D::Error::custom("expected string or number identifier"))
}
