/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A pet as returned by the service.
///
/// The client itself never decodes into this type; it is an opt-in view for callers
/// via [`crate::model::http::ResponseBody::decode`]. Every field is optional because
/// the server does not guarantee any of them.
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    /// Server side identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Pet name
    #[serde(default)]
    pub name: Option<String>,
    /// Species/breed
    #[serde(default)]
    pub animal_type: Option<String>,
    /// Age, the server returns it either as text or as a number
    #[serde(default, deserialize_with = "string_or_number_opt")]
    pub age: Option<String>,
    /// Photo as a data URI, empty when none was uploaded
    #[serde(default)]
    pub pet_photo: Option<String>,
    /// Owner identifier
    #[serde(default)]
    pub user_id: Option<String>,
    /// Creation timestamp as sent by the server
    #[serde(default, deserialize_with = "string_or_number_opt")]
    pub created_at: Option<String>,
}

impl Pet {
    /// True when a photo is attached
    #[must_use]
    pub fn has_photo(&self) -> bool {
        self.pet_photo.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// Body of `GET api/pets`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetList {
    /// Pets matching the requested filter
    #[serde(default)]
    pub pets: Vec<Pet>,
}

impl PetList {
    /// Looks a pet up by id
    pub fn find_by_id(&self, id: &str) -> Option<&Pet> {
        self.pets.iter().find(|p| p.id.as_deref() == Some(id))
    }

    /// Looks a pet up by name, first match wins
    pub fn find_by_name(&self, name: &str) -> Option<&Pet> {
        self.pets.iter().find(|p| p.name.as_deref() == Some(name))
    }

    /// Identifiers of all listed pets
    pub fn ids(&self) -> Vec<&str> {
        self.pets.iter().filter_map(|p| p.id.as_deref()).collect()
    }
}

fn string_or_number_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
