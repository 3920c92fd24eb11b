use std::collections::BTreeMap;

use serde::Serialize;

use crate::parser::fields::FieldSet;

pub const UNKNOWN: &str = "Unknown";

/// One projectile, as written to the output file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub name: String,
    pub id: String,
    pub image: Option<String>,
    pub damage: u64,
    pub magazine_size: u64,
    pub effects: Vec<String>,
    pub description: String,
    pub unlock: String,
    pub rarity: String,
    pub selling_price: u64,
    pub availabilities: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
    /// Unrecognized `key: value` lines, key normalized
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Record {
    /// Build a complete record, filling every field the page didn't provide.
    pub fn from_fields(name: String, image: Option<String>, fields: FieldSet) -> Self {
        let id = id_from_name(&name);
        let unknown = || UNKNOWN.to_string();

        Record {
            name,
            id,
            image,
            damage: fields.damage.unwrap_or(0),
            magazine_size: fields.magazine_size.unwrap_or(0),
            effects: fields.effects.unwrap_or_default(),
            description: fields.description.unwrap_or_default(),
            unlock: fields.unlock.unwrap_or_else(unknown),
            rarity: fields.rarity.unwrap_or_else(unknown),
            selling_price: fields.selling_price.unwrap_or(0),
            availabilities: fields
                .availabilities
                .unwrap_or_else(|| vec![unknown()]),
            kind: fields.kind.unwrap_or_else(unknown),
            extra: fields.extra,
        }
    }
}

/// "Sea Shell" -> "sea-shell"
pub fn id_from_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}
