use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

const DESCRIPTION_PREFIX: &str = "Description :";

/// One parsed field line.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Damage(u64),
    MagazineSize(u64),
    SellingPrice(u64),
    Effects(Vec<String>),
    Availabilities(Vec<String>),
    /// Any other `key: value` line
    Text { key: String, value: String },
    /// A colon-less line starting with "Description"
    LooseDescription(String),
}

/// Fields found in a data block, before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    pub damage: Option<u64>,
    pub magazine_size: Option<u64>,
    pub selling_price: Option<u64>,
    pub effects: Option<Vec<String>>,
    pub availabilities: Option<Vec<String>>,
    pub description: Option<String>,
    pub unlock: Option<String>,
    pub rarity: Option<String>,
    pub kind: Option<String>,
    pub extra: BTreeMap<String, String>,
}

impl FieldSet {
    pub fn apply(&mut self, field: Field) {
        match field {
            Field::Damage(n) => self.damage = Some(n),
            Field::MagazineSize(n) => self.magazine_size = Some(n),
            Field::SellingPrice(n) => self.selling_price = Some(n),
            Field::Effects(v) => self.effects = Some(v),
            Field::Availabilities(v) => self.availabilities = Some(v),
            Field::LooseDescription(text) => {
                if self.description.is_none() {
                    self.description = Some(text);
                }
            }
            Field::Text { key, value } => match key.as_str() {
                "description" => self.description = Some(value),
                "unlock" => self.unlock = Some(value),
                "rarity" => self.rarity = Some(value),
                "type" => self.kind = Some(value),
                // derived from the page, not the block
                "name" | "id" | "image" => debug!("ignoring field line for derived key {}", key),
                _ => {
                    self.extra.insert(key, value);
                }
            },
        }
    }
}

/// Parse every line of a data block into a field set.
pub fn parse_fields<I, S>(lines: I) -> FieldSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut set = FieldSet::default();
    for line in lines {
        if let Some(field) = parse_line(line.as_ref()) {
            set.apply(field);
        }
    }
    set
}

/// Classify one line. Lines that are neither `key: value` nor a
/// description line yield `None`.
pub fn parse_line(line: &str) -> Option<Field> {
    if let Some((raw_key, raw_value)) = line.split_once(':') {
        let key = normalize_key(raw_key);
        let value = raw_value.trim();
        let field = match key.as_str() {
            "damage" => Field::Damage(first_number(value)),
            "magazine_size" => Field::MagazineSize(first_number(value)),
            "selling_price" => Field::SellingPrice(first_number(value)),
            "effects" => Field::Effects(parse_effects(value)),
            "availabilities" => Field::Availabilities(split_list(value)),
            _ => Field::Text {
                key,
                value: value.to_string(),
            },
        };
        return Some(field);
    }

    if line.starts_with("Description") {
        let text = line.strip_prefix(DESCRIPTION_PREFIX).unwrap_or(line);
        return Some(Field::LooseDescription(text.trim().to_string()));
    }

    None
}

/// "Magazine Size " -> "magazine_size"
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}

/// First run of digits anywhere in the value, or 0.
pub fn first_number(value: &str) -> u64 {
    NUMBER_RE
        .find(value)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// A lone "-" means no effects.
pub fn parse_effects(value: &str) -> Vec<String> {
    if value == "-" {
        Vec::new()
    } else {
        split_list(value)
    }
}

pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        assert_eq!(first_number("12 (per shot)"), 12);
        assert_eq!(first_number("none"), 0);
        assert_eq!(first_number(""), 0);
        assert_eq!(first_number("x3 then 40"), 3);
        assert_eq!(first_number("99999999999999999999999"), 0);
    }

    #[test]
    fn numbers_are_ascii_only() {
        assert_eq!(first_number("\u{0663} then 12"), 12);
        assert_eq!(first_number("\u{0661}\u{0662}"), 0);
    }

    #[test]
    fn effects() {
        assert!(parse_effects("-").is_empty());
        assert_eq!(parse_effects("Stun, Slow"), vec!["Stun", "Slow"]);
        assert_eq!(parse_effects("Burn,,  "), vec!["Burn"]);
    }

    #[test]
    fn availabilities_have_no_dash_rule() {
        assert_eq!(split_list("Shop, Crate"), vec!["Shop", "Crate"]);
        assert!(split_list("").is_empty());
        assert_eq!(split_list("-"), vec!["-"]);
    }

    #[test]
    fn key_normalization() {
        assert_eq!(normalize_key(" Magazine Size "), "magazine_size");
        assert_eq!(normalize_key("Selling Price"), "selling_price");
    }

    #[test]
    fn splits_on_first_colon_only() {
        let f = parse_line("Unlock: Reach sector 2: The Deep").unwrap();
        assert_eq!(
            f,
            Field::Text {
                key: "unlock".into(),
                value: "Reach sector 2: The Deep".into()
            }
        );
    }

    #[test]
    fn numeric_dispatch() {
        assert_eq!(parse_line("Damage: 12 (per shot)"), Some(Field::Damage(12)));
        assert_eq!(parse_line("Magazine Size: none"), Some(Field::MagazineSize(0)));
        assert_eq!(parse_line("Selling Price : 35"), Some(Field::SellingPrice(35)));
    }

    #[test]
    fn description_line_without_colon() {
        assert_eq!(
            parse_line("Description a humble shell"),
            Some(Field::LooseDescription("Description a humble shell".into()))
        );
        assert_eq!(parse_line("just some prose"), None);
    }

    #[test]
    fn loose_description_only_fires_once() {
        let set = parse_fields(["Description first", "Description second"]);
        assert_eq!(set.description.as_deref(), Some("Description first"));
    }

    #[test]
    fn colon_description_overrides() {
        let set = parse_fields(["Description loose", "Description: explicit"]);
        assert_eq!(set.description.as_deref(), Some("explicit"));
    }

    #[test]
    fn unknown_keys_go_to_extra() {
        let set = parse_fields(["Increased Effect: Burns twice", "Rarity: Rare"]);
        assert_eq!(set.extra.get("increased_effect").map(String::as_str), Some("Burns twice"));
        assert_eq!(set.rarity.as_deref(), Some("Rare"));
    }

    #[test]
    fn derived_keys_are_ignored() {
        let set = parse_fields(["Name: Impostor", "Image: x.png"]);
        assert!(set.extra.is_empty());
    }

    #[test]
    fn later_line_overwrites() {
        let set = parse_fields(["Damage: 1", "Damage: 2"]);
        assert_eq!(set.damage, Some(2));
    }
}
