use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{capitalize, ModelError};

/// Category of a content item, governing how its payload is interpreted.
///
/// Serializes as the canonical name; deserializes through [`FromStr`], so
/// serde accepts the same spellings as `parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum ItemType {
    Publication,
    Folder,
    StructureGroup,
    Schema,
    Component,
    ComponentTemplate,
    Page,
    PageTemplate,
    Category,
    Keyword,
    TemplateBuildingBlock,
}

impl ItemType {
    pub const ALL: [ItemType; 11] = [
        ItemType::Publication,
        ItemType::Folder,
        ItemType::StructureGroup,
        ItemType::Schema,
        ItemType::Component,
        ItemType::ComponentTemplate,
        ItemType::Page,
        ItemType::PageTemplate,
        ItemType::Category,
        ItemType::Keyword,
        ItemType::TemplateBuildingBlock,
    ];

    /// Canonical string identity, e.g. `STRUCTURE_GROUP`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Publication => "PUBLICATION",
            ItemType::Folder => "FOLDER",
            ItemType::StructureGroup => "STRUCTURE_GROUP",
            ItemType::Schema => "SCHEMA",
            ItemType::Component => "COMPONENT",
            ItemType::ComponentTemplate => "COMPONENT_TEMPLATE",
            ItemType::Page => "PAGE",
            ItemType::PageTemplate => "PAGE_TEMPLATE",
            ItemType::Category => "CATEGORY",
            ItemType::Keyword => "KEYWORD",
            ItemType::TemplateBuildingBlock => "TEMPLATE_BUILDING_BLOCK",
        }
    }

    /// Human-readable label, e.g. `Structure Group`.
    pub fn label(&self) -> String {
        capitalize(&self.as_str().replace('_', " "))
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for ItemType {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for ItemType {
    type Err = ModelError;

    /// Accepts the canonical form in any case, or the PascalCase variant name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "").to_ascii_uppercase();
        ItemType::ALL
            .into_iter()
            .find(|t| t.as_str().replace('_', "") == normalized)
            .ok_or_else(|| ModelError::UnknownItemType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_round_trip_for_every_member() {
        for item_type in ItemType::ALL {
            let parsed: ItemType = item_type.to_string().parse().unwrap();
            assert_eq!(parsed, item_type);
        }
    }

    #[test]
    fn test_parse_accepts_pascal_and_lower_case() {
        assert_eq!("StructureGroup".parse::<ItemType>().unwrap(), ItemType::StructureGroup);
        assert_eq!("page".parse::<ItemType>().unwrap(), ItemType::Page);
        assert_eq!(" component_template ".parse::<ItemType>().unwrap(), ItemType::ComponentTemplate);
    }

    #[test]
    fn test_parse_unknown_fails() {
        let err = "BINARY".parse::<ItemType>().unwrap_err();
        assert_eq!(err, ModelError::UnknownItemType("BINARY".to_string()));
    }

    #[test]
    fn test_serde_uses_canonical_string() {
        let json = serde_json::to_string(&ItemType::TemplateBuildingBlock).unwrap();
        assert_eq!(json, "\"TEMPLATE_BUILDING_BLOCK\"");
        let back: ItemType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ItemType::TemplateBuildingBlock);
    }

    #[test]
    fn test_serde_accepts_same_spellings_as_parse() {
        for input in ["page", "Page", "PAGE"] {
            let from_str: ItemType = input.parse().unwrap();
            let from_serde: ItemType = serde_json::from_value(serde_json::json!(input)).unwrap();
            assert_eq!(from_serde, from_str);
        }
        let from_serde: ItemType = serde_json::from_str("\"StructureGroup\"").unwrap();
        assert_eq!(from_serde, ItemType::StructureGroup);
        assert!(serde_json::from_str::<ItemType>("\"BINARY\"").is_err());
    }

    #[test]
    fn test_label() {
        assert_eq!(ItemType::Page.label(), "Page");
        assert_eq!(ItemType::TemplateBuildingBlock.label(), "Template Building Block");
    }
}
