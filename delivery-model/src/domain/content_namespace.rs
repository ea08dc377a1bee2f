use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{capitalize, ModelError};

/// Content domain (tenant namespace) an item is delivered from.
///
/// Deserializes through [`FromStr`], case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum ContentNamespace {
    Sites,
    Docs,
}

impl ContentNamespace {
    pub const ALL: [ContentNamespace; 2] = [ContentNamespace::Sites, ContentNamespace::Docs];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentNamespace::Sites => "SITES",
            ContentNamespace::Docs => "DOCS",
        }
    }

    pub fn label(&self) -> String {
        capitalize(self.as_str())
    }
}

impl fmt::Display for ContentNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for ContentNamespace {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for ContentNamespace {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        ContentNamespace::ALL
            .into_iter()
            .find(|ns| ns.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownNamespace(s.to_string()))
    }
}
