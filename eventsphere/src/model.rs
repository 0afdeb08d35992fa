use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

const CHARACTER_URI_PREFIX: &str = "http://gateway.marvel.com/v1/public/characters";

/// A comics storyline event with its fully-resolved character roster.
/// This is the unit the cache persists and the graph builder consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Thumbnail>,
    #[serde(default)]
    pub characters: Vec<CharacterRef>,
}

impl Event {
    /// Join keys for co-occurrence: the trailing id segment of every
    /// character URI, deduplicated.
    pub fn character_ids(&self) -> BTreeSet<String> {
        self.characters
            .iter()
            .map(|character| character.character_id().to_string())
            .collect()
    }
}

/// Pointer to a character resource. Only the trailing id segment of the
/// URI matters for joining; the name is kept for display and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRef {
    #[serde(rename = "resourceURI")]
    pub resource_uri: String,
    pub name: String,
}

impl CharacterRef {
    /// Rebuilds the URI from the wire id instead of trusting whatever the
    /// API returned, so the join key stays stable across API revisions.
    pub fn canonical(id: u64, name: String) -> Self {
        Self {
            resource_uri: format!("{CHARACTER_URI_PREFIX}/{id}"),
            name,
        }
    }

    /// The segment after the last `/`, the numeric character id.
    pub fn character_id(&self) -> &str {
        self.resource_uri.rsplit('/').next().unwrap_or_default()
    }
}

/// Split thumbnail reference as the API serves it: a bare path plus the
/// file extension, joined with a dot when fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub path: String,
    pub extension: String,
}

impl Thumbnail {
    pub fn source_url(&self) -> String {
        format!("{}.{}", self.path, self.extension)
    }
}
