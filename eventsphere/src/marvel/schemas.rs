use serde::Deserialize;

use crate::model::Thumbnail;

/// Top-level wrapper shared by every Marvel endpoint. Throttle responses
/// carry `code` 429 and usually no `data`, so everything besides the
/// results themselves stays optional.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub data: Option<ResultPage<T>>,
}

/// One page of a paginated collection. `total` is the collection size,
/// `count` how many results this page actually holds.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct ResultPage<T> {
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub limit: usize,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub results: Vec<T>,
}

/// An event as `/events` returns it. The embedded character collection is
/// truncated upstream, so the client ignores it and pages the full roster
/// through `/events/{id}/characters` instead.
#[derive(Debug, Deserialize)]
pub struct EventSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub struct CharacterSummary {
    pub id: u64,
    pub name: String,
}
