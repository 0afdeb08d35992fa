//! Build-time settings for the demo binary. The API authenticates with a
//! hash computed over both keys, so a runnable demo has to carry the pair;
//! these are developer-portal demo keys, not secrets worth protecting.

pub const PUBLIC_KEY: &str = "48d38e5123e31d7cb65ed60c78a07064";
pub const PRIVATE_KEY: &str = "9414e432bb18cf61809af9bfc23d27862dd9b74e";

pub const BASE_URL: &str = "https://gateway.marvel.com/v1/public";

/// Single-document dataset cache, relative to the working directory.
pub const CACHE_FILE: &str = "marvel_events_cache.json";

/// How many events the initial query asks for.
pub const EVENTS_LIMIT: usize = 20;

/// Fixed page size for per-event character pagination.
pub const PAGE_SIZE: usize = 50;
