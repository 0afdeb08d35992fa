//! Data pipeline behind a Marvel events co-occurrence visualization:
//! signed API retrieval, a one-document JSON cache, and a deterministic
//! sphere-layout graph derivation. Rendering lives elsewhere; this crate
//! produces the artifact a renderer draws.

pub mod config;
pub mod graph;
pub mod marvel;
pub mod model;
pub mod pipeline;
pub mod storage;
