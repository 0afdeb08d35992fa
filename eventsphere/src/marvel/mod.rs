pub mod client;
pub mod rate;
pub mod schemas;

pub use client::MarvelClient;
pub use rate::{RATE_LIMIT_CODE, RatePolicy};
