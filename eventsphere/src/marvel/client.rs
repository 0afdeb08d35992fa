use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use md5::{Digest, Md5};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::time::{Duration, sleep};
use tracing::{info, warn};
use url::Url;

use crate::config;
use crate::model::{CharacterRef, Event, Thumbnail};

use super::rate::RatePolicy;
use super::schemas::{CharacterSummary, Envelope, EventSummary, ResultPage};

/// Signed client for the Marvel Comics API.
///
/// Every request carries a timestamp, the public key and an MD5 digest of
/// `timestamp + private key + public key`; the private key itself never
/// leaves the process. Pacing and throttle handling follow the attached
/// [`RatePolicy`].
pub struct MarvelClient {
    http: Client,
    base: String,
    public_key: String,
    private_key: String,
    policy: RatePolicy,
}

impl MarvelClient {
    pub fn new(public_key: &str, private_key: &str, base: Option<String>) -> Self {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("client");
        Self {
            http,
            base: base.unwrap_or_else(|| config::BASE_URL.into()),
            public_key: public_key.to_string(),
            private_key: private_key.to_string(),
            policy: RatePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Timestamp and digest for one attempt. The upstream ties a hash to
    /// the timestamp it was computed from, so every attempt signs afresh.
    fn sign(&self) -> (i64, String) {
        let ts = Utc::now().timestamp_millis();
        (ts, self.hash_for(ts))
    }

    fn hash_for(&self, ts: i64) -> String {
        let digest = Md5::digest(format!("{ts}{}{}", self.private_key, self.public_key));
        format!("{digest:x}")
    }

    /// One signed GET returning the standard envelope. A throttle signal,
    /// whether the HTTP status or the body code, re-issues the same query
    /// after the policy backoff with a fresh signature. Any other failure
    /// is final.
    async fn get_page<T>(
        &self,
        path: &str,
        limit: usize,
        offset: Option<usize>,
    ) -> Result<ResultPage<T>>
    where
        T: DeserializeOwned,
    {
        let request_url = format!("{}/{}", self.base, path);
        loop {
            let (ts, hash) = self.sign();
            let mut query: Vec<(&str, String)> = vec![
                ("ts", ts.to_string()),
                ("apikey", self.public_key.clone()),
                ("hash", hash),
                ("limit", limit.to_string()),
            ];
            if let Some(offset) = offset {
                query.push(("offset", offset.to_string()));
            }

            let response = self
                .http
                .get(&request_url)
                .query(&query)
                .send()
                .await
                .with_context(|| format!("request to {request_url} failed"))?;

            if response.status() == StatusCode::TOO_MANY_REQUESTS {
                warn!(url = %request_url, offset = ?offset, "throttled by status; backing off");
                sleep(self.policy.backoff).await;
                continue;
            }

            if !response.status().is_success() {
                let status = response.status();
                let err_txt = response.text().await.unwrap_or_default();
                anyhow::bail!("marvel api error {status}: {err_txt}");
            }

            let envelope: Envelope<T> = response
                .json()
                .await
                .with_context(|| format!("unexpected response body from {request_url}"))?;

            if self.policy.is_throttle(envelope.code) {
                warn!(url = %request_url, offset = ?offset, "throttled by body code; backing off");
                sleep(self.policy.backoff).await;
                continue;
            }

            return envelope
                .data
                .ok_or_else(|| anyhow!("response from {request_url} carried no data"));
        }
    }

    /// The initial events query. Characters arrive truncated here; callers
    /// page the full roster per event afterwards.
    pub async fn fetch_events(&self, limit: usize) -> Result<Vec<EventSummary>> {
        let page = self
            .get_page::<EventSummary>("events", limit, None)
            .await
            .context("fetching events")?;
        Ok(page.results)
    }

    /// Full character roster for one event: a single-result probe learns
    /// the total, then fixed-size pages walk the collection in order.
    pub async fn fetch_event_characters(&self, event_id: u64) -> Result<Vec<CharacterRef>> {
        let path = format!("events/{event_id}/characters");

        let probe = self
            .get_page::<CharacterSummary>(&path, 1, None)
            .await
            .with_context(|| format!("probing character count for event {event_id}"))?;
        let total = probe.total;
        if total == 0 {
            return Ok(Vec::new());
        }

        let mut characters: Vec<CharacterRef> = Vec::with_capacity(total);
        let mut offset = 0;
        while characters.len() < total {
            let page = self
                .get_page::<CharacterSummary>(&path, config::PAGE_SIZE, Some(offset))
                .await
                .with_context(|| {
                    format!("fetching characters for event {event_id} at offset {offset}")
                })?;

            if page.results.is_empty() {
                warn!(
                    event_id,
                    offset,
                    total,
                    fetched = characters.len(),
                    "empty page before the roster was complete; stopping early"
                );
                break;
            }

            for character in page.results {
                characters.push(CharacterRef::canonical(character.id, character.name));
            }

            offset += config::PAGE_SIZE;
            sleep(self.policy.page_interval).await;
        }

        Ok(characters)
    }

    /// Entire dataset in one pass: the event list, then each event's
    /// roster in order, pacing between events. Any failure aborts the
    /// whole load so the caller never sees a partial dataset.
    pub async fn fetch_dataset(&self, limit: usize) -> Result<Vec<Event>> {
        let summaries = self.fetch_events(limit).await?;
        info!(events = summaries.len(), "fetched event list");

        let mut events = Vec::with_capacity(summaries.len());
        for summary in summaries {
            info!(title = %summary.title, "fetching characters");
            let characters = self.fetch_event_characters(summary.id).await?;
            info!(title = %summary.title, characters = characters.len(), "event complete");
            events.push(Event {
                id: summary.id,
                title: summary.title,
                thumbnail: summary.thumbnail,
                characters,
            });
            sleep(self.policy.event_interval).await;
        }
        Ok(events)
    }

    /// Fetchable URL for a thumbnail: `path.extension` with the scheme,
    /// host and port rewritten to the API gateway and the public key
    /// appended, per the upstream's image-serving rules. `None` when the
    /// stored path is not a usable URL.
    pub fn thumbnail_url(&self, thumbnail: &Thumbnail) -> Option<String> {
        let mut image_url = Url::parse(&thumbnail.source_url()).ok()?;
        let gateway = Url::parse(&self.base).ok()?;
        image_url.set_scheme(gateway.scheme()).ok()?;
        image_url.set_host(gateway.host_str()).ok()?;
        image_url.set_port(gateway.port()).ok()?;
        image_url
            .query_pairs_mut()
            .append_pair("apikey", &self.public_key);
        Some(image_url.into())
    }

    /// Raw image bytes for a resolved thumbnail URL. Unsigned beyond the
    /// key already baked into the URL.
    pub async fn fetch_thumbnail(&self, image_url: &str) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(image_url)
            .send()
            .await
            .with_context(|| format!("request to {image_url} failed"))?;
        if !response.status().is_success() {
            anyhow::bail!("image fetch from {image_url} returned {}", response.status());
        }
        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("reading image bytes from {image_url}"))?;
        Ok(bytes.to_vec())
    }
}
