//! Icon resolution: the pluggable fetch contract and its default HTTP
//! implementation.
//!
//! The engine never fetches icons itself; it invokes an [`IconFetcher`]
//! at most once per build and works with whatever mapping comes back.
//! A key missing from the result is not an error — that component
//! falls back to an external image reference — but an error from the
//! fetcher aborts the whole build with the error surfaced verbatim.
//!
//! Tests substitute deterministic fakes for the fetcher; only
//! [`HttpFetcher`] touches the network.

use std::thread;

use indexmap::IndexMap;
use log::{debug, warn};

use crate::topology::Topology;

/// Raw icon bytes keyed by icon reference, in first-seen key order.
pub type IconSet = IndexMap<String, Vec<u8>>;

/// Error type of the fetch contract. Implementations surface whatever
/// their transport produces; the engine does not interpret it.
pub type FetchError = Box<dyn std::error::Error + Send + Sync>;

/// The pluggable capability that resolves icon keys to raw bytes.
pub trait IconFetcher {
    /// Fetches icons for every distinct key in the topology.
    ///
    /// Keys absent from the returned set fall back to external
    /// references. Implementations own any retry or timeout policy;
    /// the engine treats every error identically and aborts.
    fn fetch_icons(&self, topology: &Topology) -> Result<IconSet, FetchError>;
}

/// Distinct icon keys in component declaration order.
pub(crate) fn distinct_keys(topology: &Topology) -> Vec<&str> {
    let mut keys: Vec<&str> = Vec::new();
    for component in &topology.components {
        if !keys.contains(&component.icon.as_str()) {
            keys.push(&component.icon);
        }
    }
    keys
}

/// Default fetch contract: one blocking HTTP GET per distinct icon
/// key, issued concurrently on scoped threads.
///
/// A response with a non-success status drops that key (the component
/// falls back to its external reference); a transport error fails the
/// whole call.
pub struct HttpFetcher<U> {
    client: reqwest::blocking::Client,
    icon_url: U,
}

impl<U> HttpFetcher<U>
where
    U: Fn(&str) -> String + Sync,
{
    pub fn new(icon_url: U) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            icon_url,
        }
    }
}

impl<U> IconFetcher for HttpFetcher<U>
where
    U: Fn(&str) -> String + Sync,
{
    fn fetch_icons(&self, topology: &Topology) -> Result<IconSet, FetchError> {
        let keys = distinct_keys(topology);

        // One request per key; join everything before returning so the
        // caller observes a single aggregate result.
        let responses: Vec<(String, Result<Option<Vec<u8>>, reqwest::Error>)> =
            thread::scope(|scope| {
                let handles: Vec<_> = keys
                    .iter()
                    .map(|&key| {
                        let url = (self.icon_url)(key);
                        let client = &self.client;
                        let handle = scope.spawn(move || fetch_one(client, &url));
                        (key, handle)
                    })
                    .collect();

                handles
                    .into_iter()
                    .map(|(key, handle)| {
                        let outcome = handle.join().expect("icon fetch thread panicked");
                        (key.to_string(), outcome)
                    })
                    .collect()
            });

        let mut icons = IconSet::new();
        for (key, outcome) in responses {
            match outcome? {
                Some(bytes) => {
                    debug!(icon = key, bytes_len = bytes.len(); "Fetched icon");
                    icons.insert(key, bytes);
                }
                None => {
                    warn!(icon = key; "Icon request returned non-success status, using external reference")
                }
            }
        }

        Ok(icons)
    }
}

fn fetch_one(
    client: &reqwest::blocking::Client,
    url: &str,
) -> Result<Option<Vec<u8>>, reqwest::Error> {
    let response = client.get(url).send()?;
    if !response.status().is_success() {
        return Ok(None);
    }
    Ok(Some(response.bytes()?.to_vec()))
}
