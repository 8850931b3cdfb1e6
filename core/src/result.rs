use std::collections::BTreeMap;

use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

/// Response headers keyed by lowercase name. A name repeated on the wire
/// accumulates every value in order.
pub type HeaderMapping = BTreeMap<String, Vec<String>>;

/// The outcome of one probe against a single host:port pair.
///
/// `headers` is `None` when neither transport attempt completed; a probe
/// that got any response at all carries the mapping, even an empty one.
/// Serialized field names match the on-disk result format
/// (`Host`/`Port`/`Headers`, with `null` for an absent mapping).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProbeResult {
    pub host: String,
    pub port: u16,
    pub headers: Option<HeaderMapping>,
}

impl ProbeResult {
    /// A completed round-trip, whatever its status code.
    pub fn answered(host: &str, port: u16, headers: &HeaderMap) -> Self {
        let mut mapping = HeaderMapping::new();
        for (name, value) in headers.iter() {
            mapping
                .entry(name.as_str().to_owned())
                .or_default()
                .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
        }

        Self {
            host: host.to_owned(),
            port,
            headers: Some(mapping),
        }
    }

    /// A probe that produced no response on either scheme.
    pub fn unanswered(host: &str, port: u16) -> Self {
        Self {
            host: host.to_owned(),
            port,
            headers: None,
        }
    }

    pub fn responded(&self) -> bool {
        self.headers.is_some()
    }
}
