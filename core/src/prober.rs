//! Header-only probing of a single host:port pair.
//!
//! Each probe is a fresh, isolated attempt: no connection reuse, no idle
//! pooling, and no certificate verification. The sweep observes services,
//! it does not validate them.

use std::net::Ipv6Addr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use reqwest::header::HeaderMap;
use tracing::debug;

use crate::result::ProbeResult;

/// Identification string sent with every request.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/74.0.3729.169 Safari/537.36";

/// One header-only probe against a host:port pair.
///
/// Implementations must absorb every transport failure into the returned
/// [`ProbeResult`]; a probe never aborts the sweep.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, host: &str, port: u16) -> ProbeResult;
}

/// HEAD-request prober, encrypted first with a cleartext fallback.
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    /// Builds the shared client. `timeout` bounds each attempt
    /// independently; the fallback starts a fresh window.
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .pool_max_idle_per_host(0)
            .danger_accept_invalid_certs(true)
            .build()?;

        Ok(Self { client })
    }

    async fn head(&self, url: Url) -> reqwest::Result<HeaderMap> {
        let response = self.client.head(url).send().await?;
        Ok(response.headers().clone())
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, host: &str, port: u16) -> ProbeResult {
        let Some(url) = probe_url(host, port) else {
            debug!("cannot form a probe URL for {host}:{port}");
            return ProbeResult::unanswered(host, port);
        };

        match self.head(url.clone()).await {
            Ok(headers) => ProbeResult::answered(host, port, &headers),
            Err(e) => {
                debug!("encrypted attempt on {host}:{port} failed: {e}");

                let Some(fallback) = fallback_url(&url, port) else {
                    return ProbeResult::unanswered(host, port);
                };

                match self.head(fallback).await {
                    Ok(headers) => ProbeResult::answered(host, port, &headers),
                    Err(e) => {
                        debug!("cleartext fallback on {host}:{port} failed: {e}");
                        ProbeResult::unanswered(host, port)
                    }
                }
            }
        }
    }
}

/// `https://host:port`, bracketing bare IPv6 literals so the port stays a port.
fn probe_url(host: &str, port: u16) -> Option<Url> {
    let url = if host.parse::<Ipv6Addr>().is_ok() {
        format!("https://[{host}]:{port}")
    } else {
        format!("https://{host}:{port}")
    };

    Url::parse(&url).ok()
}

/// The same target with the scheme downgraded. The port is re-pinned
/// explicitly: a `:443` parsed as the https default would otherwise
/// vanish in the swap and send the fallback to port 80.
fn fallback_url(url: &Url, port: u16) -> Option<Url> {
    let mut fallback = url.clone();
    fallback.set_scheme("http").ok()?;
    fallback.set_port(Some(port)).ok()?;
    Some(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_url_handles_names_addresses_and_v6_literals() {
        assert_eq!(
            probe_url("example.com", 8443).unwrap().as_str(),
            "https://example.com:8443/"
        );
        assert_eq!(
            probe_url("192.0.2.1", 80).unwrap().as_str(),
            "https://192.0.2.1:80/"
        );
        assert_eq!(
            probe_url("2001:db8::1", 8080).unwrap().as_str(),
            "https://[2001:db8::1]:8080/"
        );
    }

    #[test]
    fn fallback_keeps_the_probed_port_even_when_it_was_the_tls_default() {
        let url = probe_url("192.0.2.1", 443).unwrap();
        let fallback = fallback_url(&url, 443).unwrap();
        assert_eq!(fallback.as_str(), "http://192.0.2.1:443/");

        let url = probe_url("192.0.2.1", 8080).unwrap();
        let fallback = fallback_url(&url, 8080).unwrap();
        assert_eq!(fallback.as_str(), "http://192.0.2.1:8080/");
    }

    #[test]
    fn probe_url_rejects_garbage_hosts() {
        assert!(probe_url("bad host", 80).is_none());
    }

    #[tokio::test]
    async fn unbuildable_url_reports_unanswered_without_any_attempt() {
        let prober = HttpProber::new(Duration::from_secs(1)).unwrap();
        let result = prober.probe("bad host", 80).await;
        assert!(!result.responded());
    }
}
