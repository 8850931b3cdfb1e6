use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::{Duration, Instant};

use grabbr_common::config::Config;
use grabbr_common::network::target;
use grabbr_core::prober::{HttpProber, Prober};
use grabbr_core::scanner;

use crate::util;

fn config(ports: Vec<u16>, timeout_secs: u64) -> Config {
    Config {
        workers: 4,
        timeout: Duration::from_secs(timeout_secs),
        ports,
    }
}

#[tokio::test]
async fn cleartext_fallback_rescues_a_plain_http_service() {
    let port = util::spawn_http_responder().await;
    let prober = HttpProber::new(Duration::from_secs(2)).unwrap();

    let result = prober.probe("127.0.0.1", port).await;

    let headers = result
        .headers
        .expect("the cleartext fallback should have produced headers");
    assert_eq!(headers["server"], vec!["probe-fixture"]);
}

#[tokio::test]
async fn refused_port_yields_an_absent_mapping() {
    let port = util::closed_port().await;
    let prober = HttpProber::new(Duration::from_secs(2)).unwrap();

    let result = prober.probe("127.0.0.1", port).await;

    assert!(!result.responded());
}

#[tokio::test]
async fn silent_service_is_bounded_by_the_timeout() {
    let port = util::spawn_silent_listener().await;
    let prober = HttpProber::new(Duration::from_secs(1)).unwrap();

    let started: Instant = Instant::now();
    let result = prober.probe("127.0.0.1", port).await;
    let elapsed = started.elapsed();

    assert!(!result.responded());
    // Two attempts, one fresh timeout window each, plus scheduling slack.
    assert!(elapsed < Duration::from_secs(5), "probe took {elapsed:?}");
}

#[tokio::test]
async fn full_sweep_accounts_for_every_pair() -> anyhow::Result<()> {
    let open = util::spawn_http_responder().await;
    let closed = util::closed_port().await;

    let cfg = config(vec![open, closed], 2);
    let prober: Arc<dyn Prober> = Arc::new(HttpProber::new(cfg.timeout)?);
    let stop = Arc::new(AtomicBool::new(false));

    let hosts = vec!["127.0.0.1".to_owned()];
    let results = scanner::perform_sweep(hosts, &cfg, prober, stop, None).await;

    assert_eq!(results.len(), 2);

    let answered = results.iter().find(|r| r.port == open).unwrap();
    let silent = results.iter().find(|r| r.port == closed).unwrap();
    assert!(answered.responded());
    assert!(!silent.responded());

    Ok(())
}

#[tokio::test]
async fn malformed_cidr_skips_without_aborting_the_sweep() {
    let open = util::spawn_http_responder().await;

    let specs = vec!["127.0.0.1/32".to_owned(), "10.0.0.0/99".to_owned()];
    let hosts = target::expand_all(&specs);
    assert_eq!(hosts, vec!["127.0.0.1"]);

    let cfg = config(vec![open], 2);
    let prober: Arc<dyn Prober> = Arc::new(HttpProber::new(cfg.timeout).unwrap());
    let stop = Arc::new(AtomicBool::new(false));

    let results = scanner::perform_sweep(hosts, &cfg, prober, stop, None).await;

    assert_eq!(results.len(), 1);
    assert!(results[0].responded());
}

#[tokio::test]
#[ignore]
async fn external_endpoint_answers_with_headers() {
    let prober = HttpProber::new(Duration::from_secs(3)).unwrap();
    let result = prober.probe("1.1.1.1", 443).await;
    assert!(result.responded());
}
