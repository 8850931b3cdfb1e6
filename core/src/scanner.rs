//! The concurrent sweep pipeline.
//!
//! Hosts flow through a bounded task queue into a fixed pool of workers;
//! every probe outcome flows back over a result channel sized to the
//! expected total. The pool is started before the first host is queued,
//! and the queue is closed once the last host is in. Collection runs on
//! the caller's task and blocks until the expected count is reached, or
//! until the channel closes because every worker stopped early.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use tokio::sync::Mutex;
use tokio::sync::mpsc;
use tracing::debug;

use grabbr_common::config::Config;

use crate::prober::Prober;
use crate::result::ProbeResult;

mod worker;

/// Invoked once per result, at the moment it is received.
pub type ResultObserver = Box<dyn Fn(&ProbeResult) + Send + Sync>;

/// Probes every `host:port` pair and returns the collected outcomes in
/// arrival order.
///
/// Exactly `hosts.len() * cfg.ports.len()` results come back unless the
/// `stop` flag cuts the sweep short, in which case the results gathered
/// so far are returned. Workers observe `stop` between queue pulls only;
/// an in-flight probe always runs to completion or its own timeout.
pub async fn perform_sweep(
    hosts: Vec<String>,
    cfg: &Config,
    prober: Arc<dyn Prober>,
    stop: Arc<AtomicBool>,
    on_result: Option<ResultObserver>,
) -> Vec<ProbeResult> {
    let expected: usize = hosts.len() * cfg.ports.len();
    if expected == 0 {
        return Vec::new();
    }

    let (task_tx, task_rx) = mpsc::channel::<String>(hosts.len());
    let task_rx = Arc::new(Mutex::new(task_rx));
    let (result_tx, mut result_rx) = mpsc::channel::<ProbeResult>(expected);

    let ports: Arc<[u16]> = Arc::from(cfg.ports.as_slice());

    for _ in 0..cfg.workers.max(1) {
        tokio::spawn(worker::run(
            Arc::clone(&task_rx),
            Arc::clone(&ports),
            Arc::clone(&prober),
            result_tx.clone(),
            Arc::clone(&stop),
        ));
    }
    drop(result_tx);

    for host in hosts {
        // Send only fails once every worker has already exited.
        if task_tx.send(host).await.is_err() {
            break;
        }
    }
    drop(task_tx);

    let mut results: Vec<ProbeResult> = Vec::with_capacity(expected);
    while results.len() < expected {
        match result_rx.recv().await {
            Some(result) => {
                if let Some(observer) = &on_result {
                    observer(&result);
                }
                results.push(result);
            }
            None => {
                debug!(
                    "sweep stopped early: {} of {expected} results collected",
                    results.len()
                );
                break;
            }
        }
    }

    results
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
