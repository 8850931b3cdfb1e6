use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;
use tokio::sync::mpsc::{Receiver, Sender};
use tracing::trace;

use crate::prober::Prober;
use crate::result::ProbeResult;

/// One worker: pull a host, probe every port in order, push every
/// outcome, repeat until the queue closes or the stop flag is raised.
///
/// Ports of a single host are probed strictly sequentially; parallelism
/// exists only across workers. The stop flag is checked between queue
/// pulls, never mid-probe.
pub(super) async fn run(
    tasks: Arc<Mutex<Receiver<String>>>,
    ports: Arc<[u16]>,
    prober: Arc<dyn Prober>,
    results: Sender<ProbeResult>,
    stop: Arc<AtomicBool>,
) {
    loop {
        if stop.load(Ordering::Relaxed) {
            break;
        }

        // Hold the queue lock for the receive only, so idle siblings can
        // take the next host the moment one is available.
        let host = { tasks.lock().await.recv().await };
        let Some(host) = host else {
            break;
        };

        for &port in ports.iter() {
            trace!("probing {host}:{port}");
            let outcome = prober.probe(&host, port).await;
            if results.send(outcome).await.is_err() {
                // Collector is gone; nothing left to report to.
                return;
            }
        }
    }
}
