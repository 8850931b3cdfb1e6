use std::time::Duration;

/// Pool width used when the caller does not ask for a specific one.
pub const DEFAULT_WORKERS: usize = 10;

/// Runtime settings shared read-only by every worker in a sweep.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of concurrent workers. Fixed once the pool is started.
    pub workers: usize,

    /// Time budget for a single probe attempt.
    ///
    /// The cleartext fallback gets a fresh window of the same length.
    pub timeout: Duration,

    /// Ports probed on every host, in this order.
    pub ports: Vec<u16>,
}
