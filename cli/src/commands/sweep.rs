use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use tracing::{info, warn};

use grabbr_common::config::Config;
use grabbr_common::network::target;
use grabbr_core::prober::HttpProber;
use grabbr_core::result::ProbeResult;
use grabbr_core::scanner::{self, ResultObserver};

use crate::commands::CommandLine;
use crate::terminal::{format, print, spinner};

pub async fn run(cmd: CommandLine) -> anyhow::Result<()> {
    print::banner(cmd.no_banner);
    print::header("header sweep");

    let start_time: Instant = Instant::now();

    let cfg = Config {
        workers: cmd.workers,
        timeout: Duration::from_secs(cmd.timeout),
        ports: cmd.ports.clone(),
    };

    let specs = read_targets(&cmd)?;
    let hosts = target::expand_all(&specs);
    anyhow::ensure!(!hosts.is_empty(), "no usable targets to probe");

    let expected: usize = hosts.len() * cfg.ports.len();
    info!(
        "probing {} hosts on {} ports ({expected} probes, {} workers)",
        hosts.len(),
        cfg.ports.len(),
        cfg.workers
    );

    let stop = Arc::new(AtomicBool::new(false));
    watch_for_interrupt(Arc::clone(&stop));

    let prober = Arc::new(HttpProber::new(cfg.timeout)?);

    let bar = spinner::start_sweep_bar(expected as u64);
    let observer: ResultObserver = Box::new(move |result| {
        info!("{}", format::result_line(result));
        bar.inc(1);
    });

    let results =
        scanner::perform_sweep(hosts, &cfg, prober, Arc::clone(&stop), Some(observer)).await;

    bar.finish_and_clear();
    stop.store(true, Ordering::Relaxed);

    write_results(&cmd.outfile, &results)?;
    summarize(&results, start_time.elapsed());

    Ok(())
}

fn read_targets(cmd: &CommandLine) -> anyhow::Result<Vec<String>> {
    if let Some(host) = &cmd.host {
        return Ok(vec![host.clone()]);
    }

    let raw = fs::read_to_string(&cmd.infile)
        .with_context(|| format!("reading target list from {}", cmd.infile.display()))?;

    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}

fn write_results(outfile: &Path, results: &[ProbeResult]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(results).context("marshalling results")?;
    fs::write(outfile, json)
        .with_context(|| format!("writing results to {}", outfile.display()))?;

    info!("results written to {}", outfile.display());
    Ok(())
}

fn watch_for_interrupt(stop: Arc<AtomicBool>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received, finishing in-flight probes");
            stop.store(true, Ordering::Relaxed);
        }
    });
}

fn summarize(results: &[ProbeResult], total_time: Duration) {
    let responded: usize = results.iter().filter(|r| r.responded()).count();
    let responded: ColoredString = format!("{responded} responding").bold().green();
    let total: ColoredString = format!("{} probes", results.len()).bold();
    let elapsed: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();

    print::fat_separator();
    print::centerln(&format!("Sweep complete: {responded} of {total} in {elapsed}"));
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
