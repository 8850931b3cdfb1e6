use std::sync::OnceLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

static SWEEP_BAR: OnceLock<ProgressBar> = OnceLock::new();

/// Progress over the expected probe count. The first call creates the
/// bar; later calls hand back the same one.
pub fn start_sweep_bar(total: u64) -> &'static ProgressBar {
    SWEEP_BAR.get_or_init(|| {
        let pb = ProgressBar::new(total);
        let style = ProgressStyle::with_template("{spinner:.blue} {pos}/{len} probes")
            .unwrap()
            .tick_strings(&[
                "▁▁▁▁▁",
                "▁▂▂▂▁",
                "▁▄▂▄▁",
                "▂▄▆▄▂",
                "▄▆█▆▄",
                "▂▄▆▄▂",
                "▁▄▂▄▁",
                "▁▂▂▂▁",
            ]);

        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    })
}

/// Prints above the bar while one is live, straight to stdout otherwise.
pub fn println(msg: &str) {
    match SWEEP_BAR.get() {
        Some(pb) if !pb.is_finished() => pb.println(msg),
        _ => println!("{msg}"),
    }
}

/// Log writer that keeps tracing output from clobbering the bar.
pub struct SpinnerWriter;

impl std::io::Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf);
        println(msg.trim_end());
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
