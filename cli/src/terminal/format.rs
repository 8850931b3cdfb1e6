use colored::*;
use grabbr_core::result::ProbeResult;

/// One log line per probe outcome, emitted at receipt.
pub fn result_line(result: &ProbeResult) -> String {
    let target: String = format!("{}:{}", result.host, result.port);

    match &result.headers {
        Some(headers) => {
            let count: ColoredString = format!("{} headers", headers.len()).green();
            match headers.get("server").and_then(|values| values.first()) {
                Some(server) => {
                    format!("{} {} {}", target.bold(), count, format!("({server})").dimmed())
                }
                None => format!("{} {}", target.bold(), count),
            }
        }
        None => format!("{} {}", target.bold(), "no response".red()),
    }
}
