//! # Sweep Target Model
//!
//! Defines the possible inputs for a header sweep.
//!
//! A target is either:
//! * A literal host (IP address or name), probed as given.
//! * A CIDR block (e.g. `10.0.0.0/24`), expanded to every address it covers.

use std::str::FromStr;

use ipnetwork::IpNetwork;
use thiserror::Error;
use tracing::warn;

use crate::network::range;

#[derive(Debug, Error)]
pub enum TargetError {
    /// The spec contained a `/` but did not parse as a CIDR block.
    #[error("invalid CIDR block '{spec}': {reason}")]
    InvalidCidr { spec: String, reason: String },
}

/// A single entry from the target list.
#[derive(Clone, Debug)]
pub enum Target {
    /// One literal host, probed unchanged.
    Host { addr: String },
    /// A block of addresses, probed one by one.
    Block { network: IpNetwork },
}

impl FromStr for Target {
    type Err = TargetError;

    /// Parses a string into a `Target`.
    ///
    /// Anything containing a `/` is treated as CIDR notation and must
    /// parse as such; everything else passes through as a literal host.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains('/') {
            let network = s.parse::<IpNetwork>().map_err(|e| TargetError::InvalidCidr {
                spec: s.to_owned(),
                reason: e.to_string(),
            })?;
            return Ok(Target::Block { network });
        }

        Ok(Target::Host {
            addr: s.to_owned(),
        })
    }
}

impl Target {
    /// The concrete hosts this target denotes, in probe order.
    pub fn hosts(&self) -> Vec<String> {
        match self {
            Target::Host { addr } => vec![addr.clone()],
            Target::Block { network } => range::expand_block(network),
        }
    }
}

/// Expands every specification into one flat host list.
///
/// A spec that fails to parse is logged and skipped; the rest of the
/// sweep continues.
pub fn expand_all(specs: &[String]) -> Vec<String> {
    let mut hosts: Vec<String> = Vec::new();

    for spec in specs {
        match spec.parse::<Target>() {
            Ok(target) => hosts.extend(target.hosts()),
            Err(e) => warn!("skipping target: {e}"),
        }
    }

    hosts
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
