use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use ipnetwork::IpNetwork;

/// Adds one to a big-endian octet array, carrying right to left.
///
/// Returns `None` when the address space wraps around. The input is left
/// untouched; callers get a fresh array.
pub fn increment_octets<const N: usize>(octets: [u8; N]) -> Option<[u8; N]> {
    let mut next = octets;
    for byte in next.iter_mut().rev() {
        let (value, carry) = byte.overflowing_add(1);
        *byte = value;
        if !carry {
            return Some(next);
        }
    }
    None
}

/// The address numerically following `addr`, if one exists.
pub fn next_addr(addr: IpAddr) -> Option<IpAddr> {
    match addr {
        IpAddr::V4(v4) => increment_octets(v4.octets()).map(|o| IpAddr::V4(Ipv4Addr::from(o))),
        IpAddr::V6(v6) => increment_octets(v6.octets()).map(|o| IpAddr::V6(Ipv6Addr::from(o))),
    }
}

/// Expands a CIDR block into every address it covers, in ascending order.
///
/// Network and broadcast addresses are included; a `/32` (or `/128`)
/// yields exactly its own address.
pub fn expand_block(block: &IpNetwork) -> Vec<String> {
    let mut addrs: Vec<String> = Vec::new();
    let mut addr: IpAddr = match block {
        IpNetwork::V4(net) => IpAddr::V4(net.network()),
        IpNetwork::V6(net) => IpAddr::V6(net.network()),
    };

    loop {
        addrs.push(addr.to_string());
        match next_addr(addr) {
            Some(next) if block.contains(next) => addr = next,
            _ => break,
        }
    }

    addrs
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
