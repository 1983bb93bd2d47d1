use fancy_regex::Regex;
use netscene_application::ports::ArpTable;
use netscene_domain::{Device, MacAddress};
use rustc_hash::FxHashSet;
use std::net::Ipv4Addr;
use std::sync::LazyLock;
use tracing::{debug, trace};

/// Dotted quad not glued to other digits or dots.
static IPV4_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?<![0-9.])[0-9]{1,3}(?:\.[0-9]{1,3}){3}(?![0-9.])").expect("valid IPv4 pattern")
});

/// Six octets of one or two hex digits with a single consistent separator.
/// The surrounding lookarounds keep it from matching inside IPv6 addresses;
/// a trailing `.` is allowed.
static MAC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?<![0-9a-f:.-])[0-9a-f]{1,2}([:-])[0-9a-f]{1,2}(?:\1[0-9a-f]{1,2}){4}(?![0-9a-f:-])",
    )
    .expect("valid MAC pattern")
});

/// `<incomplete>` (net-tools) or `(incomplete)` (BSD, macOS, `arp -n`).
static INCOMPLETE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[(<]incomplete[)>]").expect("valid incomplete marker pattern")
});

/// ATF_COM in the Linux flags column
const ATF_COMPLETE: u32 = 0x2;

/// Parse the textual ARP table of any supported OS.
///
/// Recognised shapes:
/// ```text
/// ? (192.168.1.1) at aa:bb:cc:dd:ee:ff [ether] on eth0          net-tools, BSD, macOS
/// 192.168.1.1  0x1  0x2  aa:bb:cc:dd:ee:ff  *  eth0             /proc/net/arp
/// Interface: 192.168.1.100 --- 0x3                               Windows banner
///   192.168.1.2           00-11-22-33-44-55     dynamic          Windows row
/// ```
/// Lines without both an IPv4 address and a MAC are skipped. The first
/// occurrence of an IP wins and output keeps table order.
pub fn parse_arp_output(output: &str) -> ArpTable {
    let mut seen: FxHashSet<Ipv4Addr> = FxHashSet::default();
    let mut devices = ArpTable::new();
    let mut skipped = 0usize;

    for line in output.lines() {
        let Some(device) = parse_arp_line(line) else {
            if !line.trim().is_empty() {
                skipped += 1;
            }
            continue;
        };

        if seen.insert(device.ip) {
            devices.push(device);
        } else {
            trace!(ip = %device.ip, "Duplicate ARP entry ignored");
        }
    }

    debug!(entries = devices.len(), skipped, "ARP table parsed");
    devices
}

/// Extract the first IPv4/MAC pair of a single line.
pub fn parse_arp_line(line: &str) -> Option<Device> {
    if is_incomplete(line) {
        return None;
    }

    let ip = first_ipv4(line)?;
    let mac = first_mac(line)?;
    Some(Device::new(ip, mac))
}

fn first_ipv4(line: &str) -> Option<Ipv4Addr> {
    IPV4_PATTERN
        .find_iter(line)
        .filter_map(Result::ok)
        .find_map(|m| m.as_str().parse::<Ipv4Addr>().ok())
}

fn first_mac(line: &str) -> Option<MacAddress> {
    MAC_PATTERN
        .find_iter(line)
        .filter_map(Result::ok)
        .find_map(|m| m.as_str().parse::<MacAddress>().ok())
}

fn is_incomplete(line: &str) -> bool {
    if INCOMPLETE_MARKER.is_match(line).unwrap_or(false) {
        return true;
    }

    proc_flags(line).is_some_and(|flags| flags & ATF_COMPLETE == 0)
}

/// Flags column of a `/proc/net/arp` row: `IP  HW-type  Flags  ...`.
fn proc_flags(line: &str) -> Option<u32> {
    let mut columns = line.split_whitespace();
    columns.next()?.parse::<Ipv4Addr>().ok()?;
    hex_column(columns.next()?)?;
    hex_column(columns.next()?)
}

fn hex_column(token: &str) -> Option<u32> {
    u32::from_str_radix(token.strip_prefix("0x")?, 16).ok()
}
