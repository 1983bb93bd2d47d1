use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Hardware address of a device, six octets.
///
/// Parses colon- or hyphen-separated octets of one or two hex digits
/// (macOS prints `0:1b:2:a:b:c`). Always renders as lowercase, zero-padded,
/// colon-separated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }
}

impl FromStr for MacAddress {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let separator = if s.contains(':') {
            ':'
        } else if s.contains('-') {
            '-'
        } else {
            return Err(format!("Invalid MAC address '{}'", s));
        };

        let mut octets = [0u8; 6];
        let mut count = 0;
        for part in s.split(separator) {
            if count == 6 || part.is_empty() || part.len() > 2 {
                return Err(format!("Invalid MAC address '{}'", s));
            }
            octets[count] = u8::from_str_radix(part, 16)
                .map_err(|_| format!("Invalid MAC address '{}'", s))?;
            count += 1;
        }

        if count != 6 {
            return Err(format!("Invalid MAC address '{}'", s));
        }
        Ok(Self(octets))
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            a, b, c, d, e, g
        )
    }
}

impl Serialize for MacAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MacAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A host seen in the local ARP table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub ip: Ipv4Addr,
    pub mac: MacAddress,
}

impl Device {
    pub fn new(ip: Ipv4Addr, mac: MacAddress) -> Self {
        Self { ip, mac }
    }
}
