//! Network address parsing.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::formats::FormatError;

/// A resolved IP address plus a port.
///
/// Grammar: `<ipv4>:<port>` or `[<ipv6>]:<port>`. Brackets are required
/// for IPv6 literals and forbidden for IPv4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkAddress {
    ip: IpAddr,
    port: u16,
}

impl NetworkAddress {
    pub fn ip(&self) -> IpAddr {
        self.ip
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl FromStr for NetworkAddress {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (host, port_str) = s
            .rsplit_once(':')
            .ok_or_else(|| FormatError::InvalidAddress("missing `:<port>` suffix".into()))?;
        let port = parse_port(port_str)?;

        let ip = if let Some(rest) = host.strip_prefix('[') {
            let inner = rest.strip_suffix(']').ok_or_else(|| {
                FormatError::InvalidAddress("unterminated `[` in IPv6 literal".into())
            })?;
            let v6: Ipv6Addr = inner.parse().map_err(|_| {
                FormatError::InvalidAddress(format!("`{inner}` is not an IPv6 literal"))
            })?;
            IpAddr::V6(v6)
        } else if host.contains(':') {
            // Unbracketed colons can only come from a bare IPv6 literal.
            return Err(FormatError::InvalidAddress(
                "IPv6 literals must be bracketed, e.g. `[::1]:3054`".into(),
            ));
        } else {
            let v4: Ipv4Addr = host.parse().map_err(|_| {
                FormatError::InvalidAddress(format!("`{host}` is not an IPv4 literal"))
            })?;
            IpAddr::V4(v4)
        };

        Ok(NetworkAddress { ip, port })
    }
}

impl fmt::Display for NetworkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ip {
            IpAddr::V4(ip) => write!(f, "{}:{}", ip, self.port),
            IpAddr::V6(ip) => write!(f, "[{}]:{}", ip, self.port),
        }
    }
}

fn parse_port(s: &str) -> Result<u16, FormatError> {
    let n: u64 = s
        .parse()
        .map_err(|_| FormatError::InvalidAddress(format!("`{s}` is not a port number")))?;
    u16::try_from(n).map_err(|_| FormatError::PortOutOfRange(n))
}
