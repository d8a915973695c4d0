//! Host facts and the views derived from the host list.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::host::Host;

/// An identity attribute of a host, possibly discovered at install time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fact {
    /// Private IP address.
    Ip,
    /// Public IP address.
    PublicIp,
    /// Private hostname.
    Hostname,
    /// Public hostname.
    PublicHostname,
}

impl Fact {
    /// Facts every host needs before installation, in reporting order.
    pub const REQUIRED: [Self; 4] = [Self::Ip, Self::PublicIp, Self::Hostname, Self::PublicHostname];

    /// Returns the settings key for this fact.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ip => "ip",
            Self::PublicIp => "public_ip",
            Self::Hostname => "hostname",
            Self::PublicHostname => "public_hostname",
        }
    }

    /// Returns the host's value for this fact, if known.
    #[must_use]
    pub fn value(self, host: &Host) -> Option<&str> {
        match self {
            Self::Ip => host.ip(),
            Self::PublicIp => host.public_ip(),
            Self::Hostname => host.hostname(),
            Self::PublicHostname => host.public_hostname(),
        }
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Known facts of one host, keyed by host name in [`Aggregates`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HostFacts {
    /// Private IP address
    pub ip: Option<String>,
    /// Private hostname
    pub hostname: Option<String>,
    /// Public IP address
    pub public_ip: Option<String>,
    /// Public hostname
    pub public_hostname: Option<String>,
}

impl From<&Host> for HostFacts {
    fn from(host: &Host) -> Self {
        Self {
            ip: host.ip().map(str::to_owned),
            hostname: host.hostname().map(str::to_owned),
            public_ip: host.public_ip().map(str::to_owned),
            public_hostname: host.public_hostname().map(str::to_owned),
        }
    }
}

/// Role lists and facts projected from the host list.
///
/// This is the shape older orchestration code expects. It is always
/// recomputed from the hosts; see [`derive_aggregates`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregates {
    /// Names of master hosts, in host order
    pub masters: Vec<String>,
    /// Names of node hosts, in host order
    pub nodes: Vec<String>,
    /// Facts per host name
    pub validated_facts: BTreeMap<String, HostFacts>,
}

/// Computes the role lists and per-host facts for the given hosts.
#[must_use]
pub fn derive_aggregates(hosts: &[Host]) -> Aggregates {
    let mut aggregates = Aggregates::default();

    for host in hosts {
        if host.is_master() {
            aggregates.masters.push(host.name().to_owned());
        }
        if host.is_node() {
            aggregates.nodes.push(host.name().to_owned());
        }
        aggregates
            .validated_facts
            .insert(host.name().to_owned(), HostFacts::from(host));
    }

    aggregates
}

/// Returns the required facts missing on each host.
///
/// Hosts with every fact present are omitted.
#[must_use]
pub fn missing_facts(hosts: &[Host]) -> BTreeMap<String, Vec<Fact>> {
    hosts
        .iter()
        .filter_map(|host| {
            let missing: Vec<Fact> = Fact::REQUIRED
                .into_iter()
                .filter(|fact| fact.value(host).is_none())
                .collect();
            (!missing.is_empty()).then(|| (host.name().to_owned(), missing))
        })
        .collect()
}
