//! Target machines described in the installer config.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::scalar;

/// A host entry as it appears in the YAML document.
///
/// Every key is optional on disk. Serializing skips unset strings and
/// `false` flags, so writing a [`Host::to_raw`] record never echoes defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHost {
    /// Private IP address
    #[serde(
        default,
        deserialize_with = "scalar::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub ip: Option<String>,

    /// Private hostname
    #[serde(
        default,
        deserialize_with = "scalar::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub hostname: Option<String>,

    /// Public IP address
    #[serde(
        default,
        deserialize_with = "scalar::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub public_ip: Option<String>,

    /// Public hostname
    #[serde(
        default,
        deserialize_with = "scalar::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub public_hostname: Option<String>,

    /// Should this host run as an `OpenShift` master
    #[serde(default, deserialize_with = "scalar::flag", skip_serializing_if = "is_false")]
    pub master: bool,

    /// Should this host run as an `OpenShift` node
    #[serde(default, deserialize_with = "scalar::flag", skip_serializing_if = "is_false")]
    pub node: bool,

    /// Install with containerized components
    #[serde(default, deserialize_with = "scalar::flag", skip_serializing_if = "is_false")]
    pub containerized: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // signature required by serde
const fn is_false(value: &bool) -> bool {
    !*value
}

/// Reasons a host entry is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// Neither `ip` nor `hostname` is set.
    #[error("Host must have an ip or a hostname")]
    MissingIdentity,

    /// Neither `master` nor `node` is set.
    #[error("You must specify each host as either a master or a node ({name})")]
    MissingRole {
        /// Name the host would have had
        name: String,
    },
}

/// A validated machine we will install (or have installed) `OpenShift` on.
///
/// Construction guarantees an identity (`ip` or `hostname`) and at least one
/// role. Instances are immutable; [`Host::name`] is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    name: String,
    ip: Option<String>,
    hostname: Option<String>,
    public_ip: Option<String>,
    public_hostname: Option<String>,
    master: bool,
    node: bool,
    containerized: bool,
}

impl Host {
    /// Validates a raw record and builds a host from it.
    ///
    /// Empty strings are treated as absent. The name prefers the IP, as it is
    /// the more specific of the two identities.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::MissingIdentity`] if both `ip` and `hostname` are
    /// absent, and [`HostError::MissingRole`] if neither `master` nor `node`
    /// is set.
    pub fn from_raw(raw: RawHost) -> Result<Self, HostError> {
        let ip = non_empty(raw.ip);
        let hostname = non_empty(raw.hostname);

        let name = ip
            .clone()
            .or_else(|| hostname.clone())
            .ok_or(HostError::MissingIdentity)?;

        if !raw.master && !raw.node {
            return Err(HostError::MissingRole { name });
        }

        Ok(Self {
            name,
            ip,
            hostname,
            public_ip: non_empty(raw.public_ip),
            public_hostname: non_empty(raw.public_hostname),
            master: raw.master,
            node: raw.node,
            containerized: raw.containerized,
        })
    }

    /// Returns the name the installer refers to this host by.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the private IP address, if known.
    #[must_use]
    pub fn ip(&self) -> Option<&str> {
        self.ip.as_deref()
    }

    /// Returns the private hostname, if known.
    #[must_use]
    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }

    /// Returns the public IP address, if known.
    #[must_use]
    pub fn public_ip(&self) -> Option<&str> {
        self.public_ip.as_deref()
    }

    /// Returns the public hostname, if known.
    #[must_use]
    pub fn public_hostname(&self) -> Option<&str> {
        self.public_hostname.as_deref()
    }

    /// Returns true if this host runs as a master.
    #[must_use]
    pub const fn is_master(&self) -> bool {
        self.master
    }

    /// Returns true if this host runs as a node.
    #[must_use]
    pub const fn is_node(&self) -> bool {
        self.node
    }

    /// Returns true if this host uses containerized components.
    #[must_use]
    pub const fn is_containerized(&self) -> bool {
        self.containerized
    }

    /// Exports the host as a minimal raw record for writing to disk.
    ///
    /// Unset facts and `false` flags are left at their defaults, which the
    /// serializer omits.
    #[must_use]
    pub fn to_raw(&self) -> RawHost {
        RawHost {
            ip: self.ip.clone(),
            hostname: self.hostname.clone(),
            public_ip: self.public_ip.clone(),
            public_hostname: self.public_hostname.clone(),
            master: self.master,
            node: self.node,
            containerized: self.containerized,
        }
    }
}

impl TryFrom<RawHost> for Host {
    type Error = HostError;

    fn try_from(raw: RawHost) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
