//! Core data types shared by the resolver, prober, coordinator and reporter.

use std::fmt;
use std::net::IpAddr;

use crate::config::{HTTPS_DEFAULT_PORT, HTTP_DEFAULT_PORT};

/// How a target string was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// A literal IPv4 or IPv6 address
    IpLiteral,
    /// Anything else; resolved through DNS
    Hostname,
}

/// A single host identifier that survived target filtering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    value: String,
    kind: TargetKind,
}

impl Target {
    /// Classifies a filtered target string.
    ///
    /// Strings that parse as an IPv4 or IPv6 address are `IpLiteral`; everything
    /// else is treated as a hostname.
    pub fn classify(value: impl Into<String>) -> Self {
        let value = value.into();
        let kind = if value.parse::<IpAddr>().is_ok() {
            TargetKind::IpLiteral
        } else {
            TargetKind::Hostname
        };
        Self { value, kind }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn kind(&self) -> TargetKind {
        self.kind
    }

    pub fn is_ip_literal(&self) -> bool {
        self.kind == TargetKind::IpLiteral
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Probe protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    /// URL scheme for the protocol.
    pub fn scheme(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }

    /// The scheme's conventional port, elided from probe URLs.
    pub fn default_port(&self) -> u16 {
        match self {
            Protocol::Http => HTTP_DEFAULT_PORT,
            Protocol::Https => HTTPS_DEFAULT_PORT,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme())
    }
}

/// Outcome of one HTTP or HTTPS probe.
///
/// Every network-level failure (refused, timed out, TLS, DNS during connect)
/// collapses into `Unreachable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Final status code after following redirects
    Status(u16),
    /// No response was obtained
    Unreachable,
}

impl ProbeOutcome {
    pub fn status(&self) -> Option<u16> {
        match self {
            ProbeOutcome::Status(code) => Some(*code),
            ProbeOutcome::Unreachable => None,
        }
    }
}

/// Composite verdict for one target.
///
/// Built once all three checks have finished and never modified afterwards.
/// Liveness is derived from the fields, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    target: Target,
    dns: Option<String>,
    http_status: Option<u16>,
    https_status: Option<u16>,
}

impl ProbeResult {
    /// Assembles a result.
    ///
    /// For IP literals the DNS field is always the literal itself, whatever
    /// `dns` says.
    pub fn new(
        target: Target,
        dns: Option<String>,
        http_status: Option<u16>,
        https_status: Option<u16>,
    ) -> Self {
        let dns = if target.is_ip_literal() {
            Some(target.as_str().to_string())
        } else {
            dns
        };
        Self {
            target,
            dns,
            http_status,
            https_status,
        }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn kind(&self) -> TargetKind {
        self.target.kind()
    }

    pub fn dns(&self) -> Option<&str> {
        self.dns.as_deref()
    }

    pub fn http_status(&self) -> Option<u16> {
        self.http_status
    }

    pub fn https_status(&self) -> Option<u16> {
        self.https_status
    }

    /// True when any dimension produced liveness evidence.
    ///
    /// A resolved hostname counts; an IP literal's self-referencing DNS field
    /// does not.
    pub fn is_live(&self) -> bool {
        let resolved = self.target.kind() == TargetKind::Hostname && self.dns.is_some();
        resolved || self.http_status.is_some() || self.https_status.is_some()
    }
}
