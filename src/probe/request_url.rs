//! Probe URL construction.

use url::Url;

use crate::models::{Protocol, Target};

/// Builds the URL probed for `target` over `protocol` on `port`.
///
/// The port is omitted only when it equals the scheme's conventional port
/// (80 for http, 443 for https); any other port, including 443 over http, is
/// written explicitly. IPv6 literals are bracketed.
///
/// # Errors
///
/// Returns a `url::ParseError` if the target is not a valid URL host.
pub fn build_probe_url(
    protocol: Protocol,
    target: &Target,
    port: u16,
) -> Result<Url, url::ParseError> {
    let host = if target.is_ip_literal() && target.as_str().contains(':') {
        format!("[{}]", target.as_str())
    } else {
        target.as_str().to_string()
    };

    let raw = if port == protocol.default_port() {
        format!("{}://{}", protocol.scheme(), host)
    } else {
        format!("{}://{}:{}", protocol.scheme(), host, port)
    };
    Url::parse(&raw)
}
