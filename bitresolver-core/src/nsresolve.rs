//! Single-candidate nameserver A-record resolution under the public trust anchor
//! The NS-list walk itself lives in [`crate::resolver`], since each
//! accepted NS-A result feeds straight into its own authoritative attempt rather
//! than the whole NS list being exhausted before any authoritative query is tried.

use crate::config::ResolverConfig;
use crate::error::Result;
use crate::traits::DnssecFacility;

/// Resolve one candidate nameserver's A record under the public trust anchor.
///
/// Returns `Ok(Some(address))` when accepted (status success, data present, not bogus —
/// `secure` is deliberately not required here), `Ok(None)` on rejection, and `Err` only for
/// the fatal, call-aborting [`crate::error::BitResolverError::TrustAnchorMissing`] case.
pub async fn probe_ns(
    facility: &dyn DnssecFacility,
    config: &ResolverConfig,
    ns_name: &str,
) -> Result<Option<String>> {
    let probe = facility
        .resolve_ns_address(&config.resolv_conf, &config.dnssec_root_key, ns_name)
        .await?;

    if probe.accepted() {
        Ok(probe.address)
    } else {
        Ok(None)
    }
}
