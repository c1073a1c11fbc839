//! Trait seams isolating the pipeline's state machine from its two external
//! collaborators, so [`crate::resolver::BitResolver`] is unit-testable without a live
//! Namecoin node or a real `libunbound` context.

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;
use crate::query::Qtype;
use crate::value::ResolvedValue;

/// Blockchain name lookup, implemented by [`bitresolver_rpc::NamecoinClient`] in production.
#[async_trait]
pub trait NameLookup: Send + Sync {
    /// Fetch the raw `value` string of a `d/<label>` Namecoin name, or `None` when the
    /// node reports "name not found".
    async fn lookup_value(&self, full_name: &str) -> Result<Option<String>>;
}

#[async_trait]
impl NameLookup for bitresolver_rpc::NamecoinClient {
    async fn lookup_value(&self, full_name: &str) -> Result<Option<String>> {
        let record = self.lookup(full_name).await?;
        Ok(record.and_then(|r| r.value))
    }
}

/// Outcome of resolving one candidate nameserver's **A** record under the public trust
/// anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NsProbe {
    pub status_ok: bool,
    pub have_data: bool,
    pub bogus: bool,
    pub address: Option<String>,
}

impl NsProbe {
    /// Accepted iff status is success, data is present, and the answer is not bogus.
    /// `secure` is deliberately not consulted here.
    #[must_use]
    pub fn accepted(&self) -> bool {
        self.status_ok && self.have_data && !self.bogus
    }
}

/// Outcome of one per-NS authoritative query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthoritativeProbe {
    pub status_ok: bool,
    pub secure: bool,
    pub bogus: bool,
    pub have_data: bool,
    pub value: Option<ResolvedValue>,
}

/// The DNSSEC-validating stub resolver facility, implemented atop `libunbound` in
/// production. Each method owns the full lifecycle (context construction, config loading,
/// query, teardown) of one probe so a fake can be driven one call at a time in tests.
#[async_trait]
pub trait DnssecFacility: Send + Sync {
    /// Resolve `ns_name`'s A record under the public trust anchor.
    async fn resolve_ns_address(
        &self,
        resolv_conf: &Path,
        trust_anchor_file: &Path,
        ns_name: &str,
    ) -> Result<NsProbe>;

    /// Issue the user's query against a fresh context forwarding to `ns_ip`, anchored
    /// solely by `trust_anchor_line`.
    async fn resolve_authoritative(
        &self,
        forward_config: &Path,
        trust_anchor_line: &str,
        name: &str,
        qtype: Qtype,
    ) -> Result<AuthoritativeProbe>;
}
