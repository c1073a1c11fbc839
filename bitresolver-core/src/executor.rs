//! Per-NS authoritative query execution.

use crate::config::ResolverConfig;
use crate::error::{BitResolverError, Result};
use crate::forwarder::ScratchConfig;
use crate::query::Qtype;
use crate::traits::DnssecFacility;
use crate::value::ResolvedValue;

/// One classified outcome of an authoritative attempt against a single nameserver.
pub enum Outcome {
    /// Extraction produced a usable value; the resolve call is done.
    Value(ResolvedValue),
    /// The attempt failed in a way the NS loop should record and move past.
    Failed(BitResolverError),
}

/// Materialize a scratch forward-zone config pointed at `ns_ip`, issue the authoritative
/// query through it, and classify the result.
///
/// The scratch config is unlinked on every exit path via [`ScratchConfig`]'s `Drop` impl,
/// including the early return for [`BitResolverError::UnsupportedType`], which aborts the
/// entire resolve call rather than just this NS attempt.
pub async fn query_authoritative(
    facility: &dyn DnssecFacility,
    config: &ResolverConfig,
    sld: &str,
    ns_ip: &str,
    trust_anchor_line: &str,
    name: &str,
    qtype: Qtype,
) -> Result<Outcome> {
    let scratch = ScratchConfig::create(&config.scratch_dir(), sld, ns_ip)?;

    let probe = facility
        .resolve_authoritative(scratch.path(), trust_anchor_line, name, qtype)
        .await?;

    drop(scratch);

    if !probe.status_ok {
        return Ok(Outcome::Failed(BitResolverError::InvalidNameserver(ns_ip.to_string())));
    }
    // bogus checked before secure: unbound reports bogus answers as insecure too, so
    // checking secure first would make BogusResult unreachable.
    if probe.bogus {
        return Ok(Outcome::Failed(BitResolverError::BogusResult(sld.to_string(), ns_ip.to_string())));
    }
    if !probe.secure {
        return Ok(Outcome::Failed(BitResolverError::InsecureResult(sld.to_string(), ns_ip.to_string())));
    }
    if !probe.have_data {
        return Ok(Outcome::Failed(BitResolverError::EmptyResult(sld.to_string(), ns_ip.to_string())));
    }

    if !qtype.is_supported() {
        return Err(BitResolverError::UnsupportedType(format!("{:?}", qtype.as_record_type())));
    }

    match probe.value {
        Some(value) => Ok(Outcome::Value(value)),
        None => Ok(Outcome::Failed(BitResolverError::EmptyResult(sld.to_string(), ns_ip.to_string()))),
    }
}
