//! Production [`DnssecFacility`] backed by `libunbound`.
//!
//! Every FFI call is blocking, so each probe runs on a `spawn_blocking` worker thread —
//! the idiomatic-async equivalent of the "single-threaded, synchronous per call" model
//! model this pipeline follows: no resolver context is ever shared across an await point.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use libunbound::Context;
use trust_dns_proto::rr::DNSClass;

use crate::error::{BitResolverError, Result};
use crate::query::Qtype;
use crate::traits::{AuthoritativeProbe, DnssecFacility, NsProbe};
use crate::value::ResolvedValue;

/// Marker type; holds no state of its own beyond the paths/strings each call is given.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnboundFacility;

impl UnboundFacility {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn ns_probe_blocking(resolv_conf: &Path, trust_anchor_file: &Path, ns_name: &str) -> Result<NsProbe> {
        if !trust_anchor_file.is_file() {
            return Err(BitResolverError::TrustAnchorMissing(
                trust_anchor_file.display().to_string(),
            ));
        }

        let ctx = Context::new().map_err(|e| BitResolverError::Io(e.to_string()))?;
        ctx.load_resolv_conf(resolv_conf.to_str())
            .map_err(|e| BitResolverError::Io(e.to_string()))?;
        ctx.load_trust_anchor_file(&trust_anchor_file.display().to_string())
            .map_err(|e| BitResolverError::Io(e.to_string()))?;

        let Ok(answer) = ctx.resolve(ns_name, trust_dns_proto::rr::RecordType::A, DNSClass::IN) else {
            return Ok(NsProbe { status_ok: false, have_data: false, bogus: false, address: None });
        };

        let address = ResolvedValue::extract(&answer, Qtype::from_record_type(trust_dns_proto::rr::RecordType::A))
            .and_then(|v| match v {
            ResolvedValue::Address(a) => Some(a),
            _ => None,
        });

        Ok(NsProbe {
            status_ok: true,
            have_data: answer.have_data(),
            bogus: answer.bogus(),
            address,
        })
    }

    fn authoritative_probe_blocking(
        forward_config: &Path,
        trust_anchor_line: &str,
        name: &str,
        qtype: Qtype,
    ) -> Result<AuthoritativeProbe> {
        let ctx = Context::new().map_err(|e| BitResolverError::Io(e.to_string()))?;
        ctx.load_unbound_config_file(&forward_config.display().to_string())
            .map_err(|e| BitResolverError::Io(e.to_string()))?;
        ctx.add_trust_anchor(trust_anchor_line)
            .map_err(|e| BitResolverError::Io(e.to_string()))?;

        let Ok(answer) = ctx.resolve(name, qtype.as_record_type(), DNSClass::IN) else {
            return Ok(AuthoritativeProbe {
                status_ok: false,
                secure: false,
                bogus: false,
                have_data: false,
                value: None,
            });
        };

        Ok(AuthoritativeProbe {
            status_ok: true,
            secure: answer.secure(),
            bogus: answer.bogus(),
            have_data: answer.have_data(),
            value: ResolvedValue::extract(&answer, qtype),
        })
    }
}

#[async_trait]
impl DnssecFacility for UnboundFacility {
    async fn resolve_ns_address(
        &self,
        resolv_conf: &Path,
        trust_anchor_file: &Path,
        ns_name: &str,
    ) -> Result<NsProbe> {
        let resolv_conf = resolv_conf.to_path_buf();
        let trust_anchor_file = trust_anchor_file.to_path_buf();
        let ns_name = ns_name.to_string();
        tokio::task::spawn_blocking(move || {
            Self::ns_probe_blocking(&resolv_conf, &trust_anchor_file, &ns_name)
        })
        .await
        .map_err(|e| BitResolverError::Io(e.to_string()))?
    }

    async fn resolve_authoritative(
        &self,
        forward_config: &Path,
        trust_anchor_line: &str,
        name: &str,
        qtype: Qtype,
    ) -> Result<AuthoritativeProbe> {
        let forward_config: PathBuf = forward_config.to_path_buf();
        let trust_anchor_line = trust_anchor_line.to_string();
        let name = name.to_string();
        tokio::task::spawn_blocking(move || {
            Self::authoritative_probe_blocking(&forward_config, &trust_anchor_line, &name, qtype)
        })
        .await
        .map_err(|e| BitResolverError::Io(e.to_string()))?
    }
}
