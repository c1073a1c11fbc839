//! Top-level orchestration of the `.bit` trust-bootstrap pipeline.
//!
//! State machine: `S_Validate → S_FetchChain → S_CanonicalizeDS →
//! S_NSLoop{current_ns, last_error} → S_Done(value) | S_Fail(err)`.

use bitresolver_rpc::NamecoinClient;

use crate::blockchain::BlockchainRecord;
use crate::config::ResolverConfig;
use crate::ds::trust_anchor_line;
use crate::error::{BitResolverError, Result};
use crate::executor::{query_authoritative, Outcome};
use crate::name::BitName;
use crate::nsresolve::probe_ns;
use crate::query::Qtype;
use crate::traits::{DnssecFacility, NameLookup};
use crate::unbound_facility::UnboundFacility;
use crate::value::ResolvedValue;

/// Resolves `.bit` names by bootstrapping DNSSEC trust from Namecoin blockchain
/// delegation records.
///
/// Owns its collaborators exclusively for the duration of a call: no state is shared
/// across invocations and no internal locking is required.
pub struct BitResolver {
    config: ResolverConfig,
    name_lookup: Box<dyn NameLookup>,
    facility: Box<dyn DnssecFacility>,
}

impl BitResolver {
    /// Build a resolver backed by a real Namecoin RPC client and `libunbound`.
    #[must_use]
    pub fn new(config: ResolverConfig) -> Self {
        let name_lookup = NamecoinClient::new(
            config.host.clone(),
            config.port,
            config.user.clone(),
            config.password.clone(),
        );
        Self {
            config,
            name_lookup: Box::new(name_lookup),
            facility: Box::new(UnboundFacility::new()),
        }
    }

    /// Build a resolver over arbitrary collaborators, for testing.
    #[must_use]
    pub fn with_collaborators(
        config: ResolverConfig,
        name_lookup: Box<dyn NameLookup>,
        facility: Box<dyn DnssecFacility>,
    ) -> Self {
        Self { config, name_lookup, facility }
    }

    /// Resolve `name` for query type `qtype`, returning a single extracted value.
    pub async fn resolve(&self, name: &str, qtype: &str) -> Result<ResolvedValue> {
        let bit_name = BitName::parse(name)?;
        let qtype = Qtype::parse(qtype)?;

        log::debug!("[resolver] fetching blockchain record for {}", bit_name.sld_label);
        let record = BlockchainRecord::fetch(self.name_lookup.as_ref(), &bit_name.sld_label).await?;

        let first_ds = record.ds.first().expect("BlockchainRecord::fetch guarantees non-empty ds");
        let anchor_line = trust_anchor_line(&bit_name.sld, first_ds);

        let mut last_error: Option<BitResolverError> = None;

        for ns_name in &record.ns {
            log::debug!("[resolver] probing NS {ns_name}");
            let ns_ip = match probe_ns(self.facility.as_ref(), &self.config, ns_name).await {
                Ok(Some(ip)) => ip,
                Ok(None) => {
                    log::warn!("[resolver] rejected NS {ns_name}");
                    last_error = Some(BitResolverError::InvalidNameserver(ns_name.clone()));
                    continue;
                }
                Err(e) => return Err(e),
            };

            let outcome = query_authoritative(
                self.facility.as_ref(),
                &self.config,
                &bit_name.sld,
                &ns_ip,
                &anchor_line,
                name,
                qtype,
            )
            .await?;

            match outcome {
                Outcome::Value(value) => return Ok(value),
                Outcome::Failed(e) => {
                    log::warn!("[resolver] authoritative attempt against {ns_ip} failed: {e}");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| BitResolverError::InvalidNameserver(bit_name.sld.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::fakes::{FakeDnssecFacility, FakeNameLookup};
    use crate::traits::{AuthoritativeProbe, NsProbe};

    const RECORD_VALUE: &str = "{'ds':[[40039,8,2,'NZbut7iqVxCP0IGCX7J1DA/DrbrkFJzEML1PetAxVzQ=']],'ns':['pdns83.ultradns.org']}";

    fn resolver(name_lookup: FakeNameLookup, facility: FakeDnssecFacility) -> BitResolver {
        BitResolver::with_collaborators(
            ResolverConfig::default(),
            Box::new(name_lookup),
            Box::new(facility),
        )
    }

    #[tokio::test]
    async fn invalid_name_makes_zero_external_calls() {
        let name_lookup = FakeNameLookup::new(vec![]);
        let facility = FakeDnssecFacility::new(vec![], vec![]);
        let r = resolver(name_lookup, facility);
        let err = r.resolve("www.example.com", "TXT").await.unwrap_err();
        assert!(matches!(err, BitResolverError::InvalidName(_)));
    }

    #[tokio::test]
    async fn base64_ds_txt_success_on_first_ns() {
        let name_lookup = FakeNameLookup::new(vec![Ok(Some(RECORD_VALUE.to_string()))]);
        let facility = FakeDnssecFacility::new(
            vec![Ok(NsProbe { status_ok: true, have_data: true, bogus: false, address: Some("127.0.0.1".to_string()) })],
            vec![Ok(AuthoritativeProbe {
                status_ok: true,
                secure: true,
                bogus: false,
                have_data: true,
                value: Some(ResolvedValue::Domain("btc".to_string())),
            })],
        );
        let r = resolver(name_lookup, facility);
        let value = r.resolve("testdomain.bit", "TXT").await.unwrap();
        assert_eq!(value, ResolvedValue::Domain("btc".to_string()));
    }

    #[tokio::test]
    async fn first_ns_invalid_second_succeeds() {
        let name_lookup = FakeNameLookup::new(vec![Ok(Some(
            "{'ds':[[1,8,2,'ab']],'ns':['bad.example.com','good.example.com']}".to_string(),
        ))]);
        let facility = FakeDnssecFacility::new(
            vec![
                Ok(NsProbe { status_ok: false, have_data: false, bogus: false, address: None }),
                Ok(NsProbe { status_ok: true, have_data: true, bogus: false, address: Some("10.0.0.1".to_string()) }),
            ],
            vec![Ok(AuthoritativeProbe {
                status_ok: true,
                secure: true,
                bogus: false,
                have_data: true,
                value: Some(ResolvedValue::Address("1.2.3.4".to_string())),
            })],
        );
        let r = resolver(name_lookup, facility);
        let value = r.resolve("testdomain.bit", "A").await.unwrap();
        assert_eq!(value, ResolvedValue::Address("1.2.3.4".to_string()));
    }

    #[tokio::test]
    async fn insecure_once_then_success() {
        let name_lookup = FakeNameLookup::new(vec![Ok(Some(
            "{'ds':[[1,8,2,'ab']],'ns':['a.example.com','b.example.com']}".to_string(),
        ))]);
        let facility = FakeDnssecFacility::new(
            vec![
                Ok(NsProbe { status_ok: true, have_data: true, bogus: false, address: Some("10.0.0.1".to_string()) }),
                Ok(NsProbe { status_ok: true, have_data: true, bogus: false, address: Some("10.0.0.2".to_string()) }),
            ],
            vec![
                Ok(AuthoritativeProbe { status_ok: true, secure: false, bogus: false, have_data: true, value: None }),
                Ok(AuthoritativeProbe {
                    status_ok: true,
                    secure: true,
                    bogus: false,
                    have_data: true,
                    value: Some(ResolvedValue::Address("5.6.7.8".to_string())),
                }),
            ],
        );
        let r = resolver(name_lookup, facility);
        let value = r.resolve("testdomain.bit", "A").await.unwrap();
        assert_eq!(value, ResolvedValue::Address("5.6.7.8".to_string()));
    }

    #[tokio::test]
    async fn all_ns_bogus_raises_bogus_result() {
        let name_lookup = FakeNameLookup::new(vec![Ok(Some(
            "{'ds':[[1,8,2,'ab']],'ns':['a.example.com']}".to_string(),
        ))]);
        let facility = FakeDnssecFacility::new(
            vec![Ok(NsProbe { status_ok: true, have_data: true, bogus: false, address: Some("10.0.0.1".to_string()) })],
            vec![Ok(AuthoritativeProbe { status_ok: true, secure: false, bogus: true, have_data: true, value: None })],
        );
        let r = resolver(name_lookup, facility);
        let err = r.resolve("testdomain.bit", "A").await.unwrap_err();
        assert!(matches!(err, BitResolverError::BogusResult(_, _)));
    }

    #[tokio::test]
    async fn srv_query_raises_unsupported_type_after_success() {
        let name_lookup = FakeNameLookup::new(vec![Ok(Some(
            "{'ds':[[1,8,2,'ab']],'ns':['a.example.com']}".to_string(),
        ))]);
        let facility = FakeDnssecFacility::new(
            vec![Ok(NsProbe { status_ok: true, have_data: true, bogus: false, address: Some("10.0.0.1".to_string()) })],
            vec![Ok(AuthoritativeProbe { status_ok: true, secure: true, bogus: false, have_data: true, value: None })],
        );
        let r = resolver(name_lookup, facility);
        let err = r.resolve("testdomain.bit", "SRV").await.unwrap_err();
        assert!(matches!(err, BitResolverError::UnsupportedType(_)));
    }

    #[tokio::test]
    async fn missing_ds_fails_before_any_resolver_context() {
        let name_lookup = FakeNameLookup::new(vec![Ok(Some(
            "{'ds':[],'ns':['a.example.com']}".to_string(),
        ))]);
        let facility = FakeDnssecFacility::new(vec![], vec![]);
        let r = resolver(name_lookup, facility);
        let err = r.resolve("testdomain.bit", "A").await.unwrap_err();
        assert!(matches!(err, BitResolverError::NoDSRecord(_)));
    }
}
