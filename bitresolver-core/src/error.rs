//! Error taxonomy for the `.bit` trust-bootstrap pipeline.
//!
//! One variant per distinct failure this pipeline can report. Propagation policy lives in
//! [`crate::resolver`], not here — this module only names the outcomes.

use serde::Serialize;
use thiserror::Error;

use bitresolver_rpc::NamecoinError;

/// Errors raised while resolving a `.bit` name.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum BitResolverError {
    /// Name does not end in `.bit` after trimming, or has fewer than 2 labels.
    #[error("Invalid .bit name: {0}")]
    InvalidName(String),

    /// `qtype` is not a recognizable DNS record type name.
    #[error("Invalid query type: {0}")]
    InvalidQueryType(String),

    /// The blockchain returned no name, or its `value` field was missing/unparseable.
    #[error("No name value found for d/{0}")]
    NoNameValue(String),

    /// The blockchain record has no `ds` entries.
    #[error("No DS record present for {0}")]
    NoDSRecord(String),

    /// The blockchain record has no `ns` entries.
    #[error("No nameserver present for {0}")]
    NoNameserver(String),

    /// The configured public DNSSEC trust anchor file is missing or inaccessible.
    #[error("Trust anchor is missing or inaccessible: {0}")]
    TrustAnchorMissing(String),

    /// Every advertised nameserver name failed to resolve to a usable A record.
    #[error("No valid nameserver resolution for {0}")]
    InvalidNameserver(String),

    /// The authoritative answer lacked the secure flag on every attempted nameserver.
    #[error("DNSSEC resolution returned an insecure result for {0} [{1}]")]
    InsecureResult(String, String),

    /// The authoritative answer was flagged bogus on every attempted nameserver.
    #[error("DNSSEC resolution returned a bogus result for {0} [{1}]")]
    BogusResult(String, String),

    /// The authoritative answer carried no data on every attempted nameserver.
    #[error("DNSSEC resolution returned an empty result for {0} [{1}]")]
    EmptyResult(String, String),

    /// The query succeeded but the record type is outside {A, AAAA, CNAME, TXT, MX}.
    #[error("Unsupported DNS query type: {0}")]
    UnsupportedType(String),

    /// Failure reaching or parsing a response from the Namecoin RPC endpoint.
    #[error("Namecoin RPC error: {0}")]
    Rpc(String),

    /// An I/O failure while materializing or removing a scratch forward-zone config.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<NamecoinError> for BitResolverError {
    fn from(e: NamecoinError) -> Self {
        Self::Rpc(e.to_string())
    }
}

impl From<std::io::Error> for BitResolverError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BitResolverError>;
