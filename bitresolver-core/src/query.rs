//! Query-type recognition.
//!
//! This module draws a line between two failure modes: a token that isn't a
//! recognizable DNS record type name at all is rejected immediately as `InvalidQueryType`,
//! before any external call is made. A token that *is* a real record type but falls
//! outside `{A, AAAA, CNAME, TXT, MX}` (e.g. `SRV`) is carried all the way through blockchain
//! fetch, NS resolution, and the authoritative query, and only becomes `UnsupportedType`
//! once that query has already succeeded — it is not rejected up front.

use std::str::FromStr;

use trust_dns_proto::rr::RecordType;

use crate::error::{BitResolverError, Result};

/// A DNS record type token, parsed but not yet checked against the supported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Qtype(RecordType);

impl Qtype {
    pub(crate) fn from_record_type(rtype: RecordType) -> Self {
        Self(rtype)
    }

    #[must_use]
    pub fn as_record_type(self) -> RecordType {
        self.0
    }

    /// True iff this type is one of `{A, AAAA, CNAME, TXT, MX}`.
    #[must_use]
    pub fn is_supported(self) -> bool {
        matches!(
            self.0,
            RecordType::A | RecordType::AAAA | RecordType::CNAME | RecordType::TXT | RecordType::MX
        )
    }

    /// Parse a query type name as given by a caller (e.g. `"A"`, `"txt"`, `"SRV"`).
    ///
    /// Fails with [`BitResolverError::InvalidQueryType`] only when the token isn't a
    /// recognizable DNS record type name at all. A recognizable-but-unsupported type parses
    /// successfully here — its rejection is deferred to [`Self::is_supported`].
    pub fn parse(raw: &str) -> Result<Self> {
        RecordType::from_str(&raw.to_ascii_uppercase())
            .map(Self)
            .map_err(|_| BitResolverError::InvalidQueryType(raw.to_string()))
    }
}
