//! Typed extraction over a raw `libunbound::Answer`'s rdata iterator.
//!
//! The DNSSEC facility this pipeline relies on is described in terms of typed accessors
//! (`as_address_list`, `as_domain_list`, `as_mx_list`) on the answer's result data; the
//! `libunbound` binding instead exposes a single `rdata()` iterator of raw [`RData`]. This
//! module is the thin adapter that bridges the two, only for the five supported query types
//! — callers are expected to have already checked [`crate::query::Qtype::is_supported`].

use libunbound::Answer;
use trust_dns_proto::rr::{RData, RecordType};

use crate::query::Qtype;

/// The single extracted value for one of the five supported query types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedValue {
    Address(String),
    Domain(String),
    Mx { preference: u16, exchange: String },
}

impl ResolvedValue {
    /// Extract the first usable rdata item matching `qtype`.
    ///
    /// Returns `None` both when `qtype` is unsupported and when no matching rdata item is
    /// present; malformed rdata entries are skipped rather than treated as fatal.
    #[must_use]
    pub fn extract(answer: &Answer, qtype: Qtype) -> Option<Self> {
        if !qtype.is_supported() {
            return None;
        }
        answer.rdata().find_map(|item| {
            let rdata = item.ok()?;
            Self::from_rdata(qtype.as_record_type(), &rdata)
        })
    }

    fn from_rdata(record_type: RecordType, rdata: &RData) -> Option<Self> {
        match (record_type, rdata) {
            (RecordType::A, RData::A(addr)) => Some(Self::Address(addr.to_string())),
            (RecordType::AAAA, RData::AAAA(addr)) => Some(Self::Address(addr.to_string())),
            (RecordType::CNAME, RData::CNAME(name)) => Some(Self::Domain(name.to_string())),
            (RecordType::TXT, RData::TXT(txt)) => Some(Self::Domain(
                txt.txt_data()
                    .iter()
                    .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                    .collect::<Vec<_>>()
                    .join(""),
            )),
            (RecordType::MX, RData::MX(mx)) => Some(Self::Mx {
                preference: mx.preference(),
                exchange: mx.exchange().to_string(),
            }),
            _ => None,
        }
    }
}
