//! Fetch and parse of the Namecoin `d/<label>` blockchain record.

use serde::Deserialize;

use crate::error::{BitResolverError, Result};
use crate::traits::NameLookup;

/// A single DS delegation tuple as stored on-chain: `(key_tag, algorithm, digest_type, digest)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DsEntry {
    pub key_tag: u16,
    pub algorithm: u8,
    pub digest_type: u8,
    pub digest_material: String,
}

/// The parsed contents of a `d/` blockchain name record relevant to this pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockchainRecord {
    pub ns: Vec<String>,
    pub ds: Vec<DsEntry>,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    ns: Vec<String>,
    #[serde(default)]
    ds: Vec<(u16, u8, u8, String)>,
}

impl BlockchainRecord {
    /// Fetch and parse `d/{sld_label}`'s record.
    ///
    /// Fails with [`BitResolverError::NoNameValue`] on an absent name, a missing `value`
    /// field, or a `value` that doesn't parse as JSON even after the `'` → `"` substitution
    /// the on-chain encoding requires. Fails with [`BitResolverError::NoDSRecord`] or
    /// [`BitResolverError::NoNameserver`] when the parsed record has empty/missing `ds`/`ns`.
    pub async fn fetch(name_lookup: &dyn NameLookup, sld_label: &str) -> Result<Self> {
        let full_name = format!("d/{sld_label}");

        let raw_value = name_lookup
            .lookup_value(&full_name)
            .await?
            .ok_or_else(|| BitResolverError::NoNameValue(sld_label.to_string()))?;

        Self::parse(&raw_value, sld_label)
    }

    /// Parse a raw single-quoted JSON-like blockchain value string.
    pub(crate) fn parse(raw_value: &str, sld_label: &str) -> Result<Self> {
        let substituted = raw_value.replace('\'', "\"");

        let parsed: RawRecord = serde_json::from_str(&substituted)
            .map_err(|_| BitResolverError::NoNameValue(sld_label.to_string()))?;

        if parsed.ds.is_empty() {
            return Err(BitResolverError::NoDSRecord(sld_label.to_string()));
        }
        if parsed.ns.is_empty() {
            return Err(BitResolverError::NoNameserver(sld_label.to_string()));
        }

        Ok(Self {
            ns: parsed.ns,
            ds: parsed
                .ds
                .into_iter()
                .map(|(key_tag, algorithm, digest_type, digest_material)| DsEntry {
                    key_tag,
                    algorithm,
                    digest_type,
                    digest_material,
                })
                .collect(),
        })
    }
}
