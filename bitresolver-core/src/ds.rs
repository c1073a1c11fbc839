//! DS digest canonicalization and trust-anchor string construction.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use regex::Regex;
use std::sync::OnceLock;

use crate::blockchain::DsEntry;

fn hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9a-fA-F]*$").expect("static regex is valid"))
}

/// Canonicalize a DS digest to uppercase hex.
///
/// Digests already matching `^[0-9a-fA-F]*$` pass through verbatim (case preserved).
/// Anything else is treated as standard base64, decoded, and re-encoded as uppercase hex.
#[must_use]
pub fn canonicalize_digest(digest_material: &str) -> String {
    if hex_pattern().is_match(digest_material) {
        return digest_material.to_string();
    }

    match BASE64.decode(digest_material) {
        Ok(bytes) => hex::encode_upper(bytes),
        Err(_) => digest_material.to_string(),
    }
}

/// Build the presentation-format DS trust-anchor line for the first DS entry of a record,
/// for the chosen DS entry.
#[must_use]
pub fn trust_anchor_line(sld: &str, ds: &DsEntry) -> String {
    let hex_digest = canonicalize_digest(&ds.digest_material);
    format!(
        "{sld} IN DS {} {} {} {hex_digest}",
        ds.key_tag, ds.algorithm, ds.digest_type
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_digest_canonicalizes_to_uppercase_hex() {
        let hex = canonicalize_digest("NZbut7iqVxCP0IGCX7J1DA/DrbrkFJzEML1PetAxVzQ=");
        assert_eq!(hex, "3596EEB7B8AA57108FD081825FB2750C0FC3ADBAE4149CC430BD4F7AD0315734");
    }

    #[test]
    fn hex_digest_passes_through_verbatim() {
        let hex = canonicalize_digest("3596eeb7b8aa57108fd081825fb2750c0fc3adbae4149cc430bd4f7ad0315734");
        assert_eq!(hex, "3596eeb7b8aa57108fd081825fb2750c0fc3adbae4149cc430bd4f7ad0315734");
    }

    #[test]
    fn builds_expected_trust_anchor_line() {
        let entry = DsEntry {
            key_tag: 40039,
            algorithm: 8,
            digest_type: 2,
            digest_material: "NZbut7iqVxCP0IGCX7J1DA/DrbrkFJzEML1PetAxVzQ=".to_string(),
        };
        let line = trust_anchor_line("testdomain.bit.", &entry);
        assert_eq!(
            line,
            "testdomain.bit. IN DS 40039 8 2 3596EEB7B8AA57108FD081825FB2750C0FC3ADBAE4149CC430BD4F7AD0315734"
        );
    }
}
