//! `.bit` name validation and SLD extraction.

use crate::error::{BitResolverError, Result};

/// A validated `.bit` name, split into its canonical second-level domain and the
/// Namecoin `d/` label that governs its blockchain record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitName {
    /// `d/`-namespace label, e.g. `"example"` for `www.example.bit`.
    pub sld_label: String,
    /// Canonical SLD with trailing dot, e.g. `"example.bit."`.
    pub sld: String,
}

impl BitName {
    /// Validate and normalize a raw query name.
    ///
    /// Trims one trailing dot, requires the result to end in `.bit`, and requires at
    /// least two labels (`.bit` itself plus the SLD). Anything else is `InvalidName`.
    pub fn parse(name: &str) -> Result<Self> {
        let trimmed = name.strip_suffix('.').unwrap_or(name);

        if !trimmed.ends_with(".bit") && trimmed != "bit" {
            return Err(BitResolverError::InvalidName(name.to_string()));
        }

        let labels: Vec<&str> = trimmed.split('.').rev().collect();
        if labels.len() < 2 || labels[0] != "bit" {
            return Err(BitResolverError::InvalidName(name.to_string()));
        }

        let sld_label = labels[1].to_string();
        let sld = format!("{sld_label}.bit.");

        Ok(Self { sld_label, sld })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_subdomain_under_sld() {
        let n = BitName::parse("www.example.bit").unwrap();
        assert_eq!(n.sld_label, "example");
        assert_eq!(n.sld, "example.bit.");
    }

    #[test]
    fn accepts_bare_sld_with_trailing_dot() {
        let n = BitName::parse("example.bit.").unwrap();
        assert_eq!(n.sld_label, "example");
        assert_eq!(n.sld, "example.bit.");
    }

    #[test]
    fn rejects_non_bit_tld() {
        let err = BitName::parse("www.example.com").unwrap_err();
        assert!(matches!(err, BitResolverError::InvalidName(_)));
    }

    #[test]
    fn rejects_bare_tld_with_no_sld() {
        let err = BitName::parse("bit").unwrap_err();
        assert!(matches!(err, BitResolverError::InvalidName(_)));
    }

    #[test]
    fn rejects_empty_name() {
        let err = BitName::parse("").unwrap_err();
        assert!(matches!(err, BitResolverError::InvalidName(_)));
    }

    #[test]
    fn uses_label_immediately_under_bit_as_sld() {
        let n = BitName::parse("deep.sub.domain.example.bit").unwrap();
        assert_eq!(n.sld_label, "example");
    }
}
