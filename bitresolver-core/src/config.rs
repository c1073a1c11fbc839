//! Construction-time configuration for a [`crate::BitResolver`].
//!
//! Mirrors the resolver's constructor options. The struct is immutable once
//! built and is read-only for the lifetime of every `resolve()` call it backs.

use std::path::PathBuf;

const DEFAULT_RESOLV_CONF: &str = "/etc/resolv.conf";
const DEFAULT_ROOT_KEY: &str = "/usr/local/etc/unbound/root.key";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8336;

/// Immutable configuration shared across every stage of a resolve call.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Path to the system stub resolver config consulted for nameserver resolution.
    pub resolv_conf: PathBuf,
    /// Path to the public DNSSEC trust anchor file (used only to resolve NS names).
    pub dnssec_root_key: PathBuf,
    /// Namecoin node RPC hostname or IP.
    pub host: String,
    /// Namecoin node RPC port.
    pub port: u16,
    /// Namecoin node RPC username (empty disables HTTP Basic auth).
    pub user: String,
    /// Namecoin node RPC password (empty disables HTTP Basic auth).
    pub password: String,
    /// Scratch directory for forward-zone config files. `None` uses the OS temp dir.
    pub temp_dir: Option<PathBuf>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            resolv_conf: PathBuf::from(DEFAULT_RESOLV_CONF),
            dnssec_root_key: PathBuf::from(DEFAULT_ROOT_KEY),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            user: String::new(),
            password: String::new(),
            temp_dir: None,
        }
    }
}

impl ResolverConfig {
    /// Directory scratch forward-zone configs are written into.
    #[must_use]
    pub fn scratch_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}
