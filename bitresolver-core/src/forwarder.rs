//! Scratch forward-zone config file lifecycle.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Literal forward-zone config content, written to a scratch file and
/// loaded into a per-NS resolver context.
fn forward_zone_config(sld: &str, ns_ip: &str) -> String {
    format!(
        "forward-zone:\n    name: \"{sld}\"\n    forward-addr: {ns_ip}\n    forward-first: yes\n"
    )
}

/// A scratch forward-zone config file, unlinked on drop.
///
/// Exactly one exists per in-flight NS attempt: constructing it writes the
/// file; dropping it removes the file unconditionally, on every exit path including a panic
/// unwind, without needing explicit cleanup at each of the authoritative-query stage's
/// return points.
pub struct ScratchConfig {
    path: PathBuf,
}

impl ScratchConfig {
    pub fn create(scratch_dir: &Path, sld: &str, ns_ip: &str) -> Result<Self> {
        let file_name = format!("bitresolver-{}.conf", uuid::Uuid::new_v4());
        let path = scratch_dir.join(file_name);
        fs::write(&path, forward_zone_config(sld, ns_ip))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchConfig {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            log::warn!("[forwarder] failed to unlink scratch config {:?}: {e}", self.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_exact_forward_zone_content() {
        let dir = std::env::temp_dir();
        let cfg = ScratchConfig::create(&dir, "testdomain.bit.", "127.0.0.1").unwrap();
        let contents = fs::read_to_string(cfg.path()).unwrap();
        assert_eq!(
            contents,
            "forward-zone:\n    name: \"testdomain.bit.\"\n    forward-addr: 127.0.0.1\n    forward-first: yes\n"
        );
    }

    #[test]
    fn unlinks_on_drop() {
        let dir = std::env::temp_dir();
        let path = {
            let cfg = ScratchConfig::create(&dir, "testdomain.bit.", "127.0.0.1").unwrap();
            cfg.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn each_instance_gets_a_distinct_path() {
        let dir = std::env::temp_dir();
        let a = ScratchConfig::create(&dir, "testdomain.bit.", "127.0.0.1").unwrap();
        let b = ScratchConfig::create(&dir, "testdomain.bit.", "127.0.0.1").unwrap();
        assert_ne!(a.path(), b.path());
    }
}
