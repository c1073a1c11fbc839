//! Error type for the Namecoin JSON-RPC client.

use thiserror::Error;

/// Error raised by the Namecoin JSON-RPC shim.
///
/// A code of `-4` ("name not found") is handled by the client itself and never reaches
/// the caller as an error — see [`crate::NamecoinClient::lookup`].
#[derive(Error, Debug, Clone)]
#[error("Namecoin RPC error [code {code}]: {message}")]
pub struct NamecoinError {
    pub message: String,
    pub code: i64,
}

impl NamecoinError {
    #[must_use]
    pub fn new(message: impl Into<String>, code: i64) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }

    /// The sentinel "name not found" code used by namecoind's `name_show`.
    pub const NAME_NOT_FOUND: i64 = -4;
}

pub type Result<T> = std::result::Result<T, NamecoinError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code_and_message() {
        let e = NamecoinError::new("name not found", -4);
        assert_eq!(e.to_string(), "Namecoin RPC error [code -4]: name not found");
    }
}
