//! Namecoin JSON-RPC client.
//!
//! Exposes exactly one operation,
//! [`NamecoinClient::lookup`], used by `bitresolver-core` to fetch a second-level
//! domain's blockchain-stored delegation record.

mod client;
mod error;
mod types;

pub use client::NamecoinClient;
pub use error::{NamecoinError, Result};
pub use types::NameRecord;
