//! Wire types for the JSON-RPC 1.0 envelope namecoind speaks.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub(crate) struct RpcRequest<'a> {
    pub method: &'a str,
    pub params: Vec<Value>,
    pub id: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RpcResponse {
    pub result: Option<Value>,
    pub error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RpcErrorBody {
    pub message: Option<String>,
    pub code: Option<i64>,
}

/// The subset of a `name_show` result this crate's consumers care about.
///
/// `name_show` returns more fields (`name`, `address`, `expires_in`, `txid`, ...); only
/// only `value` is consumed by this crate, so everything else is kept as
/// an opaque JSON blob rather than modeled field-by-field.
#[derive(Debug, Clone, Deserialize)]
pub struct NameRecord {
    pub value: Option<String>,
    #[serde(flatten)]
    pub extra: Value,
}
