//! Response schemas, decoded at the operation boundary.
//!
//! Records stay untyped JSON. A list field that is missing, `null`, or not
//! an array decodes to an empty list instead of failing.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One row as returned by the backend, stored verbatim.
pub type Record = Value;

/// `GET /api/blockAndTxList/{channel}/{offset}`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct BlockListPayload {
    #[serde(default, deserialize_with = "rows_or_empty")]
    pub rows: Vec<Record>,
}

/// `GET /api/chaincode/{channel}`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ChaincodeListPayload {
    #[serde(default, alias = "rows", deserialize_with = "rows_or_empty")]
    pub chaincode: Vec<Record>,
}

/// `GET /api/channels/info`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ChannelsPayload {
    #[serde(default, deserialize_with = "rows_or_empty")]
    pub channels: Vec<Record>,
}

/// `GET /api/peers/{channel}`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PeerListPayload {
    #[serde(default, alias = "rows", deserialize_with = "rows_or_empty")]
    pub peers: Vec<Record>,
}

/// `GET /api/transaction/{channel}/{txNumber}`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TransactionPayload {
    #[serde(default, alias = "rows")]
    pub row: Option<Record>,
}

/// `GET /api/txList/{channel}/{from}/{to}/`
///
/// Accepts either `{ "rows": [...] }` or a bare array.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Value")]
pub struct TransactionListPayload {
    pub rows: Vec<Record>,
}

impl From<Value> for TransactionListPayload {
    fn from(body: Value) -> Self {
        let rows = match body {
            Value::Array(rows) => rows,
            Value::Object(mut fields) => match fields.remove("rows") {
                Some(Value::Array(rows)) => rows,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };
        Self { rows }
    }
}

fn rows_or_empty<'de, D>(deserializer: D) -> Result<Vec<Record>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(rows) => Ok(rows),
        _ => Ok(Vec::new()),
    }
}
