//! Transaction log codec
//!
//! Encodes the transaction sequence as a pretty-printed JSON document and
//! decodes it back with exact field round-trip. The log is a single
//! self-describing object so the file stays inspectable and diffable;
//! direction and account are encoded as named tokens, and unknown extra
//! fields on a record are ignored so newer schemas remain readable.

use serde::{Deserialize, Serialize};

use crate::error::{MarbleError, MarbleResult};
use crate::models::Transaction;

/// On-disk shape of the transaction log
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TransactionLog {
    #[serde(default)]
    transactions: Vec<Transaction>,
}

/// Encode a transaction sequence, preserving its order
pub fn encode(transactions: &[Transaction]) -> MarbleResult<String> {
    let log = TransactionLog {
        transactions: transactions.to_vec(),
    };
    serde_json::to_string_pretty(&log).map_err(|e| {
        MarbleError::StoreWrite(format!("Failed to encode transaction log: {}", e))
    })
}

/// Decode a transaction sequence from the durable store's bytes
///
/// Empty or whitespace-only input is an empty log. Anything else must be
/// a complete log document; an unrecognizable document is reported as a
/// malformed log, never as a shorter or empty sequence.
pub fn decode(bytes: &[u8]) -> MarbleResult<Vec<Transaction>> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| MarbleError::MalformedLog(format!("Log is not valid UTF-8: {}", e)))?;

    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let log: TransactionLog = serde_json::from_str(text)
        .map_err(|e| MarbleError::MalformedLog(format!("Failed to parse transaction log: {}", e)))?;

    Ok(log.transactions)
}
