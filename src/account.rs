use serde::{Deserialize, Serialize};

/// A wallet account as reported by the provider.
///
/// The same shape, serialized camelCase, is the session record persisted
/// across page reloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub address: String,
    pub chain_id: u64,
    pub is_connected: bool,
}

/// Payload of a successful provider connect call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectResult {
    pub accounts: Vec<String>,
    pub chain_id: u64,
}
