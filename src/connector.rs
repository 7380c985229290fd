use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ethereum mainnet.
pub const MAINNET_CHAIN_ID: u64 = 1;

/// Holesky test network, the single supported target of `switch_network`.
pub const HOLESKY_CHAIN_ID: u64 = 17000;

/// Chain the manager asks the provider to switch to.
pub const TARGET_CHAIN_ID: u64 = HOLESKY_CHAIN_ID;

/// Application display name handed to the Coinbase connector.
pub const COINBASE_APP_NAME: &str = "Wallet Hub";

/// WalletConnect cloud project identifier.
pub const WALLETCONNECT_PROJECT_ID: &str = "3fbb6bba6f1de962d911bb5b5c3dba68";

/// Connector preference order handed to the provider on reconnect.
pub const SUPPORTED_CONNECTORS: [ConnectorKind; 3] =
    [ConnectorKind::Injected, ConnectorKind::Coinbase, ConnectorKind::WalletConnect];

/// The closed set of ways to reach a user's wallet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectorKind {
    #[serde(rename = "injected")]
    Injected,
    #[serde(rename = "coinbase")]
    Coinbase,
    #[serde(rename = "walletConnect")]
    WalletConnect,
}

/// Fixed construction parameters for one connector kind. None of these are
/// configurable at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectorConfig {
    Injected,
    Coinbase { app_name: &'static str },
    WalletConnect { project_id: &'static str, show_qr_modal: bool },
}

impl ConnectorKind {
    pub fn config(self) -> ConnectorConfig {
        match self {
            ConnectorKind::Injected => ConnectorConfig::Injected,
            ConnectorKind::Coinbase => ConnectorConfig::Coinbase { app_name: COINBASE_APP_NAME },
            ConnectorKind::WalletConnect => ConnectorConfig::WalletConnect {
                project_id: WALLETCONNECT_PROJECT_ID,
                show_qr_modal: true,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConnectorKind::Injected => "injected",
            ConnectorKind::Coinbase => "coinbase",
            ConnectorKind::WalletConnect => "walletConnect",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown connector kind: {0}")]
pub struct UnknownConnectorError(String);

impl FromStr for ConnectorKind {
    type Err = UnknownConnectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "injected" => Ok(ConnectorKind::Injected),
            "coinbase" => Ok(ConnectorKind::Coinbase),
            "walletConnect" => Ok(ConnectorKind::WalletConnect),
            other => Err(UnknownConnectorError(other.to_string())),
        }
    }
}

impl Display for ConnectorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
