use async_trait::async_trait;

use super::{
    account::{Account, ConnectResult},
    connector::{ConnectorConfig, ConnectorKind},
};

/// Failures reported by the connector provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The user explicitly declined the request in their wallet.
    #[error("user rejected the request")]
    UserRejected,

    /// A structured failure carrying a human-readable message.
    #[error("{0}")]
    Rpc(String),

    /// A failure with no usable shape.
    #[error("unknown provider error")]
    Unknown,
}

pub type AccountCallback = Box<dyn Fn(Option<Account>)>;
pub type ChainIdCallback = Box<dyn Fn(Option<u64>)>;

/// The runtime capability that performs the actual wallet handshake and chain
/// RPC calls. The session manager owns no transport of its own; everything
/// below this seam is opaque to it.
#[async_trait(?Send)]
pub trait ConnectorProvider {
    /// Live account snapshot, `None` when no wallet is connected.
    fn account(&self) -> Option<Account>;

    async fn connect(&self, config: &ConnectorConfig) -> Result<ConnectResult, ProviderError>;

    async fn disconnect(&self) -> Result<(), ProviderError>;

    /// Re-establishes whichever of `connectors` the environment last used.
    async fn reconnect(&self, connectors: &[ConnectorKind]) -> Result<Account, ProviderError>;

    async fn switch_chain(&self, chain_id: u64) -> Result<(), ProviderError>;

    fn watch_account(&self, on_change: AccountCallback) -> WatchHandle;

    fn watch_chain_id(&self, on_change: ChainIdCallback) -> WatchHandle;
}

/// Disposer returned by watcher registration; dropping it unregisters the
/// watcher.
pub struct WatchHandle {
    disposer: Option<Box<dyn FnOnce()>>,
}

impl WatchHandle {
    pub fn new(disposer: impl FnOnce() + 'static) -> Self {
        Self { disposer: Some(Box::new(disposer)) }
    }

    /// A handle with nothing to unregister.
    pub fn noop() -> Self {
        Self { disposer: None }
    }

    pub fn unwatch(self) {}
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        if let Some(disposer) = self.disposer.take() {
            disposer();
        }
    }
}
