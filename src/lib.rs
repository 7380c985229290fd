//! Wallet session management for browser dApp front-ends.
//!
//! [`SessionManager`] establishes, observes, persists, and tears down a wallet
//! connection across page reloads. It exposes four replay-latest broadcast
//! channels (account, chain, loading, error) and the commands `connect`,
//! `disconnect`, `reconnect_wallet`, `switch_network`, and `is_connected`.
//! Rendering, routing, and the wallet transport itself live elsewhere: the
//! transport is consumed through the [`ConnectorProvider`] seam, persistence
//! through [`SessionStore`], and user alerts through [`NotificationSink`].

pub mod account;
pub mod channel;
pub mod connector;
pub mod notify;
pub mod provider;
pub mod store;

mod task;

use std::{cell::RefCell, sync::Arc};

use log::{debug, error, warn};

pub use self::{
    account::{Account, ConnectResult},
    channel::{Observable, Subscription},
    connector::{ConnectorConfig, ConnectorKind, SUPPORTED_CONNECTORS, TARGET_CHAIN_ID},
    notify::{LogNotifier, NotificationSink, CONNECTION_FAILED_TITLE},
    provider::{ConnectorProvider, ProviderError, WatchHandle},
    store::{LocalSessionStore, MemoryStore, SessionStore, SESSION_KEY},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("You rejected the wallet connection request.")]
    UserRejected,

    #[error("{0}")]
    Provider(String),

    #[error("corrupted session record: {0}")]
    Persistence(String),

    #[error("An unknown error occurred. Please try again.")]
    Unknown,
}

impl From<ProviderError> for Error {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::UserRejected => Error::UserRejected,
            ProviderError::Rpc(message) if !message.is_empty() => Error::Provider(message),
            ProviderError::Rpc(_) | ProviderError::Unknown => Error::Unknown,
        }
    }
}

/// Owns the wallet session state machine.
///
/// Construct exactly one per application and share it by cloning; every clone
/// is a handle onto the same channels and watchers. Construction runs the
/// restore path once: a persisted session record is published optimistically
/// and validated by a detached reconnect, otherwise the provider is queried
/// live. Overlapping commands are not serialized; the last one to complete
/// wins on the channels.
#[derive(Clone)]
pub struct SessionManager {
    provider: Arc<dyn ConnectorProvider>,
    store: Arc<dyn SessionStore>,
    notifier: Arc<dyn NotificationSink>,
    account: Observable<Option<Account>>,
    chain_id: Observable<Option<u64>>,
    loading: Observable<bool>,
    last_error: Observable<Option<Error>>,
    watchers: Arc<RefCell<Vec<WatchHandle>>>,
}

impl SessionManager {
    pub fn new(
        provider: Arc<dyn ConnectorProvider>,
        store: Arc<dyn SessionStore>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        let manager = Self {
            provider,
            store,
            notifier,
            account: Observable::new(None),
            chain_id: Observable::new(None),
            loading: Observable::new(false),
            last_error: Observable::new(None),
            watchers: Arc::new(RefCell::new(Vec::new())),
        };
        manager.initialize();
        manager
    }

    /// Account channel: `None` while no wallet is connected.
    pub fn account(&self) -> &Observable<Option<Account>> {
        &self.account
    }

    /// Chain channel, kept consistent with the account channel.
    pub fn chain_id(&self) -> &Observable<Option<u64>> {
        &self.chain_id
    }

    /// True while a connect, disconnect, or reconnect is in flight.
    pub fn loading(&self) -> &Observable<bool> {
        &self.loading
    }

    /// Last command failure; reset to `None` at the start of each command.
    pub fn last_error(&self) -> &Observable<Option<Error>> {
        &self.last_error
    }

    /// Connects through the given connector kind.
    ///
    /// The returned future is the completion handle. It never yields an
    /// error: failures are routed to the error channel and the notification
    /// sink, and leave the account, chain, and persisted record untouched.
    pub async fn connect(&self, kind: ConnectorKind) {
        self.begin();
        match self.provider.connect(&kind.config()).await {
            Ok(result) => {
                debug!("connected via {kind} on chain {}", result.chain_id);
                // Re-query rather than trust the connect payload, so the
                // channels always match the provider's view.
                self.publish_account(self.provider.account());
                match result.accounts.first() {
                    Some(address) => self.persist(&Account {
                        address: address.clone(),
                        chain_id: result.chain_id,
                        is_connected: true,
                    }),
                    None => warn!("connect returned no accounts; session not persisted"),
                }
            }
            Err(err) => self.handle_error(err),
        }
        self.loading.publish(false);
    }

    /// Disconnects the wallet and forgets the persisted session.
    ///
    /// A failed disconnect leaves account, chain, and the persisted record in
    /// place, so a later reload still restores the session.
    pub async fn disconnect(&self) {
        self.begin();
        match self.provider.disconnect().await {
            Ok(()) => {
                self.publish_account(None);
                self.store.remove(SESSION_KEY);
            }
            Err(err) => self.handle_error(err),
        }
        self.loading.publish(false);
    }

    /// Asks the provider to re-establish whichever supported connector the
    /// environment last used. Run from the restore path and usable as a
    /// standalone retry.
    pub async fn reconnect_wallet(&self) {
        self.begin();
        match self.provider.reconnect(&SUPPORTED_CONNECTORS).await {
            Ok(account) => self.persist(&account),
            Err(err) => self.handle_error(err),
        }
        self.loading.publish(false);
    }

    /// Switches the active chain to the supported target network.
    ///
    /// Returns `true` on success. Failures are routed to the error channel
    /// and the notification sink before `false` is returned. Unlike the other
    /// commands this does not gate the loading channel.
    pub async fn switch_network(&self) -> bool {
        match self.provider.switch_chain(TARGET_CHAIN_ID).await {
            Ok(()) => true,
            Err(err) => {
                self.handle_error(err);
                false
            }
        }
    }

    /// Live connection flag straight from the provider, never cached state.
    pub fn is_connected(&self) -> bool {
        self.provider.account().map(|account| account.is_connected).unwrap_or(false)
    }

    /// Unregisters both provider watchers. Safe to call when the watchers
    /// never started, and idempotent.
    pub fn dispose(&self) {
        self.watchers.borrow_mut().clear();
    }

    fn initialize(&self) {
        match self.store.get(SESSION_KEY) {
            Some(raw) => match serde_json::from_str::<Account>(&raw) {
                Ok(saved) => {
                    debug!("restoring persisted session for {}", saved.address);
                    // Last known state goes out immediately; the detached
                    // reconnect validates it against the provider.
                    self.publish_account(Some(saved));
                    let this = self.clone();
                    task::spawn(async move { this.reconnect_wallet().await });
                }
                Err(err) => {
                    warn!("{}", Error::Persistence(err.to_string()));
                    self.publish_account(self.provider.account());
                }
            },
            None => self.publish_account(self.provider.account()),
        }
        self.start_watchers();
    }

    fn start_watchers(&self) {
        let account = self.account.clone();
        let chain = self.chain_id.clone();
        let account_watch = self.provider.watch_account(Box::new(move |next| {
            let chain_id = next.as_ref().map(|a| a.chain_id);
            account.publish(next);
            chain.publish(chain_id);
        }));

        let chain = self.chain_id.clone();
        let chain_watch = self.provider.watch_chain_id(Box::new(move |next| chain.publish(next)));

        self.watchers.borrow_mut().extend([account_watch, chain_watch]);
    }

    /// Marks the start of a command: loading up, previous error cleared.
    fn begin(&self) {
        self.loading.publish(true);
        self.last_error.publish(None);
    }

    /// Publishes account and chain together so no subscriber ever observes
    /// them out of step.
    fn publish_account(&self, account: Option<Account>) {
        let chain_id = account.as_ref().map(|a| a.chain_id);
        self.account.publish(account);
        self.chain_id.publish(chain_id);
    }

    fn persist(&self, account: &Account) {
        match serde_json::to_string(account) {
            Ok(json) => self.store.set(SESSION_KEY, &json),
            Err(err) => warn!("failed to serialize session record: {err}"),
        }
    }

    /// Shared failure routing for every command: resolve a user-facing
    /// message, publish on the error channel, alert the notification sink.
    /// Never panics and never aborts the caller.
    fn handle_error(&self, err: ProviderError) {
        let err = Error::from(err);
        let message = err.to_string();
        error!("wallet operation failed: {message}");
        self.last_error.publish(Some(err));
        self.notifier.error(&message, CONNECTION_FAILED_TITLE);
    }
}
