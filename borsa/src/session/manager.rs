//! Session lifecycle and transaction-submission facade.
//!
//! [`SessionManager`] is the only component that publishes to the
//! [`SessionStore`]. It owns the provider and the authorized account
//! exclusively; consumers only ever read published [`SessionInfo`]
//! snapshots.
//!
//! # Ordering
//!
//! State publications are ordered by completion: every session-mutating
//! operation reads a generation counter when it starts, and a result whose
//! generation is stale by the time it lands is discarded instead of
//! published. `disconnect` bumps the counter synchronously, so a
//! disconnect issued while a connect is pending always wins: the
//! connect's eventual result is dropped, never resurrected.
//!
//! Listeners are notified synchronously while the manager serializes the
//! publication; a listener must not call back into the manager from inside
//! its notification.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use alloy::primitives::Address;
use alloy::primitives::utils::{format_units, parse_ether};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::fmt;
use crate::provider::{ProviderError, SharedProvider, SharedToken, TokenContract};
use crate::token::{TokenSummary, format_amount, parse_amount};

use super::{SessionInfo, SessionStore};

const LOCK_POISONED: &str = "session manager lock poisoned";

/// Mediates all connect/disconnect/transact operations against the wallet
/// provider.
///
/// Constructed with `None` when the host environment has no wallet
/// capability; explicit connects then fail with
/// [`Error::ProviderUnavailable`] while the startup probe stays silent.
pub struct SessionManager {
    provider: Option<SharedProvider>,
    store: Arc<SessionStore>,
    account: Mutex<Option<Address>>,
    generation: AtomicU64,
}

impl SessionManager {
    /// Create a manager over an optional provider, with an empty session.
    #[must_use]
    pub fn new(provider: Option<SharedProvider>) -> Self {
        Self {
            provider,
            store: Arc::new(SessionStore::new()),
            account: Mutex::new(None),
            generation: AtomicU64::new(0),
        }
    }

    /// The store consumers subscribe to.
    #[must_use]
    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// The latest published snapshot.
    #[must_use]
    pub fn current(&self) -> Option<SessionInfo> {
        self.store.current()
    }

    /// Whether a signing handle is currently held.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.current_account().is_some()
    }

    /// Connect to the wallet provider and publish the resulting session.
    ///
    /// Returns `Ok(true)` on success. Provider failures during the connect
    /// sequence are logged and surfaced as `Ok(false)`; they are
    /// non-fatal and leave the previous state untouched.
    ///
    /// # Errors
    ///
    /// [`Error::ProviderUnavailable`] when no provider exists in this
    /// environment.
    pub async fn connect(&self) -> Result<bool> {
        let provider = self.provider.clone().ok_or(Error::ProviderUnavailable)?;
        let generation = self.begin_operation();

        match Self::establish(&provider).await {
            Ok((address, session)) => {
                let mut account = self.account.lock().expect(LOCK_POISONED);
                if !self.is_current(generation) {
                    debug!("stale connect result discarded");
                    return Ok(false);
                }
                *account = Some(address);
                info!(address = %address, chain_id = session.chain_id, "wallet connected");
                self.store.publish(Some(session));
                Ok(true)
            }
            Err(error) => {
                warn!(%error, "wallet connect failed");
                Ok(false)
            }
        }
    }

    /// Drop the signing handle and publish an empty session.
    ///
    /// Never fails, and wins against any still-pending connect or refresh.
    pub fn disconnect(&self) {
        self.begin_operation();
        let mut account = self.account.lock().expect(LOCK_POISONED);
        *account = None;
        self.store.publish(None);
        info!("wallet disconnected");
    }

    /// Probe for an existing wallet connection at startup.
    ///
    /// Runs the connect sequence silently: provider absence or failure
    /// leaves the session empty with no surfaced error. Invoked once by
    /// the hosting shell, since connection state is rebuilt from scratch
    /// each process start.
    pub async fn probe_existing_connection(&self) {
        let Some(provider) = self.provider.clone() else {
            debug!("no wallet provider detected");
            return;
        };
        let generation = self.begin_operation();

        match Self::establish(&provider).await {
            Ok((address, session)) => {
                let mut account = self.account.lock().expect(LOCK_POISONED);
                if !self.is_current(generation) {
                    debug!("stale probe result discarded");
                    return;
                }
                *account = Some(address);
                info!(address = %address, chain_id = session.chain_id, "existing wallet connection restored");
                self.store.publish(Some(session));
            }
            Err(error) => {
                debug!(%error, "no existing wallet connection");
            }
        }
    }

    /// Re-read address, balance, and network from the provider and
    /// republish.
    ///
    /// Called after every state-mutating chain operation to keep the
    /// published balance current. A transient failure is logged only; the
    /// session is not cleared, and a result landing after a disconnect is
    /// discarded.
    pub async fn refresh_session(&self) {
        let Some(provider) = self.provider.clone() else {
            return;
        };
        let Some(address) = self.current_account() else {
            return;
        };
        let generation = self.generation.load(Ordering::SeqCst);

        match Self::snapshot(&provider, address).await {
            Ok(session) => {
                let account = self.account.lock().expect(LOCK_POISONED);
                if account.is_some() && self.is_current(generation) {
                    self.store.publish(Some(session));
                } else {
                    debug!("stale session refresh discarded");
                }
            }
            Err(error) => {
                warn!(%error, "session refresh failed");
            }
        }
    }

    /// Send a native-currency transfer and await on-chain acceptance.
    ///
    /// `amount` is a decimal string in whole native-currency units, parsed
    /// with fixed-point conversion. On success the session is refreshed
    /// and the mined transaction hash returned.
    ///
    /// # Errors
    ///
    /// [`Error::NotConnected`] when no signing handle is held (the
    /// provider is not called); provider and confirmation failures
    /// propagate to the caller.
    pub async fn send_native_transfer(&self, to: Address, amount: &str) -> Result<String> {
        let provider = self.connected_provider()?;
        let value = parse_ether(amount).map_err(ProviderError::units)?;

        let pending = provider.send_native(to, value).await?;
        let hash = pending
            .confirmed()
            .await
            .map_err(|e| Error::Transaction(e.to_string()))?;

        info!(%hash, "native transfer confirmed");
        self.refresh_session().await;
        Ok(hash)
    }

    /// Contract handle for the ERC-20 token at `address`, bound to the
    /// current signer.
    ///
    /// # Errors
    ///
    /// [`Error::NotConnected`] when no signing handle is held.
    pub async fn token(&self, address: Address) -> Result<SharedToken> {
        let provider = self.connected_provider()?;
        Ok(provider.token(address).await?)
    }

    /// Read a token's identity plus the connected account's position,
    /// scaling amounts by the contract's reported `decimals`.
    ///
    /// # Errors
    ///
    /// [`Error::NotConnected`] when disconnected; read failures propagate.
    pub async fn load_token_summary(&self, token_address: Address) -> Result<TokenSummary> {
        let account = self.connected_account()?;
        let contract = self.token(token_address).await?;

        let name = contract.name().await?;
        let symbol = contract.symbol().await?;
        let decimals = contract.decimals().await?;
        let total_supply = contract.total_supply().await?;
        let balance = contract.balance_of(account).await?;

        Ok(TokenSummary {
            name,
            symbol,
            decimals,
            total_supply: format_amount(total_supply, decimals).map_err(ProviderError::units)?,
            balance: format_amount(balance, decimals).map_err(ProviderError::units)?,
        })
    }

    /// Transfer tokens through a contract handle and await acceptance.
    ///
    /// `amount` is a decimal string scaled up by the contract's reported
    /// `decimals` before submission. On success the session is refreshed
    /// and the mined transaction hash returned.
    ///
    /// # Errors
    ///
    /// [`Error::NotConnected`] when disconnected; contract and
    /// confirmation failures propagate.
    pub async fn send_token_transfer(
        &self,
        contract: &dyn TokenContract,
        to: Address,
        amount: &str,
    ) -> Result<String> {
        self.connected_account()?;
        let decimals = contract.decimals().await?;
        let value = parse_amount(amount, decimals).map_err(ProviderError::units)?;

        let pending = contract.transfer(to, value).await?;
        let hash = pending
            .confirmed()
            .await
            .map_err(|e| Error::Transaction(e.to_string()))?;

        info!(%hash, "token transfer confirmed");
        self.refresh_session().await;
        Ok(hash)
    }

    /// Sign an arbitrary message with the connected account (EIP-191).
    ///
    /// # Errors
    ///
    /// [`Error::NotConnected`] when disconnected; signing failures
    /// propagate.
    pub async fn sign_message(&self, message: &str) -> Result<String> {
        let provider = self.connected_provider()?;
        Ok(provider.sign_message(message.as_bytes()).await?)
    }

    /// Current gas price as a gwei decimal string.
    ///
    /// # Errors
    ///
    /// [`Error::ProviderUnavailable`] when no provider exists; query
    /// failures propagate.
    pub async fn gas_price_gwei(&self) -> Result<String> {
        let provider = self.provider.clone().ok_or(Error::ProviderUnavailable)?;
        let price = provider.gas_price().await?;
        let gwei = format_units(price, "gwei").map_err(ProviderError::units)?;
        Ok(fmt::trim_decimal_zeros(&gwei).to_string())
    }

    async fn establish(provider: &SharedProvider) -> std::result::Result<(Address, SessionInfo), ProviderError> {
        let address = provider.request_account().await?;
        let session = Self::snapshot(provider, address).await?;
        Ok((address, session))
    }

    async fn snapshot(
        provider: &SharedProvider,
        address: Address,
    ) -> std::result::Result<SessionInfo, ProviderError> {
        let balance = provider.balance_of(address).await?;
        let chain_id = provider.chain_id().await?;
        Ok(SessionInfo::new(address, balance, chain_id))
    }

    fn begin_operation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    fn current_account(&self) -> Option<Address> {
        *self.account.lock().expect(LOCK_POISONED)
    }

    fn connected_account(&self) -> Result<Address> {
        self.current_account().ok_or(Error::NotConnected)
    }

    fn connected_provider(&self) -> Result<SharedProvider> {
        self.connected_account()?;
        self.provider.clone().ok_or(Error::ProviderUnavailable)
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("connected", &self.is_connected())
            .finish_non_exhaustive()
    }
}
