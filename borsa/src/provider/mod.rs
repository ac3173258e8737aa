//! The narrow interface over the external wallet collaborator.
//!
//! The session layer never touches a provider's native shape directly:
//! everything it needs is expressed by [`WalletProvider`] (account
//! authorization, balance and chain queries, signing, native transfers)
//! and [`TokenContract`] (the minimal ERC-20 surface). One adapter exists
//! per target environment; [`rpc::RpcProvider`] covers a JSON-RPC endpoint
//! with a local signer.
//!
//! Provider absence is modeled outside the trait: the session manager is
//! constructed with `Option<Arc<dyn WalletProvider>>`, and `None` means
//! the host environment has no wallet capability.

mod error;
pub mod rpc;

use std::future::Future;
use std::sync::Arc;

use alloy::primitives::{Address, U256};
use async_trait::async_trait;
use futures::future::BoxFuture;

pub use error::ProviderError;

/// A submitted transaction awaiting on-chain acceptance.
///
/// Returned by the mutating provider operations; [`confirmed`] resolves
/// once the transaction is mined and yields its hash.
///
/// [`confirmed`]: Self::confirmed
#[must_use = "awaiting `confirmed` is the only way to observe the transaction hash"]
pub struct PendingTransfer {
    inner: BoxFuture<'static, Result<String, ProviderError>>,
}

impl PendingTransfer {
    /// Wrap a confirmation future.
    pub fn new<F>(fut: F) -> Self
    where
        F: Future<Output = Result<String, ProviderError>> + Send + 'static,
    {
        Self {
            inner: Box::pin(fut),
        }
    }

    /// Await on-chain acceptance and return the transaction hash
    /// (`0x`-prefixed hex).
    ///
    /// # Errors
    ///
    /// [`ProviderError::Transaction`] when the transaction is dropped or
    /// reverts before confirmation.
    pub async fn confirmed(self) -> Result<String, ProviderError> {
        self.inner.await
    }
}

impl std::fmt::Debug for PendingTransfer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingTransfer").finish_non_exhaustive()
    }
}

/// Async interface to a wallet provider.
///
/// Implementations own the key material and transport; the session layer
/// holds one behind `Arc<dyn WalletProvider>` and only ever publishes
/// snapshots derived from these calls.
///
/// All implementations must be `Send + Sync` for use across async tasks.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Request an authorized account from the provider.
    ///
    /// This is the point where an interactive provider would prompt the
    /// user; a declined prompt surfaces as [`ProviderError::Rejected`].
    async fn request_account(&self) -> Result<Address, ProviderError>;

    /// Native-currency balance of an address, in wei.
    async fn balance_of(&self, address: Address) -> Result<U256, ProviderError>;

    /// Identifier of the connected network.
    async fn chain_id(&self) -> Result<u64, ProviderError>;

    /// Current gas price, in wei.
    async fn gas_price(&self) -> Result<U256, ProviderError>;

    /// Sign an arbitrary message (EIP-191 personal sign); returns the
    /// hex-encoded signature.
    async fn sign_message(&self, message: &[u8]) -> Result<String, ProviderError>;

    /// Submit a native-currency transfer.
    ///
    /// Returns a [`PendingTransfer`] whose completion yields the mined
    /// transaction hash.
    async fn send_native(&self, to: Address, value: U256) -> Result<PendingTransfer, ProviderError>;

    /// Contract handle for an ERC-20 token at `address`, bound to the
    /// provider's signer.
    async fn token(&self, address: Address) -> Result<SharedToken, ProviderError>;
}

/// A shared, reference-counted provider for use across tasks.
pub type SharedProvider = Arc<dyn WalletProvider>;

/// Minimal ERC-20 surface of a deployed token contract.
///
/// Read calls return raw on-chain values; amount scaling by the token's
/// `decimals` happens in [`crate::token`].
#[async_trait]
pub trait TokenContract: Send + Sync {
    /// Token name.
    async fn name(&self) -> Result<String, ProviderError>;

    /// Token symbol.
    async fn symbol(&self) -> Result<String, ProviderError>;

    /// Number of decimals the token reports.
    async fn decimals(&self) -> Result<u8, ProviderError>;

    /// Total supply, unscaled.
    async fn total_supply(&self) -> Result<U256, ProviderError>;

    /// Balance of `owner`, unscaled.
    async fn balance_of(&self, owner: Address) -> Result<U256, ProviderError>;

    /// Remaining allowance from `owner` to `spender`, unscaled.
    async fn allowance(&self, owner: Address, spender: Address) -> Result<U256, ProviderError>;

    /// Transfer `amount` (unscaled) to `to`.
    async fn transfer(&self, to: Address, amount: U256) -> Result<PendingTransfer, ProviderError>;

    /// Approve `spender` for `amount` (unscaled).
    async fn approve(&self, spender: Address, amount: U256)
    -> Result<PendingTransfer, ProviderError>;
}

/// A shared, reference-counted token handle.
pub type SharedToken = Arc<dyn TokenContract>;
