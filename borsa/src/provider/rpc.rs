//! JSON-RPC wallet provider adapter.
//!
//! [`RpcProvider`] implements [`WalletProvider`] over a local signer and
//! an HTTP JSON-RPC endpoint, built on [`alloy`] for signing and RPC
//! communication and [`kobe`] for HD key derivation. This is the adapter
//! for headless environments; a browser-extension adapter would implement
//! the same trait over an injected provider object.

use std::env;
use std::sync::Arc;

use alloy::network::{Ethereum, TransactionBuilder};
use alloy::primitives::{Address, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::Signer;
use alloy::signers::local::PrivateKeySigner;
use alloy::sol;
use async_trait::async_trait;
use tracing::info;

use super::{PendingTransfer, ProviderError, SharedToken, TokenContract, WalletProvider};

sol! {
    #[sol(rpc)]
    interface IERC20 {
        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address owner) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
        function approve(address spender, uint256 amount) external returns (bool);
        function allowance(address owner, address spender) external view returns (uint256);

        event Transfer(address indexed from, address indexed to, uint256 value);
        event Approval(address indexed owner, address indexed spender, uint256 value);
    }
}

/// Environment variable naming the JSON-RPC endpoint.
pub const ENV_RPC_URL: &str = "WALLET_RPC_URL";
/// Environment variable holding a raw private key.
pub const ENV_PRIVATE_KEY: &str = "WALLET_PRIVATE_KEY";
/// Environment variable holding a BIP-39 mnemonic.
pub const ENV_MNEMONIC: &str = "WALLET_MNEMONIC";

/// Builder for constructing an [`RpcProvider`].
///
/// Created by [`RpcProvider::builder`]. Use method chaining to configure
/// the adapter, then call [`build`](Self::build).
#[derive(Debug, Default)]
pub struct RpcProviderBuilder {
    /// BIP-39 mnemonic phrase.
    mnemonic: Option<String>,
    /// BIP-39 passphrase (optional "25th word").
    passphrase: Option<String>,
    /// HD derivation index (default 0).
    index: u32,
    /// Raw private key hex string.
    private_key: Option<String>,
    /// JSON-RPC endpoint URL.
    rpc_url: Option<String>,
    /// Chain ID (auto-detected if not set).
    chain_id: Option<u64>,
}

impl RpcProviderBuilder {
    /// Set the BIP-39 mnemonic phrase for HD key derivation.
    #[must_use]
    pub fn mnemonic(mut self, mnemonic: impl Into<String>) -> Self {
        self.mnemonic = Some(mnemonic.into());
        self
    }

    /// Set the BIP-39 passphrase (optional "25th word").
    #[must_use]
    pub fn passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.passphrase = Some(passphrase.into());
        self
    }

    /// Set the HD derivation index (default 0).
    #[must_use]
    pub const fn index(mut self, index: u32) -> Self {
        self.index = index;
        self
    }

    /// Set the private key directly (hex string, with or without 0x prefix).
    #[must_use]
    pub fn private_key(mut self, key: impl Into<String>) -> Self {
        self.private_key = Some(key.into());
        self
    }

    /// Set the JSON-RPC endpoint URL.
    #[must_use]
    pub fn rpc_url(mut self, url: impl Into<String>) -> Self {
        self.rpc_url = Some(url.into());
        self
    }

    /// Set the chain ID explicitly (auto-detected from RPC if not set).
    #[must_use]
    pub const fn chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = Some(chain_id);
        self
    }

    /// Build the [`RpcProvider`].
    ///
    /// Either `mnemonic` or `private_key` must be set; `rpc_url` is
    /// required.
    ///
    /// # Errors
    ///
    /// [`ProviderError::Config`] for missing or invalid key material,
    /// [`ProviderError::Derivation`] when HD derivation fails,
    /// [`ProviderError::Connect`] when the endpoint is unreachable.
    pub async fn build(mut self) -> Result<RpcProvider, ProviderError> {
        let rpc_url = self
            .rpc_url
            .take()
            .ok_or_else(|| ProviderError::config("rpc_url is required"))?;

        let mut signer = if let Some(ref mnemonic) = self.mnemonic {
            self.signer_from_mnemonic(mnemonic)?
        } else if let Some(ref key) = self.private_key {
            Self::signer_from_private_key(key)?
        } else {
            return Err(ProviderError::config(
                "either mnemonic or private_key is required",
            ));
        };

        if let Some(chain_id) = self.chain_id {
            signer.set_chain_id(Some(chain_id));
        }

        let address = signer.address();

        let provider: DynProvider<Ethereum> = ProviderBuilder::new()
            .wallet(signer.clone())
            .connect(&rpc_url)
            .await
            .map_err(|e| ProviderError::Connect(format!("'{rpc_url}': {e}")))?
            .erased();

        info!(address = %address, "rpc wallet provider ready");

        Ok(RpcProvider {
            signer,
            provider,
            address,
        })
    }

    /// Derive a signer from a BIP-39 mnemonic using kobe.
    fn signer_from_mnemonic(&self, mnemonic: &str) -> Result<PrivateKeySigner, ProviderError> {
        let wallet = kobe::Wallet::from_mnemonic(mnemonic, self.passphrase.as_deref())
            .map_err(|e| ProviderError::Derivation(format!("invalid mnemonic: {e}")))?;

        let deriver = kobe_eth::Deriver::new(&wallet);
        let derived = deriver
            .derive(self.index)
            .map_err(|e| ProviderError::Derivation(format!("key derivation failed: {e}")))?;

        let key_hex = &*derived.private_key_hex;
        key_hex
            .parse::<PrivateKeySigner>()
            .map_err(|e| ProviderError::Derivation(format!("signer creation failed: {e}")))
    }

    /// Create a signer from a raw private key hex string.
    fn signer_from_private_key(key: &str) -> Result<PrivateKeySigner, ProviderError> {
        let key = key.strip_prefix("0x").unwrap_or(key);
        key.parse::<PrivateKeySigner>()
            .map_err(|e| ProviderError::Config(format!("invalid private key: {e}")))
    }
}

/// A [`WalletProvider`] backed by a local signer and a JSON-RPC endpoint.
///
/// For a local signer, account authorization is implicit: there is no
/// interactive prompt to decline, so [`request_account`] always succeeds.
///
/// [`request_account`]: WalletProvider::request_account
pub struct RpcProvider {
    /// Local signer for transaction and message signing.
    signer: PrivateKeySigner,
    /// Type-erased provider for RPC calls; also carries the wallet filler
    /// so `send_transaction` signs locally.
    provider: DynProvider<Ethereum>,
    /// The signer's address.
    address: Address,
}

impl std::fmt::Debug for RpcProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcProvider")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

impl RpcProvider {
    /// Create a builder for constructing an [`RpcProvider`].
    #[must_use]
    pub fn builder() -> RpcProviderBuilder {
        RpcProviderBuilder::default()
    }

    /// Probe the host environment for wallet configuration.
    ///
    /// Reads [`ENV_RPC_URL`] plus [`ENV_PRIVATE_KEY`] or [`ENV_MNEMONIC`].
    /// Returns `Ok(None)` when the environment carries no wallet
    /// capability; absence is a recoverable condition, not an error.
    ///
    /// # Errors
    ///
    /// Propagates [`RpcProviderBuilder::build`] failures when the
    /// environment is populated but invalid.
    pub async fn from_env() -> Result<Option<Self>, ProviderError> {
        let Ok(rpc_url) = env::var(ENV_RPC_URL) else {
            return Ok(None);
        };

        let builder = Self::builder().rpc_url(rpc_url);
        let builder = if let Ok(key) = env::var(ENV_PRIVATE_KEY) {
            builder.private_key(key)
        } else if let Ok(mnemonic) = env::var(ENV_MNEMONIC) {
            builder.mnemonic(mnemonic)
        } else {
            return Ok(None);
        };

        builder.build().await.map(Some)
    }

    /// The signer's address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }
}

#[async_trait]
impl WalletProvider for RpcProvider {
    async fn request_account(&self) -> Result<Address, ProviderError> {
        Ok(self.address)
    }

    async fn balance_of(&self, address: Address) -> Result<U256, ProviderError> {
        self.provider
            .get_balance(address)
            .await
            .map_err(ProviderError::rpc)
    }

    async fn chain_id(&self) -> Result<u64, ProviderError> {
        self.provider
            .get_chain_id()
            .await
            .map_err(ProviderError::rpc)
    }

    async fn gas_price(&self) -> Result<U256, ProviderError> {
        self.provider
            .get_gas_price()
            .await
            .map(U256::from)
            .map_err(ProviderError::rpc)
    }

    async fn sign_message(&self, message: &[u8]) -> Result<String, ProviderError> {
        let sig = self
            .signer
            .sign_message(message)
            .await
            .map_err(|e| ProviderError::Signing(e.to_string()))?;
        Ok(format!(
            "0x{}",
            alloy::primitives::hex::encode(sig.as_bytes())
        ))
    }

    async fn send_native(&self, to: Address, value: U256) -> Result<PendingTransfer, ProviderError> {
        let tx = TransactionRequest::default().with_to(to).with_value(value);

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(ProviderError::transaction)?;

        Ok(PendingTransfer::new(async move {
            let receipt = pending
                .get_receipt()
                .await
                .map_err(ProviderError::transaction)?;
            Ok(format!("{:#x}", receipt.transaction_hash))
        }))
    }

    async fn token(&self, address: Address) -> Result<SharedToken, ProviderError> {
        Ok(Arc::new(RpcToken {
            instance: IERC20::new(address, self.provider.clone()),
        }))
    }
}

/// ERC-20 handle bound to the adapter's signing provider.
struct RpcToken {
    instance: IERC20::IERC20Instance<DynProvider<Ethereum>>,
}

#[async_trait]
impl TokenContract for RpcToken {
    async fn name(&self) -> Result<String, ProviderError> {
        self.instance.name().call().await.map_err(ProviderError::rpc)
    }

    async fn symbol(&self) -> Result<String, ProviderError> {
        self.instance
            .symbol()
            .call()
            .await
            .map_err(ProviderError::rpc)
    }

    async fn decimals(&self) -> Result<u8, ProviderError> {
        self.instance
            .decimals()
            .call()
            .await
            .map_err(ProviderError::rpc)
    }

    async fn total_supply(&self) -> Result<U256, ProviderError> {
        self.instance
            .totalSupply()
            .call()
            .await
            .map_err(ProviderError::rpc)
    }

    async fn balance_of(&self, owner: Address) -> Result<U256, ProviderError> {
        self.instance
            .balanceOf(owner)
            .call()
            .await
            .map_err(ProviderError::rpc)
    }

    async fn allowance(&self, owner: Address, spender: Address) -> Result<U256, ProviderError> {
        self.instance
            .allowance(owner, spender)
            .call()
            .await
            .map_err(ProviderError::rpc)
    }

    async fn transfer(&self, to: Address, amount: U256) -> Result<PendingTransfer, ProviderError> {
        let pending = self
            .instance
            .transfer(to, amount)
            .send()
            .await
            .map_err(ProviderError::transaction)?;

        Ok(PendingTransfer::new(async move {
            let receipt = pending
                .get_receipt()
                .await
                .map_err(ProviderError::transaction)?;
            Ok(format!("{:#x}", receipt.transaction_hash))
        }))
    }

    async fn approve(
        &self,
        spender: Address,
        amount: U256,
    ) -> Result<PendingTransfer, ProviderError> {
        let pending = self
            .instance
            .approve(spender, amount)
            .send()
            .await
            .map_err(ProviderError::transaction)?;

        Ok(PendingTransfer::new(async move {
            let receipt = pending
                .get_receipt()
                .await
                .map_err(ProviderError::transaction)?;
            Ok(format!("{:#x}", receipt.transaction_hash))
        }))
    }
}
