//! Error type for wallet provider operations.

use std::fmt::Display;

/// Error raised by a [`WalletProvider`](super::WalletProvider)
/// implementation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ProviderError {
    /// Adapter configuration error (missing key material, bad URL).
    #[error("provider configuration error: {0}")]
    Config(String),

    /// Failed to reach the provider endpoint.
    #[error("failed to connect to provider: {0}")]
    Connect(String),

    /// HD key derivation failed.
    #[error("key derivation failed: {0}")]
    Derivation(String),

    /// A provider request failed at the RPC layer.
    #[error("provider request failed: {0}")]
    Rpc(String),

    /// The user (or the provider on their behalf) declined the request.
    #[error("request rejected by the wallet: {0}")]
    Rejected(String),

    /// Message signing failed.
    #[error("message signing failed: {0}")]
    Signing(String),

    /// Transaction submission or confirmation failed.
    #[error("transaction failed: {0}")]
    Transaction(String),

    /// Fixed-point unit conversion failed.
    #[error("unit conversion failed: {0}")]
    Units(String),
}

impl ProviderError {
    /// Create a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an RPC-layer error.
    #[must_use]
    pub fn rpc(err: impl Display) -> Self {
        Self::Rpc(err.to_string())
    }

    /// Create a transaction error.
    #[must_use]
    pub fn transaction(err: impl Display) -> Self {
        Self::Transaction(err.to_string())
    }

    /// Create a unit-conversion error.
    #[must_use]
    pub fn units(err: impl Display) -> Self {
        Self::Units(err.to_string())
    }
}
