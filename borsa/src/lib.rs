#![cfg_attr(docsrs, feature(doc_cfg))]
//! Borsa is a wallet session facade for EVM chains: it owns connection
//! state, ordering, and validation, and delegates signing, RPC transport,
//! and ABI encoding to a pluggable provider adapter.
//!
//! The core pieces:
//!
//! - [`session::SessionManager`]: connect, disconnect, probe, refresh,
//!   native and token transfers, message signing.
//! - [`session::SessionStore`]: the single source of truth for the
//!   current [`session::SessionInfo`], with observer-style notification.
//! - [`provider::WalletProvider`]: the narrow interface adapters
//!   implement; [`provider::rpc::RpcProvider`] covers a JSON-RPC endpoint
//!   with a local signer.
//! - [`validate`]: pure form validators gating every mutating call.
//!
//! ```rust,ignore
//! let provider = RpcProvider::from_env().await?;
//! let manager = SessionManager::new(provider.map(|p| Arc::new(p) as SharedProvider));
//!
//! // Explicit startup probe: silent, rebuilds state from the environment.
//! manager.probe_existing_connection().await;
//!
//! let _sub = manager.store().subscribe(|state| match state {
//!     Some(info) => println!("{} on {}", info.short_address(), info.network_name),
//!     None => println!("disconnected"),
//! });
//!
//! if manager.connect().await? {
//!     let hash = manager.send_native_transfer(recipient, "0.5").await?;
//!     println!("{}", chain::explorer_tx_url(manager.current().unwrap().chain_id, &hash));
//! }
//! ```

pub mod chain;
pub mod error;
pub mod fmt;
pub mod prelude;
pub mod provider;
pub mod session;
pub mod token;
pub mod validate;

pub use error::{Error, FieldError, Result};
pub use provider::{
    PendingTransfer, ProviderError, SharedProvider, SharedToken, TokenContract, WalletProvider,
};
pub use session::{SessionInfo, SessionManager, SessionStore, Subscription};
pub use token::TokenSummary;
pub use validate::{TransferRequest, validate_address, validate_amount};
