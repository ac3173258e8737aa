//! Convenience re-exports for consumers.
//!
//! ```rust,ignore
//! use borsa::prelude::*;
//! ```

pub use crate::error::{Error, FieldError, Result};
pub use crate::provider::rpc::RpcProvider;
pub use crate::provider::{SharedProvider, SharedToken, TokenContract, WalletProvider};
pub use crate::session::{SessionInfo, SessionManager, SessionStore, Subscription};
pub use crate::token::TokenSummary;
pub use crate::validate::{TransferRequest, validate_address, validate_amount};
