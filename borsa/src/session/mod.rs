//! Wallet session state and lifecycle.
//!
//! ```text
//! SessionManager (provider handle + generation guard)
//!   ├── connect()/disconnect()/probe_existing_connection()
//!   ├── send_native_transfer()/send_token_transfer()/sign_message()
//!   └── publishes → SessionStore → Subscription listeners
//! ```
//!
//! The store is the single source of truth for the current
//! [`SessionInfo`]; the manager is the only writer. Consumers subscribe
//! for replacements and read snapshots; they never see the provider or
//! signing handles.

mod info;
mod manager;
mod store;

pub use info::SessionInfo;
pub use manager::SessionManager;
pub use store::{SessionStore, Subscription};
