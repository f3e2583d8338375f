//! Configuration module for the futures dashboard.

pub mod provider;
pub mod refresh;

mod debug; // Private because of the public re-export. Forces files to use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;
pub mod plot;

// Re-export commonly used items
pub use persistence::APP_STATE_PATH;
pub use provider::{PROVIDER, ProviderApiConfig};
pub use refresh::REFRESH;
