pub mod client;
pub mod types;
mod unified_users;

pub use client::*;
pub use types::*;
pub use unified_users::{deactivate_query_string, UnifiedUserSearch};

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
