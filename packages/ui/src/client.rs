//! Shared API client constructor for all platforms.
//!
//! Returns an [`api::ApiClient`] backed by the appropriate
//! [`store::SessionStorage`]:
//! - **Web** (WASM + `web` feature): the browser's localStorage via [`store::LocalStorage`]
//! - **Everything else**: an in-memory map via [`store::MemoryStorage`]

use api::{ApiClient, ApiConfig};
use store::SessionStorage;

/// Create a platform-appropriate API client with the default configuration.
///
/// Cheap to call from event handlers; on the web every client reads and
/// writes the same localStorage, so they all observe the same session.
pub fn make_client() -> ApiClient<impl SessionStorage> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        ApiClient::new(ApiConfig::default(), store::LocalStorage::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        ApiClient::new(ApiConfig::default(), store::MemoryStorage::new())
    }
}
