pub mod guard;
pub mod session;
pub mod storage;
pub mod upload;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use guard::{resolve, AccessLevel, RouteDecision};
pub use session::{Role, Session, SessionStore};
pub use storage::SessionStorage;
pub use upload::{UploadError, UploadFlow, UploadKind, UploadStatus};
