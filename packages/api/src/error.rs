//! Error taxonomy for everything that can go wrong talking to the backend.
//!
//! The policy per variant:
//!
//! - [`ApiError::Validation`] is raised client-side and displayed next to the
//!   offending control; it never reaches the network.
//! - [`ApiError::Auth`] means the server rejected the token. By the time the
//!   caller sees it, the session has already been cleared and the app sent
//!   back to the login view, superseding any local error display.
//! - [`ApiError::Network`] and [`ApiError::Server`] surface as a transient
//!   message near the triggering control. The previous confirmed state is
//!   kept; nothing retries automatically.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// Client-side validation failure; never sent to the network.
    #[error("{0}")]
    Validation(String),

    /// The server answered 401. Session already cleared, login view next.
    #[error("Sesi berakhir, silakan login kembali")]
    Auth,

    /// The request never completed. The payload carries the transport detail
    /// for logging; users get a generic message.
    #[error("Tidak dapat terhubung ke server")]
    Network(String),

    /// Non-2xx response, usually with a message payload.
    #[error("{message}")]
    Server { status: u16, message: String },
}
