//! # API crate — REST client for the Barmodule backend
//!
//! Everything the frontends need to talk to the backend lives here. The
//! backend itself is an external JSON-over-HTTP service; this crate only
//! consumes it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] — reqwest wrapper with bearer-token injection and global 401 interception, plus one method per endpoint |
//! | [`config`] | [`ApiConfig`] — where the backend lives |
//! | [`error`] | [`ApiError`] — validation / auth / network / server taxonomy |
//! | [`models`] | Wire DTOs (camelCase + `_id`, matching the JS backend) |
//!
//! ## Cross-cutting behaviour
//!
//! Every request reads the stored session and attaches
//! `Authorization: Bearer <token>` when a token is present. Any 401 response,
//! whatever request triggered it, clears the stored session and sends the app
//! back to the login view — an expired token is collected by the first call
//! that trips over it.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{
    AdminStats, AuthResponse, AuthUser, ContactMessage, ContactPayload, ContactStatus, Course,
    CourseCategory, CoursePayload, CourseRef, Enrollment, LoginRequest, Quiz, QuizQuestion,
    QuizResult, QuizSubmission, RegisterRequest, UploadResponse, UserProfile,
};
