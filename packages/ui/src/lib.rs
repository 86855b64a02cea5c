//! This crate contains all shared UI for the Barmodule workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::make_client;

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod guard;
pub use guard::RouteGuard;

mod navbar;
pub use navbar::Navbar;

pub mod explore;
pub use explore::{ExploreOverlay, SearchOutcome};

mod upload;
pub use upload::ImageUpload;
