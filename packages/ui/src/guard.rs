//! Role-gated rendering for guarded views.

use dioxus::prelude::*;
use store::{resolve, AccessLevel, RouteDecision};

use crate::auth::use_auth;

/// Wraps a view that requires authentication or the admin role.
///
/// The decision is re-evaluated from the stored session on every render and
/// matched exhaustively. Redirects replace the current history entry, so
/// "back" does not land on the guarded view again. The stored role only
/// gates rendering; the server still authorizes every request the view makes.
#[component]
pub fn RouteGuard(level: AccessLevel, children: Element) -> Element {
    let auth = use_auth();
    let session = auth().session;

    match resolve(&session, level) {
        RouteDecision::Render => rsx! {
            {children}
        },
        RouteDecision::RedirectToLogin => {
            redirect_replace("/login");
            rsx! {}
        }
        RouteDecision::RedirectHome => {
            redirect_replace("/");
            rsx! {}
        }
    }
}

fn redirect_replace(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().replace(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = path;
    }
}
