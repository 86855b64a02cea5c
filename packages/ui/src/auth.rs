//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use store::Session;

use crate::client::make_client;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Session,
    /// Whether the stored token is still being revalidated against the server.
    pub loading: bool,
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_authenticated() && self.session.role.is_admin()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    // The stored session is available synchronously, so the first paint
    // already knows whether someone is logged in.
    let mut auth_state = use_signal(|| AuthState {
        session: make_client().session(),
        loading: true,
    });

    // Revalidate a stored token on mount. The profile call refreshes the
    // displayed name and role from the server; an expired token trips the
    // 401 interceptor, which clears the stored session for us.
    let _ = use_resource(move || async move {
        let client = make_client();
        let session = client.session();
        if let Some(token) = session.token.clone() {
            match client.profile().await {
                Ok(profile) => {
                    client.remember(&Session::authenticated(
                        token,
                        profile.id,
                        profile.name,
                        profile.role,
                    ));
                }
                Err(api::ApiError::Auth) => {
                    // Session already cleared by the interceptor.
                }
                Err(e) => {
                    // Offline is tolerated; keep the stored session.
                    tracing::warn!("session revalidation failed: {e}");
                }
            }
        }
        auth_state.set(AuthState {
            session: client.session(),
            loading: false,
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| {
        let client = make_client();
        client.logout();
        auth_state.set(AuthState {
            session: client.session(),
            loading: false,
        });
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
