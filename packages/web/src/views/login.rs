//! Login page with email/password form.

use api::LoginRequest;
use dioxus::prelude::*;
use store::Role;
use ui::{make_client, use_auth, AuthState, Navbar};

use super::navigate_to;
use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already logged in: skip straight to the right landing page.
    if !auth().loading && auth().is_logged_in() {
        navigate_to(if auth().is_admin() { "/admin" } else { "/profile" });
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                error.set(Some("Email dan password wajib diisi".to_string()));
                return;
            }

            loading.set(true);
            let client = make_client();
            match client.login(&LoginRequest { email: e, password: p }).await {
                Ok(session) => {
                    let is_admin = session.role == Role::Admin;
                    auth.set(AuthState {
                        session,
                        loading: false,
                    });
                    // Redirect based on role
                    navigate_to(if is_admin { "/admin" } else { "/profile" });
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        Navbar {}
        div {
            class: "auth-container",
            div {
                class: "auth-box",
                h2 { "Login ke Barmodule" }
                form {
                    class: "auth-form",
                    onsubmit: handle_submit,

                    if let Some(err) = error() {
                        div { class: "auth-error", "{err}" }
                    }

                    input {
                        class: "auth-input",
                        r#type: "email",
                        placeholder: "Email",
                        required: true,
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    input {
                        class: "auth-input",
                        r#type: "password",
                        placeholder: "Password",
                        required: true,
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                    button {
                        class: "auth-button",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Memproses..." } else { "Login" }
                    }
                }
                p {
                    class: "auth-link",
                    "Belum punya akun? "
                    Link { to: Route::Register {}, "Daftar di sini" }
                }
            }
        }
    }
}
