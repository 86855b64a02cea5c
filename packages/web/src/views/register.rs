//! Registration page with name/email/password form.

use api::RegisterRequest;
use dioxus::prelude::*;
use ui::{make_client, use_auth, AuthState, Navbar};

use super::navigate_to;
use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if !auth().loading && auth().is_logged_in() {
        navigate_to("/profile");
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            let cp = confirm_password();

            // Validation failures stay local; nothing is sent.
            if n.is_empty() {
                error.set(Some("Nama wajib diisi".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Email tidak valid".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Password wajib diisi".to_string()));
                return;
            }
            if p != cp {
                error.set(Some("Password tidak cocok".to_string()));
                return;
            }

            loading.set(true);
            let client = make_client();
            match client
                .register(&RegisterRequest {
                    name: n,
                    email: e,
                    password: p,
                })
                .await
            {
                Ok(session) => {
                    auth.set(AuthState {
                        session,
                        loading: false,
                    });
                    navigate_to("/profile");
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
                h2 { "Daftar di Barmodule" }
                form {
                    class: "auth-form",
                    onsubmit: handle_submit,

                    if let Some(err) = error() {
                        div { class: "auth-error", "{err}" }
                    }

                    input {
                        class: "auth-input",
                        r#type: "text",
                        placeholder: "Nama Lengkap",
                        required: true,
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
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
                    input {
                        class: "auth-input",
                        r#type: "password",
                        placeholder: "Konfirmasi Password",
                        required: true,
                        value: confirm_password(),
                        oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                    }
                    button {
                        class: "auth-button",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Memproses..." } else { "Daftar" }
                    }
                }
                p {
                    class: "auth-link",
                    "Sudah punya akun? "
                    Link { to: Route::Login {}, "Login di sini" }
                }
            }
        }
    }
}
