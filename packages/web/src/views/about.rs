//! About page with the public contact form.

use api::ContactPayload;
use dioxus::prelude::*;
use ui::{make_client, Navbar};

#[component]
pub fn About() -> Element {
    rsx! {
        Navbar {}
        div {
            class: "about-page",
            h1 { "Tentang Barmodule" }
            section {
                h2 { "Visi" }
                p { "Menjadi media pembelajaran kecantikan yang mudah diakses siapa saja." }
            }
            section {
                h2 { "Misi" }
                p {
                    "Menyediakan materi tatarias, salon, treatment dan hairstyle yang "
                    "tersusun rapi, lengkap dengan video dan quiz."
                }
            }
            section {
                h2 { "Kontak" }
                ContactForm {}
            }
        }
    }
}

/// Public contact form; anyone can send a message without logging in.
#[component]
fn ContactForm() -> Element {
    let mut email = use_signal(String::new);
    let mut title = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut feedback = use_signal(|| Option::<String>::None);
    let mut sending = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            feedback.set(None);

            let payload = ContactPayload {
                email: email().trim().to_string(),
                title: title().trim().to_string(),
                message: message().trim().to_string(),
            };
            if payload.email.is_empty() || payload.title.is_empty() || payload.message.is_empty() {
                feedback.set(Some("Semua kolom wajib diisi".to_string()));
                return;
            }

            sending.set(true);
            let client = make_client();
            match client.submit_contact(&payload).await {
                Ok(()) => {
                    email.set(String::new());
                    title.set(String::new());
                    message.set(String::new());
                    feedback.set(Some("Pesan terkirim, terima kasih!".to_string()));
                }
                Err(e) => feedback.set(Some(e.to_string())),
            }
            sending.set(false);
        });
    };

    rsx! {
        form {
            class: "contact-form",
            onsubmit: handle_submit,

            if let Some(note) = feedback() {
                div { class: "page-notice", "{note}" }
            }

            input {
                class: "auth-input",
                r#type: "email",
                placeholder: "Email",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            input {
                class: "auth-input",
                r#type: "text",
                placeholder: "Judul",
                value: title(),
                oninput: move |evt: FormEvent| title.set(evt.value()),
            }
            textarea {
                class: "admin-textarea",
                placeholder: "Pesan",
                value: message(),
                oninput: move |evt: FormEvent| message.set(evt.value()),
            }
            button {
                class: "auth-button",
                r#type: "submit",
                disabled: sending(),
                if sending() { "Mengirim..." } else { "Kirim Pesan" }
            }
        }
    }
}
