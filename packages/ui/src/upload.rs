//! Image picker with optimistic preview.
//!
//! Drives [`store::upload::UploadFlow`]: validate the picked file, show a
//! local data-URI preview immediately, upload, then swap in the URL the
//! server confirmed. A failed or superseded upload falls back to the last
//! confirmed image; the generation tag from the flow keeps slow responses
//! from clobbering a newer pick.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;

use store::upload::{mime_from_name, UploadFlow, UploadKind};

use crate::client::make_client;

#[component]
pub fn ImageUpload(
    kind: UploadKind,
    current_image: Option<String>,
    on_upload: EventHandler<String>,
) -> Element {
    let mut flow = use_signal(|| UploadFlow::new(kind, current_image));

    let handle_select = move |evt: FormEvent| {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(name) = engine.files().into_iter().next() else {
            return;
        };
        spawn(async move {
            let size = engine.file_size(&name).await.unwrap_or(0);
            let mime = mime_from_name(&name);

            // Validation failures are recorded on the flow and abort here:
            // no preview, no network call.
            let generation = match flow.write().select(mime, size) {
                Ok(generation) => generation,
                Err(_) => return,
            };

            let Some(bytes) = engine.read_file(&name).await else {
                flow.write().fail(generation, "File tidak dapat dibaca");
                return;
            };

            // Optimistic preview before the upload resolves.
            let data_uri = format!("data:{mime};base64,{}", BASE64.encode(&bytes));
            flow.write().set_preview(generation, data_uri);

            let client = make_client();
            match client.upload_image(kind, &name, mime, bytes).await {
                Ok(url) => {
                    // Only report confirmed, non-stale results upward.
                    if flow.write().succeed(generation, url.clone()) {
                        on_upload.call(url);
                    }
                }
                Err(e) => {
                    tracing::error!("upload failed: {e}");
                    flow.write().fail(generation, e.to_string());
                }
            }
        });
    };

    let state = flow();
    let preview = state.preview().map(str::to_string);
    let error = state.error().map(str::to_string);
    let preview_class = match kind {
        UploadKind::Avatar => "avatar-preview",
        UploadKind::Course => "course-preview",
    };

    rsx! {
        div {
            class: "image-upload-container",
            div {
                class: "image-preview",
                if let Some(preview) = preview {
                    img { src: "{preview}", alt: "Preview", class: "{preview_class}" }
                } else {
                    div {
                        class: "no-image",
                        p { "No image" }
                    }
                }
            }

            div {
                class: "upload-actions",
                label {
                    class: "upload-button",
                    if state.is_uploading() { "Uploading..." } else { "Choose Image" }
                    input {
                        r#type: "file",
                        accept: "image/*",
                        disabled: state.is_uploading(),
                        onchange: handle_select,
                        style: "display: none;",
                    }
                }
                if let Some(error) = error {
                    p { class: "upload-error", "{error}" }
                }
            }
        }
    }
}
