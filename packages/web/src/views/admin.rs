//! Admin console — dashboard stats, course CRUD and the contact inbox.
//!
//! Create and edit share one course form; the submit target is chosen by the
//! presence of the editing id. Mutations never patch local state: every
//! successful write triggers a full re-fetch of the affected list.

use api::{
    AdminStats, ContactMessage, ContactStatus, Course, CourseCategory, CoursePayload,
};
use dioxus::prelude::*;
use store::upload::UploadKind;
use store::AccessLevel;
use ui::{make_client, ImageUpload, Navbar, RouteGuard};

use super::confirm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Dashboard,
    Courses,
    Contacts,
}

#[component]
pub fn Admin() -> Element {
    rsx! {
        RouteGuard {
            level: AccessLevel::RequiresAdmin,
            AdminContent {}
        }
    }
}

#[component]
fn AdminContent() -> Element {
    let mut active_tab = use_signal(|| AdminTab::Dashboard);
    let mut stats = use_signal(AdminStats::default);
    let mut courses = use_signal(Vec::<Course>::new);
    let mut contacts = use_signal(Vec::<ContactMessage>::new);

    // Course form state. One form serves create and edit; `editing` holds the
    // id when editing.
    let mut title = use_signal(String::new);
    let mut slug = use_signal(String::new);
    let mut category = use_signal(CourseCategory::default);
    let mut description = use_signal(String::new);
    let mut image = use_signal(String::new);
    let mut video_url = use_signal(String::new);
    let mut editing = use_signal(|| Option::<String>::None);
    let mut uploading_image = use_signal(|| false);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let client = make_client();
        match client.admin_stats().await {
            Ok(fetched) => stats.set(fetched),
            Err(e) => tracing::error!("stats fetch failed: {e}"),
        }
        match client.courses().await {
            Ok(list) => courses.set(list),
            Err(e) => tracing::error!("course fetch failed: {e}"),
        }
        match client.contacts().await {
            Ok(list) => contacts.set(list),
            Err(e) => tracing::error!("contact fetch failed: {e}"),
        }
    });

    let mut reset_form = move || {
        title.set(String::new());
        slug.set(String::new());
        category.set(CourseCategory::default());
        description.set(String::new());
        image.set(String::new());
        video_url.set(String::new());
        editing.set(None);
        uploading_image.set(false);
        form_error.set(None);
    };

    let handle_course_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            form_error.set(None);

            // The only client-side check: required fields are non-empty.
            // Slug uniqueness is the server's problem.
            if title().trim().is_empty() || slug().trim().is_empty() {
                form_error.set(Some("Judul dan slug wajib diisi".to_string()));
                return;
            }

            saving.set(true);
            let payload = CoursePayload {
                title: title().trim().to_string(),
                slug: slug().trim().to_string(),
                category: category(),
                description: description(),
                image: image(),
                video_url: video_url(),
            };

            let client = make_client();
            let result = match editing() {
                Some(id) => client.update_course(&id, &payload).await,
                None => client.create_course(&payload).await,
            };
            saving.set(false);

            match result {
                Ok(()) => {
                    reset_form();
                    match client.courses().await {
                        Ok(list) => courses.set(list),
                        Err(e) => tracing::error!("course refetch failed: {e}"),
                    }
                }
                Err(e) => form_error.set(Some(e.to_string())),
            }
        });
    };

    let mut handle_edit = move |course: Course| {
        title.set(course.title);
        slug.set(course.slug);
        category.set(course.category);
        description.set(course.description);
        image.set(course.image.unwrap_or_default());
        video_url.set(course.video_url.unwrap_or_default());
        editing.set(Some(course.id));
        form_error.set(None);
    };

    let mut handle_delete = move |id: String| {
        if !confirm("Yakin ingin menghapus course ini?") {
            return;
        }
        spawn(async move {
            let client = make_client();
            match client.delete_course(&id).await {
                Ok(()) => match client.courses().await {
                    Ok(list) => courses.set(list),
                    Err(e) => tracing::error!("course refetch failed: {e}"),
                },
                Err(e) => tracing::error!("course delete failed: {e}"),
            }
        });
    };

    let mut handle_mark_read = move |id: String| {
        spawn(async move {
            let client = make_client();
            if let Err(e) = client.update_contact_status(&id, ContactStatus::Read).await {
                tracing::error!("contact update failed: {e}");
                return;
            }
            match client.contacts().await {
                Ok(list) => contacts.set(list),
                Err(e) => tracing::error!("contact refetch failed: {e}"),
            }
            match client.admin_stats().await {
                Ok(fetched) => stats.set(fetched),
                Err(e) => tracing::error!("stats refetch failed: {e}"),
            }
        });
    };

    let handle_image_uploaded = move |url: String| {
        image.set(url);
        uploading_image.set(false);
    };

    let current_stats = stats();
    let category_value = category().as_str();
    let category_options = CourseCategory::ALL.iter().map(|entry| {
        let value = entry.as_str();
        let label = entry.label();
        rsx! {
            option { value: "{value}", "{label}" }
        }
    });

    let course_rows = courses().into_iter().map(|course| {
        let category_label = course.category.label();
        let edit_course = course.clone();
        let delete_id = course.id.clone();
        rsx! {
            tr {
                td { "{course.title}" }
                td { "{category_label}" }
                td { "{course.slug}" }
                td {
                    button {
                        class: "action-button edit-button",
                        onclick: move |_| handle_edit(edit_course.clone()),
                        "Edit"
                    }
                    button {
                        class: "action-button delete-button",
                        onclick: move |_| handle_delete(delete_id.clone()),
                        "Hapus"
                    }
                }
            }
        }
    });

    let contact_rows = contacts().into_iter().map(|contact| {
        let excerpt: String = contact.message.chars().take(50).collect();
        let status_label = contact.status.as_str();
        let date = contact
            .created_at
            .map(|created| created.format("%d/%m/%Y").to_string())
            .unwrap_or_default();
        let mark_id = contact.id.clone();
        rsx! {
            tr {
                td { "{contact.email}" }
                td { "{contact.title}" }
                td { "{excerpt}..." }
                td {
                    span { class: "status-badge {status_label}", "{status_label}" }
                }
                td { "{date}" }
                td {
                    if contact.status.is_pending() {
                        button {
                            class: "action-button read-button",
                            onclick: move |_| handle_mark_read(mark_id.clone()),
                            "Tandai Dibaca"
                        }
                    }
                }
            }
        }
    });

    rsx! {
        Navbar {}
        div {
            class: "admin-container",
            div {
                class: "admin-sidebar",
                h2 { class: "sidebar-title", "Barmodule Admin" }
                button {
                    class: "nav-button",
                    onclick: move |_| active_tab.set(AdminTab::Dashboard),
                    "Dashboard"
                }
                button {
                    class: "nav-button",
                    onclick: move |_| active_tab.set(AdminTab::Courses),
                    "Courses"
                }
                button {
                    class: "nav-button",
                    onclick: move |_| active_tab.set(AdminTab::Contacts),
                    "Contacts"
                }
            }

            div {
                class: "admin-content",
                if active_tab() == AdminTab::Dashboard {
                    div {
                        h2 { class: "page-title", "Dashboard" }
                        div {
                            class: "stats-grid",
                            div {
                                class: "stat-card",
                                h3 { "Total Users" }
                                p { class: "stat-number", "{current_stats.total_users}" }
                            }
                            div {
                                class: "stat-card",
                                h3 { "Total Courses" }
                                p { class: "stat-number", "{current_stats.total_courses}" }
                            }
                            div {
                                class: "stat-card",
                                h3 { "Quiz Submissions" }
                                p { class: "stat-number", "{current_stats.total_quizzes}" }
                            }
                            div {
                                class: "stat-card",
                                h3 { "Pending Contacts" }
                                p { class: "stat-number", "{current_stats.pending_contacts}" }
                            }
                        }
                    }
                }

                if active_tab() == AdminTab::Courses {
                    div {
                        h2 { class: "page-title", "Kelola Courses" }

                        div {
                            class: "form-card",
                            h3 {
                                if editing().is_some() { "Edit Course" } else { "Tambah Course Baru" }
                            }
                            form {
                                class: "course-form",
                                onsubmit: handle_course_submit,

                                if let Some(err) = form_error() {
                                    div { class: "auth-error", "{err}" }
                                }

                                input {
                                    class: "admin-input",
                                    placeholder: "Judul Course",
                                    value: title(),
                                    oninput: move |evt: FormEvent| title.set(evt.value()),
                                }
                                input {
                                    class: "admin-input",
                                    placeholder: "Slug (URL-friendly)",
                                    value: slug(),
                                    oninput: move |evt: FormEvent| slug.set(evt.value()),
                                }
                                select {
                                    class: "admin-input",
                                    value: "{category_value}",
                                    onchange: move |evt: FormEvent| {
                                        category.set(CourseCategory::parse(&evt.value()));
                                    },
                                    {category_options}
                                }
                                textarea {
                                    class: "admin-textarea",
                                    placeholder: "Deskripsi",
                                    value: description(),
                                    oninput: move |evt: FormEvent| description.set(evt.value()),
                                }

                                div {
                                    class: "image-upload-section",
                                    label { "Gambar Course" }
                                    button {
                                        r#type: "button",
                                        class: "admin-button",
                                        onclick: move |_| uploading_image.set(!uploading_image()),
                                        if uploading_image() {
                                            "Batal"
                                        } else if image().is_empty() {
                                            "Upload Gambar"
                                        } else {
                                            "Ganti Gambar"
                                        }
                                    }
                                    if uploading_image() {
                                        ImageUpload {
                                            kind: UploadKind::Course,
                                            current_image: if image().is_empty() { None } else { Some(image()) },
                                            on_upload: handle_image_uploaded,
                                        }
                                    }
                                    input {
                                        class: "admin-input",
                                        placeholder: "Atau masukkan URL Gambar",
                                        value: image(),
                                        oninput: move |evt: FormEvent| image.set(evt.value()),
                                    }
                                }

                                input {
                                    class: "admin-input",
                                    placeholder: "URL Video",
                                    value: video_url(),
                                    oninput: move |evt: FormEvent| video_url.set(evt.value()),
                                }

                                div {
                                    class: "button-group",
                                    button {
                                        class: "admin-button",
                                        r#type: "submit",
                                        disabled: saving(),
                                        if saving() {
                                            "Menyimpan..."
                                        } else if editing().is_some() {
                                            "Update Course"
                                        } else {
                                            "Tambah Course"
                                        }
                                    }
                                    if editing().is_some() {
                                        button {
                                            class: "admin-button cancel-button",
                                            r#type: "button",
                                            onclick: move |_| reset_form(),
                                            "Batal"
                                        }
                                    }
                                }
                            }
                        }

                        div {
                            class: "table-card",
                            h3 { "Daftar Courses" }
                            div {
                                class: "table-container",
                                table {
                                    class: "admin-table",
                                    thead {
                                        tr {
                                            th { "Judul" }
                                            th { "Category" }
                                            th { "Slug" }
                                            th { "Aksi" }
                                        }
                                    }
                                    tbody {
                                        {course_rows}
                                    }
                                }
                            }
                        }
                    }
                }

                if active_tab() == AdminTab::Contacts {
                    div {
                        h2 { class: "page-title", "Pesan Kontak" }
                        div {
                            class: "table-card",
                            div {
                                class: "table-container",
                                table {
                                    class: "admin-table",
                                    thead {
                                        tr {
                                            th { "Email" }
                                            th { "Judul" }
                                            th { "Pesan" }
                                            th { "Status" }
                                            th { "Tanggal" }
                                            th { "Aksi" }
                                        }
                                    }
                                    tbody {
                                        {contact_rows}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
