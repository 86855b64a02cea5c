//! Profile page — account info, avatar upload, enrolled courses.

use api::{ApiError, QuizResult, UserProfile};
use dioxus::prelude::*;
use store::upload::UploadKind;
use store::AccessLevel;
use ui::{make_client, ImageUpload, LogoutButton, Navbar, RouteGuard};

#[component]
pub fn Profile() -> Element {
    rsx! {
        RouteGuard {
            level: AccessLevel::RequiresAuth,
            ProfileContent {}
        }
    }
}

#[component]
fn ProfileContent() -> Element {
    let mut profile = use_signal(|| Option::<UserProfile>::None);
    let mut quiz_results = use_signal(Vec::<QuizResult>::new);
    let mut loading = use_signal(|| true);
    let mut show_avatar_upload = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let client = make_client();
        match client.profile().await {
            Ok(fetched) => profile.set(Some(fetched)),
            Err(ApiError::Auth) => {
                // The interceptor already cleared the session and redirected.
            }
            Err(e) => tracing::error!("profile fetch failed: {e}"),
        }
        match client.quiz_results().await {
            Ok(results) => quiz_results.set(results),
            Err(e) => tracing::error!("quiz results fetch failed: {e}"),
        }
        loading.set(false);
    });

    let handle_avatar = move |url: String| {
        if let Some(mut current) = profile() {
            current.avatar = Some(url);
            profile.set(Some(current));
        }
        show_avatar_upload.set(false);
    };

    if loading() {
        return rsx! {
            Navbar {}
            div { class: "loading", "Memuat..." }
        };
    }

    let Some(user) = profile() else {
        return rsx! {
            Navbar {}
            div { class: "loading", "Profil tidak tersedia" }
        };
    };

    let role_label = user.role.as_str();
    let joined = user
        .created_at
        .map(|date| date.format("%d/%m/%Y").to_string());

    rsx! {
        Navbar {}
        div {
            class: "profile-container",
            div {
                class: "profile-header",
                h1 { "Profil Saya" }
                LogoutButton { class: "logout-btn" }
            }

            div {
                class: "profile-info",
                div {
                    class: "info-card",
                    div {
                        class: "avatar-section",
                        if let Some(avatar) = user.avatar.clone() {
                            img { src: "{avatar}", alt: "{user.name}", class: "user-avatar" }
                        }
                        button {
                            class: "change-avatar-btn",
                            onclick: move |_| show_avatar_upload.set(!show_avatar_upload()),
                            if show_avatar_upload() { "Batal" } else { "Ganti Foto" }
                        }
                    }

                    if show_avatar_upload() {
                        ImageUpload {
                            kind: UploadKind::Avatar,
                            current_image: user.avatar.clone(),
                            on_upload: handle_avatar,
                        }
                    }

                    h2 { "Informasi Akun" }
                    p {
                        strong { "Nama: " }
                        "{user.name}"
                    }
                    p {
                        strong { "Email: " }
                        "{user.email}"
                    }
                    p {
                        strong { "Role: " }
                        "{role_label}"
                    }
                    if let Some(joined) = joined {
                        p {
                            strong { "Bergabung: " }
                            "{joined}"
                        }
                    }
                }

                div {
                    class: "info-card",
                    h2 { "Hasil Quiz" }
                    if quiz_results().is_empty() {
                        p { "Belum ada quiz yang dikerjakan" }
                    } else {
                        ul {
                            class: "quiz-results",
                            for result in quiz_results() {
                                li { "Skor: {result.score}/{result.total}" }
                            }
                        }
                    }
                }

                div {
                    class: "info-card",
                    h2 { "Course yang Diikuti" }
                    if user.enrolled_courses.is_empty() {
                        p { "Belum mengikuti course apapun" }
                    } else {
                        div {
                            class: "enrolled-courses",
                            for enrollment in user.enrolled_courses.clone() {
                                div {
                                    class: "course-item",
                                    if let Some(course) = enrollment.course.clone() {
                                        if let Some(image) = course.image.clone() {
                                            img { src: "{image}", alt: "{course.title}" }
                                        }
                                        div {
                                            h3 { "{course.title}" }
                                            p { "Progress: {enrollment.progress}%" }
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
}
