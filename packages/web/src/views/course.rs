//! Course catalog page for one category, with enrollment and quizzes.

use api::{ApiError, Course, CourseCategory, Quiz, QuizSubmission};
use dioxus::prelude::*;
use ui::{make_client, use_auth, Navbar};

#[component]
pub fn CoursePage(category: CourseCategory) -> Element {
    let auth = use_auth();
    let mut courses = use_signal(Vec::<Course>::new);
    let mut loading = use_signal(|| true);
    let mut notice = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        let client = make_client();
        match client.courses().await {
            Ok(list) => {
                // The backend has no category filter; narrow client-side.
                courses.set(list.into_iter().filter(|c| c.category == category).collect());
            }
            Err(e) => tracing::error!("course fetch failed: {e}"),
        }
        loading.set(false);
    });

    let mut handle_enroll = move |course_id: String| {
        spawn(async move {
            let client = make_client();
            match client.enroll(&course_id).await {
                Ok(()) => notice.set(Some("Berhasil mendaftar course".to_string())),
                Err(ApiError::Auth) => {}
                Err(e) => notice.set(Some(e.to_string())),
            }
        });
    };

    let category_label = category.label();
    let logged_in = auth().is_logged_in();

    let course_cards = courses().into_iter().map(|course| {
        let enroll_id = course.id.clone();
        let quiz_course_id = course.id.clone();
        rsx! {
            div {
                class: "course-card",
                if let Some(image) = course.image.clone() {
                    img { src: "{image}", alt: "{course.title}", class: "course-image" }
                }
                div {
                    class: "course-body",
                    h3 { "{course.title}" }
                    p { "{course.description}" }
                    if let Some(video) = course.video_url.clone() {
                        a { href: "{video}", target: "_blank", class: "course-video-link", "Tonton video" }
                    }
                    if logged_in {
                        button {
                            class: "enroll-btn",
                            onclick: move |_| handle_enroll(enroll_id.clone()),
                            "Ikuti Course"
                        }
                        QuizSection { course_id: quiz_course_id }
                    }
                }
            }
        }
    });

    rsx! {
        Navbar {}
        div {
            class: "course-page",
            h1 { "Belajar {category_label}" }

            if let Some(message) = notice() {
                div { class: "page-notice", "{message}" }
            }

            if loading() {
                div { class: "loading", "Memuat..." }
            } else if courses().is_empty() {
                p { class: "course-empty", "Belum ada course untuk kategori ini" }
            } else {
                div {
                    class: "course-grid",
                    {course_cards}
                }
            }
        }
    }
}

/// Per-course quiz: loaded on demand, answered with one select per question,
/// scored by the server.
#[component]
fn QuizSection(course_id: String) -> Element {
    let mut quiz = use_signal(|| Option::<Quiz>::None);
    let mut answers = use_signal(Vec::<Option<usize>>::new);
    let mut feedback = use_signal(|| Option::<String>::None);
    let mut open = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let load_id = course_id.clone();
    let handle_open = move |_| {
        open.set(true);
        let id = load_id.clone();
        spawn(async move {
            let client = make_client();
            match client.quiz_for_course(&id).await {
                Ok(loaded) => {
                    answers.set(vec![None; loaded.questions.len()]);
                    quiz.set(Some(loaded));
                }
                Err(e) => feedback.set(Some(e.to_string())),
            }
        });
    };

    let handle_submit = move |_| {
        let Some(current) = quiz() else {
            return;
        };
        if answers().iter().any(|answer| answer.is_none()) {
            feedback.set(Some("Jawab semua pertanyaan dulu".to_string()));
            return;
        }
        let picked: Vec<usize> = answers().iter().map(|answer| answer.unwrap_or(0)).collect();
        submitting.set(true);
        spawn(async move {
            let client = make_client();
            match client
                .submit_quiz(&QuizSubmission {
                    quiz_id: current.id.clone(),
                    answers: picked,
                })
                .await
            {
                Ok(result) => {
                    feedback.set(Some(format!("Skor: {}/{}", result.score, result.total)));
                }
                Err(e) => feedback.set(Some(e.to_string())),
            }
            submitting.set(false);
        });
    };

    if !open() {
        return rsx! {
            button { class: "quiz-toggle", onclick: handle_open, "Mulai Quiz" }
        };
    }

    let questions = quiz().map(|q| q.questions).unwrap_or_default();
    let question_blocks = questions.into_iter().enumerate().map(|(index, question)| {
        let options = question.options.clone();
        rsx! {
            div {
                class: "quiz-question",
                p { "{question.question}" }
                select {
                    onchange: move |evt: FormEvent| {
                        let choice = evt.value().parse::<usize>().ok();
                        let mut current = answers();
                        if index < current.len() {
                            current[index] = choice;
                            answers.set(current);
                        }
                    },
                    option { value: "", "Pilih jawaban" }
                    for (option_index, option_text) in options.into_iter().enumerate() {
                        option { value: "{option_index}", "{option_text}" }
                    }
                }
            }
        }
    });

    rsx! {
        div {
            class: "quiz-section",
            if quiz().is_none() {
                p { class: "loading", "Memuat quiz..." }
            } else {
                {question_blocks}
                button {
                    class: "quiz-submit",
                    disabled: submitting(),
                    onclick: handle_submit,
                    if submitting() { "Mengirim..." } else { "Kirim Jawaban" }
                }
            }
            if let Some(message) = feedback() {
                p { class: "quiz-feedback", "{message}" }
            }
        }
    }
}
