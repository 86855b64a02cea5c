use api::CourseCategory;
use dioxus::prelude::*;

use ui::AuthProvider;
use views::{About, Admin, CoursePage, Home, Login, Profile, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/belajar-hairstyle")]
    Hairstyle {},
    #[route("/belajar-salon")]
    Salon {},
    #[route("/belajar-treatment")]
    Treatment {},
    #[route("/belajar-tatarias")]
    Tatarias {},
    #[route("/profile")]
    Profile {},
    #[route("/admin")]
    Admin {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

#[component]
fn Hairstyle() -> Element {
    rsx! {
        CoursePage { category: CourseCategory::Hairstyle }
    }
}

#[component]
fn Salon() -> Element {
    rsx! {
        CoursePage { category: CourseCategory::Salon }
    }
}

#[component]
fn Treatment() -> Element {
    rsx! {
        CoursePage { category: CourseCategory::Treatment }
    }
}

#[component]
fn Tatarias() -> Element {
    rsx! {
        CoursePage { category: CourseCategory::Tatarias }
    }
}
