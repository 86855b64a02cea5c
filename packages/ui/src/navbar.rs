//! Top navigation bar: links, the explore overlay trigger and the auth menu.

use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};
use crate::explore::ExploreOverlay;
use crate::icons::{FaBars, FaCircleUser, FaUser, FaXmark};
use crate::Icon;

/// Site-wide navigation bar.
///
/// Reads the session through [`use_auth`]: logged-in users get a user menu
/// with profile, admin panel (admins only) and logout; everyone else gets the
/// login/register buttons. The admin entry is a convenience — the admin view
/// is guarded separately and the server checks the role again.
#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let mut mobile_menu_open = use_signal(|| false);
    let mut explore_open = use_signal(|| false);
    let mut show_user_menu = use_signal(|| false);

    let state = auth();
    let role_label = state.session.role.as_str();

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-container",
                a { class: "navbar-logo", href: "/", "Barmodule" }

                div {
                    class: "navbar-menu desktop-menu",
                    NavLinks { on_explore: move |_| explore_open.set(true) }
                }

                div {
                    class: "navbar-auth",
                    if state.is_logged_in() {
                        div {
                            class: "user-menu-container",
                            button {
                                class: "user-button",
                                onclick: move |_| show_user_menu.set(!show_user_menu()),
                                Icon { icon: FaCircleUser, width: 24, height: 24 }
                                span { "{state.session.user_name}" }
                            }
                            if show_user_menu() {
                                div {
                                    class: "user-dropdown",
                                    div {
                                        class: "user-info",
                                        p { class: "user-name", "{state.session.user_name}" }
                                        p { class: "user-role", "{role_label}" }
                                    }
                                    hr {}
                                    a {
                                        class: "dropdown-link",
                                        href: "/profile",
                                        Icon { icon: FaUser, width: 14, height: 14 }
                                        " Profil Saya"
                                    }
                                    if state.is_admin() {
                                        a {
                                            class: "dropdown-link",
                                            href: "/admin",
                                            "Admin Panel"
                                        }
                                    }
                                    hr {}
                                    LogoutButton { class: "dropdown-link logout" }
                                }
                            }
                        }
                    } else {
                        div {
                            class: "auth-buttons",
                            a { class: "login-btn", href: "/login", "Login" }
                            a { class: "register-btn", href: "/register", "Daftar" }
                        }
                    }
                }

                button {
                    class: "mobile-menu-button",
                    aria_label: "Toggle menu",
                    onclick: move |_| mobile_menu_open.set(!mobile_menu_open()),
                    if mobile_menu_open() {
                        Icon { icon: FaXmark, width: 30, height: 30 }
                    } else {
                        Icon { icon: FaBars, width: 30, height: 30 }
                    }
                }
            }

            div {
                class: if mobile_menu_open() { "navbar-mobile active" } else { "navbar-mobile" },
                NavLinks { on_explore: move |_| explore_open.set(true) }
                if !state.is_logged_in() {
                    div {
                        class: "mobile-auth",
                        a { class: "mobile-login-btn", href: "/login", "Login" }
                        a { class: "mobile-register-btn", href: "/register", "Daftar" }
                    }
                }
            }
        }

        if explore_open() {
            ExploreOverlay { on_close: move |_| explore_open.set(false) }
        }
    }
}

#[component]
fn NavLinks(on_explore: EventHandler<()>) -> Element {
    rsx! {
        ul {
            class: "nav-links",
            li { a { href: "/", "Home" } }
            li { a { href: "/about", "About" } }
            li {
                class: "dropdown",
                span { "Materi" }
                ul {
                    class: "dropdown-menu",
                    li { a { href: "/belajar-tatarias", "Tatarias" } }
                    li { a { href: "/belajar-salon", "Salon" } }
                    li { a { href: "/belajar-treatment", "Treatment" } }
                    li { a { href: "/belajar-hairstyle", "Hairstyle" } }
                }
            }
            li {
                a {
                    href: "#explore",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        on_explore.call(());
                    },
                    "Explore"
                }
            }
        }
    }
}
