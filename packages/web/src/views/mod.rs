mod home;
pub use home::Home;

mod about;
pub use about::About;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod profile;
pub use profile::Profile;

mod admin;
pub use admin::Admin;

mod course;
pub use course::CoursePage;

/// Navigate by URL. Views use this for post-login redirects where the target
/// depends on the role.
pub(crate) fn navigate_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = path;
    }
}

/// Native browser confirm dialog; answers yes on platforms without one.
pub(crate) fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        true
    }
}
