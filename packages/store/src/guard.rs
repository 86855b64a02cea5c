//! Access decisions for navigation.
//!
//! A pure, synchronous function from (session, required access) to a
//! rendering decision, evaluated on every navigation. Guarded views redirect
//! instead of block-rendering, and the caller applies redirects by replacing
//! the current history entry so "back" cannot land on the guarded view again.

use crate::session::Session;

/// What a view requires before it may render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLevel {
    Public,
    RequiresAuth,
    RequiresAdmin,
}

/// The outcome of evaluating a session against an [`AccessLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    RedirectToLogin,
    RedirectHome,
}

/// Decide whether a view with the given requirement may render for this
/// session.
///
/// The token check runs before the role check: an anonymous visitor asking
/// for an admin view lands on the login page, not on home.
pub fn resolve(session: &Session, level: AccessLevel) -> RouteDecision {
    match level {
        AccessLevel::Public => RouteDecision::Render,
        AccessLevel::RequiresAuth => {
            if session.is_authenticated() {
                RouteDecision::Render
            } else {
                RouteDecision::RedirectToLogin
            }
        }
        AccessLevel::RequiresAdmin => {
            if !session.is_authenticated() {
                RouteDecision::RedirectToLogin
            } else if session.role.is_admin() {
                RouteDecision::Render
            } else {
                RouteDecision::RedirectHome
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;
    use crate::session::{Role, SessionStore};

    #[test]
    fn test_public_always_renders() {
        let anonymous = Session::anonymous();
        let admin = Session::authenticated("t", "u", "A", Role::Admin);

        assert_eq!(resolve(&anonymous, AccessLevel::Public), RouteDecision::Render);
        assert_eq!(resolve(&admin, AccessLevel::Public), RouteDecision::Render);
    }

    #[test]
    fn test_no_token_never_renders_guarded_views() {
        let session = Session::anonymous();

        assert_eq!(
            resolve(&session, AccessLevel::RequiresAuth),
            RouteDecision::RedirectToLogin
        );
        assert_eq!(
            resolve(&session, AccessLevel::RequiresAdmin),
            RouteDecision::RedirectToLogin
        );
    }

    #[test]
    fn test_token_without_admin_role_goes_home() {
        let session = Session::authenticated("t", "u", "Budi", Role::User);

        assert_eq!(
            resolve(&session, AccessLevel::RequiresAuth),
            RouteDecision::Render
        );
        assert_eq!(
            resolve(&session, AccessLevel::RequiresAdmin),
            RouteDecision::RedirectHome
        );
    }

    #[test]
    fn test_admin_renders_everywhere() {
        let session = Session::authenticated("t", "u", "Siti", Role::Admin);

        assert_eq!(resolve(&session, AccessLevel::RequiresAuth), RouteDecision::Render);
        assert_eq!(resolve(&session, AccessLevel::RequiresAdmin), RouteDecision::Render);
    }

    #[test]
    fn test_missing_token_beats_missing_role() {
        // The login redirect short-circuits the role check even for a
        // session whose stale stored role says "user".
        let session = Session {
            token: None,
            user_id: None,
            user_name: "Stale".to_string(),
            role: Role::User,
        };
        assert_eq!(
            resolve(&session, AccessLevel::RequiresAdmin),
            RouteDecision::RedirectToLogin
        );
    }

    #[test]
    fn test_logout_invalidates_a_previously_rendered_view() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage);
        store.save(&Session::authenticated("t", "u", "Ana", Role::User));
        assert_eq!(
            resolve(&store.current(), AccessLevel::RequiresAuth),
            RouteDecision::Render
        );

        store.clear();

        // Re-evaluating the same view after logout must send us to login.
        assert!(!store.current().is_authenticated());
        assert_eq!(
            resolve(&store.current(), AccessLevel::RequiresAuth),
            RouteDecision::RedirectToLogin
        );
    }
}
