//! # HTTP client adapter
//!
//! [`ApiClient`] wraps [`reqwest::Client`] with the two behaviours every call
//! shares:
//!
//! - **Bearer injection** — each request re-reads the stored session and
//!   attaches `Authorization: Bearer <token>` when a token is present, so a
//!   login in one view is picked up by the next request from any other view.
//! - **401 interception** — any unauthorized response, whichever request
//!   triggered it, clears the stored session and navigates the app back to
//!   the login view before the caller sees [`ApiError::Auth`].
//!
//! One method per backend endpoint follows; all of them return
//! `Result<_, ApiError>` and leave retries to the user.

use reqwest::{multipart, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use store::upload::UploadKind;
use store::{Session, SessionStorage, SessionStore};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    AdminStats, AuthResponse, ContactMessage, ContactPayload, ContactStatus, ContactStatusUpdate,
    Course, CoursePayload, EnrollRequest, LoginRequest, Quiz, QuizResult, QuizSubmission,
    RegisterRequest, UploadResponse, UserProfile,
};

/// Error payload convention of the backend: `{ "message": "..." }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

pub struct ApiClient<S: SessionStorage> {
    http: reqwest::Client,
    config: ApiConfig,
    sessions: SessionStore<S>,
}

impl<S: SessionStorage> ApiClient<S> {
    pub fn new(config: ApiConfig, storage: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            sessions: SessionStore::new(storage),
        }
    }

    /// Read-only snapshot of the stored session.
    pub fn session(&self) -> Session {
        self.sessions.current()
    }

    /// Persist a session (used after a server-side identity refresh).
    pub fn remember(&self, session: &Session) {
        self.sessions.save(session);
    }

    /// Forget the session. Purely client-side; the token simply stops being
    /// sent.
    pub fn logout(&self) {
        self.sessions.clear();
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = self.sessions.current().token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Map a response's status onto the error taxonomy, passing 2xx through.
    async fn check(&self, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            // Token expired or invalid. Drop the session and go back to
            // login, regardless of which request tripped this.
            self.sessions.clear();
            redirect_to_login();
            return Err(ApiError::Auth);
        }
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| format!("Permintaan gagal ({})", status.as_u16()));
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!("request failed: {e}");
            ApiError::Network(e.to_string())
        })?;
        let response = self.check(response).await?;
        let status = response.status().as_u16();
        response.json::<T>().await.map_err(|e| {
            tracing::error!("response decode failed: {e}");
            ApiError::Server {
                status,
                message: "Respons server tidak valid".to_string(),
            }
        })
    }

    /// For endpoints whose body the client does not care about.
    async fn send_ok(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!("request failed: {e}");
            ApiError::Network(e.to_string())
        })?;
        self.check(response).await.map(|_| ())
    }

    // ---- auth ----

    /// `POST /auth/login`. On success the session is persisted before the
    /// caller sees it.
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        let response: AuthResponse = self
            .send_json(self.request(Method::POST, "/auth/login").json(request))
            .await?;
        let session = response.into_session();
        self.sessions.save(&session);
        Ok(session)
    }

    /// `POST /auth/register`. Registration logs the new account in directly.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Session, ApiError> {
        let response: AuthResponse = self
            .send_json(self.request(Method::POST, "/auth/register").json(request))
            .await?;
        let session = response.into_session();
        self.sessions.save(&session);
        Ok(session)
    }

    // ---- users ----

    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        self.send_json(self.request(Method::GET, "/users/profile"))
            .await
    }

    pub async fn enroll(&self, course_id: &str) -> Result<(), ApiError> {
        self.send_ok(self.request(Method::POST, "/users/enroll").json(&EnrollRequest {
            course_id: course_id.to_string(),
        }))
        .await
    }

    // ---- courses ----

    pub async fn courses(&self) -> Result<Vec<Course>, ApiError> {
        self.send_json(self.request(Method::GET, "/courses")).await
    }

    pub async fn course_by_slug(&self, slug: &str) -> Result<Course, ApiError> {
        self.send_json(self.request(Method::GET, &format!("/courses/{slug}")))
            .await
    }

    pub async fn create_course(&self, payload: &CoursePayload) -> Result<(), ApiError> {
        self.send_ok(self.request(Method::POST, "/courses").json(payload))
            .await
    }

    pub async fn update_course(&self, id: &str, payload: &CoursePayload) -> Result<(), ApiError> {
        self.send_ok(
            self.request(Method::PUT, &format!("/courses/{id}"))
                .json(payload),
        )
        .await
    }

    pub async fn delete_course(&self, id: &str) -> Result<(), ApiError> {
        self.send_ok(self.request(Method::DELETE, &format!("/courses/{id}")))
            .await
    }

    // ---- quiz ----

    pub async fn quiz_for_course(&self, course_id: &str) -> Result<Quiz, ApiError> {
        self.send_json(self.request(Method::GET, &format!("/quiz/course/{course_id}")))
            .await
    }

    pub async fn submit_quiz(&self, submission: &QuizSubmission) -> Result<QuizResult, ApiError> {
        self.send_json(self.request(Method::POST, "/quiz/submit").json(submission))
            .await
    }

    pub async fn quiz_results(&self) -> Result<Vec<QuizResult>, ApiError> {
        self.send_json(self.request(Method::GET, "/quiz/results"))
            .await
    }

    // ---- contact ----

    pub async fn submit_contact(&self, payload: &ContactPayload) -> Result<(), ApiError> {
        self.send_ok(self.request(Method::POST, "/contact").json(payload))
            .await
    }

    pub async fn contacts(&self) -> Result<Vec<ContactMessage>, ApiError> {
        self.send_json(self.request(Method::GET, "/contact")).await
    }

    /// `PUT /contact/:id`. The only transition the client exposes is
    /// pending → read.
    pub async fn update_contact_status(
        &self,
        id: &str,
        status: ContactStatus,
    ) -> Result<(), ApiError> {
        self.send_ok(
            self.request(Method::PUT, &format!("/contact/{id}"))
                .json(&ContactStatusUpdate { status }),
        )
        .await
    }

    // ---- admin ----

    pub async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        self.send_json(self.request(Method::GET, "/admin/stats"))
            .await
    }

    // ---- upload ----

    /// Multipart upload of an already-validated image. The field name and
    /// endpoint follow the [`UploadKind`]; the confirmed URL comes back under
    /// `avatar` or `imageUrl`.
    pub async fn upload_image(
        &self,
        kind: UploadKind,
        file_name: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ApiError> {
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        let form = multipart::Form::new().part(kind.field_name(), part);

        let response: UploadResponse = self
            .send_json(self.request(Method::POST, kind.endpoint()).multipart(form))
            .await?;
        response.url().ok_or_else(|| ApiError::Server {
            status: 200,
            message: "Server tidak mengembalikan URL gambar".to_string(),
        })
    }
}

/// Force navigation to the login view after a 401. History is replaced so the
/// guarded page is not one "back" away.
fn redirect_to_login() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().replace("/login");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStorage;

    fn client_with_token(token: Option<&str>) -> ApiClient<MemoryStorage> {
        let storage = MemoryStorage::new();
        let client = ApiClient::new(ApiConfig::new("http://api.test/api"), storage);
        if let Some(token) = token {
            client.remember(&Session::authenticated(
                token,
                "u1",
                "Tester",
                store::Role::User,
            ));
        }
        client
    }

    #[test]
    fn test_bearer_header_follows_the_stored_session() {
        let client = client_with_token(Some("tok-123"));
        let request = client.request(Method::GET, "/courses").build().unwrap();
        let header = request.headers().get("authorization").unwrap();
        assert_eq!(header.to_str().unwrap(), "Bearer tok-123");
    }

    #[test]
    fn test_no_token_means_no_auth_header() {
        let client = client_with_token(None);
        let request = client.request(Method::GET, "/courses").build().unwrap();
        assert!(request.headers().get("authorization").is_none());
    }

    #[test]
    fn test_urls_are_joined_onto_the_base() {
        let client = client_with_token(None);
        let request = client.request(Method::GET, "/admin/stats").build().unwrap();
        assert_eq!(request.url().as_str(), "http://api.test/api/admin/stats");
    }

    #[test]
    fn test_logout_stops_token_injection() {
        let client = client_with_token(Some("tok-456"));
        client.logout();
        let request = client.request(Method::GET, "/courses").build().unwrap();
        assert!(request.headers().get("authorization").is_none());
        assert!(!client.session().is_authenticated());
    }
}
