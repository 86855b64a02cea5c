//! # Wire types for the Barmodule backend
//!
//! The backend is a JS/Mongo API: record ids arrive as `_id` and field names
//! are camelCase, so every struct carries the serde renames to stay
//! byte-compatible with what the server actually emits. These types are the
//! only place that knows about the wire shape; the rest of the client works
//! with them as plain Rust data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use store::{Role, Session};

// ---- auth ----

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// `POST /auth/login` and `POST /auth/register` answer with a token plus the
/// identity to remember.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: AuthUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub name: String,
    pub role: Role,
}

impl AuthResponse {
    /// Turn the login/register payload into a client session.
    pub fn into_session(self) -> Session {
        Session::authenticated(self.token, self.user.id, self.user.name, self.user.role)
    }
}

// ---- users ----

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub enrolled_courses: Vec<Enrollment>,
}

/// One entry of a profile's enrollment list. The backend populates the course
/// reference; it can be null for a course deleted after enrollment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    #[serde(rename = "courseId", default)]
    pub course: Option<CourseRef>,
    #[serde(default)]
    pub progress: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CourseRef {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    pub course_id: String,
}

// ---- courses ----

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseCategory {
    Hairstyle,
    Salon,
    Treatment,
    Tatarias,
}

impl CourseCategory {
    pub const ALL: [CourseCategory; 4] = [
        CourseCategory::Hairstyle,
        CourseCategory::Salon,
        CourseCategory::Treatment,
        CourseCategory::Tatarias,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CourseCategory::Hairstyle => "hairstyle",
            CourseCategory::Salon => "salon",
            CourseCategory::Treatment => "treatment",
            CourseCategory::Tatarias => "tatarias",
        }
    }

    /// Display name for headings and the admin form.
    pub fn label(&self) -> &'static str {
        match self {
            CourseCategory::Hairstyle => "Hairstyle",
            CourseCategory::Salon => "Salon",
            CourseCategory::Treatment => "Treatment",
            CourseCategory::Tatarias => "Tatarias",
        }
    }

    /// Lenient parse for `<select>` values; unknown input falls back to the
    /// form default.
    pub fn parse(value: &str) -> Self {
        match value {
            "salon" => CourseCategory::Salon,
            "treatment" => CourseCategory::Treatment,
            "tatarias" => CourseCategory::Tatarias,
            _ => CourseCategory::Hairstyle,
        }
    }
}

impl Default for CourseCategory {
    fn default() -> Self {
        CourseCategory::Hairstyle
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    pub category: CourseCategory,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

/// Body for `POST /courses` and `PUT /courses/:id`. Create and edit share
/// this shape; the endpoint choice is the only difference. Slug uniqueness is
/// the server's job — the client only insists the fields are non-empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePayload {
    pub title: String,
    pub slug: String,
    pub category: CourseCategory,
    pub description: String,
    pub image: String,
    pub video_url: String,
}

// ---- contact ----

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Pending,
    Read,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::Pending => "pending",
            ContactStatus::Read => "read",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ContactStatus::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub title: String,
    pub message: String,
    pub status: ContactStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactPayload {
    pub email: String,
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactStatusUpdate {
    pub status: ContactStatus,
}

// ---- quiz ----

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Quiz {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSubmission {
    pub quiz_id: String,
    pub answers: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub total: u32,
}

// ---- admin ----

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_courses: u64,
    #[serde(default)]
    pub total_quizzes: u64,
    #[serde(default)]
    pub pending_contacts: u64,
}

// ---- upload ----

/// Upload endpoints answer with the stored URL under a field named after the
/// upload kind: `avatar` for avatars, `imageUrl` for everything else.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl UploadResponse {
    pub fn url(self) -> Option<String> {
        self.avatar.or(self.image_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_becomes_a_session() {
        let json = r#"{
            "token": "jwt-abc",
            "user": { "id": "u1", "name": "Siti", "role": "admin" }
        }"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        let session = response.into_session();

        assert_eq!(session.token.as_deref(), Some("jwt-abc"));
        assert_eq!(session.user_id.as_deref(), Some("u1"));
        assert_eq!(session.user_name, "Siti");
        assert!(session.role.is_admin());
    }

    #[test]
    fn test_unknown_role_reads_as_user() {
        let json = r#"{ "id": "u2", "name": "Budi", "role": "moderator" }"#;
        let user: AuthUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn test_course_wire_format() {
        let json = r#"{
            "_id": "c1",
            "title": "Dasar Makeup",
            "slug": "dasar-makeup",
            "category": "tatarias",
            "description": "Pengenalan alat makeup",
            "image": "/uploads/makeup.jpg",
            "videoUrl": "https://youtu.be/xyz"
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.id, "c1");
        assert_eq!(course.category, CourseCategory::Tatarias);
        assert_eq!(course.video_url.as_deref(), Some("https://youtu.be/xyz"));
    }

    #[test]
    fn test_course_payload_serializes_camel_case() {
        let payload = CoursePayload {
            title: "Basic Spa".to_string(),
            slug: "basic-spa".to_string(),
            category: CourseCategory::Salon,
            description: String::new(),
            image: String::new(),
            video_url: "v".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["category"], "salon");
        assert_eq!(json["videoUrl"], "v");
        assert!(json.get("video_url").is_none());
    }

    #[test]
    fn test_profile_with_populated_enrollments() {
        let json = r#"{
            "_id": "u3",
            "name": "Dewi",
            "email": "dewi@example.com",
            "role": "user",
            "createdAt": "2024-03-01T08:00:00Z",
            "enrolledCourses": [
                { "courseId": { "_id": "c1", "title": "Haircut 101" }, "progress": 40 },
                { "courseId": null, "progress": 0 }
            ]
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.enrolled_courses.len(), 2);
        assert_eq!(
            profile.enrolled_courses[0].course.as_ref().unwrap().title,
            "Haircut 101"
        );
        assert!(profile.enrolled_courses[1].course.is_none());
        assert!(profile.created_at.is_some());
    }

    #[test]
    fn test_contact_status_transitions_only_forward() {
        let message: ContactMessage = serde_json::from_str(
            r#"{
                "_id": "m1",
                "email": "a@b.c",
                "title": "Halo",
                "message": "Tanya jadwal",
                "status": "pending"
            }"#,
        )
        .unwrap();
        assert!(message.status.is_pending());

        // The only update the client can express is pending -> read.
        let update = serde_json::to_value(ContactStatusUpdate {
            status: ContactStatus::Read,
        })
        .unwrap();
        assert_eq!(update["status"], "read");
    }

    #[test]
    fn test_upload_response_field_depends_on_kind() {
        let avatar: UploadResponse =
            serde_json::from_str(r#"{ "avatar": "/uploads/a.png" }"#).unwrap();
        assert_eq!(avatar.url().as_deref(), Some("/uploads/a.png"));

        let course: UploadResponse =
            serde_json::from_str(r#"{ "imageUrl": "/uploads/c.png" }"#).unwrap();
        assert_eq!(course.url().as_deref(), Some("/uploads/c.png"));

        let empty: UploadResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.url().is_none());
    }

    #[test]
    fn test_admin_stats_tolerates_missing_fields() {
        let stats: AdminStats = serde_json::from_str(r#"{ "totalUsers": 12 }"#).unwrap();
        assert_eq!(stats.total_users, 12);
        assert_eq!(stats.pending_contacts, 0);
    }
}
