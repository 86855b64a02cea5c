//! # Upload flow — validation, optimistic preview, stale-response guard
//!
//! [`UploadFlow`] models one image-upload widget: pick a file, validate it,
//! show a local preview immediately, send it, and swap in the URL the server
//! confirmed. The flow itself performs no I/O; the caller reads the file and
//! talks to the network, reporting back through the generation tag returned
//! by [`UploadFlow::select`].
//!
//! ## States
//!
//! | Status | Meaning |
//! |--------|---------|
//! | `Idle` | nothing picked yet |
//! | `Validating` | type/size checks running |
//! | `Uploading` | checks passed, transfer in flight |
//! | `Success` | server confirmed, `confirmed_url` updated |
//! | `Failed` | validation or transfer failed, preview reverted |
//!
//! Transitions are strictly `Idle → Validating → (Failed | Uploading) →
//! (Success | Failed)`.
//!
//! ## Staleness
//!
//! Picking a new file while a transfer is in flight supersedes the old
//! attempt: the generation counter advances and any later report carrying the
//! old tag is ignored, so a slow response can never clobber newer state. A
//! failed attempt reverts the preview to the last confirmed image — never to
//! blank — and surfaces its message; nothing retries automatically.

/// Which upload endpoint a widget feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Avatar,
    Course,
}

impl UploadKind {
    /// Size ceiling in bytes: 5 MiB for avatars, 10 MiB for course images.
    pub fn max_bytes(&self) -> u64 {
        match self {
            UploadKind::Avatar => 5 * 1024 * 1024,
            UploadKind::Course => 10 * 1024 * 1024,
        }
    }

    /// Multipart field name the backend expects.
    pub fn field_name(&self) -> &'static str {
        match self {
            UploadKind::Avatar => "avatar",
            UploadKind::Course => "image",
        }
    }

    /// API path for this kind of upload.
    pub fn endpoint(&self) -> &'static str {
        match self {
            UploadKind::Avatar => "/upload/avatar",
            UploadKind::Course => "/upload/course",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    Idle,
    Validating,
    Uploading,
    Success,
    Failed,
}

/// Client-side validation failures. These abort before any preview or
/// network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadError {
    InvalidType,
    TooLarge { max_mib: u64 },
}

impl std::fmt::Display for UploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadError::InvalidType => write!(f, "File harus berupa gambar"),
            UploadError::TooLarge { max_mib } => {
                write!(f, "Ukuran file maksimal {max_mib}MB")
            }
        }
    }
}

/// State of one upload widget.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFlow {
    kind: UploadKind,
    status: UploadStatus,
    preview: Option<String>,
    confirmed: Option<String>,
    error: Option<String>,
    generation: u64,
}

impl UploadFlow {
    /// A fresh flow showing the currently confirmed image, if any.
    pub fn new(kind: UploadKind, current: Option<String>) -> Self {
        Self {
            kind,
            status: UploadStatus::Idle,
            preview: current.clone(),
            confirmed: current,
            error: None,
            generation: 0,
        }
    }

    pub fn kind(&self) -> UploadKind {
        self.kind
    }

    pub fn status(&self) -> UploadStatus {
        self.status
    }

    /// What the widget should display right now: the optimistic preview while
    /// uploading, otherwise the last confirmed image.
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    /// The last server-confirmed URL.
    pub fn confirmed_url(&self) -> Option<&str> {
        self.confirmed.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_uploading(&self) -> bool {
        self.status == UploadStatus::Uploading
    }

    /// Validate a picked file and open a new attempt.
    ///
    /// Checks run in order and short-circuit: type first, then size. On
    /// success the attempt supersedes any in-flight one and the caller gets
    /// the generation tag to hand back to [`set_preview`](Self::set_preview),
    /// [`succeed`](Self::succeed) or [`fail`](Self::fail).
    pub fn select(&mut self, mime: &str, size: u64) -> Result<u64, UploadError> {
        // Any new pick supersedes the in-flight attempt, valid or not.
        self.generation += 1;
        self.status = UploadStatus::Validating;
        self.error = None;

        if !mime.starts_with("image/") {
            return Err(self.reject(UploadError::InvalidType));
        }
        if size > self.kind.max_bytes() {
            return Err(self.reject(UploadError::TooLarge {
                max_mib: self.kind.max_bytes() >> 20,
            }));
        }

        self.status = UploadStatus::Uploading;
        Ok(self.generation)
    }

    fn reject(&mut self, error: UploadError) -> UploadError {
        self.status = UploadStatus::Failed;
        self.error = Some(error.to_string());
        error
    }

    /// Install the optimistic local preview for an attempt. Ignored when the
    /// attempt has been superseded.
    pub fn set_preview(&mut self, generation: u64, data_uri: String) {
        if generation != self.generation {
            return;
        }
        self.preview = Some(data_uri);
    }

    /// Record the server-confirmed URL for an attempt. Returns `false` when
    /// the report is stale and was ignored.
    pub fn succeed(&mut self, generation: u64, url: String) -> bool {
        if generation != self.generation {
            return false;
        }
        self.status = UploadStatus::Success;
        self.preview = Some(url.clone());
        self.confirmed = Some(url);
        self.error = None;
        true
    }

    /// Record a transfer failure: revert the preview to the last confirmed
    /// image and surface the message. Returns `false` when the report is
    /// stale and was ignored.
    pub fn fail(&mut self, generation: u64, message: impl Into<String>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.status = UploadStatus::Failed;
        self.preview = self.confirmed.clone();
        self.error = Some(message.into());
        true
    }
}

/// Derive a MIME type from a file name. The browser's file engine exposes
/// names, not declared content types, so the extension is the best signal
/// available client-side.
pub fn mime_from_name(name: &str) -> &'static str {
    let ext = name.rsplit('.').next().unwrap_or_default().to_ascii_lowercase();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "txt" => "text/plain",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: u64 = 1024 * 1024;

    #[test]
    fn test_non_image_rejected_before_any_network_step() {
        let mut flow = UploadFlow::new(UploadKind::Avatar, None);

        let err = flow.select("text/plain", 100).unwrap_err();
        assert_eq!(err, UploadError::InvalidType);
        assert_eq!(flow.status(), UploadStatus::Failed);
        assert_eq!(flow.error(), Some("File harus berupa gambar"));
        // Nothing was previewed or confirmed.
        assert!(flow.preview().is_none());
        assert!(flow.confirmed_url().is_none());
    }

    #[test]
    fn test_type_check_runs_before_size_check() {
        let mut flow = UploadFlow::new(UploadKind::Avatar, None);

        // Wrong type AND oversized: the type failure wins.
        let err = flow.select("text/plain", 100 * MIB).unwrap_err();
        assert_eq!(err, UploadError::InvalidType);
    }

    #[test]
    fn test_size_ceiling_depends_on_kind() {
        // 6 MiB is too big for an avatar but fine for a course image.
        let mut avatar = UploadFlow::new(UploadKind::Avatar, None);
        let err = avatar.select("image/png", 6 * MIB).unwrap_err();
        assert_eq!(err, UploadError::TooLarge { max_mib: 5 });
        assert_eq!(avatar.error(), Some("Ukuran file maksimal 5MB"));

        let mut course = UploadFlow::new(UploadKind::Course, None);
        assert!(course.select("image/png", 6 * MIB).is_ok());
        assert_eq!(course.status(), UploadStatus::Uploading);
    }

    #[test]
    fn test_happy_path_confirms_the_server_url() {
        let mut flow = UploadFlow::new(UploadKind::Avatar, None);

        let generation = flow.select("image/jpeg", MIB).unwrap();
        flow.set_preview(generation, "data:image/jpeg;base64,xxx".to_string());
        assert_eq!(flow.preview(), Some("data:image/jpeg;base64,xxx"));
        assert!(flow.is_uploading());

        assert!(flow.succeed(generation, "/uploads/avatar-1.jpg".to_string()));
        assert_eq!(flow.status(), UploadStatus::Success);
        assert_eq!(flow.preview(), Some("/uploads/avatar-1.jpg"));
        assert_eq!(flow.confirmed_url(), Some("/uploads/avatar-1.jpg"));
    }

    #[test]
    fn test_failure_reverts_to_the_prior_image_not_blank() {
        let mut flow =
            UploadFlow::new(UploadKind::Avatar, Some("/uploads/old.jpg".to_string()));

        let generation = flow.select("image/png", MIB).unwrap();
        flow.set_preview(generation, "data:image/png;base64,yyy".to_string());

        assert!(flow.fail(generation, "Upload gagal"));
        assert_eq!(flow.status(), UploadStatus::Failed);
        assert_eq!(flow.preview(), Some("/uploads/old.jpg"));
        assert_eq!(flow.confirmed_url(), Some("/uploads/old.jpg"));
        assert_eq!(flow.error(), Some("Upload gagal"));
    }

    #[test]
    fn test_stale_response_cannot_clobber_newer_attempt() {
        let mut flow = UploadFlow::new(UploadKind::Course, None);

        // Attempt A starts, then B supersedes it while A is in flight.
        let gen_a = flow.select("image/png", MIB).unwrap();
        let gen_b = flow.select("image/png", 2 * MIB).unwrap();
        assert_ne!(gen_a, gen_b);

        assert!(flow.succeed(gen_b, "/uploads/b.png".to_string()));

        // A's response arrives late and must be ignored.
        assert!(!flow.succeed(gen_a, "/uploads/a.png".to_string()));
        assert_eq!(flow.confirmed_url(), Some("/uploads/b.png"));
        assert_eq!(flow.status(), UploadStatus::Success);

        // Same for a late failure report.
        assert!(!flow.fail(gen_a, "too slow"));
        assert!(flow.error().is_none());
    }

    #[test]
    fn test_invalid_pick_supersedes_inflight_attempt() {
        let mut flow = UploadFlow::new(UploadKind::Avatar, None);

        let gen_a = flow.select("image/png", MIB).unwrap();
        // A bad pick still invalidates the attempt it interrupted.
        assert!(flow.select("text/plain", 100).is_err());

        assert!(!flow.succeed(gen_a, "/uploads/a.png".to_string()));
        assert!(flow.confirmed_url().is_none());
    }

    #[test]
    fn test_stale_preview_is_ignored() {
        let mut flow = UploadFlow::new(UploadKind::Avatar, None);

        let gen_a = flow.select("image/png", MIB).unwrap();
        let gen_b = flow.select("image/png", MIB).unwrap();
        flow.set_preview(gen_b, "data:b".to_string());
        flow.set_preview(gen_a, "data:a".to_string());

        assert_eq!(flow.preview(), Some("data:b"));
    }

    #[test]
    fn test_mime_from_name() {
        assert_eq!(mime_from_name("photo.PNG"), "image/png");
        assert_eq!(mime_from_name("pic.jpeg"), "image/jpeg");
        assert_eq!(mime_from_name("notes.txt"), "text/plain");
        assert_eq!(mime_from_name("no-extension"), "application/octet-stream");
    }
}
