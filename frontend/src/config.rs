
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:8000"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

pub const SITE_TITLE: &str = "مؤسسة العجمي";

/// Unread message count for supervisors.
pub const UNREAD_COUNT_PATH: &str = "/api/unread-count/";
pub const UNREAD_POLL_MS: u32 = 30_000;

/// Pages under this path keep their own title.
pub const DASHBOARD_PATH: &str = "supervisor/dashboard";

pub const REVIEW_IMAGE_BASE: &str = "/static/images/";

pub const HERO_VIDEO_ID: &str = "d7-WTMQljn0";
pub const HERO_VIDEO_TITLE: &str = "الفيديو التعريفي - المنصة التعليمية لتحفيظ القرآن الكريم";
