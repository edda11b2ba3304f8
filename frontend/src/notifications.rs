use gloo_net::http::Request;
use serde::Deserialize;

use crate::config;
use crate::error::FetchError;

/// Above this the badge stops counting.
pub const BADGE_CAP: u32 = 99;

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct UnreadCount {
    #[serde(default)]
    pub total_unread: Option<i64>,
}

impl UnreadCount {
    pub fn count(&self) -> u32 {
        self.total_unread
            .unwrap_or(0)
            .clamp(0, u32::MAX as i64) as u32
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Badge {
    Hidden,
    Shown(String),
}

impl Badge {
    pub fn for_count(count: u32) -> Self {
        match count {
            0 => Badge::Hidden,
            n if n > BADGE_CAP => Badge::Shown(format!("{}+", BADGE_CAP)),
            n => Badge::Shown(n.to_string()),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Badge::Shown(_))
    }

    pub fn text(&self) -> &str {
        match self {
            Badge::Shown(text) => text,
            Badge::Hidden => "",
        }
    }
}

/// Title the document should carry for `count` unread messages, or `None`
/// when the current page manages its own title.
pub fn document_title(count: u32, pathname: &str) -> Option<String> {
    if pathname.contains(config::DASHBOARD_PATH) {
        return None;
    }
    if count > 0 {
        Some(format!("({}) رسائل جديدة - {}", count, config::SITE_TITLE))
    } else {
        Some(config::SITE_TITLE.to_string())
    }
}

/// Polling is only for pages rendered with `<meta name="is-supervisor" content="1">`.
pub fn is_supervisor(meta_content: Option<&str>) -> bool {
    meta_content == Some("1")
}

pub async fn fetch_unread_count() -> Result<u32, FetchError> {
    let response = Request::get(&format!(
        "{}{}",
        config::get_backend_url(),
        config::UNREAD_COUNT_PATH
    ))
    .send()
    .await?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response.json::<UnreadCount>().await?;
    Ok(body.count())
}
