/// Permissions granted to the embedded player.
pub const EMBED_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";
pub const EMBED_REFERRER_POLICY: &str = "strict-origin-when-cross-origin";

pub fn embed_url(video_id: &str) -> String {
    format!(
        "https://www.youtube.com/embed/{}?autoplay=1&rel=0&modestbranding=1",
        video_id
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroVideo {
    Placeholder,
    Embedded,
    Unavailable,
}

impl HeroVideo {
    /// Swaps the placeholder for the player. Only the first call counts.
    pub fn activate(self) -> Self {
        match self {
            HeroVideo::Placeholder => HeroVideo::Embedded,
            other => other,
        }
    }

    /// The embed reported a load error. Not every failure of the hosted
    /// player surfaces this way, so this is best effort.
    pub fn fail(self) -> Self {
        match self {
            HeroVideo::Embedded => HeroVideo::Unavailable,
            other => other,
        }
    }

    pub fn accepts_clicks(self) -> bool {
        self == HeroVideo::Placeholder
    }
}
