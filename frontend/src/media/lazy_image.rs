//! Deferred image sources with a single fallback.

use crate::config;

pub const IMAGE_WIDTH: u32 = 300;
pub const IMAGE_HEIGHT: u32 = 350;
/// Images start loading this far before they scroll into view.
pub const ROOT_MARGIN: &str = "50px 0px";
pub const THRESHOLD: f64 = 0.01;

pub fn review_src(file: &str) -> String {
    format!("{}{}", config::REVIEW_IMAGE_BASE, file)
}

/// Inline SVG shown in place of review `number` when its image is broken.
pub fn placeholder_data_uri(number: usize) -> String {
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}'>\
         <rect fill='#1b3a70' width='{w}' height='{h}'/>\
         <text fill='#4CAF50' font-family='Arial' font-size='20' x='50%' y='50%' \
         text-anchor='middle' dominant-baseline='middle'>رأي طالب {number}</text></svg>",
        w = IMAGE_WIDTH,
        h = IMAGE_HEIGHT,
        number = number,
    );
    format!("data:image/svg+xml,{}", urlencoding::encode(&svg))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LazyAction {
    /// The element came close enough to the viewport.
    Reveal,
    Loaded,
    Failed,
}

/// Source of one deferred image. The real URL sits in `data_src` until the
/// first reveal, then moves to `src`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazySource {
    number: usize,
    data_src: Option<String>,
    src: Option<String>,
    loading: bool,
    fallback_armed: bool,
}

impl LazySource {
    pub fn new(number: usize, data_src: String) -> Self {
        Self {
            number,
            data_src: Some(data_src),
            src: None,
            loading: true,
            fallback_armed: true,
        }
    }

    pub fn data_src(&self) -> Option<&str> {
        self.data_src.as_deref()
    }

    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    /// Still waiting for the first reveal, so the observer must keep watching.
    pub fn is_pending(&self) -> bool {
        self.data_src.is_some()
    }

    /// Skeleton styling stays until the image loads or falls back.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Applies `action`; returns true if anything visible changed.
    pub fn apply(&mut self, action: LazyAction) -> bool {
        match action {
            LazyAction::Reveal => match self.data_src.take() {
                Some(src) => {
                    self.src = Some(src);
                    true
                }
                None => false,
            },
            LazyAction::Loaded => std::mem::replace(&mut self.loading, false),
            LazyAction::Failed => {
                if !self.fallback_armed || self.src.is_none() {
                    return false;
                }
                self.fallback_armed = false;
                self.src = Some(placeholder_data_uri(self.number));
                self.loading = false;
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded(uri: &str) -> String {
        let payload = uri.strip_prefix("data:image/svg+xml,").unwrap();
        urlencoding::decode(payload).unwrap().into_owned()
    }

    #[test]
    fn placeholder_names_the_review() {
        let uri = placeholder_data_uri(7);
        let svg = decoded(&uri);
        assert!(svg.contains("رأي طالب 7"));
        assert!(svg.starts_with("<svg"));
        assert!(!uri.contains('<'));
    }

    #[test]
    fn reveal_moves_the_source_once() {
        let mut image = LazySource::new(3, review_src("review3.jpeg"));
        assert!(image.is_pending());
        assert_eq!(image.src(), None);

        assert!(image.apply(LazyAction::Reveal));
        assert!(!image.is_pending());
        assert_eq!(image.src(), Some("/static/images/review3.jpeg"));
        assert!(!image.apply(LazyAction::Reveal));
    }

    #[test]
    fn failure_falls_back_exactly_once() {
        let mut image = LazySource::new(7, review_src("review7.jpeg"));
        image.apply(LazyAction::Reveal);

        assert!(image.apply(LazyAction::Failed));
        assert!(decoded(image.src().unwrap()).contains('7'));
        assert!(!image.is_loading());

        let fallback = image.src().map(str::to_owned);
        assert!(!image.apply(LazyAction::Failed));
        assert_eq!(image.src().map(str::to_owned), fallback);
    }

    #[test]
    fn load_clears_the_skeleton() {
        let mut image = LazySource::new(1, review_src("review1.jpeg"));
        image.apply(LazyAction::Reveal);
        assert!(image.apply(LazyAction::Loaded));
        assert!(!image.is_loading());
        assert!(!image.apply(LazyAction::Loaded));
    }
}
