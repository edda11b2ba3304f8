/// Assumed width when the window cannot be measured.
pub const FALLBACK_WIDTH: f64 = 1400.0;

/// Inner width of the browser window, if there is one.
pub fn current_width() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
}

/// Below this width the navigation collapses behind the burger button.
pub const MOBILE_NAV_BREAKPOINT: f64 = 968.0;

/// How many carousel items fit side by side at the given viewport width.
pub fn items_per_view(width: f64) -> usize {
    if width <= 600.0 {
        1
    } else if width <= 900.0 {
        2
    } else if width <= 1200.0 {
        3
    } else {
        4
    }
}

pub fn is_mobile_nav(width: f64) -> bool {
    width <= MOBILE_NAV_BREAKPOINT
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingDirection {
    Ltr,
    Rtl,
}

impl ReadingDirection {
    /// Glyph for the control that moves forward through the items.
    pub fn next_arrow(self) -> &'static str {
        match self {
            ReadingDirection::Ltr => "→",
            ReadingDirection::Rtl => "←",
        }
    }

    pub fn prev_arrow(self) -> &'static str {
        match self {
            ReadingDirection::Ltr => "←",
            ReadingDirection::Rtl => "→",
        }
    }

    pub fn dir_attr(self) -> &'static str {
        match self {
            ReadingDirection::Ltr => "ltr",
            ReadingDirection::Rtl => "rtl",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_inclusive() {
        assert_eq!(items_per_view(320.0), 1);
        assert_eq!(items_per_view(600.0), 1);
        assert_eq!(items_per_view(601.0), 2);
        assert_eq!(items_per_view(900.0), 2);
        assert_eq!(items_per_view(1200.0), 3);
        assert_eq!(items_per_view(1201.0), 4);
        assert_eq!(items_per_view(2560.0), 4);
    }

    #[test]
    fn every_width_maps_into_one_to_four() {
        for width in (0..3000).step_by(7) {
            let per_view = items_per_view(width as f64);
            assert!((1..=4).contains(&per_view), "width {width} gave {per_view}");
        }
    }

    #[test]
    fn rtl_mirrors_the_arrows() {
        assert_eq!(ReadingDirection::Rtl.next_arrow(), "←");
        assert_eq!(ReadingDirection::Rtl.prev_arrow(), "→");
        assert_eq!(ReadingDirection::Ltr.next_arrow(), "→");
    }

    #[test]
    fn mobile_nav_cutoff() {
        assert!(is_mobile_nav(968.0));
        assert!(!is_mobile_nav(969.0));
    }
}
