// crates/vitrine-core/src/header.rs
// Header background on scroll

use crate::config::HeaderConfig;

/// Inline values for the header at a given scroll offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderStyle<'a> {
    pub background_color: &'a str,
    pub backdrop_filter: &'a str,
}

impl<'a> HeaderStyle<'a> {
    /// Opaque-ish and blurred once scrolled past the threshold
    pub fn for_scroll(scroll_top: f64, config: &'a HeaderConfig) -> Self {
        if scroll_top > config.threshold_px {
            HeaderStyle {
                background_color: &config.scrolled_background,
                backdrop_filter: &config.scrolled_backdrop,
            }
        } else {
            HeaderStyle {
                background_color: &config.top_background,
                backdrop_filter: &config.top_backdrop,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        let config = HeaderConfig::default();

        let top = HeaderStyle::for_scroll(0.0, &config);
        assert_eq!(top.background_color, "#FFFFFF");
        assert_eq!(top.backdrop_filter, "none");

        // Exactly at the threshold is still "top"
        assert_eq!(HeaderStyle::for_scroll(100.0, &config), top);

        let scrolled = HeaderStyle::for_scroll(100.5, &config);
        assert_eq!(scrolled.background_color, "rgba(255, 255, 255, 0.95)");
        assert_eq!(scrolled.backdrop_filter, "blur(10px)");
    }
}
