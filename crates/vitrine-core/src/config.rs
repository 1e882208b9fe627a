// crates/vitrine-core/src/config.rs
// Site configuration: selectors, timings and literal values
// Every default matches the markup and stylesheet shipped with the site

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration, read from an optional JSON block in the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub carousels: Vec<CarouselMount>,
    /// Delay between clearing the outgoing slide and showing the incoming one
    pub transition_delay_ms: u32,
    pub menu: MenuConfig,
    pub counters: CounterConfig,
    pub header: HeaderConfig,
    pub form: FormConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            carousels: vec![CarouselMount::hero(), CarouselMount::testimonials()],
            transition_delay_ms: 50,
            menu: MenuConfig::default(),
            counters: CounterConfig::default(),
            header: HeaderConfig::default(),
            form: FormConfig::default(),
        }
    }
}

/// Where a carousel lives in the page and how fast it advances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselMount {
    pub container: String,
    pub slides: String,
    pub dots: String,
    #[serde(default = "default_autoplay_ms")]
    pub autoplay_ms: u32,
}

fn default_autoplay_ms() -> u32 {
    5000
}

impl CarouselMount {
    pub fn hero() -> Self {
        CarouselMount {
            container: ".hero".to_string(),
            slides: ".carousel-slide".to_string(),
            dots: ".carousel-dots .dot".to_string(),
            autoplay_ms: default_autoplay_ms(),
        }
    }

    pub fn testimonials() -> Self {
        CarouselMount {
            container: ".testimonials-section".to_string(),
            slides: ".testimonial-slide".to_string(),
            dots: ".testimonial-dots .dot".to_string(),
            autoplay_ms: 6000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub toggle: String,
    pub nav: String,
    pub list: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig {
            toggle: ".mobile-menu-toggle".to_string(),
            nav: ".nav".to_string(),
            list: ".nav-list".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub selector: String,
    /// Section watched for visibility
    pub section: String,
    pub duration_ms: u32,
    /// Nominal frame time used as the per-step divisor (~60fps)
    pub frame_ms: u32,
    pub threshold: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        CounterConfig {
            selector: ".stat-number".to_string(),
            section: ".stats-grid".to_string(),
            duration_ms: 2000,
            frame_ms: 16,
            threshold: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub selector: String,
    pub threshold_px: f64,
    pub scrolled_background: String,
    pub scrolled_backdrop: String,
    pub top_background: String,
    pub top_backdrop: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        HeaderConfig {
            selector: ".header".to_string(),
            threshold_px: 100.0,
            scrolled_background: "rgba(255, 255, 255, 0.95)".to_string(),
            scrolled_backdrop: "blur(10px)".to_string(),
            top_background: "#FFFFFF".to_string(),
            top_backdrop: "none".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub required_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        FormConfig {
            required_message: "Este campo es obligatorio".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for mount in &self.carousels {
            require_selector("carousels.container", &mount.container)?;
            require_selector("carousels.slides", &mount.slides)?;
            require_selector("carousels.dots", &mount.dots)?;
            if mount.autoplay_ms == 0 {
                return Err(ConfigError::invalid(
                    "carousels.autoplay_ms",
                    format!("{} has a zero autoplay interval", mount.container),
                ));
            }
        }

        require_selector("menu.toggle", &self.menu.toggle)?;
        require_selector("menu.nav", &self.menu.nav)?;
        require_selector("menu.list", &self.menu.list)?;

        require_selector("counters.selector", &self.counters.selector)?;
        require_selector("counters.section", &self.counters.section)?;
        if self.counters.frame_ms == 0 {
            return Err(ConfigError::invalid("counters.frame_ms", "must be greater than 0"));
        }
        if !(0.0..=1.0).contains(&self.counters.threshold) {
            return Err(ConfigError::invalid(
                "counters.threshold",
                format!("{} is outside [0, 1]", self.counters.threshold),
            ));
        }

        require_selector("header.selector", &self.header.selector)?;
        if self.header.threshold_px.is_nan() {
            return Err(ConfigError::invalid("header.threshold_px", "must be a number"));
        }

        Ok(())
    }
}

/// An empty selector would make `querySelector` throw
fn require_selector(field: &'static str, selector: &str) -> Result<(), ConfigError> {
    if selector.trim().is_empty() {
        return Err(ConfigError::invalid(field, "selector must not be empty"));
    }
    Ok(())
}
