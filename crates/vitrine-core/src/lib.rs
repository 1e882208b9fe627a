// crates/vitrine-core/src/lib.rs
// Site behavior state machines (native + WASM compatible)
// No web-sys or wasm-bindgen here; the DOM side lives in vitrine-app

pub mod anchor;
pub mod autoplay;
pub mod carousel;
pub mod config;
pub mod counter;
pub mod error;
pub mod form;
pub mod header;
pub mod menu;
pub mod once;
pub mod slideshow;

pub use autoplay::Autoplay;
pub use carousel::{Carousel, CarouselState, Direction, SlideDeck, Transition};
pub use config::{CarouselMount, CounterConfig, FormConfig, HeaderConfig, MenuConfig, SiteConfig};
pub use counter::{CounterRamp, RampStep};
pub use error::ConfigError;
pub use form::{FieldInput, FormOutcome, FormSurface};
pub use header::HeaderStyle;
pub use menu::{MenuSurface, MobileMenu, StyleTarget};
pub use once::OneShot;
pub use slideshow::Slideshow;
