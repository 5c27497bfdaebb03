//! Interaction state for a draggable, auto-advancing card carousel.
//!
//! The crate holds everything except painting: index rules, swipe interpretation,
//! the spring that settles the track, loop wrapping, autoplay and the per-card
//! rotation derived from the live offset. A host UI feeds pointer events and
//! frame timestamps into a [`Carousel`] and paints from what it reports.
//!
//! ```no_run
//! use std::time::{Duration, Instant};
//! use guido_carousel::prelude::*;
//!
//! let config = CarouselConfig::default()
//!     .looping(true)
//!     .autoplay(true)
//!     .autoplay_delay(Duration::from_millis(2500));
//! let mut carousel = Carousel::new(config, Instant::now()).expect("valid config");
//!
//! loop {
//!     let changes = carousel.frame(Instant::now());
//!     if !changes.is_empty() {
//!         for view in carousel.card_views() {
//!             // paint view.card rotated by view.rotation degrees
//!             let _ = view;
//!         }
//!     }
//!     std::thread::sleep(Duration::from_millis(16));
//! }
//! ```

pub mod animation;
pub mod card;
pub mod carousel;
pub mod config;
pub mod error;
pub mod gesture;
pub mod index;
pub mod motion;
pub mod timer;

pub use card::{default_cards, Card, Icon};
pub use carousel::{Carousel, CardView, ChangeFlags, DotView, Settled};
pub use config::{CarouselConfig, Metrics};
pub use error::ConfigError;

pub mod prelude {
    pub use crate::animation::{SpringConfig, Transition};
    pub use crate::card::{default_cards, Card, Icon};
    pub use crate::carousel::{Carousel, CardView, ChangeFlags, DotView, Settled};
    pub use crate::config::{CarouselConfig, Metrics};
    pub use crate::error::ConfigError;
    pub use crate::gesture::{interpret_drag_end, DragDecision};
    pub use crate::motion::card_rotation;
}
