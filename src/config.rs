//! Construction options for a [`Carousel`](crate::Carousel).

use std::time::Duration;

use crate::animation::SpringConfig;
use crate::card::{default_cards, Card};
use crate::error::ConfigError;

/// Space between two adjacent cards on the track, in px
pub const GAP: f32 = 16.0;
/// Inner padding of the widget container, in px
pub const CONTAINER_PADDING: f32 = 16.0;
/// Card aspect ratio (width / height) when not rendered round
pub const CARD_ASPECT_RATIO: f32 = 1.6;

#[derive(Clone, Debug)]
pub struct CarouselConfig {
    pub items: Vec<Card>,
    /// Overall widget width in px
    pub base_width: f32,
    pub autoplay: bool,
    pub autoplay_delay: Duration,
    pub pause_on_hover: bool,
    pub looping: bool,
    /// Circular presentation. Styling only, no effect on state.
    pub round: bool,
    /// Spring used to settle the track after every index change
    pub spring: SpringConfig,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            items: default_cards(),
            base_width: 600.0,
            autoplay: false,
            autoplay_delay: Duration::from_millis(3000),
            pause_on_hover: false,
            looping: false,
            round: false,
            spring: SpringConfig::DEFAULT,
        }
    }
}

impl CarouselConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(mut self, items: Vec<Card>) -> Self {
        self.items = items;
        self
    }

    pub fn base_width(mut self, width: f32) -> Self {
        self.base_width = width;
        self
    }

    pub fn autoplay(mut self, enabled: bool) -> Self {
        self.autoplay = enabled;
        self
    }

    pub fn autoplay_delay(mut self, delay: Duration) -> Self {
        self.autoplay_delay = delay;
        self
    }

    pub fn pause_on_hover(mut self, enabled: bool) -> Self {
        self.pause_on_hover = enabled;
        self
    }

    pub fn looping(mut self, enabled: bool) -> Self {
        self.looping = enabled;
        self
    }

    pub fn round(mut self, enabled: bool) -> Self {
        self.round = enabled;
        self
    }

    pub fn spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }

    /// Check every option that the index arithmetic or layout depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.items.is_empty() {
            return Err(ConfigError::EmptyItems);
        }
        validate_base_width(self.base_width)?;
        validate_autoplay_delay(self.autoplay_delay)?;
        self.spring.check().map_err(ConfigError::InvalidSpring)?;
        Ok(())
    }

    pub fn metrics(&self) -> Metrics {
        Metrics::new(self.base_width, self.round)
    }
}

pub(crate) fn validate_base_width(base_width: f32) -> Result<(), ConfigError> {
    if base_width.is_infinite() {
        return Err(ConfigError::NonFiniteBaseWidth(base_width));
    }
    let min = CONTAINER_PADDING * 2.0;
    // Written this way so NaN is rejected too
    if !(base_width > min) {
        return Err(ConfigError::BaseWidthTooSmall { base_width, min });
    }
    Ok(())
}

pub(crate) fn validate_autoplay_delay(delay: Duration) -> Result<(), ConfigError> {
    if delay.is_zero() {
        return Err(ConfigError::ZeroAutoplayDelay);
    }
    Ok(())
}

/// Pixel geometry derived from the base width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub container_width: f32,
    /// Only set for round carousels, which are as tall as they are wide
    pub container_height: Option<f32>,
    pub item_width: f32,
    pub item_height: f32,
    /// Distance the track moves for one index step (card width + gap)
    pub track_item_offset: f32,
}

impl Metrics {
    pub fn new(base_width: f32, round: bool) -> Self {
        let item_width = base_width - CONTAINER_PADDING * 2.0;
        Self {
            container_width: base_width,
            container_height: round.then_some(base_width),
            item_width,
            item_height: if round {
                item_width
            } else {
                item_width / CARD_ASPECT_RATIO
            },
            track_item_offset: item_width + GAP,
        }
    }
}
