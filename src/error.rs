use thiserror::Error;

/// Rejected carousel configuration.
///
/// Returned by [`Carousel::new`](crate::Carousel::new) and by the reconfiguring setters.
/// The widget state is never touched when one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Index arithmetic wraps modulo the card count, so at least one card is required.
    #[error("carousel needs at least one item")]
    EmptyItems,
    #[error("base width {base_width}px leaves no room for a card (must exceed {min}px)")]
    BaseWidthTooSmall { base_width: f32, min: f32 },
    #[error("base width must be finite, got {0}")]
    NonFiniteBaseWidth(f32),
    #[error("autoplay delay must be greater than zero")]
    ZeroAutoplayDelay,
    #[error("invalid spring: {0}")]
    InvalidSpring(&'static str),
}
