//! Card content and the display sequence derived from it.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Opaque icon handle.
///
/// The carousel never inspects icons, it only hands them back to the renderer
/// together with the card they belong to.
#[derive(Clone)]
pub enum Icon {
    /// An icon looked up by name in the host's icon set
    Named(Cow<'static, str>),
    /// Any renderer-specific node or texture
    Handle(Arc<dyn Any + Send + Sync>),
}

impl Icon {
    pub const fn named_static(name: &'static str) -> Self {
        Icon::Named(Cow::Borrowed(name))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Icon::Named(Cow::Owned(name.into()))
    }

    /// Wrap a renderer-specific value
    pub fn handle<T: Any + Send + Sync>(value: T) -> Self {
        Icon::Handle(Arc::new(value))
    }

    /// Borrow the wrapped value back if it has type `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Icon::Named(_) => None,
            Icon::Handle(value) => value.downcast_ref::<T>(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Icon::Named(name) => Some(name.as_ref()),
            Icon::Handle(_) => None,
        }
    }
}

impl fmt::Debug for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Icon::Named(name) => write!(f, "Named({:?})", name),
            Icon::Handle(_) => write!(f, "Handle"),
        }
    }
}

/// One slide of the carousel.
#[derive(Clone, Debug)]
pub struct Card {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub background_image: Option<String>,
}

impl Card {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: Icon,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            icon,
            background_image: None,
        }
    }

    pub fn background_image(mut self, url: impl Into<String>) -> Self {
        self.background_image = Some(url.into());
        self
    }
}

/// The four cards shown when no items are supplied.
pub fn default_cards() -> Vec<Card> {
    vec![
        Card::new(
            1,
            "Text Animations",
            "Cool text animations for your projects.",
            Icon::named_static("file-text"),
        )
        .background_image("https://images.pexels.com/photos/1595385/pexels-photo-1595385.jpeg"),
        Card::new(
            2,
            "Animations",
            "Smooth animations for your projects.",
            Icon::named_static("circle"),
        )
        .background_image("https://images.pexels.com/photos/7651922/pexels-photo-7651922.jpeg"),
        Card::new(
            3,
            "Components",
            "Reusable components for your projects.",
            Icon::named_static("layers"),
        )
        .background_image("https://images.pexels.com/photos/3862370/pexels-photo-3862370.jpeg"),
        Card::new(
            4,
            "Backgrounds",
            "Beautiful backgrounds and patterns for your projects.",
            Icon::named_static("layout"),
        )
        .background_image("https://images.pexels.com/photos/8348468/pexels-photo-8348468.jpeg"),
    ]
}

/// Build the rendered slide order: the items, plus the first item again when looping.
///
/// Sliding onto the trailing copy and then snapping back to index 0 is what makes
/// the loop look continuous.
pub fn display_sequence(items: &[Card], looping: bool) -> Vec<Card> {
    let mut display = items.to_vec();
    if looping {
        if let Some(first) = items.first() {
            display.push(first.clone());
        }
    }
    display
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cards() {
        let cards = default_cards();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].title, "Text Animations");
        assert_eq!(cards[3].id, 4);
        assert!(cards.iter().all(|c| c.background_image.is_some()));
    }

    #[test]
    fn test_display_sequence_without_loop() {
        let cards = default_cards();
        let display = display_sequence(&cards, false);
        assert_eq!(display.len(), 4);
    }

    #[test]
    fn test_display_sequence_with_loop_appends_first() {
        let cards = default_cards();
        let display = display_sequence(&cards, true);
        assert_eq!(display.len(), 5);
        assert_eq!(display[4].id, cards[0].id);
        assert_eq!(display[4].title, cards[0].title);
    }

    #[test]
    fn test_single_card_loop() {
        let cards = vec![Card::new(7, "Only", "One card", Icon::named("star"))];
        let display = display_sequence(&cards, true);
        assert_eq!(display.len(), 2);
        assert_eq!(display[1].id, 7);
    }

    #[test]
    fn test_icon_handle_round_trip() {
        #[derive(Debug, PartialEq)]
        struct TextureId(u32);

        let icon = Icon::handle(TextureId(3));
        assert_eq!(icon.downcast_ref::<TextureId>(), Some(&TextureId(3)));
        assert!(icon.downcast_ref::<String>().is_none());
        assert!(icon.name().is_none());
        assert_eq!(Icon::named("layers").name(), Some("layers"));
    }
}
