//! The carousel state machine.
//!
//! [`Carousel`] owns every piece of mutable widget state: the current index, the
//! animated track offset, the drag in progress, hover, the loop-reset flag and
//! both timers. The host calls the event methods from its event loop and
//! [`Carousel::frame`] once per rendered frame, then paints from the getters.
//!
//! Timers are plain values inside the carousel. Reconfiguring replaces them and
//! dropping the carousel releases them, so nothing can fire after teardown.

use std::time::{Duration, Instant};

use bitflags::bitflags;

use crate::animation::{AnimationState, TimingFunction, Transition};
use crate::card::{display_sequence, Card};
use crate::config::{CarouselConfig, Metrics};
use crate::error::ConfigError;
use crate::gesture::{interpret_drag_end, DragConstraints, DragDecision, DragTracker};
use crate::index::IndexController;
use crate::motion;
use crate::timer::{take_due, Interval, Timeout};

/// How long the instant transition stays in force after a loop wrap
pub const RESET_DELAY: Duration = Duration::from_millis(50);

const DOT_ACTIVE_SCALE: f32 = 1.2;
const DOT_IDLE_SCALE: f32 = 1.0;
const DOT_TRANSITION_MS: f32 = 150.0;

bitflags! {
    /// What changed while handling an event or a frame
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct ChangeFlags: u8 {
        /// Current index changed
        const INDEX     = 0b00001;
        /// Track offset moved
        const OFFSET    = 0b00010;
        /// Resetting flag was set or cleared
        const RESETTING = 0b00100;
        /// Hover flag changed
        const HOVER     = 0b01000;
        /// An indicator dot changed scale
        const DOTS      = 0b10000;
    }
}

/// Index state after an event has been handled
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settled {
    pub index: usize,
    /// Original card highlighted by the dots
    pub active_dot: usize,
    /// Offset the track is settling toward
    pub target_offset: f32,
    pub resetting: bool,
}

/// One display card as it should be painted this frame
#[derive(Debug, Clone, Copy)]
pub struct CardView<'a> {
    /// Position in the display sequence
    pub index: usize,
    pub card: &'a Card,
    /// Y-axis rotation in degrees
    pub rotation: f32,
    /// True for the trailing copy of the first card in looping mode
    pub is_duplicate: bool,
}

/// One indicator dot as it should be painted this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotView {
    pub index: usize,
    pub active: bool,
    pub scale: f32,
}

pub struct Carousel {
    config: CarouselConfig,
    metrics: Metrics,
    display: Vec<Card>,
    index: IndexController,
    offset: AnimationState,
    drag: DragTracker,
    drag_start_offset: f32,
    resetting: bool,
    reset_timer: Option<Timeout>,
    hovered: bool,
    autoplay: Option<Interval>,
    dots: Vec<AnimationState>,
}

impl Carousel {
    /// Build a carousel, rejecting configurations the index arithmetic cannot handle.
    pub fn new(config: CarouselConfig, now: Instant) -> Result<Self, ConfigError> {
        config.validate()?;

        let metrics = config.metrics();
        let display = display_sequence(&config.items, config.looping);
        let index = IndexController::new(config.items.len(), config.looping);
        let offset = AnimationState::new(0.0, Transition::spring(config.spring), now);
        let dots = build_dots(config.items.len(), index.active_dot(), now);

        log::info!(
            "Creating carousel: {} items, width {}, loop {}, autoplay {} ({:?})",
            config.items.len(),
            config.base_width,
            config.looping,
            config.autoplay,
            config.autoplay_delay
        );

        let mut carousel = Self {
            config,
            metrics,
            display,
            index,
            offset,
            drag: DragTracker::new(),
            drag_start_offset: 0.0,
            resetting: false,
            reset_timer: None,
            hovered: false,
            autoplay: None,
            dots,
        };
        carousel.restart_autoplay(now);
        Ok(carousel)
    }

    // ------------------------------------------------------------------
    // Index changes
    // ------------------------------------------------------------------

    /// Move to the next card (onto the loop duplicate from the last card)
    pub fn advance(&mut self, now: Instant) -> Settled {
        let prev = self.index.current();
        self.index.advance();
        self.index_changed(prev, "advance", 0.0, now)
    }

    /// Move to the previous card (from the first card straight to the last when looping)
    pub fn retreat(&mut self, now: Instant) -> Settled {
        let prev = self.index.current();
        self.index.retreat();
        self.index_changed(prev, "retreat", 0.0, now)
    }

    /// Jump to an original card, e.g. from a dot click. Any integer is taken modulo N.
    pub fn select_index(&mut self, index: i64, now: Instant) -> Settled {
        let prev = self.index.current();
        self.index.select(index);
        self.index_changed(prev, "select", 0.0, now)
    }

    /// One autoplay step. [`Carousel::frame`] calls this from the autoplay timer.
    pub fn tick(&mut self, now: Instant) -> Settled {
        let prev = self.index.current();
        self.index.tick();
        self.index_changed(prev, "autoplay", 0.0, now)
    }

    /// Apply a finished drag given its total offset (px) and release velocity (px/s).
    pub fn drag_end(&mut self, offset_x: f32, velocity_x: f32, now: Instant) -> Settled {
        self.drag.cancel();
        let decision = interpret_drag_end(offset_x, velocity_x);
        log::debug!(
            "Drag ended: offset {:.1}px, velocity {:.1}px/s -> {:?}",
            offset_x,
            velocity_x,
            decision
        );

        let prev = self.index.current();
        match decision {
            DragDecision::Advance => {
                self.index.advance();
            }
            DragDecision::Retreat => {
                self.index.retreat();
            }
            DragDecision::Stay => {}
        }
        self.index_changed(prev, "drag", velocity_x, now)
    }

    fn index_changed(&mut self, prev: usize, cause: &str, velocity: f32, now: Instant) -> Settled {
        let current = self.index.current();
        if current != prev {
            log::debug!("Index {} -> {} ({})", prev, current, cause);
        }
        self.settle(velocity, now);
        self.sync_dots(now);
        self.settled()
    }

    /// Point the track animation at the current index.
    ///
    /// A track already resting on the loop duplicate has nothing left to animate,
    /// so the wrap runs here instead of waiting for a completion that never comes.
    fn settle(&mut self, velocity: f32, now: Instant) -> ChangeFlags {
        if self.drag.is_dragging() {
            // The release will settle the track
            return ChangeFlags::empty();
        }
        let target = self.target_offset();
        let transition = self.transition();
        self.offset.set_transition(transition);
        self.offset.animate_to_with_velocity(target, velocity, now);

        if !self.offset.is_animating() && self.index.on_duplicate() {
            return self.animation_complete(now);
        }
        ChangeFlags::empty()
    }

    fn sync_dots(&mut self, now: Instant) {
        let active = self.index.active_dot();
        for (i, dot) in self.dots.iter_mut().enumerate() {
            dot.animate_to(dot_scale(i == active), now);
        }
    }

    /// Finish a settle animation.
    ///
    /// Sitting on the loop duplicate snaps invisibly back to the real first card:
    /// the resetting flag forces instant transitions until [`RESET_DELAY`] has passed.
    /// [`Carousel::frame`] calls this when the track animation completes; hosts that
    /// drive the track with their own tween engine call it themselves.
    pub fn animation_complete(&mut self, now: Instant) -> ChangeFlags {
        if !self.index.wrap() {
            return ChangeFlags::empty();
        }

        log::debug!("Loop wrap: duplicate -> 0");
        self.resetting = true;
        self.offset.set_immediate(0.0);
        self.offset.set_transition(Transition::instant());
        self.reset_timer = Some(Timeout::new(RESET_DELAY, now));
        self.sync_dots(now);
        ChangeFlags::INDEX | ChangeFlags::OFFSET | ChangeFlags::RESETTING
    }

    // ------------------------------------------------------------------
    // Pointer events
    // ------------------------------------------------------------------

    /// Pointer pressed on the track. Halts the settle animation where it is.
    pub fn pointer_down(&mut self, x: f32, now: Instant) -> ChangeFlags {
        self.drag.start(x, now);
        self.drag_start_offset = self.offset.current();
        let was_animating = self.offset.is_animating();
        self.offset.set_immediate(self.drag_start_offset);
        log::trace!("Drag started at {:.1}", x);
        if was_animating {
            ChangeFlags::OFFSET
        } else {
            ChangeFlags::empty()
        }
    }

    /// Pointer moved while pressed. The track follows it, inside the drag constraints.
    pub fn pointer_move(&mut self, x: f32, now: Instant) -> ChangeFlags {
        let Some(delta) = self.drag.update(x, now) else {
            return ChangeFlags::empty();
        };
        let mut position = self.drag_start_offset + delta;
        if let Some(constraints) = self.drag_constraints() {
            position = constraints.clamp(position);
        }
        if position == self.offset.current() {
            return ChangeFlags::empty();
        }
        self.offset.set_immediate(position);
        ChangeFlags::OFFSET
    }

    /// Pointer released. Returns the settled state if a drag was in progress.
    pub fn pointer_up(&mut self, x: f32, now: Instant) -> Option<Settled> {
        let release = self.drag.finish(x, now)?;
        Some(self.drag_end(release.offset, release.velocity, now))
    }

    /// Drag aborted by the host (pointer lost, window unfocused). Settles back in place.
    pub fn pointer_cancel(&mut self, now: Instant) -> Settled {
        self.drag.cancel();
        let prev = self.index.current();
        self.index_changed(prev, "cancel", 0.0, now)
    }

    pub fn pointer_enter(&mut self, now: Instant) -> ChangeFlags {
        self.set_hovered(true, now)
    }

    pub fn pointer_leave(&mut self, now: Instant) -> ChangeFlags {
        self.set_hovered(false, now)
    }

    fn set_hovered(&mut self, hovered: bool, now: Instant) -> ChangeFlags {
        // Hover is only tracked while it can pause autoplay
        if !self.config.pause_on_hover || self.hovered == hovered {
            return ChangeFlags::empty();
        }
        self.hovered = hovered;
        self.restart_autoplay(now);
        ChangeFlags::HOVER
    }

    // ------------------------------------------------------------------
    // Frame
    // ------------------------------------------------------------------

    /// Advance timers and animations to `now`.
    pub fn frame(&mut self, now: Instant) -> ChangeFlags {
        let mut flags = ChangeFlags::empty();

        if take_due(&mut self.reset_timer, now) {
            self.resetting = false;
            self.offset.set_transition(Transition::spring(self.config.spring));
            flags |= ChangeFlags::RESETTING;
        }

        let ticks = self
            .autoplay
            .as_mut()
            .map(|interval| interval.poll(now))
            .unwrap_or(0);
        for _ in 0..ticks {
            if self.drag.is_dragging() {
                log::trace!("Autoplay tick skipped during drag");
                continue;
            }
            let prev = self.index.current();
            if self.tick(now).index != prev {
                flags |= ChangeFlags::INDEX;
            }
        }

        if !self.drag.is_dragging() {
            let result = self.offset.advance(now);
            if result.is_changed() {
                flags |= ChangeFlags::OFFSET;
            }
            if result.is_completed() {
                flags |= self.animation_complete(now);
            }
        }

        for dot in &mut self.dots {
            if dot.advance(now).is_changed() {
                flags |= ChangeFlags::DOTS;
            }
        }

        flags
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Replace the whole configuration.
    ///
    /// The autoplay interval restarts if autoplay, its delay, loop, pause-on-hover or
    /// the item count changed. On error nothing is modified.
    pub fn reconfigure(
        &mut self,
        config: CarouselConfig,
        now: Instant,
    ) -> Result<ChangeFlags, ConfigError> {
        config.validate()?;

        let old = std::mem::replace(&mut self.config, config);
        let count_changed = old.items.len() != self.config.items.len();
        let restart_autoplay = count_changed
            || old.autoplay != self.config.autoplay
            || old.autoplay_delay != self.config.autoplay_delay
            || old.looping != self.config.looping
            || old.pause_on_hover != self.config.pause_on_hover;
        let geometry_changed =
            old.base_width != self.config.base_width || old.round != self.config.round;

        log::info!(
            "Reconfiguring carousel: {} items, width {}, loop {}, autoplay {} ({:?})",
            self.config.items.len(),
            self.config.base_width,
            self.config.looping,
            self.config.autoplay,
            self.config.autoplay_delay
        );

        let mut flags = ChangeFlags::empty();

        if !self.config.pause_on_hover && self.hovered {
            self.hovered = false;
            flags |= ChangeFlags::HOVER;
        }

        self.metrics = self.config.metrics();
        self.display = display_sequence(&self.config.items, self.config.looping);

        let prev = self.index.current();
        self.index
            .reconfigure(self.config.items.len(), self.config.looping);
        if self.index.current() != prev {
            flags |= ChangeFlags::INDEX;
        }

        if count_changed {
            self.dots = build_dots(self.config.items.len(), self.index.active_dot(), now);
            flags |= ChangeFlags::DOTS;
        } else {
            self.sync_dots(now);
        }

        if geometry_changed {
            // Pixel positions are meaningless under the old pitch
            self.drag.cancel();
            let target = self.target_offset();
            self.offset.set_immediate(target);
            flags |= ChangeFlags::OFFSET;
        }
        flags |= self.settle(0.0, now);

        if restart_autoplay {
            self.restart_autoplay(now);
        }

        Ok(flags)
    }

    pub fn set_items(&mut self, items: Vec<Card>, now: Instant) -> Result<ChangeFlags, ConfigError> {
        let config = CarouselConfig {
            items,
            ..self.config.clone()
        };
        self.reconfigure(config, now)
    }

    pub fn set_looping(&mut self, looping: bool, now: Instant) -> Result<ChangeFlags, ConfigError> {
        let config = CarouselConfig {
            looping,
            ..self.config.clone()
        };
        self.reconfigure(config, now)
    }

    pub fn set_autoplay(&mut self, autoplay: bool, now: Instant) -> Result<ChangeFlags, ConfigError> {
        let config = CarouselConfig {
            autoplay,
            ..self.config.clone()
        };
        self.reconfigure(config, now)
    }

    pub fn set_autoplay_delay(
        &mut self,
        autoplay_delay: Duration,
        now: Instant,
    ) -> Result<ChangeFlags, ConfigError> {
        let config = CarouselConfig {
            autoplay_delay,
            ..self.config.clone()
        };
        self.reconfigure(config, now)
    }

    pub fn set_pause_on_hover(
        &mut self,
        pause_on_hover: bool,
        now: Instant,
    ) -> Result<ChangeFlags, ConfigError> {
        let config = CarouselConfig {
            pause_on_hover,
            ..self.config.clone()
        };
        self.reconfigure(config, now)
    }

    pub fn set_base_width(
        &mut self,
        base_width: f32,
        now: Instant,
    ) -> Result<ChangeFlags, ConfigError> {
        let config = CarouselConfig {
            base_width,
            ..self.config.clone()
        };
        self.reconfigure(config, now)
    }

    pub fn set_round(&mut self, round: bool, now: Instant) -> Result<ChangeFlags, ConfigError> {
        let config = CarouselConfig {
            round,
            ..self.config.clone()
        };
        self.reconfigure(config, now)
    }

    fn autoplay_enabled(&self) -> bool {
        self.config.autoplay && (!self.config.pause_on_hover || !self.hovered)
    }

    fn restart_autoplay(&mut self, now: Instant) {
        let enabled = self.autoplay_enabled();
        match (&self.autoplay, enabled) {
            (None, false) => {}
            (_, true) => log::debug!("Autoplay timer started ({:?})", self.config.autoplay_delay),
            (Some(_), false) => log::debug!("Autoplay timer stopped"),
        }
        self.autoplay = enabled.then(|| Interval::new(self.config.autoplay_delay, now));
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn settled(&self) -> Settled {
        Settled {
            index: self.index.current(),
            active_dot: self.index.active_dot(),
            target_offset: self.target_offset(),
            resetting: self.resetting,
        }
    }

    pub fn current_index(&self) -> usize {
        self.index.current()
    }

    pub fn active_dot(&self) -> usize {
        self.index.active_dot()
    }

    /// Live track offset in px
    pub fn offset(&self) -> f32 {
        self.offset.current()
    }

    /// Resting offset for the current index
    pub fn target_offset(&self) -> f32 {
        motion::target_offset(self.index.current(), self.metrics.track_item_offset)
    }

    /// True while the track is still moving toward its target
    pub fn is_animating(&self) -> bool {
        self.offset.is_animating()
    }

    pub fn is_resetting(&self) -> bool {
        self.resetting
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// True while the autoplay timer is running
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_some()
    }

    /// `None` when autoplay is off or the next tick lies beyond what `Instant` can hold
    pub fn next_autoplay_tick(&self) -> Option<Instant> {
        self.autoplay.as_ref().and_then(Interval::next_due)
    }

    /// Transition the track uses for its next settle
    pub fn transition(&self) -> Transition {
        if self.resetting {
            Transition::instant()
        } else {
            Transition::spring(self.config.spring)
        }
    }

    /// Drag limits. Looping carousels can be dragged freely.
    pub fn drag_constraints(&self) -> Option<DragConstraints> {
        (!self.config.looping).then(|| {
            DragConstraints::for_track(self.display.len(), self.metrics.track_item_offset)
        })
    }

    pub fn perspective_origin_x(&self) -> f32 {
        motion::perspective_origin_x(
            self.index.current(),
            self.metrics.track_item_offset,
            self.metrics.item_width,
        )
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn items(&self) -> &[Card] {
        &self.config.items
    }

    pub fn display_cards(&self) -> &[Card] {
        &self.display
    }

    pub fn card_rotation(&self, index: usize) -> f32 {
        motion::card_rotation(index, self.offset.current(), self.metrics.track_item_offset)
    }

    /// Every display card with its rotation for the current offset
    pub fn card_views(&self) -> impl Iterator<Item = CardView<'_>> {
        let offset = self.offset.current();
        let pitch = self.metrics.track_item_offset;
        let count = self.config.items.len();
        self.display
            .iter()
            .enumerate()
            .map(move |(index, card)| CardView {
                index,
                card,
                rotation: motion::card_rotation(index, offset, pitch),
                is_duplicate: index >= count,
            })
    }

    pub fn dots(&self) -> impl Iterator<Item = DotView> + '_ {
        let active = self.index.active_dot();
        self.dots.iter().enumerate().map(move |(index, dot)| DotView {
            index,
            active: index == active,
            scale: dot.current(),
        })
    }
}

impl std::fmt::Debug for Carousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("index", &self.index.current())
            .field("display_len", &self.display.len())
            .field("offset", &self.offset.current())
            .field("resetting", &self.resetting)
            .field("hovered", &self.hovered)
            .field("autoplay", &self.autoplay.is_some())
            .finish()
    }
}

fn dot_scale(active: bool) -> f32 {
    if active {
        DOT_ACTIVE_SCALE
    } else {
        DOT_IDLE_SCALE
    }
}

fn build_dots(count: usize, active: usize, now: Instant) -> Vec<AnimationState> {
    let transition = Transition::new(DOT_TRANSITION_MS, TimingFunction::EaseOut);
    (0..count)
        .map(|i| AnimationState::new(dot_scale(i == active), transition, now))
        .collect()
}
