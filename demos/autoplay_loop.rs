//! Runs a looping, auto-advancing carousel on a simulated 60fps clock and logs
//! what a renderer would repaint. Try `RUST_LOG=debug cargo run --example autoplay_loop`.

use std::time::{Duration, Instant};

use guido_carousel::prelude::*;

fn main() {
    env_logger::init();

    let config = CarouselConfig::default()
        .looping(true)
        .autoplay(true)
        .autoplay_delay(Duration::from_millis(1500))
        .pause_on_hover(true);

    let start = Instant::now();
    let mut carousel = match Carousel::new(config, start) {
        Ok(carousel) => carousel,
        Err(err) => {
            log::error!("Invalid carousel configuration: {}", err);
            return;
        }
    };

    let frame = Duration::from_millis(16);
    let mut now = start;

    for step in 0..600u32 {
        now += frame;

        // Hover for a while in the middle to show autoplay pausing
        if step == 250 {
            carousel.pointer_enter(now);
        }
        if step == 330 {
            carousel.pointer_leave(now);
        }

        // Swipe left by hand near the end
        if step == 450 {
            carousel.pointer_down(400.0, now);
        }
        if (451..455).contains(&step) {
            carousel.pointer_move(400.0 - (step - 450) as f32 * 30.0, now);
        }
        if step == 455 {
            carousel.pointer_up(250.0, now);
        }

        let changes = carousel.frame(now);
        if changes.contains(ChangeFlags::INDEX) {
            let card = &carousel.display_cards()[carousel.current_index()];
            log::info!(
                "t={:>5}ms index {} ({}) dot {}",
                now.duration_since(start).as_millis(),
                carousel.current_index(),
                card.title,
                carousel.active_dot()
            );
        }
        if changes.contains(ChangeFlags::OFFSET) {
            let rotations: Vec<String> = carousel
                .card_views()
                .map(|view| format!("{:.0}", view.rotation))
                .collect();
            log::trace!(
                "offset {:.1}px rotations [{}]",
                carousel.offset(),
                rotations.join(", ")
            );
        }
        if changes.contains(ChangeFlags::RESETTING) {
            log::debug!("resetting = {}", carousel.is_resetting());
        }
    }
}
