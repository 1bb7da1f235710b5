//! Timed testimonial carousel for the home screen.
//!
//! Autoplay is modeled as an owned timer value: holding `Some(AutoplayTimer)`
//! IS the playing state, `None` the paused state. Arming and disarming are a
//! single assignment, so overlapping timers cannot exist, and dropping the
//! carousel releases the timer with it.

use crate::domain::Testimonial;
use std::time::{Duration, Instant};

/// Matches the original showcase cadence of one slide every five seconds.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug)]
struct AutoplayTimer {
    interval: Duration,
    next_fire: Instant,
}

impl AutoplayTimer {
    fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_fire: now + interval,
        }
    }

    /// Reports whether the deadline has passed and re-arms it if so.
    fn fire_due(&mut self, now: Instant) -> bool {
        if now >= self.next_fire {
            self.next_fire = now + self.interval;
            true
        } else {
            false
        }
    }
}

/// Cycles through a fixed testimonial deck.
///
/// Starts playing at index 0. Any manual navigation pauses autoplay for the
/// rest of the instance's life; nothing re-arms it.
pub struct TestimonialCarousel {
    items: Vec<Testimonial>,
    active_index: usize,
    timer: Option<AutoplayTimer>,
}

impl TestimonialCarousel {
    /// Builds a playing carousel over `items`, expected non-empty.
    pub fn new(items: Vec<Testimonial>) -> Self {
        Self::with_interval(items, AUTOPLAY_INTERVAL)
    }

    pub fn with_interval(items: Vec<Testimonial>, interval: Duration) -> Self {
        Self {
            items,
            active_index: 0,
            timer: Some(AutoplayTimer::new(interval, Instant::now())),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Testimonial] {
        &self.items
    }

    /// Always within `[0, len)` for a non-empty deck.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active(&self) -> Option<&Testimonial> {
        self.items.get(self.active_index)
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.timer.is_some()
    }

    /// Next autoplay deadline, used by the event loop to size its poll
    /// timeout. `None` once paused.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.as_ref().map(|timer| timer.next_fire)
    }

    /// Advances one slide whenever the autoplay deadline has passed.
    /// Driven from the event loop; a paused carousel ignores ticks.
    pub fn tick(&mut self, now: Instant) {
        if let Some(timer) = self.timer.as_mut() {
            if timer.fire_due(now) {
                self.advance_forward();
            }
        }
    }

    /// Manual advance. Pauses autoplay permanently.
    pub fn next(&mut self) {
        self.timer = None;
        self.advance_forward();
    }

    /// Manual step back. Pauses autoplay permanently.
    pub fn previous(&mut self) {
        self.timer = None;
        if !self.items.is_empty() {
            self.active_index = (self.active_index + self.items.len() - 1) % self.items.len();
        }
    }

    /// Jumps to a slide. Pauses autoplay permanently; an out-of-range index
    /// leaves the position unchanged but still pauses.
    pub fn go_to(&mut self, index: usize) {
        self.timer = None;
        if index < self.items.len() {
            self.active_index = index;
        }
    }

    fn advance_forward(&mut self) {
        if !self.items.is_empty() {
            self.active_index = (self.active_index + 1) % self.items.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(n: usize) -> Vec<Testimonial> {
        Testimonial::showcase().into_iter().cycle().take(n).collect()
    }

    #[test]
    fn test_starts_playing_at_first_slide() {
        let carousel = TestimonialCarousel::new(deck(4));
        assert_eq!(carousel.active_index(), 0);
        assert!(carousel.autoplay_enabled());
        assert!(carousel.next_deadline().is_some());
    }

    #[test]
    fn test_index_stays_in_range_for_any_navigation_sequence() {
        for n in 1..=4 {
            let mut carousel = TestimonialCarousel::new(deck(n));
            for step in 0..50 {
                if step % 3 == 0 {
                    carousel.previous();
                } else {
                    carousel.next();
                }
                assert!(carousel.active_index() < n);
            }
        }
    }

    #[test]
    fn test_next_and_previous_wrap_around() {
        let mut carousel = TestimonialCarousel::new(deck(3));
        carousel.previous();
        assert_eq!(carousel.active_index(), 2);
        carousel.next();
        assert_eq!(carousel.active_index(), 0);
        carousel.next();
        carousel.next();
        carousel.next();
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn test_manual_navigation_pauses_permanently() {
        let mut carousel = TestimonialCarousel::new(deck(4));
        carousel.next();
        assert!(!carousel.autoplay_enabled());
        assert!(carousel.next_deadline().is_none());

        // No call path re-arms the timer.
        carousel.previous();
        carousel.go_to(2);
        carousel.tick(Instant::now() + Duration::from_secs(60));
        assert!(!carousel.autoplay_enabled());
        assert_eq!(carousel.active_index(), 2);
    }

    #[test]
    fn test_go_to_out_of_range_keeps_position_but_pauses() {
        let mut carousel = TestimonialCarousel::new(deck(4));
        carousel.go_to(9);
        assert_eq!(carousel.active_index(), 0);
        assert!(!carousel.autoplay_enabled());
    }

    #[test]
    fn test_tick_advances_only_past_deadline() {
        let mut carousel = TestimonialCarousel::with_interval(deck(4), Duration::from_secs(5));
        let armed_at = Instant::now();

        carousel.tick(armed_at + Duration::from_secs(2));
        assert_eq!(carousel.active_index(), 0);

        carousel.tick(armed_at + Duration::from_secs(6));
        assert_eq!(carousel.active_index(), 1);
        assert!(carousel.autoplay_enabled());
    }

    #[test]
    fn test_tick_rearms_for_the_following_slide() {
        let mut carousel = TestimonialCarousel::with_interval(deck(4), Duration::from_secs(5));
        let armed_at = Instant::now();

        carousel.tick(armed_at + Duration::from_secs(6));
        assert_eq!(carousel.active_index(), 1);

        // Immediately after firing the next deadline is a full interval out.
        carousel.tick(armed_at + Duration::from_secs(7));
        assert_eq!(carousel.active_index(), 1);

        carousel.tick(armed_at + Duration::from_secs(12));
        assert_eq!(carousel.active_index(), 2);
    }

    #[test]
    fn test_single_item_deck_wraps_to_itself() {
        let mut carousel = TestimonialCarousel::new(deck(1));
        carousel.next();
        assert_eq!(carousel.active_index(), 0);
        carousel.previous();
        assert_eq!(carousel.active_index(), 0);
    }
}
