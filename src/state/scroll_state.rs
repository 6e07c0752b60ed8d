//! Page scroll position and smooth-scroll animation

use std::time::{Duration, Instant};

/// An in-flight smooth scroll
#[derive(Debug, Clone, Copy)]
struct ScrollAnimation {
    from: u16,
    to: u16,
    start: Instant,
}

/// Vertical scroll offset of the page, in rows
#[derive(Debug, Clone)]
pub struct ScrollState {
    offset: u16,
    duration: Duration,
    animation: Option<ScrollAnimation>,
}

impl ScrollState {
    /// Duration of a smooth scroll
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(400);

    pub fn new(duration: Duration) -> Self {
        Self {
            offset: 0,
            duration,
            animation: None,
        }
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Move immediately, cancelling any animation
    pub fn jump_to(&mut self, offset: u16) {
        self.animation = None;
        self.offset = offset;
    }

    /// Move by `delta` rows within `0..=max`, cancelling any animation
    pub fn scroll_by(&mut self, delta: i32, max: u16) {
        let offset = (i32::from(self.offset) + delta).clamp(0, i32::from(max));
        self.jump_to(offset as u16);
    }

    /// Start a smooth scroll towards `target`
    pub fn animate_to(&mut self, target: u16, now: Instant) {
        if target == self.offset || self.duration.is_zero() {
            self.jump_to(target);
            return;
        }
        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to: target,
            start: now,
        });
    }

    /// Advance the animation. Returns true when the offset changed.
    pub fn update(&mut self, now: Instant) -> bool {
        let Some(animation) = self.animation else {
            return false;
        };
        let before = self.offset;
        let elapsed = now.saturating_duration_since(animation.start);

        if elapsed >= self.duration {
            self.offset = animation.to;
            self.animation = None;
        } else {
            // Cubic ease-in-out, matching the browser's smooth behaviour
            let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
            let eased = simple_easing::cubic_in_out(progress);
            let from = f32::from(animation.from);
            let to = f32::from(animation.to);
            self.offset = (from + (to - from) * eased).round() as u16;
        }

        self.offset != before
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION)
    }
}
