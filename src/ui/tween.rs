//! Time-driven interpolation of visual properties.
//!
//! Tweens are advanced by the frame delta; nothing here reads a clock.

use std::f32::consts::PI;
use std::time::Duration;

/// Easing curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    #[default]
    Linear,
    SineInOut,
}

impl Ease {
    /// Map linear progress `t` in 0..=1 onto the curve
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}

/// A value that can be faded towards a target over time
#[derive(Debug, Clone)]
pub struct Fader {
    value: f32,
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    ease: Ease,
}

impl Fader {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            from: value,
            to: value,
            duration: 0.0,
            elapsed: 0.0,
            ease: Ease::Linear,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Target of the running (or last finished) transition
    #[cfg(test)]
    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_animating(&self) -> bool {
        self.elapsed < self.duration
    }

    /// Start a transition from the current value.
    ///
    /// Replaces any transition in progress.
    pub fn fade_to(&mut self, to: f32, duration: Duration, ease: Ease) {
        self.from = self.value;
        self.to = to;
        self.duration = duration.as_secs_f32();
        self.elapsed = 0.0;
        self.ease = ease;
        if self.duration <= 0.0 {
            self.value = to;
        }
    }

    pub fn advance(&mut self, dt: f32) {
        if !self.is_animating() {
            return;
        }
        self.elapsed = (self.elapsed + dt).min(self.duration);
        let t = self.ease.apply(self.elapsed / self.duration);
        self.value = self.from + (self.to - self.from) * t;
    }
}

/// Endless yoyo between `base` and `base * factor`
#[derive(Debug, Clone)]
pub struct Pulse {
    base: f32,
    factor: f32,
    half_period: f32,
    elapsed: f32,
}

impl Pulse {
    /// `half_period` is the time for one leg, up or down
    pub fn new(base: f32, factor: f32, half_period: Duration) -> Self {
        Self {
            base,
            factor,
            half_period: half_period.as_secs_f32().max(f32::EPSILON),
            elapsed: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt) % (self.half_period * 2.0);
    }

    pub fn value(&self) -> f32 {
        let leg = self.elapsed / self.half_period;
        let t = if leg <= 1.0 { leg } else { 2.0 - leg };
        self.base + (self.base * self.factor - self.base) * t
    }
}
