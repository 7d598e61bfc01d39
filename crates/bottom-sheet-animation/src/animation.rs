//! Tween animations with easing curves.
//!
//! An [`Animatable`] does not own a clock. The host calls [`Animatable::tick`]
//! with its frame timestamp once per frame for as long as `tick` reports that
//! more frames are needed.

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

/// Easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    LinearEasing,
    /// Ease in using cubic curve.
    EaseIn,
    /// Ease out using cubic curve.
    EaseOut,
    /// Ease in and out using cubic curve.
    EaseInOut,
    /// Fast out, slow in (material design standard).
    FastOutSlowInEasing,
    /// Linear out, slow in (material design).
    LinearOutSlowInEasing,
    /// Fast out, linear in (material design).
    FastOutLinearEasing,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowInEasing => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::LinearOutSlowInEasing => cubic_bezier(0.0, 0.0, 0.2, 1.0, fraction),
            Easing::FastOutLinearEasing => cubic_bezier(0.4, 0.0, 1.0, 1.0, fraction),
        }
    }
}

/// Cubic bezier curve approximation for easing.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric `t` matching the x fraction, kept
    // inside [0, 1].
    let mut t = fraction;
    let mut newton_success = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            newton_success = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !newton_success {
        // Bisection fallback.
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..16 {
            let x = sample_curve(ax, bx, cx, t);
            let delta = x - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t)
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting animation in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub const fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    /// Create a linear tween animation.
    pub const fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    /// Add a delay before the animation starts.
    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

/// A value that moves towards a target over successive frames.
#[derive(Debug, Clone)]
pub struct Animatable<T: Lerp + Clone> {
    current: T,
    start: T,
    target: T,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    running: bool,
}

impl<T: Lerp + Clone> Animatable<T> {
    /// Create a new animatable resting at `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            current: initial.clone(),
            start: initial.clone(),
            target: initial,
            spec: AnimationSpec::default(),
            start_time_nanos: None,
            running: false,
        }
    }

    /// Animate from the current value to `target`.
    ///
    /// A running animation is replaced; the new one starts from wherever the
    /// old one had got to. The clock starts on the next [`tick`](Self::tick).
    pub fn animate_to(&mut self, target: T, spec: AnimationSpec) {
        self.start = self.current.clone();
        self.target = target;
        self.spec = spec;
        self.start_time_nanos = None;
        self.running = true;
    }

    /// Jump to `value` immediately, cancelling any running animation.
    pub fn snap_to(&mut self, value: T) {
        self.current = value.clone();
        self.start = value.clone();
        self.target = value;
        self.start_time_nanos = None;
        self.running = false;
    }

    /// Value to draw this frame.
    pub fn value(&self) -> T {
        self.current.clone()
    }

    /// Return the current animation target.
    pub fn target(&self) -> T {
        self.target.clone()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance the animation to `frame_time_nanos`.
    ///
    /// Returns `true` while further frames are needed.
    pub fn tick(&mut self, frame_time_nanos: u64) -> bool {
        if !self.running {
            return false;
        }

        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
        let delay_nanos = self.spec.delay_millis * 1_000_000;

        if elapsed_nanos < delay_nanos {
            return true;
        }

        let animation_elapsed = elapsed_nanos - delay_nanos;
        let duration_nanos = (self.spec.duration_millis * 1_000_000).max(1);
        let linear_progress = (animation_elapsed as f32 / duration_nanos as f32).clamp(0.0, 1.0);

        if linear_progress >= 1.0 {
            self.current = self.target.clone();
            self.start = self.target.clone();
            self.start_time_nanos = None;
            self.running = false;
            return false;
        }

        let progress = self.spec.easing.transform(linear_progress);
        self.current = self.start.lerp(&self.target, progress);
        true
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
