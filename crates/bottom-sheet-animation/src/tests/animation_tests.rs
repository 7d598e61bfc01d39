use super::*;

const FRAME_NANOS: u64 = 16_666_667; // ~60 FPS

#[test]
fn animate_to_interpolates_over_time() {
    let mut animatable = Animatable::new(0.0f32);
    animatable.animate_to(1.0, AnimationSpec::tween(250, Easing::EaseInOut));

    assert!(animatable.is_running());
    assert_eq!(animatable.value(), 0.0);
    assert_eq!(animatable.target(), 1.0);

    let mut samples = Vec::new();
    let mut frame_time = 1_000_000_000u64;
    for _ in 0..32 {
        let more = animatable.tick(frame_time);
        samples.push(animatable.value());
        if !more {
            break;
        }
        frame_time += FRAME_NANOS;
    }

    assert!(
        samples.iter().any(|value| *value > 0.0 && *value < 1.0),
        "animation should report intermediate values"
    );
    assert!(
        samples.windows(2).all(|pair| pair[0] <= pair[1]),
        "ease-in-out towards a larger target never moves backwards"
    );
    let last = *samples.last().expect("at least one value recorded");
    assert!((last - 1.0).abs() < f32::EPSILON, "animation should end at target");
    assert!(!animatable.is_running());
    // 250ms at 60 FPS is 15 frames after the starting one.
    assert_eq!(samples.len(), 16);
}

#[test]
fn first_tick_fixes_start_time() {
    let mut animatable = Animatable::new(10.0f32);
    animatable.animate_to(20.0, AnimationSpec::linear(100));

    assert!(animatable.tick(5_000_000_000));
    assert_eq!(animatable.value(), 10.0);

    assert!(animatable.tick(5_050_000_000));
    assert!((animatable.value() - 15.0).abs() < 1e-4);

    assert!(!animatable.tick(5_100_000_000));
    assert_eq!(animatable.value(), 20.0);
}

#[test]
fn snap_to_cancels_running_animation() {
    let mut animatable = Animatable::new(0.0f32);
    animatable.animate_to(100.0, AnimationSpec::linear(250));
    animatable.tick(0);
    animatable.tick(FRAME_NANOS);

    animatable.snap_to(42.0);

    assert!(!animatable.is_running());
    assert_eq!(animatable.value(), 42.0);
    assert_eq!(animatable.target(), 42.0);
    assert!(!animatable.tick(10 * FRAME_NANOS));
    assert_eq!(animatable.value(), 42.0);
}

#[test]
fn retarget_starts_from_current_value() {
    let mut animatable = Animatable::new(0.0f32);
    animatable.animate_to(100.0, AnimationSpec::linear(100));
    animatable.tick(0);
    animatable.tick(50_000_000);
    let midway = animatable.value();
    assert!((midway - 50.0).abs() < 1e-3);

    animatable.animate_to(0.0, AnimationSpec::linear(100));
    animatable.tick(60_000_000);
    assert!((animatable.value() - midway).abs() < 1e-3);

    animatable.tick(160_000_000);
    assert_eq!(animatable.value(), 0.0);
}

#[test]
fn delay_holds_start_value() {
    let mut animatable = Animatable::new(0.0f32);
    animatable.animate_to(1.0, AnimationSpec::linear(100).with_delay(50));

    assert!(animatable.tick(0));
    assert!(animatable.tick(40_000_000));
    assert_eq!(animatable.value(), 0.0);

    assert!(!animatable.tick(150_000_000));
    assert_eq!(animatable.value(), 1.0);
}

#[test]
fn tick_without_animation_is_idle() {
    let mut animatable = Animatable::new(3.0f64);
    assert!(!animatable.tick(0));
    assert_eq!(animatable.value(), 3.0);
}

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::LinearEasing.transform(0.0), 0.0);
    assert_eq!(Easing::LinearEasing.transform(0.5), 0.5);
    assert_eq!(Easing::LinearEasing.transform(1.0), 1.0);
}

#[test]
fn easing_bounds_are_correct() {
    let easings = [
        Easing::LinearEasing,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowInEasing,
    ];

    for easing in easings {
        let start = easing.transform(0.0);
        let end = easing.transform(1.0);
        assert!(
            (start - 0.0).abs() < 0.01,
            "Start should be ~0 for {:?}",
            easing
        );
        assert!(
            (end - 1.0).abs() < 0.01,
            "End should be ~1 for {:?}",
            easing
        );
    }
}

#[test]
fn ease_in_out_is_symmetric_around_midpoint() {
    let mid = Easing::EaseInOut.transform(0.5);
    assert!((mid - 0.5).abs() < 0.01);
    let early = Easing::EaseInOut.transform(0.25);
    let late = Easing::EaseInOut.transform(0.75);
    assert!((early + late - 1.0).abs() < 0.01);
    assert!(early < 0.25, "ease-in-out starts slower than linear");
}

#[test]
fn animation_spec_default_has_reasonable_values() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.duration_millis, 300);
    assert_eq!(spec.easing, Easing::FastOutSlowInEasing);
    assert_eq!(spec.delay_millis, 0);
}
