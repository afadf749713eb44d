use circular_slider::{
    CircularSlider, CircularSliderArgs,
    geometry::{Rect, point_on_track},
    gesture::{GestureEvent, GesturePoint},
    range::ValueRange,
};
use proptest::prelude::*;

fn arb_range() -> impl Strategy<Value = ValueRange> {
    (-1000.0..1000.0f64, 0.5..500.0f64, prop::sample::select(vec![0.1, 0.5, 1.0, 2.5, 5.0]))
        .prop_map(|(min, span, step)| ValueRange::new(min, min + span, step).unwrap())
}

fn arb_gesture() -> impl Strategy<Value = GestureEvent> {
    let bounds = Rect::new(0.0, 0.0, 320.0, 320.0);
    let point = (0.0..=1.0f64).prop_map(move |p| GesturePoint::new(point_on_track(p), bounds));
    prop_oneof![
        point.clone().prop_map(GestureEvent::PanStart),
        point.clone().prop_map(GestureEvent::PanMove),
        point.clone().prop_map(GestureEvent::PanMove),
        point.clone().prop_map(GestureEvent::PanEnd),
        point.prop_map(GestureEvent::Tap),
        Just(GestureEvent::PanCancel),
    ]
}

proptest! {
    /// Values inside the range map into [0, 1] and back.
    #[test]
    fn percentage_round_trip(range in arb_range(), t in 0.0..=1.0f64) {
        let value = range.min() + t * (range.max() - range.min());
        let percentage = range.value_to_percentage(value);
        prop_assert!((0.0..=1.0).contains(&percentage));
        let back = range.percentage_to_value(percentage);
        let tolerance = 1e-9 * (range.max() - range.min()).max(range.max().abs());
        prop_assert!((back - value).abs() <= tolerance, "{value} -> {percentage} -> {back}");
    }

    /// Out of range values behave like the nearest bound.
    #[test]
    fn percentage_clamps(range in arb_range(), overshoot in 0.001..1.0e6f64) {
        prop_assert_eq!(
            range.value_to_percentage(range.min() - overshoot),
            range.value_to_percentage(range.min())
        );
        prop_assert_eq!(
            range.value_to_percentage(range.max() + overshoot),
            range.value_to_percentage(range.max())
        );
    }

    /// Stepping an already stepped value changes nothing.
    #[test]
    fn stepping_is_idempotent(range in arb_range(), x in -1.0e4..1.0e4f64) {
        let once = range.stepped_value(x);
        prop_assert_eq!(range.stepped_value(once), once);
    }

    /// Committed dual values never cross, whatever the gesture sequence.
    #[test]
    fn dual_handles_stay_ordered(
        low in 0.0..50.0f64,
        high in 50.0..100.0f64,
        gestures in prop::collection::vec(arb_gesture(), 1..40),
    ) {
        let mut slider = CircularSlider::new(
            CircularSliderArgs::default().dual(true).low(low).high(high),
        )
        .unwrap();
        for gesture in gestures {
            slider.handle_gesture(gesture);
            if !slider.is_pressed() {
                let (low, high) = (slider.low().unwrap(), slider.high().unwrap());
                prop_assert!(low <= high, "low {low} > high {high}");
                prop_assert!((0.0..=100.0).contains(&low));
                prop_assert!((0.0..=100.0).contains(&high));
            }
        }
    }
}
