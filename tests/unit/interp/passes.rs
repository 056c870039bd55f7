use super::*;

fn keys(pairs: &[(&str, &str)]) -> Keyframes {
    Keyframes::from_pairs(pairs.iter().copied()).unwrap()
}

fn slot(slots: &FrameSlots, f: u64) -> Option<&str> {
    slots.get(FrameIndex(f))
}

#[test]
fn set_ignores_frames_past_the_end() {
    let mut slots = FrameSlots::unresolved(2);
    assert!(slots.set(FrameIndex(1), "a".to_string()));
    assert!(!slots.set(FrameIndex(2), "b".to_string()));
    assert_eq!(slots.unresolved_count(), 1);
    assert_eq!(slot(&slots, 0), None);
    assert_eq!(slot(&slots, 1), Some("a"));
    assert_eq!(slot(&slots, 2), None);
}

#[test]
fn bounds_cover_every_slot() {
    let slots = FrameSlots::unresolved(3);
    assert_eq!(slots.bounds().len_frames(), 3);
    assert!(slots.bounds().contains(FrameIndex(2)));
    assert!(!slots.bounds().contains(FrameIndex(3)));
    assert!(FrameSlots::unresolved(0).bounds().is_empty());
}

#[test]
fn blend_pass_covers_half_open_intervals() {
    let kf = keys(&[("2", "rocket"), ("6", "cat")]);
    let mut warnings = Vec::new();
    let slots = blend_pass(FrameSlots::unresolved(8), &kf, &mut warnings);

    assert!(warnings.is_empty());
    assert_eq!(slot(&slots, 1), None);
    assert_eq!(slot(&slots, 2), Some("rocket :1 AND cat :0"));
    assert_eq!(slot(&slots, 3), Some("rocket :0.75 AND cat :0.25"));
    assert_eq!(slot(&slots, 5), Some("rocket :0.25 AND cat :0.75"));
    assert_eq!(slot(&slots, 6), None);
    assert_eq!(slots.unresolved_count(), 4);
}

#[test]
fn blend_pass_stops_at_buffer_end() {
    let kf = keys(&[("0", "rocket"), ("10", "cat")]);
    let mut warnings = Vec::new();
    let slots = blend_pass(FrameSlots::unresolved(3), &kf, &mut warnings);
    assert_eq!(slots.len(), 3);
    assert_eq!(slots.unresolved_count(), 0);
    assert_eq!(slot(&slots, 2), Some("rocket :0.8 AND cat :0.2"));
}

#[test]
fn blend_pass_skips_duplicate_frames_with_warning() {
    let kf = keys(&[("1", "rocket"), ("1", "cat")]);
    let mut warnings = Vec::new();
    let slots = blend_pass(FrameSlots::unresolved(4), &kf, &mut warnings);
    assert_eq!(slots.unresolved_count(), 4);
    assert_eq!(
        warnings,
        vec![InterpWarning::NonMonotonic {
            pair: 0,
            current: FrameIndex(1),
            next: FrameIndex(1),
        }]
    );
}

#[test]
fn keyframe_pass_pins_verbatim_and_last_duplicate_wins() {
    let kf = keys(&[("0", "rocket --neg moon"), ("1", "rocket"), ("1", "cat")]);
    let mut warnings = Vec::new();
    let slots = keyframe_pass(FrameSlots::unresolved(3), &kf, &mut warnings);
    assert!(warnings.is_empty());
    assert_eq!(slot(&slots, 0), Some("rocket --neg moon"));
    assert_eq!(slot(&slots, 1), Some("cat"));
    assert_eq!(slot(&slots, 2), None);
}

#[test]
fn keyframe_pass_warns_on_composite_prompts_even_out_of_range() {
    let kf = keys(&[("0", "a AND a2"), ("10", "b AND b2")]);
    let mut warnings = Vec::new();
    let slots = keyframe_pass(FrameSlots::unresolved(5), &kf, &mut warnings);
    assert_eq!(slot(&slots, 0), Some("a AND a2"));
    assert_eq!(
        warnings,
        vec![
            InterpWarning::CompositeKeyframe {
                frame: FrameIndex(0)
            },
            InterpWarning::CompositeKeyframe {
                frame: FrameIndex(10)
            },
        ]
    );
}

#[test]
fn fill_pass_forward_then_backward() {
    let mut slots = FrameSlots::unresolved(6);
    slots.set(FrameIndex(2), "a".to_string());
    slots.set(FrameIndex(4), "b".to_string());
    let filled = fill_pass(slots, Some("beyond"));
    assert_eq!(
        filled.into_frames(6).unwrap(),
        vec!["a", "a", "a", "a", "b", "b"]
    );
}

#[test]
fn fill_pass_leaves_empty_buffer_unresolved() {
    let filled = fill_pass(FrameSlots::unresolved(3), None);
    assert_eq!(filled.unresolved_count(), 3);
    assert!(filled.into_frames(3).is_err());
}

#[test]
fn fill_pass_uses_beyond_only_for_an_empty_buffer() {
    let filled = fill_pass(FrameSlots::unresolved(3), Some("far"));
    assert_eq!(filled.into_frames(3).unwrap(), vec!["far", "far", "far"]);

    let mut slots = FrameSlots::unresolved(3);
    slots.set(FrameIndex(1), "near".to_string());
    let filled = fill_pass(slots, Some("far"));
    assert_eq!(filled.into_frames(3).unwrap(), vec!["near", "near", "near"]);
}

#[test]
fn blend_pass_past_the_end_writes_nothing() {
    let kf = keys(&[("5", "rocket"), ("18446744073709551615", "cat")]);
    let mut warnings = Vec::new();
    let slots = blend_pass(FrameSlots::unresolved(3), &kf, &mut warnings);
    assert!(warnings.is_empty());
    assert_eq!(slots.unresolved_count(), 3);
}

#[test]
fn into_frames_truncates() {
    let mut slots = FrameSlots::unresolved(4);
    for f in 0..4 {
        slots.set(FrameIndex(f), f.to_string());
    }
    assert_eq!(slots.into_frames(2).unwrap(), vec!["0", "1"]);
}
