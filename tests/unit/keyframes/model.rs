use super::*;
use crate::foundation::error::PromptError;

fn frames(kf: &Keyframes) -> Vec<u64> {
    kf.as_slice().iter().map(|k| k.frame.0).collect()
}

#[test]
fn sorts_numerically_not_lexically() {
    let kf = Keyframes::from_pairs([("10", "cat"), ("9", "dog"), ("0", "rocket")]).unwrap();
    assert_eq!(frames(&kf), vec![0, 9, 10]);
}

#[test]
fn duplicate_pairs_keep_supply_order() {
    let kf = Keyframes::from_pairs([("1", "rocket"), ("1", "cat")]).unwrap();
    assert_eq!(kf.len(), 2);
    assert_eq!(kf.as_slice()[0].prompt, "rocket");
    assert_eq!(kf.as_slice()[1].prompt, "cat");
}

#[test]
fn json_duplicates_are_last_write_wins() {
    let kf = Keyframes::from_json_str(r#"{ "1": "rocket", "1": "cat" }"#).unwrap();
    assert_eq!(kf.len(), 1);
    assert_eq!(kf.as_slice()[0].prompt, "cat");
}

#[test]
fn malformed_key_is_an_error() {
    let err = Keyframes::from_json_str(r#"{ "0": "a", "ten": "b" }"#).unwrap_err();
    match err {
        PromptError::InvalidKeyframe { key, .. } => assert_eq!(key, "ten"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_object_json_is_a_serde_error() {
    assert!(matches!(
        Keyframes::from_json_str(r#"["rocket"]"#),
        Err(PromptError::Serde(_))
    ));
    assert!(matches!(
        Keyframes::from_json_str(r#"{ "0": 5 }"#),
        Err(PromptError::Serde(_))
    ));
}

#[test]
fn deserializes_through_serde() {
    let kf: Keyframes = serde_json::from_str(r#"{ "5": "zebra", "0": "rocket" }"#).unwrap();
    assert_eq!(frames(&kf), vec![0, 5]);
    let err = serde_json::from_str::<Keyframes>(r#"{ "x": "zebra" }"#).unwrap_err();
    assert!(err.to_string().contains("invalid keyframe key"));
}

#[test]
fn pairs_walk_adjacent_keyframes() {
    let kf = Keyframes::from_pairs([("0", "a"), ("5", "b"), ("10", "c")]).unwrap();
    let pairs: Vec<_> = kf
        .pairs()
        .map(|(a, b)| (a.frame.0, b.frame.0))
        .collect();
    assert_eq!(pairs, vec![(0, 5), (5, 10)]);
    assert!(Keyframes::default().pairs().next().is_none());
}
