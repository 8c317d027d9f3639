use loggroup::config::Threshold;
use loggroup::matcher::{match_count, score};
use loggroup::tokenizer::tokenize;

#[test]
fn different_lengths_are_incomparable() {
    let a = tokenize("user bob logged in");
    let b = tokenize("user bob logged in now");
    assert_eq!(match_count(&a, &b), None);
    assert!(score(&a, &b).is_none());
}

#[test]
fn counts_exact_positional_matches() {
    let a = tokenize("user bob logged in");
    let b = tokenize("user alice logged in");
    let s = score(&a, &b).expect("same length");
    assert_eq!(s.matched, 3);
    assert_eq!(s.total, 4);
    assert!((s.ratio() - 0.75).abs() < f64::EPSILON);
}

#[test]
fn separator_is_part_of_token_equality() {
    let a = tokenize("id 5, ok");
    let b = tokenize("id 5; ok");
    assert_eq!(match_count(&a, &b), Some(2));
}

#[test]
fn threshold_compares_against_floored_count() {
    let a = tokenize("user bob logged in");
    let b = tokenize("user alice logged in");
    let s = score(&a, &b).unwrap();
    assert!(Threshold::new(0.5).unwrap().accepts(&s));
    assert!(Threshold::new(0.74).unwrap().accepts(&s));
    assert!(!Threshold::new(0.75).unwrap().accepts(&s));
    assert!(!Threshold::new(0.9).unwrap().accepts(&s));
}

#[test]
fn zero_threshold_still_needs_one_match() {
    let a = tokenize("a b c");
    let b = tokenize("x y z");
    let s = score(&a, &b).unwrap();
    assert_eq!(s.matched, 0);
    assert!(!Threshold::new(0.0).unwrap().accepts(&s));
}

#[test]
fn empty_patterns_match_below_full_threshold() {
    let s = score(&[], &[]).unwrap();
    assert_eq!(s.ratio(), 1.0);
    assert!(Threshold::new(0.0).unwrap().accepts(&s));
    assert!(Threshold::new(0.99).unwrap().accepts(&s));
    assert!(!Threshold::new(1.0).unwrap().accepts(&s));
}
