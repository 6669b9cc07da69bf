use std::collections::BTreeMap;

use super::*;
use crate::test_utils::self_linked_robot;
use crate::test_utils::Pose;
use crate::Value;

fn subset(entries: &[(&str, Value)]) -> ValueSubset {
    entries.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

#[test]
fn digest_is_stable_for_structurally_equal_input() {
    let a = subset(&[("speed", Value::Int(5)), ("pose", Value::object(Pose { x: 1.0, y: 2.0 }))]);
    let b = subset(&[("pose", Value::object(Pose { x: 1.0, y: 2.0 })), ("speed", Value::Int(5))]);

    assert_eq!(Digest::of(&a), Digest::of(&a));
    assert_eq!(Digest::of(&a), Digest::of(&b));
}

#[test]
fn digest_differs_on_structural_change() {
    let base = subset(&[("speed", Value::Int(5))]);

    assert_ne!(Digest::of(&base), Digest::of(&subset(&[("speed", Value::Int(6))])));
    assert_ne!(Digest::of(&base), Digest::of(&subset(&[("speed", Value::Float(5.0))])));
    assert_ne!(Digest::of(&base), Digest::of(&subset(&[("velocity", Value::Int(5))])));
    assert_ne!(Digest::of(&base), Digest::of(&ValueSubset::new()));
}

#[test]
fn container_boundaries_are_unambiguous() {
    let split = subset(&[("a", Value::from(vec!["x", "y"]))]);
    let joined = subset(&[("a", Value::from(vec!["xy"]))]);

    assert_ne!(Digest::of(&split), Digest::of(&joined));
}

#[test]
fn changed_against_own_digest_is_unchanged() {
    let x = subset(&[("speed", Value::Int(5))]);
    let digest = Digest::of(&x);

    assert_eq!(changed(Some(&digest), &x), (false, digest));
}

#[test]
fn changed_against_other_digest_reports_new_digest() {
    let x = subset(&[("speed", Value::Int(5))]);
    let y = subset(&[("speed", Value::Int(6))]);

    assert_eq!(changed(Some(&Digest::of(&x)), &y), (true, Digest::of(&y)));
}

#[test]
fn first_observation_always_counts_as_changed() {
    let empty = ValueSubset::new();
    assert_eq!(changed(None, &empty), (true, Digest::of(&empty)));

    let mut detector = ChangeDetector::default();
    assert!(detector.last().is_none());
    assert!(detector.observe(&empty));
    assert!(!detector.observe(&empty));
    assert_eq!(detector.last(), Some(&Digest::of(&empty)));
}

#[test]
fn negative_zero_matches_zero() {
    assert_eq!(Value::Float(-0.0), Value::Float(0.0));
    assert_eq!(Digest::of_value(&Value::Float(-0.0)), Digest::of_value(&Value::Float(0.0)));
}

#[test]
fn nan_equality_agrees_with_digest() {
    let nan = Value::Float(f64::NAN);

    assert_eq!(nan, Value::Float(f64::NAN));
    assert_eq!(Digest::of_value(&nan), Digest::of_value(&Value::Float(f64::NAN)));
    assert_eq!(Value::from(vec![f64::NAN]), Value::from(vec![f64::NAN]));
    assert_ne!(nan, Value::Float(0.0));
}

#[test]
fn cyclic_graphs_digest_deterministically() {
    let a = Value::Object(self_linked_robot("r2"));
    let b = Value::Object(self_linked_robot("r2"));

    assert_eq!(Digest::of_value(&a), Digest::of_value(&b));
}

#[test]
fn nested_maps_are_order_insensitive() {
    let mut first = BTreeMap::new();
    first.insert("b".to_string(), Value::Int(2));
    first.insert("a".to_string(), Value::Int(1));
    let mut second = BTreeMap::new();
    second.insert("a".to_string(), Value::Int(1));
    second.insert("b".to_string(), Value::Int(2));

    assert_eq!(Digest::of_value(&Value::Map(first)), Digest::of_value(&Value::Map(second)));
}

#[test]
fn display_is_lowercase_hex() {
    let text = Digest::of(&ValueSubset::new()).to_string();

    assert_eq!(text.len(), 64);
    assert!(text.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}
