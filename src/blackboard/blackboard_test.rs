use std::collections::BTreeMap;
use std::thread;

use super::*;
use crate::test_utils::Banner;
use crate::test_utils::Robot;

#[test]
fn set_then_get_returns_the_value() {
    let blackboard = Blackboard::new();

    assert!(blackboard.set("speed", 5, true));
    assert!(blackboard.set("name", "rover", true));
    assert!(blackboard.set("ratio", 0.5, true));

    assert_eq!(blackboard.get("speed"), Some(Value::Int(5)));
    assert_eq!(blackboard.get("name"), Some(Value::Text("rover".into())));
    assert_eq!(blackboard.get("ratio"), Some(Value::Float(0.5)));
}

#[test]
fn set_without_overwrite_keeps_existing_value() {
    let blackboard = Blackboard::new();
    blackboard.set("speed", 1, true);

    assert!(!blackboard.set("speed", 2, false));
    assert_eq!(blackboard.get("speed"), Some(Value::Int(1)));

    assert!(blackboard.set("fresh", 2, false));
    assert_eq!(blackboard.get("fresh"), Some(Value::Int(2)));
}

#[test]
fn delete_removes_and_tolerates_absent_names() {
    let blackboard = Blackboard::new();
    blackboard.set("speed", 1, true);

    blackboard.delete("speed");
    assert_eq!(blackboard.get("speed"), None);

    blackboard.delete("speed");
    blackboard.delete("never_existed");
    assert!(blackboard.is_empty());
}

#[test]
fn clones_share_one_store() {
    let blackboard = Blackboard::new();
    let other = blackboard.clone();

    other.set("ready", true, true);
    assert_eq!(blackboard.get("ready"), Some(Value::Bool(true)));

    blackboard.delete("ready");
    assert!(!other.contains("ready"));
}

#[test]
fn nested_paths_resolve_through_objects_and_maps() {
    let blackboard = Blackboard::new();
    blackboard.set("robot", Value::object(Robot::new("r2", 80)), true);

    let mut limits = BTreeMap::new();
    limits.insert("max".to_string(), Value::Int(10));
    blackboard.set("limits", limits, true);

    assert_eq!(blackboard.get("robot/battery"), Some(Value::Int(80)));
    assert_eq!(blackboard.get("robot.pose.x"), Some(Value::Float(1.0)));
    assert_eq!(blackboard.get("robot/pose/y"), Some(Value::Float(2.0)));
    assert_eq!(blackboard.get("limits/max"), Some(Value::Int(10)));
}

#[test]
fn nested_path_failure_at_any_segment_is_not_found() {
    let blackboard = Blackboard::new();
    blackboard.set("robot", Value::object(Robot::new("r2", 80)), true);
    blackboard.set("speed", 3, true);

    assert_eq!(blackboard.get("robot/wheels"), None);
    assert_eq!(blackboard.get("robot/pose/z"), None);
    assert_eq!(blackboard.get("robot/stop"), None);
    assert_eq!(blackboard.get("speed/value"), None);
    assert_eq!(blackboard.get("ghost/anything"), None);
}

#[test]
fn exact_key_wins_over_path_traversal() {
    let blackboard = Blackboard::new();
    blackboard.set("a/b", "literal", true);

    assert_eq!(blackboard.get("a/b"), Some(Value::Text("literal".into())));
}

#[test]
fn keys_are_sorted() {
    let blackboard = Blackboard::new();
    blackboard.set("zeta", 1, true);
    blackboard.set("alpha", 2, true);
    blackboard.set("mid", 3, true);

    assert_eq!(blackboard.keys(), vec!["alpha", "mid", "zeta"]);
    assert_eq!(blackboard.len(), 3);

    blackboard.clear();
    assert!(blackboard.is_empty());
}

#[test]
fn render_text_pads_keys_and_marks_nulls() {
    let blackboard = Blackboard::new();
    blackboard.set("speed", 5, true);
    blackboard.set("a", "x", true);
    blackboard.set("target", Value::Null, true);

    let expected = "Blackboard\n  a      : x\n  speed  : 5\n  target : -\n";
    assert_eq!(blackboard.render_text(), expected);
    assert_eq!(blackboard.to_string(), expected);
}

#[test]
fn render_text_spreads_multi_line_values() {
    let blackboard = Blackboard::new();
    blackboard.set(
        "banner",
        Value::object(Banner {
            lines: vec!["first".into(), "second".into()],
        }),
        true,
    );
    blackboard.set("id", 7, true);

    let expected = "Blackboard\n  banner :\n    first\n    second\n  id     : 7\n";
    assert_eq!(blackboard.render_text(), expected);
}

#[test]
fn render_text_of_empty_store_is_only_the_title() {
    assert_eq!(Blackboard::new().render_text(), "Blackboard\n");
}

#[test]
fn concurrent_writers_and_readers_see_consistent_values() {
    let blackboard = Blackboard::new();
    let writers: Vec<_> = (0..4)
        .map(|i| {
            let blackboard = blackboard.clone();
            thread::spawn(move || {
                for n in 0..100 {
                    blackboard.set(&format!("w{i}"), n, true);
                }
            })
        })
        .collect();

    let reader = {
        let blackboard = blackboard.clone();
        thread::spawn(move || {
            for _ in 0..100 {
                let _ = blackboard.render_text();
            }
        })
    };

    for writer in writers {
        writer.join().unwrap();
    }
    reader.join().unwrap();

    for i in 0..4 {
        assert_eq!(blackboard.get(&format!("w{i}")), Some(Value::Int(99)));
    }
}
