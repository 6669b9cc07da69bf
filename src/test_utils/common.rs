use std::sync::Arc;

use parking_lot::Mutex;

use crate::Child;
use crate::Record;
use crate::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
}

impl Record for Pose {
    fn type_name(&self) -> &str {
        "Pose"
    }

    fn children(&self) -> Vec<Child> {
        vec![
            Child::field("x", self.x),
            Child::field("y", self.y),
            Child::method("distance_to"),
        ]
    }
}

/// Record exercising every discovery rule. `link` can point anywhere, including
/// back at the robot itself.
#[derive(Debug)]
pub struct Robot {
    pub name: String,
    pub battery: i64,
    pub pose: Pose,
    pub link: Mutex<Option<Value>>,
}

impl Robot {
    pub fn new(
        name: &str,
        battery: i64,
    ) -> Self {
        Self {
            name: name.to_string(),
            battery,
            pose: Pose { x: 1.0, y: 2.0 },
            link: Mutex::new(None),
        }
    }
}

impl Record for Robot {
    fn type_name(&self) -> &str {
        "Robot"
    }

    fn children(&self) -> Vec<Child> {
        let mut children = vec![
            Child::field("name", self.name.as_str()),
            Child::field("battery", self.battery),
            Child::field("pose", Value::object(self.pose.clone())),
            Child::field("MAX_SPEED", 3),
            Child::field("_serial", "R2-0001"),
            Child::method("stop"),
        ];
        if let Some(link) = self.link.lock().clone() {
            children.push(Child::Field("link".into(), link));
        }
        children
    }
}

/// A robot whose `link` field refers back to itself
pub fn self_linked_robot(name: &str) -> Arc<Robot> {
    let robot = Arc::new(Robot::new(name, 90));
    let as_record: Arc<dyn Record> = robot.clone();
    *robot.link.lock() = Some(Value::Object(as_record));
    robot
}

/// Record whose text form spans several lines
#[derive(Debug)]
pub struct Banner {
    pub lines: Vec<String>,
}

impl Record for Banner {
    fn type_name(&self) -> &str {
        "Banner"
    }

    fn children(&self) -> Vec<Child> {
        Vec::new()
    }

    fn render(&self) -> String {
        self.lines.join("\n")
    }
}
