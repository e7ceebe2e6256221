//! Lesson-plan domain model
//!
//! A [`LessonRecord`] always carries exactly [`SECTION_COUNT`] flow sections
//! whose titles come from [`FIXED_TITLES`]. The array type makes the section
//! count a compile-time invariant; titles are only reachable through a getter.
//!
//! Records are built from arbitrary JSON by
//! [`crate::core::canonical::canonicalize_record`], never deserialized
//! directly, so a malformed file still yields a usable record.

use crate::domain::{LecternError, Result};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Number of flow sections in every record
pub const SECTION_COUNT: usize = 5;

/// Fixed flow section titles, in output order
pub const FIXED_TITLES: [&str; SECTION_COUNT] = [
    "I.Warming up and Revision",
    "II.Leading-in",
    "Ⅲ. Listening & reading Activities",
    "Ⅳ. Further Development",
    "Ⅴ. Homework",
];

/// Persisted JSON keys, with the English aliases accepted on input
pub mod keys {
    pub const TOPIC: &str = "教学课题";
    pub const OBJECTIVES: &str = "教学目标";
    pub const KEY_POINTS: &str = "教学重点与难点";
    pub const PREPARATION: &str = "教学准备";
    pub const FLOW: &str = "教学流程";
    pub const BOARD_DESIGN: &str = "板书设计";
    pub const REFLECTION: &str = "教学反思";

    pub const TEACHER_ACTION: &str = "tea";
    pub const STUDENT_ACTION: &str = "stu";

    pub const TOPIC_ALIAS: &str = "topic";
    pub const OBJECTIVES_ALIAS: &str = "objectives";
    pub const KEY_POINTS_ALIAS: &str = "keyPointsAndDifficulties";
    pub const PREPARATION_ALIAS: &str = "preparation";
    pub const FLOW_ALIAS: &str = "flow";
    pub const BOARD_DESIGN_ALIAS: &str = "boardDesign";

    pub const TEACHER_ACTION_ALIAS: &str = "teacherAction";
    pub const STUDENT_ACTION_ALIAS: &str = "studentAction";
}

/// A paired teacher/student action
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "tea", alias = "teacherAction", default)]
    pub teacher_action: String,

    #[serde(rename = "stu", alias = "studentAction", default)]
    pub student_action: String,
}

impl Activity {
    pub fn new(teacher_action: impl Into<String>, student_action: impl Into<String>) -> Self {
        Self {
            teacher_action: teacher_action.into(),
            student_action: student_action.into(),
        }
    }
}

/// Direction for [`LessonRecord::move_activity`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// One fixed-title grouping of activities
///
/// Serializes as a single-key object `{ "<title>": [activities...] }`, the
/// shape stored in library files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowSection {
    title: &'static str,
    activities: Vec<Activity>,
}

impl FlowSection {
    pub(crate) fn new(index: usize, activities: Vec<Activity>) -> Self {
        Self {
            title: FIXED_TITLES[index],
            activities,
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl Serialize for FlowSection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.title, &self.activities)?;
        map.end()
    }
}

/// A lesson plan in canonical form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonRecord {
    #[serde(rename = "教学课题")]
    pub topic: String,

    #[serde(rename = "教学目标")]
    pub objectives: String,

    #[serde(rename = "教学重点与难点")]
    pub key_points_and_difficulties: String,

    #[serde(rename = "教学准备")]
    pub preparation: String,

    #[serde(rename = "教学流程")]
    flow: [FlowSection; SECTION_COUNT],

    #[serde(rename = "板书设计")]
    pub board_design: String,

    /// Layout placeholder; always persisted empty
    #[serde(rename = "教学反思", serialize_with = "serialize_empty")]
    reflection: (),
}

fn serialize_empty<S: Serializer>(_: &(), serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str("")
}

impl Default for LessonRecord {
    fn default() -> Self {
        Self::with_flow(empty_flow())
    }
}

pub(crate) fn empty_flow() -> [FlowSection; SECTION_COUNT] {
    std::array::from_fn(|i| FlowSection::new(i, Vec::new()))
}

impl LessonRecord {
    pub(crate) fn with_flow(flow: [FlowSection; SECTION_COUNT]) -> Self {
        Self {
            topic: String::new(),
            objectives: String::new(),
            key_points_and_difficulties: String::new(),
            preparation: String::new(),
            flow,
            board_design: String::new(),
            reflection: (),
        }
    }

    pub fn flow(&self) -> &[FlowSection; SECTION_COUNT] {
        &self.flow
    }

    pub fn section(&self, section: usize) -> Result<&FlowSection> {
        self.flow.get(section).ok_or_else(|| section_out_of_range(section))
    }

    /// Always empty: reflection is handwritten on the printed page
    pub fn reflection(&self) -> &str {
        ""
    }

    /// Total activity count across all sections
    pub fn activity_count(&self) -> usize {
        self.flow.iter().map(|s| s.activities.len()).sum()
    }

    /// Appends an activity to a section, returning its 0-based index
    pub fn add_activity(&mut self, section: usize, activity: Activity) -> Result<usize> {
        let activities = self.activities_mut(section)?;
        activities.push(activity);
        Ok(activities.len() - 1)
    }

    /// Removes and returns the activity at `index`
    pub fn remove_activity(&mut self, section: usize, index: usize) -> Result<Activity> {
        let activities = self.activities_mut(section)?;
        if index >= activities.len() {
            return Err(activity_out_of_range(section, index, activities.len()));
        }
        Ok(activities.remove(index))
    }

    /// Swaps the activity at `index` with its neighbour.
    ///
    /// Returns `false` without changes when the activity is already first
    /// (moving up) or last (moving down).
    pub fn move_activity(
        &mut self,
        section: usize,
        index: usize,
        direction: MoveDirection,
    ) -> Result<bool> {
        let activities = self.activities_mut(section)?;
        if index >= activities.len() {
            return Err(activity_out_of_range(section, index, activities.len()));
        }
        let target = match direction {
            MoveDirection::Up if index == 0 => return Ok(false),
            MoveDirection::Up => index - 1,
            MoveDirection::Down if index + 1 == activities.len() => return Ok(false),
            MoveDirection::Down => index + 1,
        };
        activities.swap(index, target);
        Ok(true)
    }

    /// Replaces the given action texts of one activity
    pub fn update_activity(
        &mut self,
        section: usize,
        index: usize,
        teacher_action: Option<String>,
        student_action: Option<String>,
    ) -> Result<()> {
        let activities = self.activities_mut(section)?;
        let len = activities.len();
        let activity = activities
            .get_mut(index)
            .ok_or_else(|| activity_out_of_range(section, index, len))?;
        if let Some(text) = teacher_action {
            activity.teacher_action = text;
        }
        if let Some(text) = student_action {
            activity.student_action = text;
        }
        Ok(())
    }

    /// Canonical persisted JSON
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    fn activities_mut(&mut self, section: usize) -> Result<&mut Vec<Activity>> {
        self.flow
            .get_mut(section)
            .map(|s| &mut s.activities)
            .ok_or_else(|| section_out_of_range(section))
    }
}

fn section_out_of_range(section: usize) -> LecternError {
    LecternError::Validation(format!(
        "Section index {section} out of range (0..{SECTION_COUNT})"
    ))
}

fn activity_out_of_range(section: usize, index: usize, len: usize) -> LecternError {
    LecternError::Validation(format!(
        "Activity index {index} out of range for section {section} ({len} activities)"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_with(section: usize, texts: &[&str]) -> LessonRecord {
        let mut record = LessonRecord::default();
        for t in texts {
            record
                .add_activity(section, Activity::new(*t, format!("s-{t}")))
                .unwrap();
        }
        record
    }

    fn teacher_texts(record: &LessonRecord, section: usize) -> Vec<String> {
        record.flow()[section]
            .activities()
            .iter()
            .map(|a| a.teacher_action.clone())
            .collect()
    }

    #[test]
    fn test_default_record_has_fixed_sections() {
        let record = LessonRecord::default();
        let titles: Vec<&str> = record.flow().iter().map(|s| s.title()).collect();
        assert_eq!(titles, FIXED_TITLES.to_vec());
        assert!(record.flow().iter().all(|s| s.is_empty()));
        assert_eq!(record.activity_count(), 0);
    }

    #[test]
    fn test_add_activity_appends_in_order() {
        let record = record_with(2, &["a", "b", "c"]);
        assert_eq!(teacher_texts(&record, 2), vec!["a", "b", "c"]);
        assert_eq!(record.activity_count(), 3);
    }

    #[test]
    fn test_add_activity_rejects_bad_section() {
        let mut record = LessonRecord::default();
        assert!(record.add_activity(5, Activity::default()).is_err());
    }

    #[test]
    fn test_remove_activity() {
        let mut record = record_with(0, &["a", "b", "c"]);
        let removed = record.remove_activity(0, 1).unwrap();
        assert_eq!(removed.teacher_action, "b");
        assert_eq!(teacher_texts(&record, 0), vec!["a", "c"]);
        assert!(record.remove_activity(0, 2).is_err());
    }

    #[test]
    fn test_move_activity() {
        let mut record = record_with(1, &["a", "b", "c"]);
        assert!(record.move_activity(1, 2, MoveDirection::Up).unwrap());
        assert_eq!(teacher_texts(&record, 1), vec!["a", "c", "b"]);
        assert!(record.move_activity(1, 0, MoveDirection::Down).unwrap());
        assert_eq!(teacher_texts(&record, 1), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_move_activity_at_boundary_is_noop() {
        let mut record = record_with(1, &["a", "b"]);
        assert!(!record.move_activity(1, 0, MoveDirection::Up).unwrap());
        assert!(!record.move_activity(1, 1, MoveDirection::Down).unwrap());
        assert_eq!(teacher_texts(&record, 1), vec!["a", "b"]);
        assert!(record.move_activity(1, 2, MoveDirection::Up).is_err());
    }

    #[test]
    fn test_update_activity() {
        let mut record = record_with(4, &["a"]);
        record
            .update_activity(4, 0, None, Some("new student".to_string()))
            .unwrap();
        let activity = &record.flow()[4].activities()[0];
        assert_eq!(activity.teacher_action, "a");
        assert_eq!(activity.student_action, "new student");
        assert!(record.update_activity(4, 1, None, None).is_err());
    }

    #[test]
    fn test_to_value_persisted_shape() {
        let mut record = record_with(0, &["T1"]);
        record.topic = "Unit 1".to_string();
        let value = record.to_value().unwrap();

        assert_eq!(value[keys::TOPIC], "Unit 1");
        assert_eq!(value[keys::REFLECTION], "");
        let flow = value[keys::FLOW].as_array().unwrap();
        assert_eq!(flow.len(), SECTION_COUNT);
        assert_eq!(
            flow[0],
            json!({ "I.Warming up and Revision": [{ "tea": "T1", "stu": "s-T1" }] })
        );
        assert_eq!(flow[4], json!({ "Ⅴ. Homework": [] }));
    }

    #[test]
    fn test_activity_deserialize_aliases() {
        let a: Activity = serde_json::from_value(json!({ "teacherAction": "x" })).unwrap();
        assert_eq!(a, Activity::new("x", ""));
        let b: Activity = serde_json::from_value(json!({ "tea": "t", "stu": "s" })).unwrap();
        assert_eq!(b, Activity::new("t", "s"));
    }
}
