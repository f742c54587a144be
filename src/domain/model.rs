use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::utils::error::DrillError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Squares,
    ReverseSublist,
    MergeLists,
    MergeDicts,
    IntersectDicts,
    WordFrequencies,
}

impl TaskKind {
    pub const ALL: [TaskKind; 6] = [
        TaskKind::Squares,
        TaskKind::ReverseSublist,
        TaskKind::MergeLists,
        TaskKind::MergeDicts,
        TaskKind::IntersectDicts,
        TaskKind::WordFrequencies,
    ];

    /// 1-based position in the report.
    pub fn ordinal(self) -> usize {
        match self {
            TaskKind::Squares => 1,
            TaskKind::ReverseSublist => 2,
            TaskKind::MergeLists => 3,
            TaskKind::MergeDicts => 4,
            TaskKind::IntersectDicts => 5,
            TaskKind::WordFrequencies => 6,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            TaskKind::Squares => "List of Squares",
            TaskKind::ReverseSublist => "Reverse Sublist",
            TaskKind::MergeLists => "Merge Sorted Lists",
            TaskKind::MergeDicts => "Merge Two Dictionaries",
            TaskKind::IntersectDicts => "Intersection of Two Dictionaries",
            TaskKind::WordFrequencies => "Count Word Frequencies",
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            TaskKind::Squares => "squares",
            TaskKind::ReverseSublist => "reverse_sublist",
            TaskKind::MergeLists => "merge_lists",
            TaskKind::MergeDicts => "merge_dicts",
            TaskKind::IntersectDicts => "intersect_dicts",
            TaskKind::WordFrequencies => "word_frequencies",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TaskKind {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace('-', "_");
        TaskKind::ALL
            .into_iter()
            .find(|kind| kind.id() == needle)
            .ok_or_else(|| DrillError::InvalidConfigValueError {
                field: "task".to_string(),
                value: s.to_string(),
                reason: format!(
                    "Unknown task. Expected one of: {}",
                    TaskKind::ALL.map(TaskKind::id).join(", ")
                ),
            })
    }
}

/// What a drill reports about its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub items: usize,
    pub bytes: usize,
}

fn as_seconds<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    pub task: TaskKind,
    pub title: &'static str,
    #[serde(rename = "seconds", serialize_with = "as_seconds")]
    pub elapsed: Duration,
    pub bytes: usize,
    pub items: usize,
}

impl Measurement {
    pub fn new(task: TaskKind, elapsed: Duration, sample: Sample) -> Self {
        Self {
            task,
            title: task.title(),
            elapsed,
            bytes: sample.bytes,
            items: sample.items,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    #[serde(rename = "total_seconds", serialize_with = "as_seconds")]
    pub total_elapsed: Duration,
    pub measurements: Vec<Measurement>,
}

impl Report {
    pub fn new(measurements: Vec<Measurement>) -> Self {
        Self {
            generated_at: Utc::now(),
            total_elapsed: measurements.iter().map(|m| m.elapsed).sum(),
            measurements,
        }
    }

    pub fn total_elapsed(&self) -> Duration {
        self.total_elapsed
    }

    pub fn get(&self, task: TaskKind) -> Option<&Measurement> {
        self.measurements.iter().find(|m| m.task == task)
    }
}
