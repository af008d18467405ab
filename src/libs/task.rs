use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const DEFAULT_COLOR: &str = "#4CAF50";

/// A tracked activity against which time entries accumulate.
///
/// Archiving a task (`is_active = false`) hides it from day-to-day pickers
/// while preserving its history; deletion cascades to entries and segments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub name: String,
    pub color: String,
    pub is_active: bool,
    pub created_at: Option<NaiveDateTime>,
}

impl Task {
    pub fn new(name: &str, color: &str) -> Self {
        Self {
            id: None,
            name: name.trim().to_string(),
            color: color.to_string(),
            is_active: true,
            created_at: None,
        }
    }
}

/// Filter for task listings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaskFilter {
    /// Only tasks with `is_active = true`.
    Active,
    /// Every task, archived ones included.
    All,
}

/// Partial update for a task; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub name: Option<String>,
    pub color: Option<String>,
    pub is_active: Option<bool>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.color.is_none() && self.is_active.is_none()
    }
}
