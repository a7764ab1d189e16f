// ABOUTME: Item type definitions
// ABOUTME: The stored todo item and the inputs accepted by create and update

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A todo item. Serializes as `{id, task, is_done, order}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: i64,
    pub task: String,
    pub is_done: bool,
    /// Zero-based rank among all live items
    pub order: i64,
    #[serde(skip_serializing)]
    pub date_created: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub date_modified: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ItemCreateInput {
    pub task: String,
    /// Requested rank; appends when absent
    pub order: Option<i64>,
    /// Defaults to `false`
    pub is_done: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct ItemUpdateInput {
    pub task: Option<String>,
    pub order: Option<i64>,
    pub is_done: Option<bool>,
}

impl ItemUpdateInput {
    pub fn is_empty(&self) -> bool {
        self.task.is_none() && self.order.is_none() && self.is_done.is_none()
    }
}
