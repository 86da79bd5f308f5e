//! Frontend Models
//!
//! Data structures matching the `/todos` resource.

use serde::{Deserialize, Serialize};

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u32,
    pub title: String,
    pub is_done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
impl Todo {
    pub fn new(id: u32, title: impl Into<String>, is_done: bool) -> Self {
        Self {
            id,
            title: title.into(),
            is_done,
            description: None,
        }
    }
}

/// Partial update sent with `PATCH /todos/{id}`.
///
/// Every field is either present (serialized) or absent (omitted from the
/// body); there is no implicit default.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_done: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TodoPatch {
    pub fn status(is_done: bool) -> Self {
        Self {
            is_done: Some(is_done),
            ..Default::default()
        }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }
}

/// Which subset of the list is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Display order of the filter buttons
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.is_done,
            Filter::Completed => todo.is_done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_wire_format() {
        let json = r#"{"id":3,"title":"Write docs","description":null,"isDone":true,"createdAt":"2024-01-01T00:00:00Z"}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo, Todo::new(3, "Write docs", true));
    }

    #[test]
    fn test_patch_omits_absent_fields() {
        let body = serde_json::to_string(&TodoPatch::status(true)).unwrap();
        assert_eq!(body, r#"{"isDone":true}"#);

        let body = serde_json::to_string(&TodoPatch::title("Renamed")).unwrap();
        assert_eq!(body, r#"{"title":"Renamed"}"#);

        assert_eq!(serde_json::to_string(&TodoPatch::default()).unwrap(), "{}");
    }

    #[test]
    fn test_filter_matches() {
        let open = Todo::new(1, "open", false);
        let done = Todo::new(2, "done", true);

        assert!(Filter::All.matches(&open) && Filter::All.matches(&done));
        assert!(Filter::Active.matches(&open) && !Filter::Active.matches(&done));
        assert!(!Filter::Completed.matches(&open) && Filter::Completed.matches(&done));
        assert_eq!(Filter::ALL.map(|f| f.as_str()), ["all", "active", "completed"]);
    }
}
