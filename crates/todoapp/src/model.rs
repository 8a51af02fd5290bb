use crate::error::{Result, TodoError};
use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a [`Todo`].
pub type TodoId = i64;

pub const DEFAULT_USER_ID: i64 = 1;

fn default_user_id() -> i64 {
    DEFAULT_USER_ID
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default = "default_user_id")]
    pub user_id: i64,
}

impl Todo {
    /// Shallow-merges `patch` over this record.
    ///
    /// The patch is validated before anything is written, so a rejected patch
    /// leaves the record untouched.
    pub fn apply(&mut self, patch: TodoPatch) -> Result<()> {
        let title = match patch.title {
            Some(title) => Some(normalize_title(&title)?),
            None => None,
        };

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
        Ok(())
    }
}

/// Fields a client may supply when creating a todo. The id is never one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

impl NewTodo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: None,
            user_id: None,
        }
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Builds the stored record, trimming the title and filling defaults.
    pub fn into_todo(self, id: TodoId) -> Result<Todo> {
        Ok(Todo {
            id,
            title: normalize_title(&self.title)?,
            completed: self.completed.unwrap_or(false),
            user_id: self.user_id.unwrap_or(DEFAULT_USER_ID),
        })
    }
}

/// Partial update. Absent fields keep their stored value.
///
/// There is no `id` field: an `id` in an update payload is
/// dropped during deserialization, so updates can never break id uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

impl TodoPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.completed.is_none() && self.user_id.is_none()
    }
}

fn normalize_title(raw: &str) -> Result<String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(TodoError::Validation("Title cannot be empty".to_string()));
    }
    Ok(title.to_string())
}

/// Parses an identifier the way route parameters are read: leading
/// whitespace is skipped, an optional sign is accepted, and the longest run
/// of decimal digits that follows is the id (`"12abc"` is 12).
///
/// Returns `None` when no digits lead the text. Such an identifier matches
/// no record.
pub fn parse_id(raw: &str) -> Option<TodoId> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: TodoId = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_reads_leading_digits() {
        assert_eq!(parse_id("12"), Some(12));
        assert_eq!(parse_id("  7"), Some(7));
        assert_eq!(parse_id("12abc"), Some(12));
        assert_eq!(parse_id("1.5"), Some(1));
        assert_eq!(parse_id("+3"), Some(3));
        assert_eq!(parse_id("-4"), Some(-4));
    }

    #[test]
    fn parse_id_rejects_non_numeric() {
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("-"), None);
        assert_eq!(parse_id("x12"), None);
    }

    #[test]
    fn todo_uses_camel_case_field_names() {
        let todo = Todo {
            id: 1,
            title: "Buy milk".into(),
            completed: false,
            user_id: 1,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "title": "Buy milk", "completed": false, "userId": 1})
        );
    }

    #[test]
    fn todo_fills_missing_defaults() {
        let todo: Todo = serde_json::from_str(r#"{"id": 3, "title": "Call mom"}"#).unwrap();
        assert!(!todo.completed);
        assert_eq!(todo.user_id, DEFAULT_USER_ID);
    }

    #[test]
    fn new_todo_trims_and_defaults() {
        let todo = NewTodo::new("  Buy milk  ").into_todo(4).unwrap();
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.completed);
        assert_eq!(todo.user_id, 1);
    }

    #[test]
    fn new_todo_rejects_blank_title() {
        let err = NewTodo::new("   ").into_todo(1).unwrap_err();
        assert!(matches!(err, TodoError::Validation(_)));
    }

    #[test]
    fn apply_only_touches_supplied_fields() {
        let mut todo = NewTodo::new("Walk dog").user_id(9).into_todo(2).unwrap();
        todo.apply(TodoPatch::default().completed(true)).unwrap();
        assert_eq!(todo.id, 2);
        assert_eq!(todo.title, "Walk dog");
        assert!(todo.completed);
        assert_eq!(todo.user_id, 9);
    }

    #[test]
    fn rejected_patch_leaves_record_untouched() {
        let mut todo = NewTodo::new("Walk dog").into_todo(2).unwrap();
        let before = todo.clone();
        let patch = TodoPatch::default().title("  ").completed(true);
        assert!(todo.apply(patch).is_err());
        assert_eq!(todo, before);
    }

    #[test]
    fn patch_drops_id_field() {
        let patch: TodoPatch = serde_json::from_str(r#"{"id": 99, "completed": true}"#).unwrap();
        assert_eq!(patch, TodoPatch::default().completed(true));
    }
}
