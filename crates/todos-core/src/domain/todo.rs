//! Todo Entity
//!
//! A single task record owned by a user.

use serde::{Deserialize, Serialize};

/// Server-assigned todo identifier
pub type TodoId = u64;

/// Owning user identifier
pub type UserId = u64;

/// A todo item as exchanged with the remote collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    pub user_id: UserId,
}

impl Todo {
    /// Placeholder shown while a creation is in flight.
    ///
    /// The id is only a local key (creation timestamp); the server assigns the real one.
    pub fn placeholder(id: TodoId, draft: &NewTodo) -> Self {
        Self {
            id,
            title: draft.title.clone(),
            completed: draft.completed,
            user_id: draft.user_id,
        }
    }
}

/// Creation payload: a todo without its id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub title: String,
    pub completed: bool,
    pub user_id: UserId,
}

impl NewTodo {
    /// New incomplete todo for `user_id`
    pub fn new(title: impl Into<String>, user_id: UserId) -> Self {
        Self {
            title: title.into(),
            completed: false,
            user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_wire_format() {
        let todo = Todo {
            id: 7,
            title: "Buy milk".to_string(),
            completed: true,
            user_id: 42,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 7, "title": "Buy milk", "completed": true, "userId": 42 })
        );
    }

    #[test]
    fn test_todo_ignores_unknown_fields() {
        let raw = r#"{
            "id": 3,
            "createdAt": "2024-01-01T00:00:00.000Z",
            "updatedAt": "2024-01-01T00:00:00.000Z",
            "userId": 11,
            "title": "Walk",
            "completed": false
        }"#;
        let todo: Todo = serde_json::from_str(raw).unwrap();
        assert_eq!(todo.id, 3);
        assert_eq!(todo.user_id, 11);
        assert!(!todo.completed);
    }

    #[test]
    fn test_new_todo_has_no_id() {
        let draft = NewTodo::new("Read", 5);
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "title": "Read", "completed": false, "userId": 5 })
        );
    }

    #[test]
    fn test_placeholder_copies_draft() {
        let draft = NewTodo::new("Read", 5);
        let temp = Todo::placeholder(1_700_000_000_000, &draft);
        assert_eq!(temp.id, 1_700_000_000_000);
        assert_eq!(temp.title, "Read");
        assert_eq!(temp.user_id, 5);
        assert!(!temp.completed);
    }
}
