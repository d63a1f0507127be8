//! Filter Projection
//!
//! View-only predicate selecting which todos are displayed.

use super::todo::Todo;

/// Which subset of todos is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterType {
    #[default]
    All,
    /// Not yet completed
    Active,
    Completed,
}

impl FilterType {
    /// Every filter, in footer order
    pub const ALL: [FilterType; 3] = [FilterType::All, FilterType::Active, FilterType::Completed];

    /// Link label shown in the footer
    pub fn label(&self) -> &'static str {
        match self {
            FilterType::All => "All",
            FilterType::Active => "Active",
            FilterType::Completed => "Completed",
        }
    }

    /// Hash route of the footer link
    pub fn href(&self) -> &'static str {
        match self {
            FilterType::All => "#/",
            FilterType::Active => "#/active",
            FilterType::Completed => "#/completed",
        }
    }

    /// Parse a location hash; anything unrecognised selects `All`
    pub fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#').trim_matches('/') {
            "active" => FilterType::Active,
            "completed" => FilterType::Completed,
            _ => FilterType::All,
        }
    }

    /// Whether `todo` passes this filter
    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            FilterType::All => true,
            FilterType::Active => !todo.completed,
            FilterType::Completed => todo.completed,
        }
    }
}

/// Project `todos` through `filter`, keeping order
pub fn filter_todos(todos: &[Todo], filter: FilterType) -> Vec<Todo> {
    todos.iter().filter(|todo| filter.matches(todo)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u64, completed: bool) -> Todo {
        Todo {
            id,
            title: format!("Todo {}", id),
            completed,
            user_id: 1,
        }
    }

    fn ids(todos: &[Todo]) -> Vec<u64> {
        todos.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_filter_todos() {
        let todos = vec![
            make_todo(1, false),
            make_todo(2, true),
            make_todo(3, false),
            make_todo(4, true),
        ];

        assert_eq!(filter_todos(&todos, FilterType::All), todos);
        assert_eq!(ids(&filter_todos(&todos, FilterType::Active)), vec![1, 3]);
        assert_eq!(ids(&filter_todos(&todos, FilterType::Completed)), vec![2, 4]);
    }

    #[test]
    fn test_active_and_completed_partition() {
        let todos: Vec<Todo> = (1..=9).map(|id| make_todo(id, id % 3 == 0)).collect();
        let active = filter_todos(&todos, FilterType::Active);
        let completed = filter_todos(&todos, FilterType::Completed);

        assert_eq!(active.len() + completed.len(), todos.len());
        assert!(active.iter().all(|t| !t.completed));
        assert!(completed.iter().all(|t| t.completed));
    }

    #[test]
    fn test_filter_empty_list() {
        assert!(filter_todos(&[], FilterType::Completed).is_empty());
    }

    #[test]
    fn test_from_hash() {
        assert_eq!(FilterType::from_hash("#/active"), FilterType::Active);
        assert_eq!(FilterType::from_hash("#/completed"), FilterType::Completed);
        assert_eq!(FilterType::from_hash("#/"), FilterType::All);
        assert_eq!(FilterType::from_hash(""), FilterType::All);
        assert_eq!(FilterType::from_hash("#/unknown"), FilterType::All);
    }

    #[test]
    fn test_href_round_trips_through_from_hash() {
        for filter in FilterType::ALL {
            assert_eq!(FilterType::from_hash(filter.href()), filter);
        }
    }
}
