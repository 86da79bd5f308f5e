//! Derived View
//!
//! Pure computation of what the list UI shows for a given list and filter.

use crate::models::{Filter, Todo};

/// Everything the list UI needs for one render
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoView {
    pub filter: Filter,
    /// Entries matching `filter`, in list order
    pub items: Vec<Todo>,
    /// Counted over the full list, not the filtered one
    pub active_count: usize,
    pub completed_count: usize,
    pub total: usize,
}

impl TodoView {
    /// Placeholder is shown instead of items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clear-completed control is shown
    pub fn has_completed(&self) -> bool {
        self.completed_count > 0
    }
}

pub fn derive_view(todos: &[Todo], filter: Filter) -> TodoView {
    let items: Vec<Todo> = todos.iter().filter(|t| filter.matches(t)).cloned().collect();
    let active_count = todos.iter().filter(|t| !t.is_done).count();

    TodoView {
        filter,
        items,
        active_count,
        completed_count: todos.len() - active_count,
        total: todos.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Todo> {
        vec![
            Todo::new(1, "A", false),
            Todo::new(2, "B", true),
            Todo::new(3, "C", false),
            Todo::new(4, "D", true),
            Todo::new(5, "E", true),
        ]
    }

    #[test]
    fn test_counts_ignore_filter() {
        let todos = sample();
        for filter in Filter::ALL {
            let view = derive_view(&todos, filter);
            assert_eq!(view.active_count, 2);
            assert_eq!(view.completed_count, 3);
            assert_eq!(view.total, 5);
        }
    }

    #[test]
    fn test_filtered_items_keep_order() {
        let todos = sample();

        let ids = |f| derive_view(&todos, f).items.iter().map(|t| t.id).collect::<Vec<_>>();
        assert_eq!(ids(Filter::All), vec![1, 2, 3, 4, 5]);
        assert_eq!(ids(Filter::Active), vec![1, 3]);
        assert_eq!(ids(Filter::Completed), vec![2, 4, 5]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let todos = sample();
        for filter in Filter::ALL {
            assert_eq!(derive_view(&todos, filter), derive_view(&todos, filter));
        }
    }

    #[test]
    fn test_empty_state() {
        let todos = vec![Todo::new(1, "A", false)];

        let view = derive_view(&todos, Filter::Completed);
        assert!(view.is_empty());
        assert!(!view.has_completed());
        assert_eq!(view.active_count, 1);

        assert!(derive_view(&[], Filter::All).is_empty());
    }
}
